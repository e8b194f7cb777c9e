use crate::target::expand_injection_target;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, Error};

mod attributes;
mod target;

#[proc_macro_derive(InjectionTarget, attributes(injection_target, inject))]
pub fn generate_injection_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_injection_target(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
