use crate::attributes::{InjectAttributes, InjectionTargetAttributes};
use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::spanned::Spanned;
use syn::{Attribute, Data, DataStruct, DeriveInput, Error, Field, Fields, Result};

const INJECT: &str = "inject";
const INJECTION_TARGET: &str = "injection_target";

fn declared_type_name(field: &Field) -> String {
    field
        .ty
        .to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn extract_inject_attributes(attributes: &[Attribute]) -> Result<Option<InjectAttributes>> {
    attributes
        .iter()
        .filter(|attribute| attribute.path().is_ident(INJECT))
        .map(InjectAttributes::try_from)
        .next()
        .transpose()
}

fn generate_field_descriptor(field: &Field) -> Result<TokenStream> {
    let name = field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .ok_or_else(|| Error::new(field.span(), "Injected fields must be named!"))?;

    let descriptor = match extract_inject_attributes(&field.attrs)? {
        Some(InjectAttributes {
            type_name: Some(type_name),
        }) => quote! {
            prefroom_inject::target::FieldDescriptor::injected(#name, #type_name)
        },
        Some(InjectAttributes { type_name: None }) => {
            let type_name = declared_type_name(field);
            quote! {
                prefroom_inject::target::FieldDescriptor::injected(#name, #type_name)
            }
        }
        None => {
            let type_name = declared_type_name(field);
            quote! {
                prefroom_inject::target::FieldDescriptor::plain(#name, #type_name)
            }
        }
    };

    Ok(descriptor)
}

fn extract_target_attributes(input: &DeriveInput) -> Result<InjectionTargetAttributes> {
    input
        .attrs
        .iter()
        .find(|attribute| attribute.path().is_ident(INJECTION_TARGET))
        .ok_or_else(|| {
            Error::new(
                input.ident.span(),
                "Missing owning component: #[injection_target(component = \"...\")]",
            )
        })
        .and_then(InjectionTargetAttributes::try_from)
}

pub fn expand_injection_target(input: &DeriveInput) -> Result<TokenStream> {
    let fields = if let Data::Struct(DataStruct { fields, .. }) = &input.data {
        fields
    } else {
        return Err(Error::new(
            input.span(),
            "Can only derive InjectionTarget on structs!",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Cannot derive InjectionTarget on generic structs!",
        ));
    }

    let descriptors: Vec<_> = match fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .map(generate_field_descriptor)
            .try_collect()?,
        Fields::Unnamed(fields) => {
            return Err(Error::new(
                fields.span(),
                "Can only derive InjectionTarget on structs with named fields!",
            ))
        }
        Fields::Unit => vec![],
    };

    let ident = &input.ident;
    let InjectionTargetAttributes {
        component,
        name,
        type_name,
    } = extract_target_attributes(input)?;

    let name = name
        .map(|name| name.value())
        .unwrap_or_else(|| ident.to_string());
    let type_name = type_name
        .map(|type_name| type_name.value())
        .unwrap_or_else(|| name.clone());

    Ok(quote! {
        #[automatically_derived]
        impl prefroom_inject::target::InjectionTarget for #ident {
            fn injection_target() -> prefroom_inject::target::InjectionTargetElement {
                prefroom_inject::target::InjectionTargetElement::new(
                    #name,
                    vec![#(#descriptors),*],
                )
                .with_type_name(#type_name)
            }
        }

        const _: () = {
            fn register() -> prefroom_inject::target::internal::RegisteredInjectionTarget {
                prefroom_inject::target::internal::RegisteredInjectionTarget {
                    component: #component,
                    element: <#ident as prefroom_inject::target::InjectionTarget>::injection_target(),
                }
            }

            prefroom_inject::target::internal::submit! {
                prefroom_inject::target::internal::InjectionTargetRegisterer {
                    register
                }
            };
        };
    })
}
