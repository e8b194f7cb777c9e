//! Static field injection for PreferenceRoom-style components, resolved entirely at build time.
//!
//! Given a target type whose fields are marked for injection, the crate produces a companion
//! injector type whose constructor populates those fields from generated singleton components. The
//! pipeline is:
//!
//! * [registry] - known components and the value types they expose
//! * [resolver] - decides how a single field gets its value
//! * [emitter] - assembles resolved fields into a [GeneratedInjector](emitter::GeneratedInjector)
//! * [render] - turns the injector into Java source text
//!
//! [generator] ties everything together for whole sets of targets.
//!
//! ### Features
//!
//! * `derive` - automatically derive [InjectionTarget](target::InjectionTarget) descriptions

pub mod component;
pub mod conventions;
pub mod emitter;
mod error;
pub mod generator;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod target;

pub use error::{ComponentRegistryError, GeneratorError, InjectorError};

#[cfg(feature = "derive")]
pub use prefroom_inject_derive::InjectionTarget;
