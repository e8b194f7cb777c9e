//! Injection targets are types whose fields get populated by a generated injector. Each target is
//! described by an [InjectionTargetElement] - its name and an ordered list of field descriptors.
//!
//! ## Describing targets with the derive macro
//!
//! With the `derive` feature enabled, [InjectionTarget] can be derived for plain structs. Such
//! targets are also registered statically, so the
//! [InjectorGenerator](crate::generator::InjectorGenerator) can discover them on its own:
//!
//! ```
//! use prefroom_inject::target::InjectionTarget;
//! use prefroom_inject::InjectionTarget;
//!
//! struct Preference_User;
//! struct PreferenceComponent_App;
//!
//! #[derive(InjectionTarget)]
//! #[injection_target(component = "App")]
//! struct UserActivity {
//!     #[inject]
//!     preference_user: Option<Preference_User>,
//!     #[inject(type_name = "PreferenceComponent_App")]
//!     component: Option<Box<PreferenceComponent_App>>,
//!     tag: String,
//! }
//!
//! let element = UserActivity::injection_target();
//! assert_eq!(element.simple_name, "UserActivity");
//! assert_eq!(element.injected_fields().count(), 2);
//! ```
//!
//! ### Supported `#[injection_target]` struct configuration
//!
//! * `component = "name"` - logical name of the owning component (required)
//! * `name = "name"` - simple name of the target, instead of the struct name
//! * `type_name = "name"` - type name used for the injector parameter, instead of the simple name
//!
//! ### Supported `#[inject]` field configuration
//!
//! * `type_name = "name"` - declared type name to match against components, instead of the field
//! type written without whitespace

use derive_more::Constructor;

/// Single field declared by an injection target.
#[derive(Constructor, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDescriptor {
    pub name: String,

    /// Stable, possibly qualified, name of the declared field type.
    pub type_name: String,

    /// Is this field marked for injection.
    pub is_injected: bool,
}

impl FieldDescriptor {
    /// Creates a field marked for injection.
    pub fn injected(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name.into(), type_name.into(), true)
    }

    /// Creates a field which is not injected.
    pub fn plain(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name.into(), type_name.into(), false)
    }
}

/// Metadata about a type whose fields are to be injected.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InjectionTargetElement {
    pub simple_name: String,

    /// Name of the target type as used in generated code. Usually equal to the simple name, but
    /// might be qualified.
    pub type_name: String,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl InjectionTargetElement {
    pub fn new(simple_name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        let simple_name = simple_name.into();
        Self {
            type_name: simple_name.clone(),
            simple_name,
            fields,
        }
    }

    /// Uses given type name for the target type instead of its simple name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Returns fields marked for injection, in declaration order.
    pub fn injected_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.is_injected)
    }
}

/// Types which can describe themselves as injection targets. Typically automatically derived.
pub trait InjectionTarget {
    fn injection_target() -> InjectionTargetElement;
}

#[doc(hidden)]
pub mod internal {
    use crate::target::InjectionTargetElement;
    use inventory::collect;
    pub use inventory::submit;

    #[derive(Clone, Debug)]
    pub struct RegisteredInjectionTarget {
        pub component: &'static str,
        pub element: InjectionTargetElement,
    }

    pub struct InjectionTargetRegisterer {
        pub register: fn() -> RegisteredInjectionTarget,
    }

    collect!(InjectionTargetRegisterer);

    pub(crate) fn registered_targets() -> Vec<RegisteredInjectionTarget> {
        inventory::iter::<InjectionTargetRegisterer>
            .into_iter()
            .map(|registerer| (registerer.register)())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::target::{FieldDescriptor, InjectionTargetElement};

    #[test]
    fn should_filter_injected_fields_in_order() {
        let element = InjectionTargetElement::new(
            "UserActivity",
            vec![
                FieldDescriptor::injected("b", "Preference_B"),
                FieldDescriptor::plain("tag", "String"),
                FieldDescriptor::injected("a", "Preference_A"),
            ],
        );

        let names: Vec<_> = element
            .injected_fields()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn should_default_type_name_to_simple_name() {
        let element = InjectionTargetElement::new("UserActivity", vec![]);
        assert_eq!(element.type_name, "UserActivity");

        let element = element.with_type_name("com.example.UserActivity");
        assert_eq!(element.type_name, "com.example.UserActivity");
        assert_eq!(element.simple_name, "UserActivity");
    }
}
