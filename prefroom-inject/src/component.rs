//! Components are generated singleton containers, each exposing one or more values through getter
//! methods. The generator never creates components itself - it only needs to know their logical
//! names and the value types they expose, which is captured by [AnnotatedComponentClass].
//!
//! ```
//! use prefroom_inject::component::AnnotatedComponentClass;
//! use prefroom_inject::conventions::NamingConventions;
//!
//! let component = AnnotatedComponentClass::new("App", ["Preference_User"]);
//!
//! assert!(component.exposes("Preference_User"));
//! assert_eq!(
//!     component.component_class_name(&NamingConventions::default()),
//!     "PreferenceComponent_App"
//! );
//! ```

use crate::conventions::NamingConventions;

/// Metadata about an owning component class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnnotatedComponentClass {
    /// Logical name of the component, used to derive its generated class name.
    pub name: String,

    /// Names of value types exposed by the component, in registration order.
    pub generated_component_names: Vec<String>,
}

impl AnnotatedComponentClass {
    pub fn new<N, I>(name: N, generated_component_names: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            name: name.into(),
            generated_component_names: generated_component_names
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }

    /// Checks if a value of given type is exposed by this component.
    #[inline]
    pub fn exposes(&self, type_name: &str) -> bool {
        self.generated_component_names
            .iter()
            .any(|name| name == type_name)
    }

    /// Name of the generated singleton class for this component.
    #[inline]
    pub fn component_class_name(&self, conventions: &NamingConventions) -> String {
        conventions.component_class_name(&self.name)
    }
}
