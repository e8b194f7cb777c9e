//! Resolution of single injected fields. Fields are matched against their owning component purely
//! by declared type name: either the type is a value exposed by the component, or it is the
//! generated component class itself. Anything else cannot be injected.

use crate::component::AnnotatedComponentClass;
use crate::conventions::NamingConventions;
use crate::error::InjectorError;
use crate::target::FieldDescriptor;
use tracing::debug;

/// Outcome of resolving a single injected field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldResolution {
    /// The field type is a value exposed by the component, available through given getter.
    ComponentValue { getter: String },
    /// The field type is the component class itself.
    ComponentItself,
    /// The field type matches neither an exposed value, nor the component.
    Unresolvable(String),
}

/// Resolves fields of injection targets owned by a single component.
#[derive(Clone, Debug)]
pub struct FieldResolver<'a> {
    conventions: &'a NamingConventions,
    owner: &'a AnnotatedComponentClass,
    component_class_name: String,
}

impl<'a> FieldResolver<'a> {
    pub fn new(conventions: &'a NamingConventions, owner: &'a AnnotatedComponentClass) -> Self {
        Self {
            conventions,
            owner,
            component_class_name: owner.component_class_name(conventions),
        }
    }

    /// Decides how given field should be injected. Whether the field is marked for injection is
    /// not checked - filtering is up to the caller.
    pub fn resolve(&self, field: &FieldDescriptor) -> FieldResolution {
        let type_name = field.type_name.as_str();

        let resolution = if self.owner.exposes(type_name) {
            match self.conventions.value_getter(type_name) {
                "" => FieldResolution::Unresolvable(type_name.to_string()),
                getter => FieldResolution::ComponentValue {
                    getter: getter.to_string(),
                },
            }
        } else if self.component_class_name == type_name {
            FieldResolution::ComponentItself
        } else {
            FieldResolution::Unresolvable(type_name.to_string())
        };

        debug!(
            field = field.name.as_str(),
            type_name,
            ?resolution,
            "Resolved injected field."
        );

        resolution
    }

    /// Renders the expression yielding a resolved value. Fails for
    /// [FieldResolution::Unresolvable].
    pub fn accessor(&self, resolution: &FieldResolution) -> Result<String, InjectorError> {
        match resolution {
            FieldResolution::ComponentValue { getter } => Ok(format!(
                "{}.getInstance().{getter}()",
                self.component_class_name
            )),
            FieldResolution::ComponentItself => {
                Ok(format!("{}.getInstance()", self.component_class_name))
            }
            FieldResolution::Unresolvable(type_name) => Err(
                InjectorError::UnresolvableInjectionTarget(type_name.clone()),
            ),
        }
    }

    /// Resolves given field and renders its accessor in one step.
    #[inline]
    pub fn resolve_accessor(&self, field: &FieldDescriptor) -> Result<String, InjectorError> {
        self.accessor(&self.resolve(field))
    }
}

#[cfg(test)]
mod tests {
    use crate::component::AnnotatedComponentClass;
    use crate::conventions::NamingConventions;
    use crate::error::InjectorError;
    use crate::resolver::{FieldResolution, FieldResolver};
    use crate::target::FieldDescriptor;

    fn create_owner() -> AnnotatedComponentClass {
        AnnotatedComponentClass::new("App", ["Preference_User", "Preference_Device"])
    }

    #[test]
    fn should_resolve_exposed_value() {
        let conventions = NamingConventions::default();
        let owner = create_owner();
        let resolver = FieldResolver::new(&conventions, &owner);

        let resolution =
            resolver.resolve(&FieldDescriptor::injected("preferenceUser", "Preference_User"));

        assert_eq!(
            resolution,
            FieldResolution::ComponentValue {
                getter: "User".to_string()
            }
        );
        assert_eq!(
            resolver.accessor(&resolution).unwrap(),
            "PreferenceComponent_App.getInstance().User()"
        );
    }

    #[test]
    fn should_resolve_component_itself() {
        let conventions = NamingConventions::default();
        let owner = create_owner();
        let resolver = FieldResolver::new(&conventions, &owner);

        let resolution = resolver.resolve(&FieldDescriptor::injected(
            "component",
            "PreferenceComponent_App",
        ));

        assert_eq!(resolution, FieldResolution::ComponentItself);
        assert_eq!(
            resolver.accessor(&resolution).unwrap(),
            "PreferenceComponent_App.getInstance()"
        );
    }

    #[test]
    fn should_not_resolve_other_component() {
        let conventions = NamingConventions::default();
        let owner = create_owner();
        let resolver = FieldResolver::new(&conventions, &owner);

        assert_eq!(
            resolver.resolve(&FieldDescriptor::injected(
                "component",
                "PreferenceComponent_Other"
            )),
            FieldResolution::Unresolvable("PreferenceComponent_Other".to_string())
        );
    }

    #[test]
    fn should_fail_accessor_for_unresolvable_type() {
        let conventions = NamingConventions::default();
        let owner = create_owner();
        let resolver = FieldResolver::new(&conventions, &owner);

        assert_eq!(
            resolver
                .resolve_accessor(&FieldDescriptor::injected(
                    "preferenceUser",
                    "Preference_Unknown"
                ))
                .unwrap_err(),
            InjectorError::UnresolvableInjectionTarget("Preference_Unknown".to_string())
        );
    }

    #[test]
    fn should_not_resolve_value_without_getter_name() {
        let conventions = NamingConventions::default();
        let owner = AnnotatedComponentClass::new("App", ["Preference_", "com.example.Preference_"]);
        let resolver = FieldResolver::new(&conventions, &owner);

        assert_eq!(
            resolver
                .resolve_accessor(&FieldDescriptor::injected("value", "Preference_"))
                .unwrap_err(),
            InjectorError::UnresolvableInjectionTarget("Preference_".to_string())
        );
        assert_eq!(
            resolver.resolve(&FieldDescriptor::injected(
                "value",
                "com.example.Preference_"
            )),
            FieldResolution::Unresolvable("com.example.Preference_".to_string())
        );
    }

    #[test]
    fn should_prefer_exposed_value_over_component_itself() {
        let conventions = NamingConventions::default();
        let owner = AnnotatedComponentClass::new("App", ["PreferenceComponent_App"]);
        let resolver = FieldResolver::new(&conventions, &owner);

        assert!(matches!(
            resolver.resolve(&FieldDescriptor::injected(
                "component",
                "PreferenceComponent_App"
            )),
            FieldResolution::ComponentValue { .. }
        ));
    }

    #[test]
    fn should_resolve_with_custom_conventions() {
        let conventions = NamingConventions::new("Store", "Value", "Wiring", "target");
        let owner = AnnotatedComponentClass::new("App", ["ValueToken"]);
        let resolver = FieldResolver::new(&conventions, &owner);

        assert_eq!(
            resolver
                .resolve_accessor(&FieldDescriptor::injected("token", "ValueToken"))
                .unwrap(),
            "StoreApp.getInstance().Token()"
        );
        assert_eq!(
            resolver
                .resolve_accessor(&FieldDescriptor::injected("store", "StoreApp"))
                .unwrap(),
            "StoreApp.getInstance()"
        );
    }
}
