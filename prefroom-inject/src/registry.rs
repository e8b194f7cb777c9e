//! Functionality related to looking up known components. Injection targets refer to their owning
//! component by logical name, which is resolved through a [ComponentDirectory] - usually an
//! immutable [ComponentRegistry] snapshot built once, before any injector gets generated.

use crate::component::AnnotatedComponentClass;
use crate::error::ComponentRegistryError;
use fxhash::FxHashMap;
#[cfg(test)]
use mockall::automock;

/// Source of known components, looked up by logical name.
#[cfg_attr(test, automock)]
pub trait ComponentDirectory {
    /// Returns a component with given logical name.
    fn component_by_name(&self, name: &str) -> Option<AnnotatedComponentClass>;
}

/// Registry of known components, keyed by logical name.
#[derive(Default, Clone, Debug)]
pub struct ComponentRegistry {
    components: FxHashMap<String, AnnotatedComponentClass>,
}

impl ComponentRegistry {
    /// Creates a registry from given components, rejecting duplicated logical names.
    pub fn new<I>(components: I) -> Result<Self, ComponentRegistryError>
    where
        I: IntoIterator<Item = AnnotatedComponentClass>,
    {
        let mut registry = Self::default();
        for component in components {
            registry.register_component(component)?;
        }

        Ok(registry)
    }

    /// Adds a new component.
    pub fn register_component(
        &mut self,
        component: AnnotatedComponentClass,
    ) -> Result<(), ComponentRegistryError> {
        if self.components.contains_key(&component.name) {
            return Err(ComponentRegistryError::DuplicateComponentName(
                component.name,
            ));
        }

        self.components.insert(component.name.clone(), component);
        Ok(())
    }

    /// Returns logical names of all registered components, sorted.
    pub fn component_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentDirectory for ComponentRegistry {
    #[inline]
    fn component_by_name(&self, name: &str) -> Option<AnnotatedComponentClass> {
        self.components.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::component::AnnotatedComponentClass;
    use crate::error::ComponentRegistryError;
    use crate::registry::{ComponentDirectory, ComponentRegistry};

    #[test]
    fn should_register_components() {
        let registry = ComponentRegistry::new([
            AnnotatedComponentClass::new("Settings", ["Preference_Theme"]),
            AnnotatedComponentClass::new("App", ["Preference_User"]),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.component_names(), ["App", "Settings"]);
        assert!(registry.component_by_name("Other").is_none());
        assert!(registry
            .component_by_name("App")
            .unwrap()
            .exposes("Preference_User"));
    }

    #[test]
    fn should_not_register_duplicate_name() {
        assert_eq!(
            ComponentRegistry::new([
                AnnotatedComponentClass::new("App", ["Preference_User"]),
                AnnotatedComponentClass::new("App", ["Preference_Device"]),
            ])
            .unwrap_err(),
            ComponentRegistryError::DuplicateComponentName("App".to_string())
        );
    }

    #[test]
    fn should_create_empty_registry() {
        let registry = ComponentRegistry::new(Vec::<AnnotatedComponentClass>::new()).unwrap();

        assert!(registry.is_empty());
        assert!(registry.component_by_name("App").is_none());
    }
}
