//! Naming conventions shared by the [resolver](crate::resolver) and the
//! [emitter](crate::emitter). Generated components and injectors are tied together purely by name,
//! so every prefix and suffix used to derive those names lives in [NamingConventions].
//!
//! By default, the conventions match the ones used by PreferenceRoom, which can then be overwritten
//! by environment variables prefixed with `PREFROOM_` or `prefroom.json` file.

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

const CONFIG_ENV_PREFIX: &str = "PREFROOM";

/// Name of the default config file.
pub const CONFIG_FILE: &str = "prefroom.json";

/// Default prefix of generated component class names.
pub const COMPONENT_PREFIX: &str = "PreferenceComponent_";

/// Default prefix of exposed value type names.
pub const VALUE_PREFIX: &str = "Preference_";

/// Default suffix of generated injector names.
pub const INJECTOR_SUFFIX: &str = "_Injector";

/// Default name of the injector constructor parameter.
pub const PARAM_NAME: &str = "injectObject";

/// Literal prefixes and suffixes used to derive generated names.
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NamingConventions {
    /// Prepended to a component's logical name to form its generated class name.
    pub component_prefix: String,

    /// Stripped from an exposed value type name to form the getter called on the component.
    pub value_prefix: String,

    /// Appended to the injection target's simple name to form the injector name.
    pub injector_suffix: String,

    /// Name of the single injector constructor parameter.
    pub param_name: String,
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            component_prefix: COMPONENT_PREFIX.to_string(),
            value_prefix: VALUE_PREFIX.to_string(),
            injector_suffix: INJECTOR_SUFFIX.to_string(),
            param_name: PARAM_NAME.to_string(),
        }
    }
}

impl From<OptionalNamingConventions> for NamingConventions {
    fn from(value: OptionalNamingConventions) -> Self {
        let default = Self::default();
        Self {
            component_prefix: value.component_prefix.unwrap_or(default.component_prefix),
            value_prefix: value.value_prefix.unwrap_or(default.value_prefix),
            injector_suffix: value.injector_suffix.unwrap_or(default.injector_suffix),
            param_name: value.param_name.unwrap_or(default.param_name),
        }
    }
}

impl NamingConventions {
    /// Creates conventions from explicit values.
    pub fn new(
        component_prefix: impl Into<String>,
        value_prefix: impl Into<String>,
        injector_suffix: impl Into<String>,
        param_name: impl Into<String>,
    ) -> Self {
        Self {
            component_prefix: component_prefix.into(),
            value_prefix: value_prefix.into(),
            injector_suffix: injector_suffix.into(),
            param_name: param_name.into(),
        }
    }

    /// Loads conventions from [CONFIG_FILE] and `PREFROOM_` environment variables, falling back to
    /// defaults for anything not set.
    pub fn init_from_environment() -> Result<Self, ConfigError> {
        Self::init_from_sources(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(CONFIG_ENV_PREFIX),
        )
    }

    fn init_from_sources<F, E>(file: F, environment: E) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize::<OptionalNamingConventions>())
            .map(|config| config.into())
    }

    /// Name of the injector generated for a target with given simple name.
    #[inline]
    pub fn injector_name(&self, simple_name: &str) -> String {
        format!("{simple_name}{}", self.injector_suffix)
    }

    /// Name of the generated component class with given logical name.
    #[inline]
    pub fn component_class_name(&self, component_name: &str) -> String {
        format!("{}{component_name}", self.component_prefix)
    }

    /// Name of the getter exposing a value of given type on its component. Qualifiers are dropped
    /// and a leading value prefix is stripped.
    pub fn value_getter<'a>(&self, type_name: &'a str) -> &'a str {
        let simple_name = type_name
            .rsplit(|c: char| c == '.' || c == ':')
            .next()
            .unwrap_or(type_name);

        simple_name
            .strip_prefix(self.value_prefix.as_str())
            .unwrap_or(simple_name)
    }
}

#[derive(Deserialize)]
struct OptionalNamingConventions {
    component_prefix: Option<String>,
    value_prefix: Option<String>,
    injector_suffix: Option<String>,
    param_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::conventions::NamingConventions;
    use config::{Environment, File, FileFormat};
    use std::collections::HashMap;

    #[test]
    fn should_derive_default_names() {
        let conventions = NamingConventions::default();

        assert_eq!(conventions.injector_name("UserActivity"), "UserActivity_Injector");
        assert_eq!(
            conventions.component_class_name("App"),
            "PreferenceComponent_App"
        );
        assert_eq!(conventions.value_getter("Preference_User"), "User");
    }

    #[test]
    fn should_strip_qualifiers_from_value_getter() {
        let conventions = NamingConventions::default();

        assert_eq!(
            conventions.value_getter("com.example.Preference_User"),
            "User"
        );
        assert_eq!(conventions.value_getter("crate::prefs::Preference_User"), "User");
    }

    #[test]
    fn should_strip_only_leading_value_prefix() {
        let conventions = NamingConventions::default();

        assert_eq!(
            conventions.value_getter("Preference_Preference_User"),
            "Preference_User"
        );
        assert_eq!(conventions.value_getter("UserPreference_"), "UserPreference_");
    }

    #[test]
    fn should_use_custom_conventions() {
        let conventions = NamingConventions::new("Store", "Value", "Wiring", "target");

        assert_eq!(conventions.injector_name("Main"), "MainWiring");
        assert_eq!(conventions.component_class_name("App"), "StoreApp");
        assert_eq!(conventions.value_getter("ValueToken"), "Token");
    }

    #[test]
    fn should_merge_configured_values_over_defaults() {
        let file = File::from_str(r#"{ "injector_suffix": "Wiring" }"#, FileFormat::Json);
        let environment = Environment::with_prefix("PREFROOM").source(Some(
            [("PREFROOM_PARAM_NAME".to_string(), "target".to_string())]
                .into_iter()
                .collect::<HashMap<_, _>>(),
        ));

        let conventions = NamingConventions::init_from_sources(file, environment).unwrap();

        assert_eq!(conventions.param_name, "target");
        assert_eq!(conventions.injector_suffix, "Wiring");
        assert_eq!(conventions.component_prefix, "PreferenceComponent_");
    }
}
