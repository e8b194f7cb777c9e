use thiserror::Error;

/// Errors related to generating a single injector.
#[derive(Error, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum InjectorError {
    #[error("'{0}' type can not be injected")]
    UnresolvableInjectionTarget(String),
}

/// Errors related to building a component registry.
#[derive(Error, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum ComponentRegistryError {
    #[error("Attempted to register a duplicated component with name: {0}")]
    DuplicateComponentName(String),
}

/// Errors related to driving injector generation for whole targets.
#[derive(Error, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum GeneratorError {
    #[error("Cannot find component '{component}' owning injection target: {target}")]
    UnknownComponent { component: String, target: String },
    #[error("Multiple injection targets would generate injector: {0}")]
    DuplicateInjectorName(String),
    #[error(transparent)]
    Injector(#[from] InjectorError),
}
