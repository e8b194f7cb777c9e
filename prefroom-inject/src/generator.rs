//! Core functionality for generating [GeneratedInjector]s for whole sets of injection targets.
//! Each target is generated independently and only reads the shared [ComponentDirectory], so
//! [InjectorGenerator] can be shared between threads.

use crate::conventions::NamingConventions;
use crate::emitter::{GeneratedInjector, InjectorEmitter};
use crate::error::GeneratorError;
use crate::registry::{ComponentDirectory, ComponentRegistry};
use crate::target::internal::registered_targets;
use crate::target::InjectionTargetElement;
use config::ConfigError;
use itertools::Itertools;
use tracing::{debug, info};

pub type ComponentDirectoryPtr = Box<dyn ComponentDirectory + Send + Sync>;

/// Builder for [InjectorGenerator] with sensible defaults, for easy construction.
pub struct InjectorGeneratorBuilder {
    directory: ComponentDirectoryPtr,
    conventions: NamingConventions,
}

impl Default for InjectorGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectorGeneratorBuilder {
    /// Creates a new builder with default conventions and an empty component registry.
    pub fn new() -> Self {
        Self {
            directory: Box::<ComponentRegistry>::default(),
            conventions: Default::default(),
        }
    }

    /// Creates a new builder with conventions loaded by
    /// [NamingConventions::init_from_environment] and an empty component registry.
    pub fn from_environment() -> Result<Self, ConfigError> {
        NamingConventions::init_from_environment()
            .map(|conventions| Self::new().with_conventions(conventions))
    }

    /// Sets new [ComponentDirectory].
    pub fn with_directory(mut self, directory: ComponentDirectoryPtr) -> Self {
        self.directory = directory;
        self
    }

    /// Sets new [NamingConventions].
    pub fn with_conventions(mut self, conventions: NamingConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Builds resulting [InjectorGenerator].
    pub fn build(self) -> InjectorGenerator {
        InjectorGenerator::new(self.directory, self.conventions)
    }
}

/// Generates injectors for targets owned by components known to a [ComponentDirectory].
pub struct InjectorGenerator {
    directory: ComponentDirectoryPtr,
    conventions: NamingConventions,
}

impl InjectorGenerator {
    pub fn new(directory: ComponentDirectoryPtr, conventions: NamingConventions) -> Self {
        Self {
            directory,
            conventions,
        }
    }

    #[inline]
    pub fn conventions(&self) -> &NamingConventions {
        &self.conventions
    }

    /// Generates an injector for given target, owned by component with given logical name.
    pub fn generate(
        &self,
        component_name: &str,
        target: &InjectionTargetElement,
    ) -> Result<GeneratedInjector, GeneratorError> {
        let owner = self
            .directory
            .component_by_name(component_name)
            .ok_or_else(|| GeneratorError::UnknownComponent {
                component: component_name.to_string(),
                target: target.simple_name.clone(),
            })?;

        debug!(
            component = component_name,
            injection_target = target.simple_name.as_str(),
            "Generating injector."
        );

        InjectorEmitter::new(&self.conventions)
            .emit(&owner, target)
            .map_err(GeneratorError::from)
    }

    /// Generates injectors for all given `(component name, target)` pairs, stopping at the first
    /// error. Resulting injectors are sorted by name, which must be unique.
    pub fn generate_all<'a, I>(&self, requests: I) -> Result<Vec<GeneratedInjector>, GeneratorError>
    where
        I: IntoIterator<Item = (&'a str, &'a InjectionTargetElement)>,
    {
        let mut injectors: Vec<_> = requests
            .into_iter()
            .map(|(component_name, target)| self.generate(component_name, target))
            .try_collect()?;

        injectors.sort_unstable_by(|a, b| a.name.cmp(&b.name));

        if let Some((duplicate, _)) = injectors
            .iter()
            .tuple_windows()
            .find(|(a, b)| a.name == b.name)
        {
            return Err(GeneratorError::DuplicateInjectorName(
                duplicate.name.clone(),
            ));
        }

        info!("Generated {} injectors.", injectors.len());

        Ok(injectors)
    }

    /// Generates injectors for all targets registered with the `InjectionTarget` derive macro.
    pub fn generate_registered(&self) -> Result<Vec<GeneratedInjector>, GeneratorError> {
        let targets = registered_targets()
            .into_iter()
            .sorted_by(|a, b| a.element.simple_name.cmp(&b.element.simple_name))
            .collect_vec();

        info!("Found {} registered injection targets.", targets.len());

        self.generate_all(
            targets
                .iter()
                .map(|target| (target.component, &target.element)),
        )
    }
}
