//! Assembly of [GeneratedInjector]s. An injector is a type with a single constructor, which accepts
//! an injection target instance and assigns every injected field from its owning component.
//!
//! ```
//! use prefroom_inject::component::AnnotatedComponentClass;
//! use prefroom_inject::conventions::NamingConventions;
//! use prefroom_inject::emitter::InjectorEmitter;
//! use prefroom_inject::target::{FieldDescriptor, InjectionTargetElement};
//!
//! let conventions = NamingConventions::default();
//! let owner = AnnotatedComponentClass::new("App", ["Preference_User"]);
//! let target = InjectionTargetElement::new(
//!     "UserActivity",
//!     vec![FieldDescriptor::injected("preferenceUser", "Preference_User")],
//! );
//!
//! let injector = InjectorEmitter::new(&conventions).emit(&owner, &target).unwrap();
//!
//! assert_eq!(injector.name, "UserActivity_Injector");
//! assert_eq!(
//!     injector.constructor.statements[0].to_string(),
//!     "injectObject.preferenceUser = PreferenceComponent_App.getInstance().User()"
//! );
//! ```

use crate::component::AnnotatedComponentClass;
use crate::conventions::NamingConventions;
use crate::error::InjectorError;
use crate::resolver::FieldResolver;
use crate::target::InjectionTargetElement;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

/// Generated injector type, ready to be serialized by a [renderer](crate::render).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedInjector {
    pub name: String,
    pub constructor: InjectorConstructor,
}

/// The only constructor of a [GeneratedInjector].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InjectorConstructor {
    pub parameter: ConstructorParameter,

    /// Assignments in target field declaration order.
    pub statements: Vec<Assignment>,
}

/// Parameter accepting the injection target instance.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstructorParameter {
    pub name: String,
    pub type_name: String,
    pub non_null: bool,
}

/// Single `receiver.field = accessor` statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Assignment {
    pub receiver: String,
    pub field_name: String,
    pub accessor: String,
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} = {}", self.receiver, self.field_name, self.accessor)
    }
}

/// Builds [GeneratedInjector]s according to given [NamingConventions].
#[derive(Clone, Debug)]
pub struct InjectorEmitter<'a> {
    conventions: &'a NamingConventions,
}

impl<'a> InjectorEmitter<'a> {
    pub fn new(conventions: &'a NamingConventions) -> Self {
        Self { conventions }
    }

    /// Generates an injector for given target, with fields resolved against given owner. The first
    /// field which cannot be resolved aborts generation, so no partial injector is ever returned.
    pub fn emit(
        &self,
        owner: &AnnotatedComponentClass,
        target: &InjectionTargetElement,
    ) -> Result<GeneratedInjector, InjectorError> {
        let resolver = FieldResolver::new(self.conventions, owner);
        let receiver = &self.conventions.param_name;

        let statements: Vec<_> = target
            .injected_fields()
            .map(|field| {
                resolver
                    .resolve_accessor(field)
                    .map(|accessor| Assignment {
                        receiver: receiver.clone(),
                        field_name: field.name.clone(),
                        accessor,
                    })
                    .map_err(|error| {
                        warn!(
                            injection_target = target.simple_name.as_str(),
                            field = field.name.as_str(),
                            %error,
                            "Aborting injector generation."
                        );
                        error
                    })
            })
            .try_collect()?;

        let name = self.conventions.injector_name(&target.simple_name);

        debug!(
            injector = name.as_str(),
            statements = statements.len(),
            "Generated injector."
        );

        Ok(GeneratedInjector {
            name,
            constructor: InjectorConstructor {
                parameter: ConstructorParameter {
                    name: receiver.clone(),
                    type_name: target.type_name.clone(),
                    non_null: true,
                },
                statements,
            },
        })
    }
}
