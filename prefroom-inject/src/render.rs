//! Serialization of [GeneratedInjector]s to Java source text. Rendering is pure - persisting the
//! result is up to the caller.
//!
//! ```
//! use prefroom_inject::emitter::{
//!     Assignment, ConstructorParameter, GeneratedInjector, InjectorConstructor,
//! };
//! use prefroom_inject::render::JavaRenderer;
//!
//! let injector = GeneratedInjector {
//!     name: "UserActivity_Injector".to_string(),
//!     constructor: InjectorConstructor {
//!         parameter: ConstructorParameter {
//!             name: "injectObject".to_string(),
//!             type_name: "UserActivity".to_string(),
//!             non_null: true,
//!         },
//!         statements: vec![Assignment {
//!             receiver: "injectObject".to_string(),
//!             field_name: "component".to_string(),
//!             accessor: "PreferenceComponent_App.getInstance()".to_string(),
//!         }],
//!     },
//! };
//!
//! let source = JavaRenderer::new().with_package("com.example").render(&injector);
//! assert!(source.starts_with("package com.example;\n"));
//! assert!(source.contains("    injectObject.component = PreferenceComponent_App.getInstance();\n"));
//! ```

use crate::emitter::GeneratedInjector;
use std::fmt::{Display, Formatter};

/// Default header placed in the Javadoc of every generated type.
pub const GENERATED_HEADER: &str =
    "Generated by PreferenceRoom. (https://github.com/skydoves/PreferenceRoom).";

/// Default annotation used to mark the constructor parameter as non-null.
pub const NON_NULL_ANNOTATION: &str = "android.support.annotation.NonNull";

const INDENT: &str = "  ";

/// Renders [GeneratedInjector]s as Java classes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct JavaRenderer {
    package: Option<String>,
    non_null_annotation: Option<String>,
    header: Option<String>,
}

impl Default for JavaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaRenderer {
    /// Creates a renderer with the default header and non-null annotation, in the default package.
    pub fn new() -> Self {
        Self {
            package: None,
            non_null_annotation: Some(NON_NULL_ANNOTATION.to_string()),
            header: Some(GENERATED_HEADER.to_string()),
        }
    }

    /// Places generated types in given package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Uses given fully qualified annotation for non-null parameters, or none at all.
    pub fn with_non_null_annotation(mut self, annotation: Option<String>) -> Self {
        self.non_null_annotation = annotation;
        self
    }

    /// Uses given Javadoc header, or none at all.
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    /// Renders given injector as a complete compilation unit.
    pub fn render(&self, injector: &GeneratedInjector) -> String {
        JavaSource {
            renderer: self,
            injector,
        }
        .to_string()
    }

    fn annotation_simple_name(&self) -> Option<&str> {
        self.non_null_annotation
            .as_deref()
            .map(|annotation| annotation.rsplit('.').next().unwrap_or(annotation))
    }
}

struct JavaSource<'a> {
    renderer: &'a JavaRenderer,
    injector: &'a GeneratedInjector,
}

impl Display for JavaSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let JavaSource { renderer, injector } = self;
        let parameter = &injector.constructor.parameter;
        let annotation = renderer
            .annotation_simple_name()
            .filter(|_| parameter.non_null);

        if let Some(package) = &renderer.package {
            writeln!(f, "package {package};")?;
            writeln!(f)?;
        }

        if let Some(import) = renderer
            .non_null_annotation
            .as_deref()
            .filter(|_| parameter.non_null)
        {
            writeln!(f, "import {import};")?;
            writeln!(f)?;
        }

        if let Some(header) = &renderer.header {
            writeln!(f, "/**")?;
            for line in header.lines() {
                writeln!(f, " * {line}")?;
            }
            writeln!(f, " */")?;
        }

        writeln!(f, "public class {} {{", injector.name)?;

        write!(f, "{INDENT}public {}(", injector.name)?;
        if let Some(annotation) = annotation {
            write!(f, "@{annotation} ")?;
        }
        writeln!(f, "{} {}) {{", parameter.type_name, parameter.name)?;

        for statement in &injector.constructor.statements {
            writeln!(f, "{INDENT}{INDENT}{statement};")?;
        }

        writeln!(f, "{INDENT}}}")?;
        writeln!(f, "}}")
    }
}
