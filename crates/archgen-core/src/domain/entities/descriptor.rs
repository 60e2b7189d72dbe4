//! Static type descriptors.
//!
//! A [`TypeDescriptor`] is a structural description of a target-language
//! type: name, generic arity, and declared method signatures. It replaces
//! runtime reflection with a registry populated ahead of time, so the
//! engine never needs a live type system or classloading.
//!
//! Descriptors are immutable once loaded and owned by the Type Catalog;
//! the engine only reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural description of a resolvable type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    #[serde(default)]
    type_params: Vec<String>,
    #[serde(default)]
    methods: Vec<MethodSig>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_method(mut self, method: MethodSig) -> Self {
        self.methods.push(method);
        self
    }

    /// Fully qualified type name, e.g. `java.util.Map`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without the package prefix.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Declared type variable names, in order.
    pub fn type_params(&self) -> &[String] {
        &self.type_params
    }

    /// Generic-parameter arity.
    pub fn arity(&self) -> usize {
        self.type_params.len()
    }

    pub fn methods(&self) -> &[MethodSig] {
        &self.methods
    }

    /// Methods an implementor must provide: everything without a
    /// default body.
    pub fn required_methods(&self) -> impl Iterator<Item = &MethodSig> {
        self.methods.iter().filter(|m| !m.has_default_body)
    }
}

/// One declared method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSig {
    pub name: String,
    pub return_type: TypeExpr,
    #[serde(default)]
    pub parameters: Vec<MethodParam>,
    /// Declared checked exception type names.
    #[serde(default)]
    pub throws: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Default methods are inherited, never re-implemented.
    #[serde(default)]
    pub has_default_body: bool,
}

impl MethodSig {
    pub fn new(name: impl Into<String>, return_type: TypeExpr) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            throws: Vec::new(),
            visibility: Visibility::Public,
            has_default_body: false,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: TypeExpr) -> Self {
        self.parameters.push(MethodParam {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_throws(mut self, exception: impl Into<String>) -> Self {
        self.throws.push(exception.into());
        self
    }

    pub fn protected(mut self) -> Self {
        self.visibility = Visibility::Protected;
        self
    }

    pub fn with_default_body(mut self) -> Self {
        self.has_default_body = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodParam {
    pub name: String,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
}

impl Visibility {
    pub const fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
        }
    }
}

/// Recursive type shape appearing in method signatures.
///
/// Mirrors the reflective type hierarchy the original relied on
/// (plain class / type variable / parameterized type / wildcard),
/// expressed as data so resolution is pure symbol substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    /// Terminal named type, including primitives and `void`.
    Concrete(String),
    /// A type variable to be substituted by the resolver.
    Variable(String),
    /// A generic type applied to further arguments.
    Parameterized { raw: String, args: Vec<TypeExpr> },
    /// A bounded wildcard (`? extends X`); `None` is the unbounded `?`.
    Wildcard { upper_bound: Option<Box<TypeExpr>> },
}

impl TypeExpr {
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeExpr::Concrete(name.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeExpr::Variable(name.into())
    }

    pub fn parameterized<I>(raw: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = TypeExpr>,
    {
        TypeExpr::Parameterized {
            raw: raw.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn wildcard_extends(bound: TypeExpr) -> Self {
        TypeExpr::Wildcard {
            upper_bound: Some(Box::new(bound)),
        }
    }

    /// Category of a concrete name, driving stub default literals.
    pub fn category(&self) -> ReturnCategory {
        match self {
            TypeExpr::Concrete(name) => ReturnCategory::of(name),
            TypeExpr::Variable(_) | TypeExpr::Parameterized { .. } => ReturnCategory::Reference,
            TypeExpr::Wildcard { .. } => ReturnCategory::Unknown,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Concrete(name) => f.write_str(name),
            TypeExpr::Variable(name) => f.write_str(name),
            TypeExpr::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeExpr::Wildcard { upper_bound } => match upper_bound {
                Some(bound) => write!(f, "? extends {bound}"),
                None => f.write_str("?"),
            },
        }
    }
}

/// Return-type categories for stub body synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCategory {
    Boolean,
    Character,
    Integral32,
    Integral64,
    Float32,
    Float64,
    Void,
    Reference,
    /// Shape the engine cannot classify; stubs get a placeholder
    /// sentinel so the gap is visible in generated output.
    Unknown,
}

impl ReturnCategory {
    pub fn of(concrete_name: &str) -> Self {
        match concrete_name {
            "void" => ReturnCategory::Void,
            "boolean" => ReturnCategory::Boolean,
            "char" => ReturnCategory::Character,
            "byte" | "short" | "int" => ReturnCategory::Integral32,
            "long" => ReturnCategory::Integral64,
            "float" => ReturnCategory::Float32,
            "double" => ReturnCategory::Float64,
            _ => ReturnCategory::Reference,
        }
    }

    /// Default return literal, or `None` for `void`.
    pub fn default_literal(self) -> Option<&'static str> {
        match self {
            ReturnCategory::Void => None,
            ReturnCategory::Boolean => Some("false"),
            ReturnCategory::Character => Some("'\\n'"),
            ReturnCategory::Integral32 => Some("0"),
            ReturnCategory::Integral64 => Some("0L"),
            ReturnCategory::Float32 => Some("0.0f"),
            ReturnCategory::Float64 => Some("0.0"),
            ReturnCategory::Reference => Some("null"),
            ReturnCategory::Unknown => Some("XXX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builder_collects_methods() {
        let desc = TypeDescriptor::new("example.app.Worker")
            .with_type_params(["T"])
            .with_method(MethodSig::new("run", TypeExpr::concrete("void")))
            .with_method(
                MethodSig::new("peek", TypeExpr::variable("T")).with_default_body(),
            );

        assert_eq!(desc.arity(), 1);
        assert_eq!(desc.simple_name(), "Worker");
        assert_eq!(desc.methods().len(), 2);
        assert_eq!(desc.required_methods().count(), 1);
    }

    #[test]
    fn primitive_default_literals() {
        assert_eq!(ReturnCategory::of("boolean").default_literal(), Some("false"));
        assert_eq!(ReturnCategory::of("char").default_literal(), Some("'\\n'"));
        assert_eq!(ReturnCategory::of("int").default_literal(), Some("0"));
        assert_eq!(ReturnCategory::of("short").default_literal(), Some("0"));
        assert_eq!(ReturnCategory::of("byte").default_literal(), Some("0"));
        assert_eq!(ReturnCategory::of("long").default_literal(), Some("0L"));
        assert_eq!(ReturnCategory::of("float").default_literal(), Some("0.0f"));
        assert_eq!(ReturnCategory::of("double").default_literal(), Some("0.0"));
        assert_eq!(ReturnCategory::of("void").default_literal(), None);
        assert_eq!(
            ReturnCategory::of("java.lang.String").default_literal(),
            Some("null")
        );
    }

    #[test]
    fn wildcard_return_is_unclassifiable() {
        let expr = TypeExpr::Wildcard { upper_bound: None };
        assert_eq!(expr.category().default_literal(), Some("XXX"));
    }

    #[test]
    fn type_expr_display_nests() {
        let expr = TypeExpr::parameterized(
            "java.util.Map",
            [
                TypeExpr::variable("K"),
                TypeExpr::parameterized("java.util.List", [TypeExpr::variable("V")]),
            ],
        );
        assert_eq!(
            expr.to_string(),
            "java.util.Map<K, java.util.List<V>>"
        );
    }
}
