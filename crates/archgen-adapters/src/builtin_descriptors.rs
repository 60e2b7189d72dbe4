//! Built-in type descriptors.
//!
//! A small catalog of JDK types and sample microservice contracts that
//! ship with the tool, so the prebuilt templates work out of the box.
//! User manifests (see [`crate::catalog::file`]) extend or override
//! these.

use archgen_core::domain::{MethodSig, TypeDescriptor, TypeExpr};

/// The base package of the bundled sample contracts.
pub const SAMPLE_PACKAGE: &str = "archgen.sample";

/// All descriptors shipped with the tool.
pub fn all_descriptors() -> Vec<TypeDescriptor> {
    let mut descriptors = jdk_value_types();
    descriptors.extend([
        runnable(),
        callable(),
        base_service(),
        service_network_component(),
        result_data(),
        response_message(),
    ]);
    descriptors
}

/// Plain reference types commonly bound as type arguments. Methodless
/// stubs: the resolver only needs their names to exist in the catalog.
fn jdk_value_types() -> Vec<TypeDescriptor> {
    [
        "java.lang.Object",
        "java.lang.String",
        "java.lang.Boolean",
        "java.lang.Integer",
        "java.lang.Long",
        "java.lang.Double",
    ]
    .into_iter()
    .map(TypeDescriptor::new)
    .collect()
}

fn runnable() -> TypeDescriptor {
    TypeDescriptor::new("java.lang.Runnable")
        .with_method(MethodSig::new("run", TypeExpr::concrete("void")))
}

fn callable() -> TypeDescriptor {
    TypeDescriptor::new("java.util.concurrent.Callable")
        .with_type_params(["V"])
        .with_method(
            MethodSig::new("call", TypeExpr::variable("V"))
                .with_throws("java.lang.Exception"),
        )
}

/// Arity-1 service contract: CRUD-ish operations over one data type.
fn base_service() -> TypeDescriptor {
    TypeDescriptor::new("archgen.sample.service.BaseService")
        .with_type_params(["T"])
        .with_method(
            MethodSig::new("save", TypeExpr::concrete("void"))
                .with_param("data", TypeExpr::variable("T")),
        )
        .with_method(
            MethodSig::new("find", TypeExpr::variable("T"))
                .with_param("id", TypeExpr::concrete("java.lang.String")),
        )
        .with_method(MethodSig::new(
            "all",
            TypeExpr::parameterized("java.util.List", [TypeExpr::variable("T")]),
        ))
        .with_method(MethodSig::new("count", TypeExpr::concrete("long")))
        .with_method(
            MethodSig::new("isReady", TypeExpr::concrete("boolean")).with_default_body(),
        )
}

/// Arity-2 messaging contract: request and response message types.
fn service_network_component() -> TypeDescriptor {
    TypeDescriptor::new("archgen.sample.net.ServiceNetworkComponent")
        .with_type_params(["M", "R"])
        .with_method(
            MethodSig::new("send", TypeExpr::concrete("void"))
                .with_param("message", TypeExpr::variable("M"))
                .with_throws("archgen.sample.net.NetworkException"),
        )
        .with_method(MethodSig::new("receive", TypeExpr::variable("R")))
        .with_method(
            MethodSig::new("sendAll", TypeExpr::concrete("void")).with_param(
                "messages",
                TypeExpr::parameterized(
                    "java.util.List",
                    [TypeExpr::wildcard_extends(TypeExpr::variable("M"))],
                ),
            ),
        )
        .with_method(
            MethodSig::new("isRunning", TypeExpr::concrete("boolean")).with_default_body(),
        )
}

fn result_data() -> TypeDescriptor {
    TypeDescriptor::new("archgen.sample.data.ResultData")
        .with_type_params(["E"])
        .with_method(MethodSig::new("getException", TypeExpr::variable("E")))
        .with_method(MethodSig::new("isFailed", TypeExpr::concrete("boolean")))
}

fn response_message() -> TypeDescriptor {
    TypeDescriptor::new("archgen.sample.data.message.ResponseMessage")
        .with_type_params(["D", "E"])
        .with_method(MethodSig::new("getData", TypeExpr::variable("D")))
        .with_method(MethodSig::new("getException", TypeExpr::variable("E")))
        .with_method(MethodSig::new("getCorrelationId", TypeExpr::concrete("java.lang.String")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let descriptors = all_descriptors();
        let mut names: Vec<&str> = descriptors.iter().map(TypeDescriptor::name).collect();
        names.sort_unstable();
        let len = names.len();
        names.dedup();
        assert_eq!(names.len(), len);
    }

    #[test]
    fn arities_cover_zero_one_and_two() {
        let descriptors = all_descriptors();
        for arity in [0, 1, 2] {
            assert!(descriptors.iter().any(|d| d.arity() == arity), "arity {arity}");
        }
    }

    #[test]
    fn default_methods_are_not_required() {
        let service = base_service();
        assert_eq!(service.methods().len(), 5);
        assert_eq!(service.required_methods().count(), 4);
    }
}
