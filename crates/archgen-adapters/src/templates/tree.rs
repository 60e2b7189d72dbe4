//! Artifact tree assembly.
//!
//! Helpers for the common skeleton (root, source roots, package bases,
//! pre-rendered text files) plus [`MicroserviceTemplate`], the bundled
//! end-to-end architecture: a generated service contract and
//! implementation wrapped in a runnable Spring Boot project.

use std::sync::Arc;

use archgen_core::domain::{ArtifactNode, ArtifactTree, DomainError, NodeKind, TypeRef};
use archgen_core::application::services::NEEDS_FRAMEWORK_ANNOTATION;

use crate::templates::text::{
    AppPropertiesTemplate, BuildGradleTemplate, GitignoreTemplate, SettingsGradleTemplate,
    SpringBootAppTemplate, TextFileTemplate,
};

/// Java sources live here, below the project root.
pub const JAVA_SRC_DIR: &str = "src/main/java";

type NodeResult = Result<Arc<ArtifactNode>, DomainError>;

/// `com.example.user` -> `com/example/user`.
pub fn package_to_path(package: &str) -> String {
    package.replace('.', "/")
}

pub fn root(root_dir: &str) -> NodeResult {
    ArtifactNode::builder(root_dir, NodeKind::Root).build()
}

pub fn src_root(root: &Arc<ArtifactNode>) -> NodeResult {
    ArtifactNode::builder(JAVA_SRC_DIR, NodeKind::SourceRoot)
        .parent(root)
        .build()
}

pub fn src_base(src_root: &Arc<ArtifactNode>, package: &str) -> NodeResult {
    ArtifactNode::builder(package_to_path(package), NodeKind::SourceBase)
        .parent(src_root)
        .build()
}

pub fn src_abs_base(root: &Arc<ArtifactNode>) -> NodeResult {
    ArtifactNode::builder("", NodeKind::SourceBaseAbstract)
        .parent(root)
        .build()
}

/// Attach a pre-rendered text file below `parent`.
pub fn text_file(
    parent: &Arc<ArtifactNode>,
    kind: NodeKind,
    template: &dyn TextFileTemplate,
) -> NodeResult {
    ArtifactNode::builder(template.path(), kind)
        .parent(parent)
        .filename(template.filename())
        .text(template.text())
        .build()
}

/// Parameters of the bundled microservice architecture.
#[derive(Debug, Clone)]
pub struct MicroserviceSpec {
    root_dir: String,
    package: String,
    service_name: String,
    service_contract: String,
    type_arguments: Vec<String>,
    annotate_implementation: bool,
}

impl MicroserviceSpec {
    /// `service_name` is the bare name, e.g. `User`; generated type
    /// names are derived from it (`UserService`, `DefaultUserService`,
    /// `UserApp`).
    pub fn new(
        root_dir: impl Into<String>,
        package: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            package: package.into(),
            service_name: service_name.into(),
            service_contract: "archgen.sample.service.BaseService".into(),
            type_arguments: vec!["java.lang.String".into()],
            annotate_implementation: true,
        }
    }

    /// Override the contract the generated service extends.
    pub fn contract(
        mut self,
        catalog_name: impl Into<String>,
        type_arguments: Vec<String>,
    ) -> Self {
        self.service_contract = catalog_name.into();
        self.type_arguments = type_arguments;
        self
    }

    pub fn annotate_implementation(mut self, annotate: bool) -> Self {
        self.annotate_implementation = annotate;
        self
    }

    pub fn service_type_name(&self) -> String {
        format!("{}Service", self.service_name)
    }

    pub fn app_class_name(&self) -> String {
        format!("{}App", self.service_name)
    }
}

/// The assembled microservice tree.
pub struct MicroserviceTemplate {
    tree: ArtifactTree,
}

impl MicroserviceTemplate {
    pub fn new(spec: &MicroserviceSpec) -> Result<Self, DomainError> {
        let root = root(&spec.root_dir)?;
        let src_root = src_root(&root)?;
        let src_base = src_base(&src_root, &spec.package)?;
        let abs_base = src_abs_base(&root)?;

        // service
        let abstract_service = ArtifactNode::builder("service", NodeKind::ContractAbstract)
            .parent(&abs_base)
            .filename(&spec.service_contract)
            .build()?;

        let mut service_builder = ArtifactNode::builder("service", NodeKind::Contract)
            .parent(&src_base)
            .supertype(TypeRef::node(&abstract_service))
            .filename(spec.service_type_name());
        for argument in &spec.type_arguments {
            service_builder = service_builder.parameter(TypeRef::catalog(argument));
        }
        let service = service_builder.build()?;

        let mut impl_builder = ArtifactNode::builder("service", NodeKind::Implementation)
            .parent(&src_base)
            .supertype(TypeRef::node(&service));
        if spec.annotate_implementation {
            impl_builder = impl_builder.marker(NEEDS_FRAMEWORK_ANNOTATION);
        }
        let service_impl = impl_builder.build()?;

        // application entry point
        let app_template = SpringBootAppTemplate::new(spec.app_class_name(), &spec.package);
        let application = text_file(&src_base, NodeKind::TextResource, &app_template)?;

        // application properties
        let properties_template = AppPropertiesTemplate::new()
            .with_entry("spring.application.name", spec.service_name.to_lowercase());
        let properties = text_file(&root, NodeKind::SourceProperties, &properties_template)?;

        // build configuration
        let build_gradle = text_file(&root, NodeKind::BuildConfig, &BuildGradleTemplate::new())?;
        let settings_gradle = text_file(
            &root,
            NodeKind::BuildConfig,
            &SettingsGradleTemplate::new(spec.root_dir.clone()),
        )?;
        let gitignore = text_file(&root, NodeKind::TextResource, &GitignoreTemplate)?;

        let mut tree = ArtifactTree::new(root);
        tree.insert(src_root);
        tree.insert(src_base);
        tree.insert(abs_base);
        tree.insert(abstract_service);
        tree.insert(service);
        tree.insert(service_impl);
        tree.insert(application);
        tree.insert(properties);
        tree.insert(build_gradle);
        tree.insert(settings_gradle);
        tree.insert(gitignore);

        Ok(Self { tree })
    }

    pub fn tree(&self) -> &ArtifactTree {
        &self.tree
    }

    pub fn into_tree(self) -> ArtifactTree {
        self.tree
    }
}
