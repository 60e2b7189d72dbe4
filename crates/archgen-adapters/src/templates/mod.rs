//! Prebuilt architecture templates.
//!
//! `text` holds the plain text-file templates (build configuration,
//! properties, source classes shipped verbatim); `tree` assembles whole
//! artifact trees out of them.

pub mod text;
pub mod tree;

pub use text::{
    AppPropertiesTemplate, BuildGradleTemplate, GitignoreTemplate, SettingsGradleTemplate,
    SpringBootAppTemplate, TextFileTemplate,
};
pub use tree::{MicroserviceSpec, MicroserviceTemplate};
