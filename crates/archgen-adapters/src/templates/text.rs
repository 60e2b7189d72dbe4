//! Text-file templates.
//!
//! Each template renders one file that is attached to the tree as a
//! pre-rendered node and emitted verbatim.

use archgen_core::domain::{JavaUnit, SourceWriter};

/// A renderable text file with its target location.
pub trait TextFileTemplate {
    /// File name, including extension.
    fn filename(&self) -> String;

    /// Path segment below the attachment point. Empty means directly
    /// under it.
    fn path(&self) -> String {
        String::new()
    }

    fn text(&self) -> String;
}

/// `build.gradle` for a Spring Boot service.
#[derive(Debug, Clone)]
pub struct BuildGradleTemplate {
    plugins: Vec<String>,
    dependencies: Vec<String>,
}

impl BuildGradleTemplate {
    pub fn new() -> Self {
        Self {
            plugins: vec!["java".into()],
            dependencies: vec!["org.springframework.boot:spring-boot-starter".into()],
        }
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    pub fn with_dependency(mut self, coordinates: impl Into<String>) -> Self {
        self.dependencies.push(coordinates.into());
        self
    }
}

impl Default for BuildGradleTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFileTemplate for BuildGradleTemplate {
    fn filename(&self) -> String {
        "build.gradle".into()
    }

    fn text(&self) -> String {
        let mut w = SourceWriter::new();
        w.line("plugins {");
        w.indent();
        w.line("id 'org.springframework.boot' version '2.1.0.RELEASE'");
        for plugin in &self.plugins {
            w.line(format!("id '{plugin}'"));
        }
        w.dedent();
        w.line("}");
        w.blank();

        w.line("repositories {");
        w.indent().line("mavenCentral()").dedent();
        w.line("}");
        w.blank();

        w.line("dependencies {");
        w.indent();
        for dependency in &self.dependencies {
            w.line(format!("implementation '{dependency}'"));
        }
        w.dedent();
        w.line("}");
        w.text()
    }
}

/// `settings.gradle` with the root project name.
#[derive(Debug, Clone)]
pub struct SettingsGradleTemplate {
    project_name: String,
}

impl SettingsGradleTemplate {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

impl TextFileTemplate for SettingsGradleTemplate {
    fn filename(&self) -> String {
        "settings.gradle".into()
    }

    fn text(&self) -> String {
        format!("rootProject.name = '{}'\n", self.project_name)
    }
}

/// `.gitignore` for a Gradle project.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitignoreTemplate;

impl TextFileTemplate for GitignoreTemplate {
    fn filename(&self) -> String {
        ".gitignore".into()
    }

    fn text(&self) -> String {
        let mut w = SourceWriter::new();
        w.line(".gradle/");
        w.line("build/");
        w.line("out/");
        w.line("*.class");
        w.text()
    }
}

/// `application.properties` with literal key-value entries.
#[derive(Debug, Clone, Default)]
pub struct AppPropertiesTemplate {
    entries: Vec<(String, String)>,
}

impl AppPropertiesTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }
}

impl TextFileTemplate for AppPropertiesTemplate {
    fn filename(&self) -> String {
        "application.properties".into()
    }

    fn path(&self) -> String {
        "src/main/resources".into()
    }

    fn text(&self) -> String {
        let mut w = SourceWriter::new();
        for (key, value) in &self.entries {
            w.line(format!("{key}={value}"));
        }
        w.text()
    }
}

/// The Spring Boot application entry-point class.
#[derive(Debug, Clone)]
pub struct SpringBootAppTemplate {
    class_name: String,
    package: String,
}

impl SpringBootAppTemplate {
    pub fn new(class_name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            package: package.into(),
        }
    }
}

impl TextFileTemplate for SpringBootAppTemplate {
    fn filename(&self) -> String {
        format!("{}.java", self.class_name)
    }

    fn text(&self) -> String {
        let mut unit = JavaUnit::new(self.package.clone());
        let application = unit.import("org.springframework.boot.SpringApplication");
        let annotation =
            unit.import("org.springframework.boot.autoconfigure.SpringBootApplication");

        let name = self.class_name.clone();
        let body = unit.body_mut();
        body.line(format!("@{annotation}"));
        body.line(format!("public class {name} {{"));
        body.blank();
        body.indent();
        body.line("public static void main(String[] args) {");
        body.indent();
        body.line(format!("{application}.run({name}.class, args);"));
        body.dedent();
        body.line("}");
        body.dedent();
        body.line("}");
        unit.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_gradle_lists_plugins_and_dependencies() {
        let text = BuildGradleTemplate::new()
            .with_plugin("groovy")
            .with_dependency("com.example:extra:1.0")
            .text();

        assert!(text.contains("id 'java'"));
        assert!(text.contains("id 'groovy'"));
        assert!(text.contains("mavenCentral()"));
        assert!(text.contains("implementation 'com.example:extra:1.0'"));
    }

    #[test]
    fn settings_gradle_names_the_project() {
        let template = SettingsGradleTemplate::new("user-service");
        assert_eq!(template.text(), "rootProject.name = 'user-service'\n");
    }

    #[test]
    fn properties_render_in_insertion_order() {
        let text = AppPropertiesTemplate::new()
            .with_entry("prop1", "value")
            .with_entry("prop2", "value2")
            .text();
        assert_eq!(text, "prop1=value\nprop2=value2\n");
    }

    #[test]
    fn spring_boot_app_class() {
        let template = SpringBootAppTemplate::new("UserApp", "com.example.user");
        let text = template.text();

        assert_eq!(template.filename(), "UserApp.java");
        assert!(text.starts_with("package com.example.user;\n"));
        assert!(text.contains("@SpringBootApplication"));
        assert!(text.contains("SpringApplication.run(UserApp.class, args);"));
    }
}
