//! Source text assembly.
//!
//! [`SourceWriter`] is a small line/indent text builder; [`JavaUnit`]
//! wraps it with a package declaration and an import set so generation
//! routines can register fully qualified names and emit simple names in
//! the body. [`ResolvedType`] is the resolver's output shape: a type
//! with every variable substituted away.

use std::collections::BTreeSet;
use std::fmt;

const INDENT: &str = "    ";

/// Line-oriented text builder.
#[derive(Debug, Default)]
pub struct SourceWriter {
    out: String,
    indent: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        self
    }

    pub fn text(self) -> String {
        self.out
    }
}

/// A fully resolved type: no variables remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Concrete(String),
    Parameterized {
        raw: String,
        args: Vec<ResolvedType>,
    },
    /// `? extends Bound`, with the bound already resolved.
    WildcardExtends(Box<ResolvedType>),
}

impl ResolvedType {
    pub fn concrete(name: impl Into<String>) -> Self {
        ResolvedType::Concrete(name.into())
    }

    /// Render in Java notation using simple names, registering every
    /// imported type into `imports`.
    pub fn java_notation(&self, imports: &mut BTreeSet<String>) -> String {
        match self {
            ResolvedType::Concrete(name) => simple_name_imported(name, imports),
            ResolvedType::Parameterized { raw, args } => {
                let mut rendered = simple_name_imported(raw, imports);
                rendered.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        rendered.push_str(", ");
                    }
                    rendered.push_str(&arg.java_notation(imports));
                }
                rendered.push('>');
                rendered
            }
            ResolvedType::WildcardExtends(bound) => {
                format!("? extends {}", bound.java_notation(imports))
            }
        }
    }

    /// Fully qualified rendering, untouched by import collection.
    pub fn qualified(&self) -> String {
        match self {
            ResolvedType::Concrete(name) => name.clone(),
            ResolvedType::Parameterized { raw, args } => {
                let inner: Vec<String> = args.iter().map(ResolvedType::qualified).collect();
                format!("{}<{}>", raw, inner.join(", "))
            }
            ResolvedType::WildcardExtends(bound) => format!("? extends {}", bound.qualified()),
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified())
    }
}

/// One Java compilation unit under assembly.
#[derive(Debug)]
pub struct JavaUnit {
    package: String,
    imports: BTreeSet<String>,
    body: SourceWriter,
}

impl JavaUnit {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: BTreeSet::new(),
            body: SourceWriter::new(),
        }
    }

    pub fn imports_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.imports
    }

    pub fn body_mut(&mut self) -> &mut SourceWriter {
        &mut self.body
    }

    /// Register a fully qualified name and get back its simple name.
    pub fn import(&mut self, fq_name: &str) -> String {
        simple_name_imported(fq_name, &mut self.imports)
    }

    /// Assemble package declaration, sorted imports, and body.
    pub fn render(self) -> String {
        let mut out = SourceWriter::new();
        if !self.package.is_empty() {
            out.line(format!("package {};", self.package));
            out.blank();
        }
        if !self.imports.is_empty() {
            for import in &self.imports {
                out.line(format!("import {import};"));
            }
            out.blank();
        }
        let mut text = out.text();
        text.push_str(&self.body.text());
        text
    }
}

/// Name after the final `.`, or the whole name when unqualified.
pub fn simple_name(fq_name: &str) -> &str {
    fq_name.rsplit('.').next().unwrap_or(fq_name)
}

/// `java.lang` is implicit; primitives and unqualified names need no
/// import either.
fn needs_import(fq_name: &str) -> bool {
    match fq_name.rsplit_once('.') {
        Some((package, _)) => package != "java.lang",
        None => false,
    }
}

fn simple_name_imported(fq_name: &str, imports: &mut BTreeSet<String>) -> String {
    if needs_import(fq_name) {
        imports.insert(fq_name.to_string());
    }
    simple_name(fq_name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_indents_blocks() {
        let mut w = SourceWriter::new();
        w.line("public interface X {");
        w.indent().line("void run();").dedent();
        w.line("}");
        assert_eq!(w.text(), "public interface X {\n    void run();\n}\n");
    }

    #[test]
    fn unit_renders_package_imports_body() {
        let mut unit = JavaUnit::new("com.example.app");
        let name = unit.import("java.util.Map");
        assert_eq!(name, "Map");
        unit.body_mut().line("public interface Cache {");
        unit.body_mut().line("}");

        let text = unit.render();
        assert!(text.starts_with("package com.example.app;\n"));
        assert!(text.contains("import java.util.Map;\n"));
        assert!(text.contains("public interface Cache {"));
    }

    #[test]
    fn java_lang_is_not_imported() {
        let mut imports = BTreeSet::new();
        let rendered = ResolvedType::concrete("java.lang.String").java_notation(&mut imports);
        assert_eq!(rendered, "String");
        assert!(imports.is_empty());
    }

    #[test]
    fn parameterized_notation_imports_all_parts() {
        let mut imports = BTreeSet::new();
        let ty = ResolvedType::Parameterized {
            raw: "java.util.Map".into(),
            args: vec![
                ResolvedType::concrete("java.lang.Integer"),
                ResolvedType::concrete("com.example.data.Payload"),
            ],
        };
        assert_eq!(ty.java_notation(&mut imports), "Map<Integer, Payload>");
        assert!(imports.contains("java.util.Map"));
        assert!(imports.contains("com.example.data.Payload"));
        assert!(!imports.contains("java.lang.Integer"));
    }

    #[test]
    fn wildcard_notation() {
        let mut imports = BTreeSet::new();
        let ty = ResolvedType::WildcardExtends(Box::new(ResolvedType::concrete(
            "com.example.data.Event",
        )));
        assert_eq!(ty.java_notation(&mut imports), "? extends Event");
    }
}
