//! Abstract Syntax Tree for the `.folio` language.
//!
//! The AST is the contract between the parser and lowering (`codegen::lower`).
//! It stays untyped: properties are name/value pairs with spans, and lowering
//! decides which names mean something.

use std::ops::Range;

/// Root node: a single `.folio` file parses into one FolioFile.
#[derive(Debug, Clone)]
pub struct FolioFile {
    /// The person's name, shown as the kinetic name title.
    pub name: String,
    pub name_span: Range<usize>,
    pub properties: Vec<Property>,
    pub kinetic: Option<SettingsBlock>,
    pub hover: Option<SettingsBlock>,
    pub projects: Vec<ProjectBlock>,
}

/// A key-value property: `image: "icn.png"` or `stagger: 18`.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub value: Value,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(u64),
    Float(f64),
    /// A bare word: `auto`, `restart`, `gradient-2`.
    Ident(String),
    /// `cubic(0.2, 0.9, 0.2, 1.0)`
    Call { name: String, args: Vec<f64> },
}

impl Value {
    /// What kind of value this is, for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Ident(_) => "identifier",
            Value::Call { .. } => "call",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// `kinetic { ... }` or `hover { ... }`.
#[derive(Debug, Clone)]
pub struct SettingsBlock {
    pub properties: Vec<Property>,
    pub span: Range<usize>,
}

/// `project "Title" { description: ... link: ... style: ... }`
#[derive(Debug, Clone)]
pub struct ProjectBlock {
    pub title: String,
    pub properties: Vec<Property>,
    pub span: Range<usize>,
}

impl ProjectBlock {
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}
