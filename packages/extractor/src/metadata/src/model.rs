// Metadata Model
//
// Value records describing one class declaration. Field order here is the
// key order of the emitted JSON.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use crate::reflection::AccessLevel;

static DECORATOR_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@\s*([A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*)\s*(?:\([\s\S]*\))?$").unwrap()
});

/// A trimmed slice of source text kept verbatim: decorator applications and
/// type annotations. Nothing inside a fragment is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceFragment(String);

impl SourceFragment {
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name a decorator fragment was invoked by: `Controller` for
    /// `@Controller('users')`, `core.Injectable` for `@core.Injectable()`.
    pub fn decorator_name(&self) -> Option<&str> {
        DECORATOR_CALL
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl fmt::Display for SourceFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceFragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl PartialEq<&str> for SourceFragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Structural description of one class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    /// `None` for `export default class {}`.
    pub name: Option<String>,
    pub decorators: Vec<SourceFragment>,
    pub extends: Option<SourceFragment>,
    pub implements: Vec<SourceFragment>,
    pub properties: Vec<PropertyRecord>,
    #[serde(rename = "constructorParams")]
    pub constructor_params: Vec<ParameterRecord>,
    pub methods: Vec<MethodRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: SourceFragment,
    pub is_readonly: bool,
    pub is_static: bool,
    pub access: AccessLevel,
}

/// Constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: SourceFragment,
    pub decorators: Vec<SourceFragment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    pub return_type: SourceFragment,
    pub parameters: Vec<MethodParameterRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: SourceFragment,
}
