//! Typed view over a YAML content document
//!
//! Only `id` and `slug` are interpreted. Every other key is carried in
//! [`Document::extra`] in its original order and written back untouched.

use std::fmt;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{IdStampError, Result};

pub const ID_KEY: &str = "id";
pub const SLUG_KEY: &str = "slug";

/// An `id` value as found in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocId {
    /// Integer id, either pre-existing or allocated
    Number(i64),
    /// Any other truthy value, kept verbatim
    Other(Value),
}

impl DocId {
    fn from_value(value: Value) -> Self {
        match value.as_i64() {
            Some(n) => Self::Number(n),
            None => Self::Other(value),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number((*n).into()),
            Self::Other(v) => v.clone(),
        }
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Other(v) => f.write_str(&scalar_string(v)),
        }
    }
}

/// A parsed document: `id`, `slug`, and everything else.
///
/// A field is only considered present when its value is truthy, so
/// `id: 0` or `slug: ""` read back as `None` and get replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: Option<DocId>,
    pub slug: Option<Value>,
    pub extra: Mapping,
}

impl Document {
    /// Parse file contents. An empty document is an empty mapping; any
    /// other non-mapping root is an error.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content).map_err(|source| IdStampError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };

        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(mapping) => Ok(Self::from_mapping(mapping)),
            _ => Err(IdStampError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    fn from_mapping(mapping: Mapping) -> Self {
        let mut doc = Self::default();
        for (key, value) in mapping {
            match key.as_str() {
                Some(ID_KEY) => {
                    if is_truthy(&value) {
                        doc.id = Some(DocId::from_value(value));
                    }
                }
                Some(SLUG_KEY) => {
                    if is_truthy(&value) {
                        doc.slug = Some(value);
                    }
                }
                _ => {
                    doc.extra.insert(key, value);
                }
            }
        }
        doc
    }

    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().and_then(Value::as_str)
    }

    /// Rebuild the mapping with `id` first, `slug` second, then the rest.
    pub fn to_mapping(&self) -> Mapping {
        let mut out = Mapping::with_capacity(self.extra.len() + 2);
        if let Some(id) = &self.id {
            out.insert(Value::from(ID_KEY), id.to_value());
        }
        if let Some(slug) = &self.slug {
            out.insert(Value::from(SLUG_KEY), slug.clone());
        }
        for (key, value) in &self.extra {
            out.insert(key.clone(), value.clone());
        }
        out
    }

    /// Serialize for writing back to `path`. Long scalars are never wrapped.
    pub fn to_yaml(&self, path: &Path) -> Result<String> {
        serde_yaml::to_string(&Value::Mapping(self.to_mapping())).map_err(|source| {
            IdStampError::Serialize {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

/// Loose truthiness: null, false, zero, NaN and "" are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())
            }
        }
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// String form of a value, used as the id registry key.
pub fn scalar_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_string(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
