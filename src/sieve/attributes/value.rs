//! Attribute value types.

use super::AttributeKind;
use crate::error::Result;
use crate::model::{Color, Size};
use std::fmt;

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Free-form text (e.g., `name`)
    Text(String),

    /// A product color
    Color(Color),

    /// A product size
    Size(Size),
}

impl AttrValue {
    /// Parse a raw string into a value of the given kind.
    ///
    /// Closed kinds reject anything outside their value set with
    /// `SieveError::UnknownValue`.
    pub fn parse(kind: AttributeKind, raw: &str) -> Result<Self> {
        Ok(match kind {
            AttributeKind::Text => AttrValue::Text(raw.to_string()),
            AttributeKind::Color => AttrValue::Color(raw.parse()?),
            AttributeKind::Size => AttrValue::Size(raw.parse()?),
        })
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            AttrValue::Text(_) => AttributeKind::Text,
            AttrValue::Color(_) => AttributeKind::Color,
            AttrValue::Size(_) => AttributeKind::Size,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Color(c) => fmt::Display::fmt(c, f),
            AttrValue::Size(s) => fmt::Display::fmt(s, f),
        }
    }
}
