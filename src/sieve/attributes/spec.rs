//! Attribute specifications and registry.
//!
//! This module defines the schema for product attributes: their names, what
//! kind of value they hold and which raw values are acceptable.

use crate::error::{Result, SieveError};
use crate::model::{Color, Size};

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free-form text (e.g., `name`)
    Text,

    /// One of the closed set of [`Color`] values
    Color,

    /// One of the closed set of [`Size`] values
    Size,
}

impl AttributeKind {
    /// The accepted raw values, or `None` when any string is accepted.
    pub fn allowed_values(self) -> Option<&'static [&'static str]> {
        match self {
            AttributeKind::Text => None,
            AttributeKind::Color => Some(Color::names()),
            AttributeKind::Size => Some(Size::names()),
        }
    }
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used in criteria (e.g., "color")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// One-line description shown by `sieve attrs`
    pub description: &'static str,
}

impl AttributeSpec {
    const fn new(name: &'static str, kind: AttributeKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
        }
    }

    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        self.kind.allowed_values()
    }
}

/// Registry of all product attributes.
///
/// Adding an attribute to [`Product`](crate::model::Product) means adding an
/// entry here and a branch in `Product::get_attr`.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("name", AttributeKind::Text, "Product name, exact match"),
    AttributeSpec::new("color", AttributeKind::Color, "Product color"),
    AttributeSpec::new("size", AttributeKind::Size, "Product size"),
];

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Look up an attribute spec by name, failing on unknown attributes.
pub fn lookup(name: &str) -> Result<&'static AttributeSpec> {
    get_spec(name).ok_or_else(|| SieveError::UnknownAttribute(name.to_string()))
}
