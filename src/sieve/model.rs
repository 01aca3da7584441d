use crate::attributes::AttrValue;
use crate::error::{Result, SieveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Color {
    Red,
    Yellow,
    Black,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Black];

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Black => "black",
        }
    }

    pub const fn names() -> &'static [&'static str] {
        &["red", "yellow", "black"]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SieveError::unknown_value("color", s, Color::names()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub const fn name(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub const fn names() -> &'static [&'static str] {
        &["small", "medium", "large"]
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Size {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self> {
        Size::ALL
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SieveError::unknown_value("size", s, Size::names()))
    }
}

impl TryFrom<String> for Color {
    type Error = SieveError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Size {
    type Error = SieveError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A catalog entry. Every attribute is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    /// Get an attribute value by name.
    ///
    /// Returns `None` if the attribute name is not recognized.
    pub fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(AttrValue::Color(self.color)),
            "size" => Some(AttrValue::Size(self.size)),
            _ => None,
        }
    }
}
