//! Attribute filtering.
//!
//! `AttrFilter` expresses a condition on a named attribute. It is validated
//! when it is built, so matching a product never fails.

use super::{lookup, AttrValue, AttributeSpec};
use crate::error::Result;
use crate::model::Product;
use crate::spec::{impl_spec_ops, Specification};
use std::fmt;

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality match.
    Eq,
    /// Not equal.
    Ne,
}

/// A validated filter condition on a product attribute.
#[derive(Debug, Clone)]
pub struct AttrFilter {
    /// The attribute, resolved from the registry
    pub attr: &'static AttributeSpec,
    /// The filter operation
    pub op: FilterOp,
    /// The value to compare against
    pub value: AttrValue,
}

impl AttrFilter {
    /// Build a filter from an attribute name and a raw value.
    ///
    /// Fails with `UnknownAttribute` when no attribute has that name, and
    /// with `UnknownValue` when the value is outside the attribute's value set.
    pub fn parse(attr: &str, op: FilterOp, raw_value: &str) -> Result<Self> {
        let spec = lookup(attr)?;
        let value = AttrValue::parse(spec.kind, raw_value)?;
        Ok(Self {
            attr: spec,
            op,
            value,
        })
    }

    /// Convenience: an equality filter.
    pub fn eq(attr: &str, raw_value: &str) -> Result<Self> {
        Self::parse(attr, FilterOp::Eq, raw_value)
    }

    /// Convenience: a not-equal filter.
    pub fn ne(attr: &str, raw_value: &str) -> Result<Self> {
        Self::parse(attr, FilterOp::Ne, raw_value)
    }

    /// Check if this filter matches the given product.
    pub fn matches(&self, product: &Product) -> bool {
        let Some(actual) = product.get_attr(self.attr.name) else {
            return false;
        };

        match self.op {
            FilterOp::Eq => actual == self.value,
            FilterOp::Ne => actual != self.value,
        }
    }
}

impl Specification<Product> for AttrFilter {
    fn is_satisfied(&self, item: &Product) -> bool {
        self.matches(item)
    }
}

impl fmt::Display for AttrFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
        };
        write!(f, "{}{}{}", self.attr.name, op, self.value)
    }
}

impl_spec_ops!(AttrFilter);
