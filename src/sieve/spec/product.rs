//! Leaf specifications over [`Product`] attributes.

use super::{impl_spec_ops, Specification};
use crate::model::{Color, Product, Size};

/// Matches products of exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    pub color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Matches products of exactly one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    pub size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Matches products by exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    pub name: String,
}

impl NameSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name == self.name
    }
}

impl_spec_ops!(ColorSpecification);
impl_spec_ops!(SizeSpecification);
impl_spec_ops!(NameSpecification);
