//! # Attribute System
//!
//! The typed leaf specifications in [`crate::spec`] are chosen at compile time.
//! When criteria arrive by name instead (from the config file, for instance),
//! this module validates them against a registry and turns them into
//! specifications:
//!
//! - **Registry**: which attributes a product has and what values they accept
//! - **Values**: the runtime representation of an attribute value
//! - **Filtering**: `AttrFilter`, a validated `Specification<Product>`
//!
//! ## Attribute Kinds
//!
//! | Kind | Attribute | Values |
//! |------|-----------|--------|
//! | `Text` | `name` | any string |
//! | `Color` | `color` | `red`, `yellow`, `black` |
//! | `Size` | `size` | `small`, `medium`, `large` |
//!
//! ## Usage
//!
//! ```
//! use sieve::attributes::{AttrFilter, FilterOp};
//! use sieve::model::{Color, Product, Size};
//! use sieve::spec::Specification;
//!
//! let filter = AttrFilter::parse("color", FilterOp::Eq, "black").unwrap();
//! assert!(filter.is_satisfied(&Product::new("Tiger", Color::Black, Size::Small)));
//!
//! assert!(AttrFilter::parse("weight", FilterOp::Eq, "heavy").is_err());
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{AttrFilter, FilterOp};
pub use spec::{get_spec, lookup, AttributeKind, AttributeSpec, ATTRIBUTES};
pub use value::AttrValue;
