//! Folding a list of criteria into one composite specification.

use crate::model::Product;
use crate::spec::{Constant, Specification, SpecificationExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub type BoxedSpec = Box<dyn Specification<Product>>;

/// How the criteria of a query are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every criterion must hold (AND).
    #[default]
    All,
    /// At least one criterion must hold (OR).
    Any,
}

/// An ordered list of criteria plus the way to combine them.
#[derive(Default)]
pub struct Query {
    criteria: Vec<BoxedSpec>,
    mode: MatchMode,
    invert: bool,
}

impl Query {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            criteria: Vec::new(),
            mode,
            invert: false,
        }
    }

    /// Append a criterion. Criteria are evaluated in the order they were added.
    pub fn with<S>(mut self, spec: S) -> Self
    where
        S: Specification<Product> + 'static,
    {
        self.criteria.push(Box::new(spec));
        self
    }

    /// Select the products that do NOT match.
    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Build the composite specification.
    ///
    /// With no criteria, `All` accepts every product and `Any` accepts none.
    pub fn build(self) -> BoxedSpec {
        debug!(
            criteria = self.criteria.len(),
            mode = ?self.mode,
            invert = self.invert,
            "building query"
        );

        let mode = self.mode;
        let combined = self
            .criteria
            .into_iter()
            .reduce(|acc, next| -> BoxedSpec {
                match mode {
                    MatchMode::All => Box::new(acc.and(next)),
                    MatchMode::Any => Box::new(acc.or(next)),
                }
            })
            .unwrap_or_else(|| Box::new(Constant(mode == MatchMode::All)));

        if self.invert {
            Box::new(combined.not())
        } else {
            combined
        }
    }
}
