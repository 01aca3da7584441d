use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::filter::{BetterFilter, Filter};
use crate::model::Product;
use crate::spec::Specification;

/// Filter `catalog` through `spec`, keeping catalog order.
pub fn run<'a, S>(catalog: &'a Catalog, spec: &S) -> CmdResult<'a>
where
    S: Specification<Product> + ?Sized,
{
    let mut result = CmdResult::default();

    if catalog.is_empty() {
        result.add_message(CmdMessage::warning("Catalog is empty."));
        return result;
    }

    let matched = BetterFilter.filter(&catalog.refs(), spec);
    if matched.is_empty() {
        result.add_message(CmdMessage::info("No products matched."));
    }

    result.with_matched(matched)
}
