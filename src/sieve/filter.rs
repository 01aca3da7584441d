//! Applying a specification to a collection.

use crate::spec::Specification;
use tracing::debug;

/// Selects, in order, the items of a collection that satisfy a specification.
pub trait Filter<T> {
    /// Returns exactly the references in `items` that satisfy `spec`, in the
    /// same relative order. `items` is left untouched.
    fn filter<'a, S>(&self, items: &[&'a T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized;
}

/// Linear scan, one evaluation per item.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a, S>(&self, items: &[&'a T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        let matched: Vec<&'a T> = items
            .iter()
            .copied()
            .filter(|item| spec.is_satisfied(*item))
            .collect();

        debug!(scanned = items.len(), matched = matched.len(), "filtered items");
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Product, Size};
    use crate::spec::{
        from_fn, ColorSpecification, Constant, SizeSpecification, SpecificationExt,
    };

    fn sample() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Red, Size::Small),
            Product::new("Tiger", Color::Black, Size::Small),
            Product::new("Spotify", Color::Black, Size::Large),
        ]
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn selects_black_and_small() {
        let products = sample();
        let items: Vec<&Product> = products.iter().collect();
        let spec = ColorSpecification::new(Color::Black).and(SizeSpecification::new(Size::Small));

        let result = BetterFilter.filter(&items, &spec);
        assert_eq!(names(&result), vec!["Tiger"]);
    }

    #[test]
    fn preserves_input_order() {
        let products = sample();
        let items: Vec<&Product> = products.iter().rev().collect();

        let result = BetterFilter.filter(&items, &ColorSpecification::new(Color::Black));
        assert_eq!(names(&result), vec!["Spotify", "Tiger"]);
    }

    #[test]
    fn returns_the_same_references() {
        let products = sample();
        let items: Vec<&Product> = products.iter().collect();

        let result = BetterFilter.filter(&items, &Constant(true));
        assert_eq!(result.len(), items.len());
        for (a, b) in result.iter().zip(&items) {
            assert!(std::ptr::eq(*a, *b));
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        let items: Vec<&Product> = Vec::new();
        assert!(BetterFilter.filter(&items, &Constant(true)).is_empty());
    }

    #[test]
    fn reject_all_is_empty_output() {
        let products = sample();
        let items: Vec<&Product> = products.iter().collect();
        assert!(BetterFilter.filter(&items, &Constant(false)).is_empty());
    }

    #[test]
    fn keeps_duplicates() {
        let tiger = Product::new("Tiger", Color::Black, Size::Small);
        let items = vec![&tiger, &tiger];

        let result = BetterFilter.filter(&items, &ColorSpecification::new(Color::Black));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn accepts_trait_objects() {
        let products = sample();
        let items: Vec<&Product> = products.iter().collect();
        let spec: Box<dyn Specification<Product>> =
            Box::new(from_fn(|p: &Product| p.name.starts_with('S')));

        let result = BetterFilter.filter(&items, spec.as_ref());
        assert_eq!(names(&result), vec!["Spotify"]);
    }

    #[test]
    fn works_for_any_item_type() {
        let numbers = [1, 2, 3, 4, 5, 6];
        let items: Vec<&i32> = numbers.iter().collect();

        let result = BetterFilter.filter(&items, &from_fn(|n: &i32| n % 3 == 0));
        assert_eq!(result, vec![&3, &6]);
    }
}
