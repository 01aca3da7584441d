//! # Specifications
//!
//! A [`Specification`] answers one question about one item: does it satisfy
//! the criterion? Criteria are composed with the logical combinators in this
//! module ([`And`], [`Or`], [`Not`]) into arbitrarily deep trees, and every
//! composite is itself a specification.
//!
//! Adding a criterion means adding a type that implements [`Specification`].
//! Neither the existing specifications nor the [`Filter`](crate::filter::Filter)
//! have to change.
//!
//! ```
//! use sieve::model::{Color, Product, Size};
//! use sieve::spec::{ColorSpecification, SizeSpecification, Specification, SpecificationExt};
//!
//! let black_and_small =
//!     ColorSpecification::new(Color::Black).and(SizeSpecification::new(Size::Small));
//!
//! let tiger = Product::new("Tiger", Color::Black, Size::Small);
//! let spotify = Product::new("Spotify", Color::Black, Size::Large);
//!
//! assert!(black_and_small.is_satisfied(&tiger));
//! assert!(!black_and_small.is_satisfied(&spotify));
//! ```
//!
//! ## Ownership
//!
//! Combinators own their children. To share a child between several
//! composites, pass a reference, a `Box`, an `Rc` or an `Arc`: all of them are
//! specifications when what they point to is.

mod product;

pub use product::{ColorSpecification, NameSpecification, SizeSpecification};

use std::rc::Rc;
use std::sync::Arc;

/// A boolean criterion over items of type `T`.
///
/// Implementations must be free of side effects: evaluating the same item
/// twice gives the same answer.
pub trait Specification<T: ?Sized> {
    fn is_satisfied(&self, item: &T) -> bool;
}

/// Composition methods available on every sized specification.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Satisfied only when both `self` and `other` are.
    fn and<S: Specification<T>>(self, other: S) -> And<Self, S> {
        And::new(self, other)
    }

    /// Satisfied when either `self` or `other` is.
    fn or<S: Specification<T>>(self, other: S) -> Or<Self, S> {
        Or::new(self, other)
    }

    /// Satisfied exactly when `self` is not.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Rc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Logical conjunction of two specifications.
///
/// `second` is not evaluated once `first` rejects the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> And<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Logical disjunction of two specifications.
///
/// `second` is not evaluated once `first` accepts the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Or<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }
}

/// Logical negation of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<S> {
    pub inner: S,
}

impl<S> Not<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Accepts every item (`Constant(true)`) or none (`Constant(false)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub bool);

impl<T: ?Sized> Specification<T> for Constant {
    fn is_satisfied(&self, _item: &T) -> bool {
        self.0
    }
}

/// A specification backed by a closure.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Wrap a closure as a specification.
pub fn from_fn<T: ?Sized, F: Fn(&T) -> bool>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for FromFn<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.f)(item)
    }
}

/// Operator sugar: `a & b`, `a | b` and `!a` build the matching combinator.
macro_rules! impl_spec_ops {
    ($ty:ident $(<$($gen:ident),+>)?) => {
        impl<$($($gen,)+)? Rhs> std::ops::BitAnd<Rhs> for $ty$(<$($gen),+>)? {
            type Output = $crate::spec::And<Self, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                $crate::spec::And::new(self, rhs)
            }
        }

        impl<$($($gen,)+)? Rhs> std::ops::BitOr<Rhs> for $ty$(<$($gen),+>)? {
            type Output = $crate::spec::Or<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::spec::Or::new(self, rhs)
            }
        }

        impl$(<$($gen),+>)? std::ops::Not for $ty$(<$($gen),+>)? {
            type Output = $crate::spec::Not<Self>;

            fn not(self) -> Self::Output {
                $crate::spec::Not::new(self)
            }
        }
    };
}

pub(crate) use impl_spec_ops;

impl_spec_ops!(And<A, B>);
impl_spec_ops!(Or<A, B>);
impl_spec_ops!(Not<S>);
impl_spec_ops!(Constant);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn even() -> FromFn<impl Fn(&i32) -> bool> {
        from_fn(|n: &i32| n % 2 == 0)
    }

    fn positive() -> FromFn<impl Fn(&i32) -> bool> {
        from_fn(|n: &i32| *n > 0)
    }

    #[test]
    fn and_requires_both() {
        let spec = even().and(positive());
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&3));
        assert!(!spec.is_satisfied(&-2));
    }

    #[test]
    fn or_requires_either() {
        let spec = even().or(positive());
        assert!(spec.is_satisfied(&3));
        assert!(spec.is_satisfied(&-2));
        assert!(!spec.is_satisfied(&-3));
    }

    #[test]
    fn not_negates() {
        let spec = even().not();
        assert!(spec.is_satisfied(&3));
        assert!(!spec.is_satisfied(&4));
    }

    #[test]
    fn and_short_circuits_on_first_rejection() {
        let calls = Cell::new(0);
        let counted = from_fn(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        let spec = Constant(false).and(&counted);
        assert!(!spec.is_satisfied(&1));
        assert_eq!(calls.get(), 0);

        let spec = Constant(true).and(&counted);
        assert!(spec.is_satisfied(&1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn or_short_circuits_on_first_acceptance() {
        let calls = Cell::new(0);
        let counted = from_fn(|_: &i32| {
            calls.set(calls.get() + 1);
            false
        });

        assert!(Constant(true).or(&counted).is_satisfied(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn composites_nest() {
        // (even AND positive) AND NOT 8
        let spec = even().and(positive()).and(from_fn(|n: &i32| *n == 8).not());
        assert!(spec.is_satisfied(&2));
        assert!(!spec.is_satisfied(&8));
    }

    #[test]
    fn borrowed_children_can_be_shared() {
        let e = even();
        let p = positive();
        let both = (&e).and(&p);
        let either = (&e).or(&p);

        assert!(both.is_satisfied(&2));
        assert!(either.is_satisfied(&1));
        assert!(e.is_satisfied(&2));
    }

    #[test]
    fn shared_children_through_rc() {
        let shared: Rc<dyn Specification<i32>> = Rc::new(even());
        let a = Rc::clone(&shared).and(positive());
        let b = Rc::clone(&shared).not();

        assert!(a.is_satisfied(&6));
        assert!(b.is_satisfied(&5));
    }

    #[test]
    fn boxed_trait_objects_compose() {
        let specs: Vec<Box<dyn Specification<i32>>> = vec![Box::new(even()), Box::new(positive())];
        let composite = specs
            .into_iter()
            .reduce(|a, b| Box::new(a.and(b)))
            .unwrap();

        assert!(composite.is_satisfied(&10));
        assert!(!composite.is_satisfied(&-10));
    }

    #[test]
    fn constant_accepts_or_rejects_everything() {
        assert!(Constant(true).is_satisfied(&0));
        assert!(!Constant(false).is_satisfied("anything"));
    }

    #[test]
    fn operators_build_combinators() {
        let spec = !Constant(false) & Constant(true);
        assert!(Specification::<i32>::is_satisfied(&spec, &1));

        let spec = Constant(false) | Constant(false);
        assert!(!Specification::<i32>::is_satisfied(&spec, &1));
    }
}
