//! # Sieve Architecture
//!
//! Sieve selects products from a catalog with **composable specifications**.
//! A specification tests one item against one criterion; combinators join
//! specifications into larger ones; a filter applies the result to an ordered
//! collection. New criteria are new types: nothing already written changes
//! when one is added.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, sets up logging, prints results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs one operation, returns a CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (spec/, filter.rs, query.rs, attributes/)             │
//! │  - Specification trait, And / Or / Not combinators          │
//! │  - BetterFilter: ordered, non-mutating selection            │
//! │  - Query: folds a criteria list into one specification      │
//! │  - AttrFilter: criteria named at runtime, validated early   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (model.rs, catalog.rs)                                │
//! │  - Product, Color, Size; the sample and JSON catalogs       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Evaluation Never Fails
//!
//! All attribute values come from closed enumerations, so evaluating a
//! specification and filtering are infallible. Errors can only happen at the
//! edges: reading a catalog or config file, or naming an attribute or value
//! that does not exist when building an [`attributes::AttrFilter`].
//!
//! ## Module Overview
//!
//! - [`spec`]: The specification trait, combinators and product leaves
//! - [`filter`]: The filter trait and its linear implementation
//! - [`query`]: Criteria list folding (AND / OR, optional inversion)
//! - [`attributes`]: Attribute registry and validated attribute filters
//! - [`commands`]: Operations returning `CmdResult`
//! - [`model`]: Core data types (`Product`, `Color`, `Size`)
//! - [`catalog`]: Product collections
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod attributes;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod spec;
