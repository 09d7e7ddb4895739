//! # recipes-core
//!
//! Core types and pure business rules for the recipe service.
//!
//! This crate provides the foundational types shared across all recipe crates:
//! - Entity structs for recipes, ingredient lines, and the read-only catalog
//! - The dietary type enum and the classifier that derives it
//! - The ordered recipe validator
//! - Catalog lookup resolution checks
//! - The structured recipe filter and pagination types for listing
//! - Outward response views and the assembler that builds them
//! - Business error kinds with stable codes
//!
//! Nothing in here performs I/O. Storage lives in `recipes-db`.

pub mod catalog;
pub mod classify;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod pagination;
pub mod responses;
pub mod validation;
