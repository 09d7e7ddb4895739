//! Store modules for the catalog, recipe headers, and ingredient lines.
//!
//! Each store is a set of free async functions over a `&libsql::Connection`.
//! A `libsql::Transaction` derefs to a connection, so mutations compose inside
//! one transaction opened by the service.

pub mod catalog;
pub mod ingredient_line;
pub mod recipe;
