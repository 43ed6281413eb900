//! Data layer for the company dataset
//!
//! This module covers the full path from the delimited source file to an
//! answered query: line splitting, typed record assembly, the lazy
//! publish-once store, and the two read-only lookups.

pub mod company_record;
pub mod line_parser;
pub mod loader;
pub mod query_engine;
pub mod store;
