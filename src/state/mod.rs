/// State management module
///
/// This module handles all application state, including:
/// - The immutable project catalog (library.rs)
/// - Shared data structures (data.rs)
/// - Category enumeration and lookups (categories.rs, query.rs)
/// - Per-visit gallery position (gallery.rs)
/// - Page addressing (route.rs) and the quote form (quote.rs)

pub mod categories;
pub mod data;
pub mod gallery;
pub mod library;
pub mod query;
pub mod quote;
pub mod route;

#[cfg(test)]
pub mod fixtures;
