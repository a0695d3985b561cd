//! Core library for subtop
//!
//! This crate implements the **Functional Core** of the subtop application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`subtop_core`** (this crate): Pure transformation functions with zero I/O
//! - **`subtop`**: HTTP, terminal output and orchestration (the Imperative Shell)
//!
//! Every function in this crate is deterministic and can be tested with
//! fixture data. No HTTP client, no terminal, no environment.
//!
//! # Module Organization
//!
//! - [`listing`]: Request URL construction and the listing to [`listing::PostRecord`] transformation
//! - [`error`]: The fetch failure taxonomy and HTTP status classification
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use subtop_core::listing::{transform_listing, REDDIT_ORIGIN};
//!
//! let body = serde_json::json!({
//!     "data": { "children": [{ "data": { "title": "Hello", "permalink": "/r/rust/comments/1/" } }] }
//! });
//!
//! let posts = transform_listing(&body);
//!
//! assert_eq!(posts.len(), 1);
//! assert_eq!(posts[0].permalink, format!("{REDDIT_ORIGIN}/r/rust/comments/1/"));
//! ```

pub mod error;
pub mod listing;
