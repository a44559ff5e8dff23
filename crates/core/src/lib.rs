//! Core library for usersearch
//!
//! This crate implements the **Functional Core** of the usersearch client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The usersearch project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`usersearch_core`** (this crate): Request/response model and pure translation functions
//! - **`usersearch`**: HTTP transport, configuration and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! Everything in this crate is free of I/O:
//!
//! - Validation of a [`SearchRequest`](model::SearchRequest) happens before any socket is opened
//! - The wire parameters of a call are computed from the request alone
//! - Classifying a `(status, body)` pair into a result or a [`SearchError`](error::SearchError)
//!   is a single total function
//!
//! The shell only moves bytes: it sends what [`search::wire_params`] produced and hands the
//! status code and body it got back to [`search::interpret_response`].
//!
//! # Module Organization
//!
//! - [`model`]: Data shapes exchanged with the search endpoint
//! - [`error`]: Error taxonomy returned by a search call
//! - [`search`]: Pre-flight validation, limit+1 probing and response classification
//!
//! # Example Usage
//!
//! ```rust
//! use usersearch_core::model::{OrderBy, SearchRequest};
//! use usersearch_core::search::{interpret_response, prepare};
//!
//! let request = SearchRequest::new("Boyd").with_limit(1).with_order(None, OrderBy::AsIs);
//! let prepared = prepare(&request, None).unwrap();
//! assert_eq!(prepared.probe_limit, 2);
//!
//! let body = br#"[{"id":0,"name":"Boyd Wolf","age":22,"about":"","gender":"male"}]"#;
//! let response = interpret_response(&prepared, 200, body).unwrap();
//!
//! assert_eq!(response.users.len(), 1);
//! assert!(!response.next_page);
//! ```

pub mod error;
pub mod model;
pub mod search;
