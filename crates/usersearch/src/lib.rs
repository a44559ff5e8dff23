//! Imperative shell of the usersearch client
//!
//! [`SearchClient`] owns the HTTP transport; everything it decides is delegated
//! to [`usersearch_core::search`].
//!
//! ```rust,no_run
//! use usersearch::{ClientConfig, SearchClient, SearchRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SearchClient::new(ClientConfig::new("http://127.0.0.1:8080").with_access_token("token"))?;
//! let page = client.find_users(&SearchRequest::new("Boyd").with_limit(10)).await?;
//!
//! for user in &page.users {
//!     println!("{} {}", user.id, user.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;

pub use client::SearchClient;
pub use config::{ClientConfig, ConfigError};
pub use usersearch_core::error::{SearchError, TransportError};
pub use usersearch_core::model::{OrderBy, OrderField, SearchRequest, SearchResponse, User};
