//! Request/response model for the search users endpoint
//!
//! Plain data shapes shared by the client, the CLI and the test collaborator.
//! Validation of the order field is the server's job; the only local rule is
//! enforced by [`crate::search::prepare`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel carried in the error envelope when the server rejects the order field
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Header used to transport the access token
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Sort direction requested from the server.
///
/// On the wire this is the integer `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    Asc,
    #[default]
    AsIs,
    Desc,
}

impl OrderBy {
    pub fn as_wire(self) -> i64 {
        match self {
            OrderBy::Asc => -1,
            OrderBy::AsIs => 0,
            OrderBy::Desc => 1,
        }
    }
}

impl TryFrom<i64> for OrderBy {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(OrderBy::Asc),
            0 => Ok(OrderBy::AsIs),
            1 => Ok(OrderBy::Desc),
            other => Err(format!("order_by must be one of -1, 0, 1, got {other}")),
        }
    }
}

impl FromStr for OrderBy {
    type Err = String;

    /// Accepts the variant names (`asc`, `as-is`, `desc`) or their wire integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(OrderBy::Asc),
            "as-is" | "asis" | "none" => Ok(OrderBy::AsIs),
            "desc" => Ok(OrderBy::Desc),
            other => other
                .parse::<i64>()
                .map_err(|_| format!("Invalid order: {other}. Valid values: asc, as-is, desc"))
                .and_then(OrderBy::try_from),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBy::Asc => write!(f, "asc"),
            OrderBy::AsIs => write!(f, "as-is"),
            OrderBy::Desc => write!(f, "desc"),
        }
    }
}

/// Result attributes the server accepts as a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Age,
    Name,
}

impl OrderField {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Id => "Id",
            OrderField::Age => "Age",
            OrderField::Name => "Name",
        }
    }
}

impl FromStr for OrderField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(OrderField::Id),
            "Age" => Ok(OrderField::Age),
            "Name" => Ok(OrderField::Name),
            other => Err(format!("Unknown order field: {other}")),
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single search call.
///
/// `limit` and `offset` are signed so that a caller mistake reaches
/// [`crate::search::prepare`] and is reported instead of wrapping around.
/// `order_field` is free text: the server owns the whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    pub query: String,
    pub order_field: String,
    pub order_by: OrderBy,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the sort key and direction. `None` leaves the order field empty (server default).
    pub fn with_order(mut self, field: Option<OrderField>, order_by: OrderBy) -> Self {
        self.order_field = field.map(|f| f.as_str().to_string()).unwrap_or_default();
        self.order_by = order_by;
        self
    }

    /// Set a raw order field, bypassing the [`OrderField`] whitelist.
    pub fn with_raw_order_field(mut self, field: impl Into<String>) -> Self {
        self.order_field = field.into();
        self
    }
}

/// One result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub about: String,
    pub gender: String,
}

/// Result of a successful search call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub users: Vec<User>,
    pub next_page: bool,
}

/// Body of a 400 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn is_bad_order_field(&self) -> bool {
        self.error == ERROR_BAD_ORDER_FIELD
    }
}
