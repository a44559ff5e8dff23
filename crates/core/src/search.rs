//! Pure half of a search call
//!
//! [`prepare`] validates a request and fixes the probed limit, [`wire_params`]
//! turns it into query parameters and [`interpret_response`] classifies what
//! came back. The shell does the I/O in between.
//!
//! To learn whether another page exists without a second round trip, one row
//! more than the caller asked for is requested (the probe row). If it arrives
//! it is dropped and `next_page` is set.

use crate::error::{
    SearchError, MSG_BAD_ACCESS_TOKEN, MSG_FATAL_SERVER, MSG_LIMIT_NEGATIVE, MSG_OFFSET_NEGATIVE,
    MSG_UNPACK_ERROR, MSG_UNPACK_RESULT,
};
use crate::model::{ErrorEnvelope, OrderBy, SearchRequest, SearchResponse, User};

/// A request that passed pre-flight validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSearch {
    pub query: String,
    pub order_field: String,
    pub order_by: OrderBy,
    /// Rows the caller will get at most, after any page-size cap
    pub limit: usize,
    pub offset: usize,
    /// Rows asked from the server: `limit + 1`
    pub probe_limit: usize,
}

/// Validate a request and compute the probed limit.
///
/// Fails without touching the network when `limit` or `offset` is negative.
/// `max_page_size` lowers the limit when set.
pub fn prepare(
    request: &SearchRequest,
    max_page_size: Option<usize>,
) -> Result<PreparedSearch, SearchError> {
    let limit = usize::try_from(request.limit)
        .map_err(|_| SearchError::InvalidArgument(MSG_LIMIT_NEGATIVE.to_string()))?;
    let offset = usize::try_from(request.offset)
        .map_err(|_| SearchError::InvalidArgument(MSG_OFFSET_NEGATIVE.to_string()))?;

    let limit = match max_page_size {
        Some(cap) => limit.min(cap),
        None => limit,
    };

    Ok(PreparedSearch {
        query: request.query.clone(),
        order_field: request.order_field.clone(),
        order_by: request.order_by,
        limit,
        offset,
        probe_limit: limit.saturating_add(1),
    })
}

/// Query parameters for the HTTP call, in wire order
pub fn wire_params(prepared: &PreparedSearch) -> Vec<(&'static str, String)> {
    vec![
        ("query", prepared.query.clone()),
        ("order_field", prepared.order_field.clone()),
        ("order_by", prepared.order_by.as_wire().to_string()),
        ("limit", prepared.probe_limit.to_string()),
        ("offset", prepared.offset.to_string()),
    ]
}

/// Apply the probe rule: keep at most `limit` rows and report whether more existed.
pub fn paginate(mut users: Vec<User>, limit: usize) -> SearchResponse {
    let next_page = users.len() > limit;
    users.truncate(limit);

    SearchResponse { users, next_page }
}

/// What a `(status, body)` pair decoded to
#[derive(Debug)]
enum Reply {
    Rows(Vec<User>),
    Rejected(ErrorEnvelope),
    Unauthorized,
    Malformed {
        what: &'static str,
        detail: String,
    },
    Fatal,
}

fn decode_reply(status: u16, body: &[u8]) -> Reply {
    match status {
        200 => match serde_json::from_slice::<Vec<User>>(body) {
            Ok(rows) => Reply::Rows(rows),
            Err(e) => Reply::Malformed {
                what: MSG_UNPACK_RESULT,
                detail: e.to_string(),
            },
        },
        400 => match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Reply::Rejected(envelope),
            Err(e) => Reply::Malformed {
                what: MSG_UNPACK_ERROR,
                detail: e.to_string(),
            },
        },
        401 => Reply::Unauthorized,
        _ => Reply::Fatal,
    }
}

/// Classify the server's answer into a page of users or an error.
///
/// The status code is looked at first, then the body shape. Every pair maps
/// to exactly one outcome and malformed bodies never panic.
pub fn interpret_response(
    prepared: &PreparedSearch,
    status: u16,
    body: &[u8],
) -> Result<SearchResponse, SearchError> {
    match decode_reply(status, body) {
        Reply::Rows(rows) => Ok(paginate(rows, prepared.limit)),
        Reply::Rejected(envelope) if envelope.is_bad_order_field() => Err(
            SearchError::InvalidArgument(format!("OrderField {} invalid", prepared.order_field)),
        ),
        Reply::Rejected(envelope) => Err(SearchError::UnknownBadRequest(envelope.error)),
        Reply::Unauthorized => Err(SearchError::Auth(MSG_BAD_ACCESS_TOKEN.to_string())),
        Reply::Malformed { what, detail } => Err(SearchError::Decode { what, detail }),
        Reply::Fatal => Err(SearchError::FatalServer(MSG_FATAL_SERVER.to_string())),
    }
}
