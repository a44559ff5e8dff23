//! Collaborator search server used by the integration tests
//!
//! Honors the wire contract the client is written against: token check, order
//! field whitelist, substring filter on name and about, raw-row offset skip and
//! the field comparator that sorts ascending values first for `order_by=1`.
//! A few magic queries force the failure replies.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use usersearch::{ClientConfig, SearchClient, User};

pub const TOKEN: &str = "token";

struct Row {
    id: i64,
    first_name: &'static str,
    last_name: &'static str,
    age: i64,
    about: &'static str,
    gender: &'static str,
}

impl Row {
    fn to_user(&self) -> User {
        User {
            id: self.id,
            name: format!("{} {}", self.first_name, self.last_name),
            age: self.age,
            about: self.about.to_string(),
            gender: self.gender.to_string(),
        }
    }
}

const ROWS: &[Row] = &[
    Row {
        id: 0,
        first_name: "Boyd",
        last_name: "Wolf",
        age: 22,
        about: "Nulla cillum enim voluptate consequat laborum esse excepteur occaecat commodo.\n",
        gender: "male",
    },
    Row {
        id: 1,
        first_name: "Hilda",
        last_name: "Mayer",
        age: 21,
        about: "Sit commodo consectetur minim amet ex. Elit aute mollit fugiat labore sint.\n",
        gender: "female",
    },
    Row {
        id: 2,
        first_name: "Brooks",
        last_name: "Aguilar",
        age: 25,
        about: "Velit ullamco est aliqua voluptate nisi do. Voluptate magna anim qui cillum.\n",
        gender: "male",
    },
    Row {
        id: 3,
        first_name: "Everett",
        last_name: "Dillard",
        age: 27,
        about: "Sint eu id sint irure officia amet cillum. Amet consectetur enim mollit culpa.\n",
        gender: "male",
    },
    Row {
        id: 4,
        first_name: "Owen",
        last_name: "Lynn",
        age: 30,
        about: "Elit anim elit eu et deserunt veniam laborum commodo irure nisi ut labore.\n",
        gender: "male",
    },
    Row {
        id: 5,
        first_name: "Beulah",
        last_name: "Stark",
        age: 30,
        about: "Incididunt culpa dolore laborum cupidatat consequat. Aliquip cupidatat pariatur.\n",
        gender: "female",
    },
    Row {
        id: 6,
        first_name: "Jennings",
        last_name: "Mays",
        age: 39,
        about: "Veniam consectetur non non aliquip exercitation quis qui. Aliquip duis ut ad.\n",
        gender: "male",
    },
    Row {
        id: 7,
        first_name: "Dillard",
        last_name: "Mccoy",
        age: 36,
        about: "Laborum voluptate sit ipsum tempor dolore. Adipisicing reprehenderit minim.\n",
        gender: "male",
    },
];

pub fn dataset_len() -> usize {
    ROWS.len()
}

fn reply(status: StatusCode, body: &str) -> Response {
    (status, body.to_string()).into_response()
}

fn bad_request(sentinel: &str) -> Response {
    reply(StatusCode::BAD_REQUEST, &format!("{{\"error\":\"{sentinel}\"}}"))
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> &'a str {
    params.get(name).map(String::as_str).unwrap_or("")
}

/// Search handler mirroring the collaborator server
pub async fn search_server(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let token = headers
        .get("AccessToken")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if token != TOKEN {
        return reply(StatusCode::UNAUTHORIZED, "");
    }

    let query = param(&params, "query");
    let order_field = param(&params, "order_field");
    if !matches!(order_field, "" | "Id" | "Age" | "Name") {
        return bad_request("ErrorBadOrderField");
    }
    let Ok(order_by) = param(&params, "order_by").parse::<i64>() else {
        return bad_request("ErrorBadOrderField");
    };
    let Ok(offset) = param(&params, "offset").parse::<usize>() else {
        return bad_request("ErrorBadOffsetField");
    };
    let limit = param(&params, "limit").parse::<usize>().ok();

    match query {
        "internal_err" => return reply(StatusCode::INTERNAL_SERVER_ERROR, ""),
        "bad_request" => return reply(StatusCode::BAD_REQUEST, ""),
        _ => {}
    }
    if !(-1..=1).contains(&order_by) {
        return bad_request("ErrorBadOrderField");
    }
    match query {
        "bad_request_json" => return bad_request(""),
        "bad_response_json" => return reply(StatusCode::OK, "{\"error\":\""),
        _ => {}
    }

    let mut users: Vec<User> = ROWS
        .iter()
        .skip(offset)
        .filter(|row| {
            let full_name = format!("{}{}", row.first_name, row.last_name);
            query.is_empty() || full_name.contains(query) || row.about.contains(query)
        })
        .map(Row::to_user)
        .collect();

    if !order_field.is_empty() && order_by != 0 {
        users.sort_by(|a, b| {
            let ordering = match order_field {
                "Name" => a.name.cmp(&b.name),
                "Id" => a.id.cmp(&b.id),
                _ => a.age.cmp(&b.age),
            };
            if order_by == 1 {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    if let Some(limit) = limit {
        users.truncate(limit);
    }

    match serde_json::to_string(&users) {
        Ok(body) => reply(StatusCode::OK, &format!("{body}\n")),
        Err(_) => bad_request("Can't marshal response"),
    }
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    format!("http://{addr}")
}

pub async fn spawn_search_server() -> String {
    spawn(Router::new().route("/", get(search_server))).await
}

/// Every request seen by a recording server: query parameters plus the token header
pub type Recorded = Arc<Mutex<Vec<(HashMap<String, String>, Option<String>)>>>;

async fn record_and_search(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let token = headers
        .get("AccessToken")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    recorded
        .lock()
        .expect("recorded lock")
        .push((params.clone(), token));

    search_server(headers, Query(params)).await
}

/// Search server that also records each incoming request
pub async fn spawn_recording_server() -> (String, Recorded) {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/", get(record_and_search))
        .with_state(recorded.clone());

    (spawn(router).await, recorded)
}

/// Server that answers every request with a fixed status and body
pub async fn spawn_fixed_server(status: StatusCode, body: &'static str) -> String {
    spawn(Router::new().route("/", get(move || async move { (status, body) }))).await
}

/// Server that holds every request for `delay` before answering
pub async fn spawn_stalling_server(delay: Duration) -> String {
    let router = Router::new().route(
        "/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            "[]"
        }),
    );
    spawn(router).await
}

pub fn client(base_url: &str, token: &str) -> SearchClient {
    SearchClient::new(ClientConfig::new(base_url).with_access_token(token))
        .expect("build search client")
}
