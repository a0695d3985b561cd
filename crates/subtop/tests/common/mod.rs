use assert_cmd::Command;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use tokio::runtime::Runtime;

/// In-process stand-in for the listing API
///
/// `r/rust` has five top posts; `r/odd` has one post whose title and score
/// are not the usual JSON types; `r/ratelimited` answers 429; `r/broken`
/// answers 500; `r/garbage` answers 200 with a non-JSON body; everything
/// else is 404.
pub struct FixtureServer {
    pub base_url: String,
    _runtime: Runtime,
}

impl FixtureServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("create runtime");
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");

        let app = Router::new().route("/r/{community}/top.json", get(listing));
        runtime.spawn(async move {
            axum::serve(listener, app).await.expect("serve fixtures");
        });

        Self {
            base_url: format!("http://{addr}"),
            _runtime: runtime,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("subtop").expect("subtop binary");
        cmd.env("SUBTOP_BASE_URL", &self.base_url)
            .env_remove("SUBTOP_LIMIT")
            .env_remove("SUBTOP_TIME")
            .env_remove("SUBTOP_VERBOSE")
            .env_remove("RUST_LOG");
        cmd
    }
}

async fn listing(
    Path(community): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(25);

    match community.as_str() {
        "rust" => {
            let children: Vec<_> = (1..=5)
                .take(limit)
                .map(|n| {
                    json!({
                        "kind": "t3",
                        "data": {
                            "title": format!("Rust post {n}"),
                            "author": format!("ferris{n}"),
                            "score": 600 - n * 100,
                            "url": format!("https://example.com/rust/{n}"),
                            "permalink": format!("/r/rust/comments/{n}/rust_post_{n}/"),
                        }
                    })
                })
                .collect();
            Json(json!({ "kind": "Listing", "data": { "children": children } })).into_response()
        }
        "odd" => Json(json!({
            "kind": "Listing",
            "data": { "children": [{
                "kind": "t3",
                "data": { "title": 42, "author": "a", "score": 12.0, "url": "u", "permalink": "/p/" }
            }] }
        }))
        .into_response(),
        "ratelimited" => StatusCode::TOO_MANY_REQUESTS.into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "garbage" => "not json".into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
