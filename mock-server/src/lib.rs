//! Stand-in for the public superhero API.
//!
//! Serves `GET /api/all.json` from a configurable `Fixture` so clients can be
//! exercised against canned heroes, error statuses, or broken bodies.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// The heroes served by `app()`.
pub const DEFAULT_HEROES: &str = include_str!("../fixtures/heroes.json");

/// What `/api/all.json` answers with.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// 200 with this JSON body.
    Heroes(String),
    /// This status with an empty body.
    Status(u16),
    /// 200 with this body verbatim, JSON or not.
    Raw(String),
}

impl Fixture {
    /// Short description for logs; never includes the body itself.
    pub fn summary(&self) -> String {
        match self {
            Fixture::Heroes(body) => format!("heroes ({} bytes)", body.len()),
            Fixture::Status(code) => format!("status {code}"),
            Fixture::Raw(body) => format!("raw ({} bytes)", body.len()),
        }
    }
}

pub fn app() -> Router {
    app_with(Fixture::Heroes(DEFAULT_HEROES.to_string()))
}

pub fn app_with(fixture: Fixture) -> Router {
    Router::new()
        .route("/api/all.json", get(all_heroes))
        .with_state(Arc::new(fixture))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Fixture::Heroes(DEFAULT_HEROES.to_string())).await
}

pub async fn run_with(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixture)).await
}

async fn all_heroes(State(fixture): State<Arc<Fixture>>) -> Response {
    tracing::debug!(fixture = %fixture.summary(), "serving all.json");
    match fixture.as_ref() {
        Fixture::Heroes(body) => {
            ([(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
        }
        Fixture::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Fixture::Raw(body) => body.clone().into_response(),
    }
}
