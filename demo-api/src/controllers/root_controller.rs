use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Demo API";

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE,
    })
}
