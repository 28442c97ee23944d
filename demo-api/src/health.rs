//! `GET /health`: liveness plus a store round-trip.
//!
//! | Outcome            | Response |
//! |--------------------|----------|
//! | store reachable    | `200 {"status":"healthy","database":"connected","timestamp":...}` |
//! | store unreachable  | `500 {"detail":"Health check failed: <reason>"}` |

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::ApiError;

/// Result of a single health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Up,
    Down(String),
}

/// Checks the store with a trivial query through a fresh session.
#[derive(Clone)]
pub struct DatabaseHealth {
    pool: SqlitePool,
}

impl DatabaseHealth {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn check(&self) -> HealthStatus {
        match demo_data_sqlx::ping(&self.pool).await {
            Ok(()) => HealthStatus::Up,
            Err(e) => HealthStatus::Down(e.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    /// UTC, RFC 3339 with microseconds.
    pub timestamp: String,
}

pub async fn health_handler(
    State(health): State<DatabaseHealth>,
) -> Result<Json<HealthResponse>, ApiError> {
    match health.check().await {
        HealthStatus::Up => Ok(Json(HealthResponse {
            status: "healthy",
            database: "connected",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })),
        HealthStatus::Down(reason) => Err(ApiError::Storage(format!("Health check failed: {reason}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn check_reports_down_after_close() {
        let pool = demo_data_sqlx::connect("sqlite::memory:", 1).await.unwrap();
        let health = DatabaseHealth::new(pool.clone());
        assert_eq!(health.check().await, HealthStatus::Up);

        pool.close().await;
        match health.check().await {
            HealthStatus::Down(reason) => assert!(!reason.is_empty()),
            HealthStatus::Up => panic!("closed pool reported healthy"),
        }
    }
}
