//! # demo-api
//!
//! A small record service: create, list and fetch items over HTTP, backed by
//! SQLite through [`demo_data_sqlx`].
//!
//! | Route              | Handler |
//! |--------------------|---------|
//! | `GET /`            | [`controllers::root_controller::welcome`] |
//! | `GET /items`       | [`controllers::item_controller::list`] |
//! | `POST /items`      | [`controllers::item_controller::create`] |
//! | `GET /items/{id}`  | [`controllers::item_controller::get_by_id`] |
//! | `GET /health`      | [`health::health_handler`] |
//!
//! The binary wires everything together through [`serve`]; tests build the
//! same router in-process with [`router`].

pub mod app;
pub mod config;
pub mod controllers;
pub mod error;
pub mod extract;
pub mod health;
pub mod layers;
pub mod models;
pub mod services;
pub mod state;

pub use app::{open_store, router, serve};
pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use layers::init_tracing;
pub use state::AppState;
