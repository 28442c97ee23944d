use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::health::DatabaseHealth;
use crate::services::ItemService;

/// Shared handler state, built once at startup around the store pool.
///
/// Handlers extract the piece they need (`State<ItemService>`,
/// `State<DatabaseHealth>`) through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub item_service: ItemService,
    pub db_health: DatabaseHealth,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            item_service: ItemService::new(pool.clone()),
            db_health: DatabaseHealth::new(pool),
        }
    }
}

impl FromRef<AppState> for ItemService {
    fn from_ref(state: &AppState) -> Self {
        state.item_service.clone()
    }
}

impl FromRef<AppState> for DatabaseHealth {
    fn from_ref(state: &AppState) -> Self {
        state.db_health.clone()
    }
}
