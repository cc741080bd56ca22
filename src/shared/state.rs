use crate::shared::config::AppConfig;
use crate::shared::utils::DbPool;
use crate::storage::MinutesStorage;
use std::sync::Arc;

pub struct AppState {
    pub conn: DbPool,
    pub config: AppConfig,
    pub storage: Arc<dyn MinutesStorage>,
}
