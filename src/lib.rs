pub mod board;
pub mod catalog;
pub mod chat;
pub mod db;
pub mod errors;
pub mod filter;
pub mod models;
pub mod notifications;
pub mod pager;
pub mod seed;
pub mod session;
pub mod storage;
pub mod timers;
pub mod validation;

pub use crate::board::BoardCore;
pub use crate::db::SqliteStorage;
pub use crate::errors::{AppError, AppResult, FieldError};
pub use crate::filter::FilterCriteria;
pub use crate::models::{
    Activity, ActivityDraft, BoardEvent, ChatMessage, DashboardSnapshot, Notification,
    NotificationKind, User,
};
pub use crate::storage::{MemoryStorage, Storage};

use std::path::Path;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

/// Opens the board against the SQLite slot store under `data_dir`,
/// signed in as the local session user.
pub fn open_board(data_dir: &Path) -> AppResult<BoardCore> {
    let storage = Arc::new(SqliteStorage::new(&data_dir.join("board.db"))?);
    Ok(BoardCore::new(storage, seed::current_user()))
}

pub fn init_tracing(data_dir: &Path) -> Result<(), String> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir).map_err(|error| error.to_string())?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "board.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| error.to_string())
}
