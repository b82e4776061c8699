//! Database layer: the SQLite-backed turn store.

pub mod turns;

pub use turns::TurnRepository;

/// Embedded migrations, run once at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
