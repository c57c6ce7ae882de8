//! File persistence and serialization configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// Configuration for the local earnings archive
pub struct EarningsPersistenceConfig {
    /// Directory the sqlite file lives in
    pub directory: &'static str,
    /// Database filename
    pub filename: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub earnings: EarningsPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".hashdeck-ui.json",
    },
    earnings: EarningsPersistenceConfig {
        directory: ".hashdeck",
        filename: "earnings.sqlite",
    },
};

pub fn earnings_db_path() -> String {
    format!(
        "{}/{}",
        PERSISTENCE.earnings.directory, PERSISTENCE.earnings.filename
    )
}
