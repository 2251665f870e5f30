//! File locations for the upstream snapshot.

/// Configuration for the published prediction snapshot
pub struct SnapshotPersistenceConfig {
    /// Directory the model pipeline publishes into
    pub directory: &'static str,
    /// Snapshot filename (JSON)
    pub filename: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub snapshot: SnapshotPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    snapshot: SnapshotPersistenceConfig {
        directory: "public",
        filename: "full_prediction.json",
    },
};

/// Default snapshot path, e.g. "public/full_prediction.json"
pub fn default_snapshot_path() -> String {
    format!(
        "{}/{}",
        PERSISTENCE.snapshot.directory, PERSISTENCE.snapshot.filename
    )
}
