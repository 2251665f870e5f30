use {
    crate::models::{RawSnapshot, Snapshot},
    anyhow::{Context, Result},
    std::{fs::File, io::BufReader, path::Path},
};

/// Reads a published prediction snapshot and validates it in one pass.
///
/// Only I/O and JSON syntax errors surface here. Missing or malformed fields
/// inside a well-formed document are substituted during validation.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    let reader = BufReader::new(file);
    let raw: RawSnapshot = serde_json::from_reader(reader)
        .with_context(|| format!("Snapshot {} is not valid JSON", path.display()))?;
    log::info!("Loaded snapshot from {}", path.display());
    Ok(Snapshot::from_raw(&raw))
}
