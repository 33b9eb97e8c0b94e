//! Startup seed file — a JSON array of state changes.

use std::path::Path;

use viewr_domain::device::StateChange;

/// Seed file errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file")]
    Json(#[from] serde_json::Error),
}

/// Read every [`StateChange`] from `path`, in file order.
pub fn load(path: &Path) -> Result<Vec<StateChange>, SeedError> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn parse(content: &str) -> Result<Vec<StateChange>, SeedError> {
    Ok(serde_json::from_str(content)?)
}
