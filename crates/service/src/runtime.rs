//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the static directory is present (warn only) and the data
/// file's parent directory exists.
pub async fn ensure_env(static_dir: &str, data_file: &str) -> anyhow::Result<()> {
    common::env::ensure_env(static_dir, data_file).await
}
