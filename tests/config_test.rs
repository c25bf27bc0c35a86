//! Configuration file tests

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use cinegraph::config::CatalogConfig;
use tempfile::NamedTempFile;

#[test]
fn test_load_without_file_uses_defaults() -> Result<()> {
    let config = CatalogConfig::load(None)?;
    assert_eq!(config, CatalogConfig::default());
    Ok(())
}

#[test]
fn test_load_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
log_level = "warn"

[database]
path = "/tmp/catalog.db"
"#
    )?;

    let config = CatalogConfig::load(Some(file.path()))?;
    assert_eq!(config.log_level(), "warn");
    assert_eq!(config.database.path, "/tmp/catalog.db");
    assert_eq!(config.server.port, 3000);

    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = CatalogConfig::load(Some(Path::new("/nonexistent/cinegraph.toml"))).unwrap_err();
    assert_eq!(err.error_code(), "INTERNAL_ERROR");
}
