//! Tests for reading and loading resolved configuration files.

use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde::Deserialize;
use tempfile::TempDir;

use super::*;
use crate::{FindError, OpenFlag, TextEncoding};

#[derive(Debug, Deserialize)]
struct Sample {
    name: String,
    retries: u8,
}

#[fixture]
fn temp_dir() -> Result<TempDir> {
    TempDir::new().context("create temporary directory")
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> Result<std::path::PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("write {name}"))?;
    Ok(path)
}

#[rstest]
#[case::toml("app.toml", "name = \"demo\"\nretries = 3\n")]
#[case::json("app.json", "{\"name\": \"demo\", \"retries\": 3}")]
#[case::extensionless("apprc", "name = \"demo\"\nretries = 3\n")]
fn loads_modules_by_extension(
    temp_dir: Result<TempDir>,
    #[case] name: &str,
    #[case] contents: &str,
) -> Result<()> {
    let dir = temp_dir?;
    let path = write(dir.path(), name, contents.as_bytes())?;
    let figment = load_config_module(&path).map_err(|e| anyhow!(e.to_string()))?;
    let sample: Sample = figment.extract().context("extract sample")?;
    ensure!(sample.name == "demo", "unexpected name {}", sample.name);
    ensure!(sample.retries == 3, "unexpected retries {}", sample.retries);
    Ok(())
}

#[rstest]
#[case::toml("broken.toml", "name = ")]
#[case::json("broken.json", "{\"name\": ")]
fn parse_failures_are_load_errors(
    temp_dir: Result<TempDir>,
    #[case] name: &str,
    #[case] contents: &str,
) -> Result<()> {
    let dir = temp_dir?;
    let path = write(dir.path(), name, contents.as_bytes())?;
    let Err(err) = load_config_module(&path) else {
        return Err(anyhow!("expected {name} to fail to parse"));
    };
    ensure!(
        matches!(err.as_ref(), FindError::Load { path: reported, .. } if *reported == path),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn missing_module_is_file_error(temp_dir: Result<TempDir>) -> Result<()> {
    let dir = temp_dir?;
    let Err(err) = load_config_module(&dir.path().join("absent.toml")) else {
        return Err(anyhow!("expected missing module to fail"));
    };
    ensure!(
        matches!(err.as_ref(), FindError::File { .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn reads_text_with_encoding(temp_dir: Result<TempDir>) -> Result<()> {
    let dir = temp_dir?;
    let path = write(dir.path(), "motd", b"caf\xe9")?;
    let text = read_text_file(&path, TextEncoding::Latin1, OpenFlag::Read)
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(text == "caf\u{e9}", "unexpected text {text:?}");

    let Err(err) = read_text_file(&path, TextEncoding::Utf8, OpenFlag::Read) else {
        return Err(anyhow!("expected strict UTF-8 decoding to fail"));
    };
    ensure!(
        matches!(err.as_ref(), FindError::File { .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn read_write_flag_opens_writable_files(temp_dir: Result<TempDir>) -> Result<()> {
    let dir = temp_dir?;
    let path = write(dir.path(), "notes.txt", b"hello")?;
    let text = read_text_file(&path, TextEncoding::Utf8, OpenFlag::ReadWrite)
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(text == "hello", "unexpected text {text:?}");
    let unchanged = std::fs::read(&path).context("reread notes")?;
    ensure!(unchanged == b"hello", "read-write open must not truncate");
    Ok(())
}

#[rstest]
fn closures_act_as_module_loaders(temp_dir: Result<TempDir>) -> Result<()> {
    let dir = temp_dir?;
    let path = write(dir.path(), "size.conf", b"42")?;
    let loader = |p: &Path| -> Result<u64, std::io::Error> { std::fs::metadata(p).map(|m| m.len()) };
    let size = loader.load(&path)?;
    ensure!(size == 2, "unexpected size {size}");
    Ok(())
}
