//! Tests for the search-then-read and search-then-load helpers.

use std::path::Path;

use anyhow::{Context, Result, anyhow, ensure};
use rstest::rstest;
use serde::Deserialize;
use test_helpers::tree::TreeBuilder;

use super::super::*;
use super::fixtures::isolated;
use crate::{FindError, TextEncoding};

#[derive(Debug, Deserialize)]
struct Service {
    host: String,
    port: u16,
}

#[rstest]
fn read_text_ignores_module_resolution() -> Result<()> {
    let tree = TreeBuilder::new()?
        .file("x/fc-text", "plain")?
        .file("x/fc-jsonly.js", "module")?
        .finish();
    let options = isolated(&tree.path().join("x"))
        .use_module_resolution(true)
        .build();
    let text = read_text("fc-text", &options)
        .map_err(|e| anyhow!(e.to_string()))?
        .ok_or_else(|| anyhow!("expected fc-text to be read"))?;
    ensure!(text == "plain", "unexpected text {text:?}");

    let inferred = read_text("fc-jsonly", &options).map_err(|e| anyhow!(e.to_string()))?;
    ensure!(inferred.is_none(), "read_text must not infer extensions");
    Ok(())
}

#[rstest]
fn read_text_uses_configured_encoding() -> Result<()> {
    let tree = TreeBuilder::new()?
        .file("x/.config/fc-latin", b"na\xefve".as_slice())?
        .finish();
    let strict = isolated(&tree.path().join("x")).build();
    let Err(err) = read_text(".fc-latin", &strict) else {
        return Err(anyhow!("expected strict UTF-8 decoding to fail"));
    };
    ensure!(
        matches!(err.as_ref(), FindError::File { .. }),
        "unexpected error {err:?}"
    );

    let latin = strict.to_builder().file_encoding(TextEncoding::Latin1).build();
    let text = read_text(".fc-latin", &latin)
        .map_err(|e| anyhow!(e.to_string()))?
        .ok_or_else(|| anyhow!("expected a match"))?;
    ensure!(text == "na\u{ef}ve", "unexpected text {text:?}");
    Ok(())
}

#[rstest]
fn load_module_extracts_configuration() -> Result<()> {
    let tree = TreeBuilder::new()?
        .dir("x/y")?
        .file("x/fc-service.toml", "host = \"localhost\"\nport = 8080\n")?
        .finish();
    let options = isolated(&tree.path().join("x/y")).build();
    let figment = load_module("fc-service.toml", &options)
        .map_err(|e| anyhow!(e.to_string()))?
        .ok_or_else(|| anyhow!("expected fc-service.toml to load"))?;
    let service: Service = figment.extract().context("extract service")?;
    ensure!(service.host == "localhost", "unexpected host {}", service.host);
    ensure!(service.port == 8080, "unexpected port {}", service.port);
    Ok(())
}

#[rstest]
fn load_module_resolves_directory_index() -> Result<()> {
    let tree = TreeBuilder::new()?
        .file("x/fc-svc/index.json", r#"{"host": "example.org", "port": 443}"#)?
        .finish();
    let options = isolated(&tree.path().join("x")).build();
    let figment = load_module("fc-svc", &options)
        .map_err(|e| anyhow!(e.to_string()))?
        .ok_or_else(|| anyhow!("expected fc-svc to load"))?;
    let service: Service = figment.extract().context("extract service")?;
    ensure!(service.port == 443, "unexpected port {}", service.port);
    Ok(())
}

#[rstest]
fn load_module_reports_parse_failures() -> Result<()> {
    let tree = TreeBuilder::new()?
        .file("x/fc-broken.json", "{ \"host\": ")?
        .finish();
    let options = isolated(&tree.path().join("x")).build();
    let Err(err) = load_module("fc-broken", &options) else {
        return Err(anyhow!("expected a load failure"));
    };
    ensure!(
        matches!(err.as_ref(), FindError::Load { .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[rstest]
fn load_module_not_found_is_none() -> Result<()> {
    let tree = TreeBuilder::new()?.dir("x")?.finish();
    let loaded = load_module("fc-nowhere", &isolated(&tree.path().join("x")).build())
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(loaded.is_none(), "expected no module");
    Ok(())
}

#[rstest]
fn custom_loader_errors_become_load_errors() -> Result<()> {
    let tree = TreeBuilder::new()?.file("x/fc-port.js", "eighty")?.finish();
    let options = isolated(&tree.path().join("x")).build();
    let loader = |path: &Path| -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(raw.trim().parse::<u16>()?)
    };
    let Err(err) = load_module_with("fc-port", &options, &loader) else {
        return Err(anyhow!("expected the custom loader to fail"));
    };
    let expected = crate::canonicalise(&tree.path().join("x/fc-port.js"))?;
    ensure!(
        matches!(err.as_ref(), FindError::Load { path, .. } if *path == expected),
        "unexpected error {err:?}"
    );
    Ok(())
}
