//! Tests for the direct-file and module-style candidate strategies.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, ensure};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use test_helpers::tree::TreeBuilder;

use super::*;
use crate::file::canonicalise;

#[fixture]
fn module_tree() -> Result<TempDir> {
    Ok(TreeBuilder::new()?
        .file("plain.js", "module.exports = 1;")?
        .file("data.json", "{}")?
        .file("bare", "")?
        .file("pkg/index.js", "")?
        .file("manifest/package.json", r#"{"main": "lib/entry"}"#)?
        .file("manifest/lib/entry.js", "")?
        .file("manifest/index.js", "")?
        .file("broken/package.json", "{ not json")?
        .file("broken/index.json", "{}")?
        .file("settings/index.toml", "")?
        .dir("empty")?
        .finish())
}

fn real(root: &Path, relative: &str) -> Result<PathBuf> {
    canonicalise(&root.join(relative)).with_context(|| format!("canonicalise {relative}"))
}

#[rstest]
fn direct_file_accepts_regular_files(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let found = DirectFile.test(tree.path(), "plain.js");
    ensure!(
        found == Some(tree.path().join("plain.js")),
        "unexpected match {found:?}"
    );
    Ok(())
}

#[rstest]
#[case::directory("pkg")]
#[case::missing("absent.toml")]
#[case::no_inference("plain")]
fn direct_file_rejects_non_files(
    module_tree: Result<TempDir>,
    #[case] name: &str,
) -> Result<()> {
    let tree = module_tree?;
    let found = DirectFile.test(tree.path(), name);
    ensure!(found.is_none(), "expected no match for {name}, got {found:?}");
    Ok(())
}

#[rstest]
fn direct_file_tolerates_missing_directories(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let found = DirectFile.test(&tree.path().join("no/such/dir"), "plain.js");
    ensure!(found.is_none(), "expected no match, got {found:?}");
    Ok(())
}

#[cfg(unix)]
#[rstest]
fn direct_file_follows_symlinks_to_files_only(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    std::os::unix::fs::symlink(tree.path().join("plain.js"), tree.path().join("link.js"))
        .context("link to file")?;
    std::os::unix::fs::symlink(tree.path().join("pkg"), tree.path().join("link-dir"))
        .context("link to directory")?;
    ensure!(
        DirectFile.test(tree.path(), "link.js") == Some(tree.path().join("link.js")),
        "expected symlinked file to match"
    );
    ensure!(
        DirectFile.test(tree.path(), "link-dir").is_none(),
        "expected symlinked directory to be rejected"
    );
    Ok(())
}

#[rstest]
#[case::exact("plain.js", "plain.js")]
#[case::js_extension("plain", "plain.js")]
#[case::json_extension("data", "data.json")]
#[case::extensionless_file("bare", "bare")]
#[case::directory_index("pkg", "pkg/index.js")]
#[case::package_main("manifest", "manifest/lib/entry.js")]
#[case::invalid_manifest("broken", "broken/index.json")]
fn node_resolver_variants(
    module_tree: Result<TempDir>,
    #[case] specifier: &str,
    #[case] expected: &str,
) -> Result<()> {
    let tree = module_tree?;
    let resolved = NodeModuleResolver::default()
        .resolve(&tree.path().join(specifier))
        .with_context(|| format!("resolve {specifier}"))?;
    let wanted = real(tree.path(), expected)?;
    ensure!(resolved == wanted, "resolved {resolved:?}, expected {wanted:?}");
    Ok(())
}

#[rstest]
#[case::missing("absent")]
#[case::empty_directory("empty")]
#[case::unknown_extension("settings")]
fn node_resolver_reports_unresolvable(
    module_tree: Result<TempDir>,
    #[case] specifier: &str,
) -> Result<()> {
    let tree = module_tree?;
    let Err(err) = NodeModuleResolver::default().resolve(&tree.path().join(specifier)) else {
        return Err(anyhow!("expected {specifier} to be unresolvable"));
    };
    ensure!(
        err.kind() == std::io::ErrorKind::NotFound,
        "unexpected error kind {:?}",
        err.kind()
    );
    Ok(())
}

#[rstest]
fn custom_extensions_and_index_stem(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let resolver = NodeModuleResolver::new().extensions(["toml"]);
    let resolved = resolver
        .resolve(&tree.path().join("settings"))
        .context("resolve settings")?;
    ensure!(
        resolved == real(tree.path(), "settings/index.toml")?,
        "unexpected resolution {resolved:?}"
    );

    let renamed = NodeModuleResolver::new().index_stem("entry");
    ensure!(
        renamed.resolve(&tree.path().join("manifest/lib")).is_ok(),
        "expected custom index stem to match entry.js"
    );
    Ok(())
}

#[rstest]
fn reduced_resolver_skips_directories(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let resolver = NodeModuleResolver::new().without_directory_index();
    ensure!(
        resolver.resolve(&tree.path().join("pkg")).is_err(),
        "expected directory lookup to be disabled"
    );
    ensure!(
        resolver.resolve(&tree.path().join("plain")).is_ok(),
        "expected extension inference to remain"
    );
    Ok(())
}

#[rstest]
fn package_main_can_be_ignored(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let resolved = NodeModuleResolver::new()
        .package_main(false)
        .resolve(&tree.path().join("manifest"))
        .context("resolve manifest")?;
    ensure!(
        resolved == real(tree.path(), "manifest/index.js")?,
        "unexpected resolution {resolved:?}"
    );
    Ok(())
}

#[derive(Debug)]
struct FailingResolver;

impl ModuleResolver for FailingResolver {
    fn resolve(&self, _specifier: &Path) -> std::io::Result<PathBuf> {
        Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ))
    }
}

#[rstest]
fn module_style_swallows_resolver_errors(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let strategy = ModuleStyle::new(&FailingResolver);
    ensure!(
        strategy.test(tree.path(), "plain.js").is_none(),
        "expected resolver failure to read as not found"
    );
    Ok(())
}

#[rstest]
fn module_style_joins_before_resolving(module_tree: Result<TempDir>) -> Result<()> {
    let tree = module_tree?;
    let resolver = NodeModuleResolver::default();
    let strategy = ModuleStyle::new(&resolver);
    let found = strategy.test(tree.path(), "pkg");
    ensure!(
        found == Some(real(tree.path(), "pkg/index.js")?),
        "unexpected match {found:?}"
    );
    Ok(())
}
