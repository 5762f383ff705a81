use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let workspace_manifest = manifest_dir.join("../../Cargo.toml");

    println!("cargo:rerun-if-changed={}", workspace_manifest.display());
    if let Some(git_dir) = git_directory(&manifest_dir) {
        emit_rerun_if_exists(&git_dir.join("HEAD"));
        emit_rerun_if_exists(&git_dir.join("refs/heads"));
        emit_rerun_if_exists(&git_dir.join("packed-refs"));
    }

    let manifest_text = fs::read_to_string(&workspace_manifest)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", workspace_manifest.display()));
    let manifest: toml::Value = manifest_text
        .parse()
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", workspace_manifest.display()));

    let release_version = workspace_package_version(&manifest);
    let metadata = lark_metadata(&manifest);
    let product = require_str(metadata, "product");
    let snapshot_hash = require_str(metadata, "snapshot_hash");
    let source_url = require_str(metadata, "source");
    let abi_version = require_u32(metadata, "abi_version");
    let oldest_supported = require_u32(metadata, "oldest_supported_abi_version");

    if oldest_supported > abi_version {
        panic!(
            "oldest_supported_abi_version ({oldest_supported}) must not exceed \
             abi_version ({abi_version})"
        );
    }

    let commit_hash = git_output(&manifest_dir, &["rev-parse", "HEAD"]);
    let commit_date = git_output(&manifest_dir, &["log", "-1", "--format=%cs"]);
    let commit_hash = commit_hash.as_deref().unwrap_or("unknown");
    let commit_date = commit_date.as_deref().unwrap_or("unknown");
    let version_label = format!("{release_version} ({commit_date})");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let mut generated = String::new();
    push_str_const(
        &mut generated,
        "PRODUCT",
        product,
        "Product name advertised by version banners.",
    );
    push_str_const(
        &mut generated,
        "RELEASE_VERSION",
        &release_version,
        "Release version of this build, taken from the workspace manifest.",
    );
    push_str_const(
        &mut generated,
        "VERSION_LABEL",
        &version_label,
        "Human-readable version label combining the release version with the commit date.",
    );
    push_str_const(
        &mut generated,
        "COMMIT_HASH",
        commit_hash,
        "Full git commit hash of this build, or `unknown` outside a git checkout.",
    );
    push_str_const(
        &mut generated,
        "COMMIT_DATE",
        commit_date,
        "Commit date of this build, or `unknown` outside a git checkout.",
    );
    push_str_const(
        &mut generated,
        "SNAPSHOT_HASH",
        snapshot_hash,
        "Hash identifying the snapshot format this build reads and writes.",
    );
    push_u32_const(
        &mut generated,
        "ABI_VERSION",
        abi_version,
        "Snapshot ABI version produced by this build.",
    );
    push_u32_const(
        &mut generated,
        "OLDEST_SUPPORTED_ABI_VERSION",
        oldest_supported,
        "Oldest snapshot ABI version this build still accepts.",
    );
    push_str_const(
        &mut generated,
        "SOURCE_URL",
        source_url,
        "Canonical source repository URL.",
    );

    let generated_path = out_dir.join("buildinfo_generated.rs");
    fs::write(&generated_path, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", generated_path.display()));
}

fn workspace_package_version(manifest: &toml::Value) -> String {
    manifest
        .get("workspace")
        .and_then(|workspace| workspace.get("package"))
        .and_then(|package| package.get("version"))
        .and_then(toml::Value::as_str)
        .map(str::to_owned)
        .expect("workspace.package.version must be set in the workspace manifest")
}

fn lark_metadata(manifest: &toml::Value) -> &toml::Value {
    manifest
        .get("workspace")
        .and_then(|workspace| workspace.get("metadata"))
        .and_then(|metadata| metadata.get("lark"))
        .expect("[workspace.metadata.lark] must be present in the workspace manifest")
}

fn require_str<'a>(metadata: &'a toml::Value, key: &str) -> &'a str {
    let value = metadata
        .get(key)
        .and_then(toml::Value::as_str)
        .unwrap_or_else(|| panic!("workspace.metadata.lark.{key} must be a string"));

    if value.trim().is_empty() {
        panic!("workspace.metadata.lark.{key} must not be empty");
    }

    value
}

fn require_u32(metadata: &toml::Value, key: &str) -> u32 {
    let value = metadata
        .get(key)
        .and_then(toml::Value::as_integer)
        .unwrap_or_else(|| panic!("workspace.metadata.lark.{key} must be an integer"));

    u32::try_from(value)
        .unwrap_or_else(|_| panic!("workspace.metadata.lark.{key} must fit in a u32"))
}

fn push_str_const(out: &mut String, name: &str, value: &str, doc: &str) {
    out.push_str(&format!(
        "/// {doc}\npub const {name}: &str = {value:?};\n\n"
    ));
}

fn push_u32_const(out: &mut String, name: &str, value: u32, doc: &str) {
    out.push_str(&format!("/// {doc}\npub const {name}: u32 = {value};\n\n"));
}

fn git_directory(manifest_dir: &Path) -> Option<PathBuf> {
    run_git(manifest_dir, &["rev-parse", "--git-dir"]).map(|output| {
        let path = PathBuf::from(output);
        if path.is_relative() {
            manifest_dir.join(path)
        } else {
            path
        }
    })
}

fn git_output(manifest_dir: &Path, args: &[&str]) -> Option<String> {
    run_git(manifest_dir, args)
}

fn run_git(manifest_dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(manifest_dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn emit_rerun_if_exists(path: &Path) {
    if path.exists() {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}
