//! Dependency layout: what the server build and the wasm client each pull in.

use std::fs;

fn manifest() -> String {
    fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml")
}

/// Body of a `[section]` up to the next table header
fn section<'a>(manifest: &'a str, header: &str) -> &'a str {
    let start = manifest
        .find(header)
        .unwrap_or_else(|| panic!("Cargo.toml should have {}", header));
    let body = &manifest[start + header.len()..];
    body.split("\n[").next().unwrap_or(body)
}

fn declares(section: &str, name: &str) -> bool {
    section
        .lines()
        .any(|line| line.trim_start().starts_with(&format!("{} ", name)))
}

#[test]
fn lint_wasm_tracing_forwards_to_console_log() {
    let manifest = manifest();
    let wasm = section(&manifest, "[target.'cfg(target_arch = \"wasm32\")'.dependencies]");

    assert!(wasm.contains("tracing = { version = \"0.1\", features = [\"log\"] }"));
    assert!(declares(wasm, "console_log"));
    assert!(declares(wasm, "log"));
}

#[test]
fn lint_dioxus_is_server_only() {
    let manifest = manifest();
    let features = section(&manifest, "[features]");
    let dioxus = manifest
        .lines()
        .find(|line| line.starts_with("dioxus "))
        .expect("dioxus should be declared");

    assert!(dioxus.contains("optional = true"), "dioxus must be optional: {}", dioxus);
    assert!(features.contains("\"dep:dioxus\""));
    assert!(!declares(features, "web"), "the wasm client does not use Dioxus");
}

#[test]
fn lint_no_unused_js_sys() {
    let manifest = manifest();
    assert!(!manifest.lines().any(|line| line.starts_with("js-sys ")));
}
