//! Build script for hotel-merger
//!
//! Exposes `GIT_HASH`, `BUILD_TIMESTAMP` and `BUILD_PROFILE` to the binary,
//! which prints them in its startup line.

use std::process::Command;

fn main() {
    emit("GIT_HASH", git_short_hash().as_deref().unwrap_or("unknown"));
    emit("BUILD_TIMESTAMP", &build_timestamp());
    emit(
        "BUILD_PROFILE",
        &std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()),
    );

    // Re-run when the checked-out commit moves, not on every build
    println!("cargo:rerun-if-changed=build.rs");
    if let Some(head) = git_path("HEAD") {
        println!("cargo:rerun-if-changed={}", head);
    }
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={}={}", key, value);
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn git_short_hash() -> Option<String> {
    git(&["rev-parse", "--short=8", "HEAD"])
}

/// Absolute path of a file inside the git directory, if in a checkout
fn git_path(name: &str) -> Option<String> {
    git(&["rev-parse", "--path-format=absolute", "--git-path", name])
}

/// RFC 3339, seconds precision, local offset
fn build_timestamp() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false)
}
