//! Stamps the `--version` string of jestsay.
//!
//! `JESTSAY_BUILD_DATE` is always set. Dev builds also get `VERGEN_GIT_SHA`;
//! builds with the `release` feature leave the commit out of the version.
//! Either value falls back to `unknown` so a tarball without git or `date`
//! still builds.

use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    let date = build_date().unwrap_or_else(|| UNKNOWN.to_string());
    println!("cargo:rustc-env=JESTSAY_BUILD_DATE={date}");

    #[cfg(not(feature = "release"))]
    if let Err(reason) = emit_git_sha() {
        println!("cargo:warning=jestsay: no git commit for --version ({reason})");
        println!("cargo:rustc-env=VERGEN_GIT_SHA={UNKNOWN}");
    }
}

/// Today's date as `YYYY-MM-DD`, if the `date` tool can tell us.
fn build_date() -> Option<String> {
    let output = Command::new("date").arg("+%Y-%m-%d").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let date = String::from_utf8(output.stdout).ok()?;
    let date = date.trim();
    (!date.is_empty()).then(|| date.to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() -> Result<(), Box<dyn std::error::Error>> {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let git = GitclBuilder::default().sha(true).build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
