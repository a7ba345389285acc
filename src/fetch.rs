//! History Fetcher: optional URL download of a `.t` tournament history file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Download `url` to `destination`, overwriting any existing file there.
///
/// A single blocking HTTP GET is used here rather than pulling in an async runtime: the rest
/// of the engine is synchronous and compute-bound, and this is the only network call in the
/// whole crate.
pub fn fetch_to_file(url: &str, destination: impl AsRef<Path>) -> Result<PathBuf> {
    let destination = destination.as_ref().to_path_buf();

    let response = reqwest::blocking::get(url)
        .with_context(|| format!("could not download history from {url}"))?
        .error_for_status()
        .with_context(|| format!("history download from {url} returned an error status"))?;

    let bytes = response
        .bytes()
        .with_context(|| format!("could not read response body from {url}"))?;

    std::fs::write(&destination, &bytes)
        .with_context(|| format!("could not write downloaded history to {}", destination.display()))?;

    Ok(destination)
}
