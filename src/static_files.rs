//! Document-root file resolution.
//!
//! Maps a validated request target to a location under the document root
//! and classifies it. Targets are joined as-is: there is no
//! canonicalization and no rejection of `..` segments, matching the
//! designed behavior (see DESIGN.md).

use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tokio::fs;

/// Classification of a request target under the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The target exists and can be opened for reading.
    Servable(PathBuf),
    /// Nothing exists at the resolved path.
    Missing,
    /// The path exists but cannot be opened.
    Unreadable,
}

/// Joins the document root and a validated request target and classifies
/// the result.
///
/// The target's leading separator is stripped before joining so the
/// resolved path always stays prefixed by the root.
pub async fn resolve(root: &Path, target: &str) -> Resolution {
    let relative = target.strip_prefix(MAIN_SEPARATOR).unwrap_or(target);
    let path = root.join(relative);

    if fs::metadata(&path).await.is_err() {
        return Resolution::Missing;
    }

    // Readability probe; the handle is dropped and the file is read in
    // full when serving.
    match fs::File::open(&path).await {
        Ok(_) => Resolution::Servable(path),
        Err(_) => Resolution::Unreadable,
    }
}

/// Reads a file as text, re-emitting every line with a trailing CRLF.
///
/// A file containing `hello` becomes the seven-byte body `hello\r\n`; a
/// final line without a terminator still receives one.
pub async fn read_lines_crlf(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path).await?;

    let mut body = String::with_capacity(text.len() + 2);
    for line in text.lines() {
        body.push_str(line);
        body.push_str("\r\n");
    }

    Ok(body)
}
