//! Where a document is read from.

use std::fmt;
use std::path::PathBuf;

/// A document address: an HTTP(S) URL or a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    /// Fetched with an HTTP GET.
    Url(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl DocumentLocation {
    /// Interprets `raw` as a URL when it has an `http://` or `https://`
    /// scheme and as a file path otherwise.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(raw.to_owned())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DocumentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
