use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("Image reference cannot be empty.")]
    EmptyReference,

    #[error("Image URL is not valid: {0}")]
    InvalidUrl(String),
}

//
// ─── MEDIA URI ─────────────────────────────────────────────────────────────────
//

/// Location of a screenshot shown in place of a message body.
///
/// Only `http`/`https` references become URLs; anything else is kept as a path and
/// resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(MediaError::EmptyReference);
        }
        Ok(MediaUri::FilePath(path))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaError> {
        let raw = url.as_ref().trim();
        if raw.is_empty() {
            return Err(MediaError::EmptyReference);
        }
        let parsed = Url::parse(raw).map_err(|_| MediaError::InvalidUrl(raw.to_string()))?;
        Ok(MediaUri::Url(parsed))
    }

    /// Parses a reference as written in a dataset file.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaError> {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            return Err(MediaError::EmptyReference);
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Self::from_url(raw);
        }
        Self::from_file(raw)
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }

    /// String suitable for an `img` `src` attribute.
    #[must_use]
    pub fn to_src(&self) -> String {
        match self {
            MediaUri::FilePath(p) => p.display().to_string(),
            MediaUri::Url(u) => u.as_str().to_string(),
        }
    }
}
