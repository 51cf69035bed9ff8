// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Icon(String),
    Content(ContentError),
}

/// Validation failures raised while loading the showcase catalog.
/// The catalog is static, so any of these indicates a packaging defect
/// rather than a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// An item has an empty identifier.
    EmptyItemId,

    /// Two items share the same identifier.
    DuplicateItemId(String),

    /// An item has no primary image reference.
    MissingPrimaryImage(String),

    /// The catalog contains no items at all.
    EmptyCatalog,
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::EmptyItemId => "error-content-empty-id",
            ContentError::DuplicateItemId(_) => "error-content-duplicate-id",
            ContentError::MissingPrimaryImage(_) => "error-content-missing-primary",
            ContentError::EmptyCatalog => "error-content-empty-catalog",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::EmptyItemId => write!(f, "Catalog item has an empty identifier"),
            ContentError::DuplicateItemId(id) => {
                write!(f, "Duplicate catalog item identifier: {}", id)
            }
            ContentError::MissingPrimaryImage(id) => {
                write!(f, "Catalog item has no primary image: {}", id)
            }
            ContentError::EmptyCatalog => write!(f, "Catalog contains no items"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Icon(e) => write!(f, "Icon Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
