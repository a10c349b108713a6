// SPDX-License-Identifier: MPL-2.0
use crate::application::port::DocumentError;
use crate::application::render::RenderError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Document Error: {0}")]
    Document(#[from] DocumentError),
    #[error("Render Error: {0}")]
    Render(#[from] RenderError),
    /// The PDF engine could not be bound or is not available.
    #[error("PDF Engine Error: {0}")]
    Engine(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-read-error",
            Error::Config(_) => "notification-config-load-error",
            Error::Document(err) => err.i18n_key(),
            Error::Render(_) => "notification-render-error",
            Error::Engine(_) => "notification-engine-unavailable",
        }
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
