// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::comparison;
use crate::ui::notifications;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// User intent from the comparison screen.
    Comparison(comparison::Message),
    Notification(notifications::NotificationMessage),
    /// Keyboard paging.
    Navigate(PageCommand),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The bytes of a chosen file finished loading.
    DocumentRead {
        path: PathBuf,
        result: Result<FileBytes, Error>,
    },
    WindowResized(iced::Size),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Page movements bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Previous,
    Next,
    First,
    Last,
}

/// File contents read off the UI thread.
///
/// Shared so messages stay cheap to clone.
#[derive(Clone)]
pub struct FileBytes(Arc<Vec<u8>>);

impl FileBytes {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Arc::new(bytes))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes the buffer back, copying only if another clone is alive.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        Arc::try_unwrap(self.0).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl fmt::Debug for FileBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileBytes({} bytes)", self.len())
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional PDF path to open on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PDF_COMPARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional PDFium library file or directory.
    /// Takes precedence over `[pdf] library_path`.
    pub pdfium_path: Option<String>,
}
