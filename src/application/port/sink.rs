// SPDX-License-Identifier: MPL-2.0
//! Document sink port definition.
//!
//! The "send" and "approve" actions hand the current document to a
//! [`DocumentSink`]. No remote adapter exists yet: [`LogSink`] only records
//! the request in the log.

use super::document::DocumentHandle;
use thiserror::Error;

/// Errors a sink adapter may report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("document sink unavailable: {0}")]
    Unavailable(String),
    #[error("document sink rejected the request: {0}")]
    Rejected(String),
}

/// Destination for documents leaving the viewer.
pub trait DocumentSink {
    /// Transmits the original document for processing.
    fn submit(&self, document: &dyn DocumentHandle) -> Result<(), SinkError>;

    /// Persists the processed document as the approved result.
    fn approve(&self, document: &dyn DocumentHandle) -> Result<(), SinkError>;
}

/// Sink that only logs the requests it receives.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DocumentSink for LogSink {
    fn submit(&self, document: &dyn DocumentHandle) -> Result<(), SinkError> {
        tracing::info!(
            document = %document.id(),
            pages = document.page_count(),
            "send requested; no processing backend is configured"
        );
        Ok(())
    }

    fn approve(&self, document: &dyn DocumentHandle) -> Result<(), SinkError> {
        tracing::info!(
            document = %document.id(),
            pages = document.page_count(),
            "approve requested; no result store is configured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeDocument;

    #[test]
    fn log_sink_accepts_everything() {
        let doc = FakeDocument::letter(2);
        assert!(LogSink.submit(&doc).is_ok());
        assert!(LogSink.approve(&doc).is_ok());
    }
}
