// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Every handler works on an [`UpdateContext`] of mutable borrows into the
//! application state. After any handler runs, [`sync_renders`] brings both
//! panes up to date.

use super::message::{FileBytes, PageCommand};
use super::{Message, PageImage, PageImages};
use crate::application::comparison::ComparisonState;
use crate::application::port::{DocumentError, DocumentParser, DocumentSink, SinkError};
use crate::error::Error;
use crate::ui::comparison;
use crate::ui::comparison::layout;
use crate::ui::notifications::{self, Notification};
use iced::widget::image::Handle;
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub comparison: &'a mut ComparisonState,
    pub pages: &'a mut PageImages,
    pub parser: Option<&'a dyn DocumentParser>,
    pub sink: &'a dyn DocumentSink,
    pub notifications: &'a mut notifications::Manager,
    pub current_file: &'a mut Option<PathBuf>,
}

pub fn handle_comparison_message(
    ctx: &mut UpdateContext<'_>,
    message: comparison::Message,
) -> Task<Message> {
    match message {
        comparison::Message::Upload => return handle_open_file_dialog(),
        comparison::Message::PreviousPage => {
            ctx.comparison.advance(-1);
        }
        comparison::Message::NextPage => {
            ctx.comparison.advance(1);
        }
        comparison::Message::Rerun => handle_rerun(ctx),
        comparison::Message::Send => {
            let outcome = ctx.comparison.submit(ctx.sink);
            report_sink_outcome(ctx, outcome, "notification-sent");
        }
        comparison::Message::Approve => {
            let outcome = ctx.comparison.approve(ctx.sink);
            report_sink_outcome(ctx, outcome, "notification-approved");
        }
    }
    Task::none()
}

pub fn handle_navigate(ctx: &mut UpdateContext<'_>, command: PageCommand) {
    let moved = match command {
        PageCommand::Previous => ctx.comparison.advance(-1),
        PageCommand::Next => ctx.comparison.advance(1),
        PageCommand::First => ctx.comparison.first_page(),
        PageCommand::Last => ctx.comparison.last_page(),
    };
    if moved {
        tracing::trace!(?command, page = ctx.comparison.navigation().current.get(), "page changed");
    }
}

fn handle_rerun(ctx: &mut UpdateContext<'_>) {
    tracing::info!("clearing both panes");
    ctx.comparison.reset();
    ctx.pages.clear();
    *ctx.current_file = None;
}

fn report_sink_outcome(
    ctx: &mut UpdateContext<'_>,
    outcome: Option<Result<(), SinkError>>,
    success_key: &str,
) {
    match outcome {
        None => tracing::debug!("no document loaded; action ignored"),
        Some(Ok(())) => ctx.notifications.push(Notification::info(success_key)),
        Some(Err(err)) => {
            tracing::error!(error = %err, "document sink failed");
            ctx.notifications
                .push(Notification::error("notification-sink-error"));
        }
    }
}

/// Opens the native file picker filtered to PDF files.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("PDF", &["pdf", "PDF"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => read_document(path),
        None => Task::none(),
    }
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !is_pdf_path(&path) {
        tracing::warn!(path = %path.display(), "ignoring dropped file that is not a PDF");
        ctx.notifications
            .push(Notification::warning("notification-not-a-pdf"));
        return Task::none();
    }
    read_document(path)
}

/// Reads the whole file off the UI thread.
pub fn read_document(path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "reading document");
    let read_path = path.clone();
    Task::perform(
        async move {
            tokio::fs::read(&read_path)
                .await
                .map(FileBytes::new)
                .map_err(Error::from)
        },
        move |result| Message::DocumentRead { path, result },
    )
}

/// Parses the bytes and installs the document in both panes.
///
/// Any failure leaves the current comparison untouched.
pub fn handle_document_read(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<FileBytes, Error>,
) {
    let bytes = match result {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to read document");
            ctx.notifications.push(Notification::error(err.i18n_key()));
            return;
        }
    };

    let Some(parser) = ctx.parser else {
        tracing::error!("no PDF engine bound; cannot open document");
        ctx.notifications
            .push(Notification::error("notification-engine-unavailable"));
        return;
    };

    match parser.parse(bytes.into_vec()) {
        Ok(document) => {
            let pages = document.page_count();
            ctx.comparison.install(document);
            ctx.notifications.clear_document_errors();
            ctx.notifications.push(
                Notification::success("notification-document-loaded")
                    .with_arg("name", display_name(path))
                    .with_arg("pages", pages.to_string()),
            );
            *ctx.current_file = Some(path.to_path_buf());
        }
        Err(err @ DocumentError::Empty) => {
            tracing::warn!(path = %path.display(), "document has no pages");
            ctx.notifications.push(Notification::warning(err.i18n_key()));
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to parse document");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) {
    let bounds = layout::surface_bounds_for_window(size);
    if bounds != ctx.comparison.surface_bounds() {
        tracing::debug!(%bounds, "surface bounds changed");
        ctx.comparison.set_surface_bounds(bounds);
    }
}

/// Runs the render effect and refreshes the image handles of the panes that
/// rendered successfully.
pub fn sync_renders(ctx: &mut UpdateContext<'_>) {
    let mut failed = false;

    for outcome in ctx.comparison.refresh() {
        match outcome.result {
            Ok(_) => {
                let surface = ctx.comparison.slot(outcome.slot).surface();
                if let Some(bitmap) = surface.bitmap() {
                    let handle =
                        Handle::from_rgba(bitmap.width(), bitmap.height(), bitmap.as_raw().clone());
                    ctx.pages.set(
                        outcome.slot,
                        PageImage {
                            handle,
                            size: surface.pixel_size(),
                        },
                    );
                }
            }
            Err(_) => failed = true,
        }
    }

    // Both panes show the same page, so one toast covers both.
    if failed {
        ctx.notifications
            .push(Notification::error("notification-render-error"));
    }
}

fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
