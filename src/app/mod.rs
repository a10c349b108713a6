// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the comparison screen.
//!
//! The `App` struct wires together the comparison state, the PDF engine,
//! localization and toasts, and translates messages into side effects like
//! file reads and page renders.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{FileBytes, Flags, Message, PageCommand};

use crate::app::config::Config;
use crate::application::comparison::{ComparisonState, Slot};
use crate::application::port::{DocumentParser, DocumentSink, LogSink};
use crate::domain::document::PixelSize;
use crate::i18n::fluent::I18n;
use crate::infrastructure::PdfiumEngine;
use crate::ui::comparison::layout;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Smallest pane surface the window may shrink to.
const MIN_WINDOW_SURFACE_EDGE: u32 = 200;

/// A rendered page ready for display.
#[derive(Debug, Clone)]
pub struct PageImage {
    pub handle: Handle,
    pub size: PixelSize,
}

/// Display handles for both panes.
///
/// A pane keeps its last good image when a later render fails.
#[derive(Debug, Clone, Default)]
pub struct PageImages {
    original: Option<PageImage>,
    processed: Option<PageImage>,
}

impl PageImages {
    pub fn get(&self, slot: Slot) -> Option<&PageImage> {
        match slot {
            Slot::Original => self.original.as_ref(),
            Slot::Processed => self.processed.as_ref(),
        }
    }

    pub fn set(&mut self, slot: Slot, image: PageImage) {
        match slot {
            Slot::Original => self.original = Some(image),
            Slot::Processed => self.processed = Some(image),
        }
    }

    pub fn clear(&mut self) {
        self.original = None;
        self.processed = None;
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    comparison: ComparisonState,
    pages: PageImages,
    /// `None` when the PDF engine could not be bound at startup.
    parser: Option<Box<dyn DocumentParser>>,
    sink: Box<dyn DocumentSink>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    current_file: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_document", &self.comparison.has_document())
            .field("engine_bound", &self.parser.is_some())
            .field("current_file", &self.current_file)
            .finish()
    }
}

/// Builds the window settings around the configured pane surface.
pub fn window_settings(surface: PixelSize) -> window::Settings {
    window::Settings {
        size: layout::window_size_for_surface(surface),
        min_size: Some(layout::window_size_for_surface(PixelSize::new(
            MIN_WINDOW_SURFACE_EDGE,
            MIN_WINDOW_SURFACE_EDGE,
        ))),
        ..window::Settings::default()
    }
}

/// Startup inputs handed to [`App::new`].
#[derive(Debug, Default)]
struct Boot {
    flags: Flags,
    config: Config,
    /// i18n key of a config load warning.
    config_warning: Option<String>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load_or_create();
    let surface = config.display.surface_bounds();

    // iced 0.14 wants an `Fn` boot closure; the state is consumed on the first call.
    let boot_state = RefCell::new(Some(Boot {
        flags,
        config,
        config_warning,
    }));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(surface))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Assembles the application from already-built parts.
    pub fn from_parts(
        i18n: I18n,
        surface: PixelSize,
        parser: Option<Box<dyn DocumentParser>>,
        sink: Box<dyn DocumentSink>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            i18n,
            comparison: ComparisonState::new(surface),
            pages: PageImages::default(),
            parser,
            sink,
            theme_mode,
            notifications: notifications::Manager::new(),
            current_file: None,
        }
    }

    /// Binds the PDF engine and optionally starts reading the file passed on
    /// the command line.
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            config,
            config_warning,
        } = boot;
        let i18n = I18n::new(flags.lang.clone(), &config);

        let library_path = flags
            .pdfium_path
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.pdf.library_path.clone());
        let (parser, engine_warning) = match PdfiumEngine::bind(library_path.as_deref()) {
            Ok(engine) => (Some(Box::new(engine) as Box<dyn DocumentParser>), None),
            Err(err) => {
                tracing::error!(error = %err, "PDF engine unavailable");
                (None, Some(err.i18n_key()))
            }
        };

        let mut app = Self::from_parts(
            i18n,
            config.display.surface_bounds(),
            parser,
            Box::new(LogSink),
            config.general.theme_mode,
        );

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(key) = engine_warning {
            app.notifications.push(Notification::error(key));
        }

        let task = match flags.file_path {
            Some(path) => update::read_document(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.current_file.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {app_name}", name.to_string_lossy()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            comparison: &mut self.comparison,
            pages: &mut self.pages,
            parser: self.parser.as_deref(),
            sink: self.sink.as_ref(),
            notifications: &mut self.notifications,
            current_file: &mut self.current_file,
        };

        let task = match message {
            Message::Comparison(message) => update::handle_comparison_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Navigate(command) => {
                update::handle_navigate(&mut ctx, command);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => update::handle_open_file_dialog_result(path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::DocumentRead { path, result } => {
                update::handle_document_read(&mut ctx, &path, result);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        };

        update::sync_renders(&mut ctx);
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            bounds: self.comparison.surface_bounds(),
            navigation: self.comparison.navigation(),
            pages: &self.pages,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{DocumentHandle, SinkError};
    use crate::error::Error;
    use crate::test_utils::FakeParser;
    use crate::ui::comparison::Message as ComparisonMessage;
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;

    const SURFACE: PixelSize = PixelSize::new(85, 110);

    #[derive(Default)]
    struct CountingSink {
        submitted: Rc<Cell<usize>>,
        fail: bool,
    }

    impl DocumentSink for CountingSink {
        fn submit(&self, _document: &dyn DocumentHandle) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Unavailable("offline".into()));
            }
            self.submitted.set(self.submitted.get() + 1);
            Ok(())
        }

        fn approve(&self, _document: &dyn DocumentHandle) -> Result<(), SinkError> {
            Ok(())
        }
    }

    fn english() -> I18n {
        let config = Config::default();
        I18n::new(Some("en-US".to_string()), &config)
    }

    fn app_with(pages: u16, sink: Box<dyn DocumentSink>) -> App {
        App::from_parts(
            english(),
            SURFACE,
            Some(Box::new(FakeParser { pages })),
            sink,
            ThemeMode::Light,
        )
    }

    fn load(app: &mut App, name: &str, bytes: &[u8]) {
        let _ = app.update(Message::DocumentRead {
            path: PathBuf::from(format!("/tmp/{name}")),
            result: Ok(FileBytes::new(bytes.to_vec())),
        });
    }

    fn has_toast(app: &App, key: &str) -> bool {
        app.notifications.visible().any(|n| n.message_key() == key)
    }

    #[test]
    fn title_shows_app_name_when_no_document_loaded() {
        let app = app_with(3, Box::new(LogSink));
        assert_eq!(app.title(), "PDF Compare");
    }

    #[test]
    fn loading_a_document_renders_both_panes() {
        let mut app = app_with(3, Box::new(LogSink));
        load(&mut app, "scan.pdf", b"%PDF-1.7");

        let navigation = app.comparison.navigation();
        assert!(navigation.has_document);
        assert_eq!(navigation.page_count, 3);
        assert_eq!(navigation.current.get(), 1);
        assert!(app.pages.get(Slot::Original).is_some());
        assert!(app.pages.get(Slot::Processed).is_some());
        assert_eq!(app.title(), "scan.pdf - PDF Compare");
        assert!(has_toast(&app, "notification-document-loaded"));
    }

    #[test]
    fn keyboard_paging_moves_both_panes() {
        let mut app = app_with(3, Box::new(LogSink));
        load(&mut app, "scan.pdf", b"%PDF-1.7");

        let _ = app.update(Message::Navigate(PageCommand::Next));
        assert_eq!(app.comparison.navigation().current.get(), 2);

        let _ = app.update(Message::Navigate(PageCommand::Last));
        assert_eq!(app.comparison.navigation().current.get(), 3);

        let _ = app.update(Message::Comparison(ComparisonMessage::NextPage));
        assert_eq!(app.comparison.navigation().current.get(), 3);

        let _ = app.update(Message::Navigate(PageCommand::First));
        assert_eq!(app.comparison.navigation().current.get(), 1);
    }

    #[test]
    fn unparseable_bytes_keep_the_previous_document() {
        let mut app = app_with(2, Box::new(LogSink));
        load(&mut app, "good.pdf", b"%PDF-1.7");
        load(&mut app, "bad.pdf", b"not a pdf");

        assert_eq!(app.comparison.navigation().page_count, 2);
        assert_eq!(app.title(), "good.pdf - PDF Compare");
        assert!(has_toast(&app, "notification-parse-error"));
    }

    #[test]
    fn empty_document_warns_and_loads_nothing() {
        let mut app = app_with(0, Box::new(LogSink));
        load(&mut app, "blank.pdf", b"%PDF-1.7");

        assert!(!app.comparison.has_document());
        assert!(has_toast(&app, "notification-empty-document"));
    }

    #[test]
    fn read_failure_shows_error() {
        let mut app = app_with(2, Box::new(LogSink));
        let _ = app.update(Message::DocumentRead {
            path: PathBuf::from("/tmp/missing.pdf"),
            result: Err(Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"))),
        });

        assert!(!app.comparison.has_document());
        assert!(has_toast(&app, "notification-read-error"));
    }

    #[test]
    fn missing_engine_reports_unavailable() {
        let mut app = App::from_parts(english(), SURFACE, None, Box::new(LogSink), ThemeMode::Light);
        load(&mut app, "scan.pdf", b"%PDF-1.7");

        assert!(!app.comparison.has_document());
        assert!(has_toast(&app, "notification-engine-unavailable"));
    }

    #[test]
    fn dropping_a_non_pdf_is_ignored() {
        let mut app = app_with(2, Box::new(LogSink));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/photo.png")));
        assert!(has_toast(&app, "notification-not-a-pdf"));
    }

    #[test]
    fn rerun_clears_both_panes() {
        let mut app = app_with(3, Box::new(LogSink));
        load(&mut app, "scan.pdf", b"%PDF-1.7");

        let _ = app.update(Message::Comparison(ComparisonMessage::Rerun));

        assert!(!app.comparison.has_document());
        assert!(app.pages.get(Slot::Original).is_none());
        assert!(app.pages.get(Slot::Processed).is_none());
        assert_eq!(app.title(), "PDF Compare");
    }

    #[test]
    fn send_reaches_the_sink_only_with_a_document() {
        let submitted = Rc::new(Cell::new(0));
        let sink = CountingSink {
            submitted: Rc::clone(&submitted),
            fail: false,
        };
        let mut app = app_with(1, Box::new(sink));

        let _ = app.update(Message::Comparison(ComparisonMessage::Send));
        assert_eq!(submitted.get(), 0);

        load(&mut app, "scan.pdf", b"%PDF-1.7");
        let _ = app.update(Message::Comparison(ComparisonMessage::Send));
        assert_eq!(submitted.get(), 1);
        assert!(has_toast(&app, "notification-sent"));
    }

    #[test]
    fn sink_failure_shows_error() {
        let sink = CountingSink {
            fail: true,
            ..CountingSink::default()
        };
        let mut app = app_with(1, Box::new(sink));
        load(&mut app, "scan.pdf", b"%PDF-1.7");

        let _ = app.update(Message::Comparison(ComparisonMessage::Send));
        assert!(has_toast(&app, "notification-sink-error"));
    }

    #[test]
    fn window_resize_updates_surface_bounds() {
        let mut app = app_with(1, Box::new(LogSink));
        let size = layout::window_size_for_surface(PixelSize::new(400, 500));
        let _ = app.update(Message::WindowResized(size));
        assert_eq!(app.comparison.surface_bounds(), PixelSize::new(400, 500));
    }

    #[test]
    fn page_images_clear_both_slots() {
        let mut images = PageImages::default();
        let image = PageImage {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            size: PixelSize::new(1, 1),
        };
        images.set(Slot::Original, image.clone());
        images.set(Slot::Processed, image);
        images.clear();
        assert!(images.get(Slot::Original).is_none());
        assert!(images.get(Slot::Processed).is_none());
    }

    #[test]
    fn startup_uses_the_config_loaded_by_run() {
        let mut config = Config::default();
        config.display.surface_width = 300;
        config.display.surface_height = 400;
        let boot = Boot {
            flags: Flags {
                lang: Some("en-US".to_string()),
                ..Flags::default()
            },
            config,
            config_warning: Some("notification-config-load-error".to_string()),
        };

        let (app, _task) = App::new(boot);

        assert_eq!(app.comparison.surface_bounds(), PixelSize::new(300, 400));
        assert!(has_toast(&app, "notification-config-load-error"));
    }

    #[test]
    fn window_settings_never_shrink_below_minimum() {
        let settings = window_settings(PixelSize::new(560, 720));
        let min = settings.min_size.unwrap_or_default();
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
