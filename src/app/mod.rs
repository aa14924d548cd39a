// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single toast.
//!
//! The `App` struct wires together localization, persisted settings and the
//! [`ToastWidget`], and translates form interactions into toast operations.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, MAX_TOAST_WIDTH, MIN_TOAST_WIDTH};
use crate::i18n::fluent::I18n;
use crate::toast::{Category, IconCache, ToastWidget};
use iced::{window, Element, Point, Subscription, Task};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    toast: ToastWidget,
    /// Text typed into the notification field.
    draft: String,
    /// Logical width of the window, used to right-align the toast.
    viewport_width: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toast_phase", &self.toast.phase())
            .field("viewport_width", &self.viewport_width)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and translations, then shows the startup message and any
    /// settings warning as toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut settings = config.toast_settings();
        if let Some(width) = flags.width {
            settings.width = width.clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH);
        }
        if let Some(hold_ms) = flags.hold_ms {
            settings.hold = Duration::from_millis(hold_ms);
        }

        let viewport_width = WINDOW_DEFAULT_WIDTH as i32;
        let toast = ToastWidget::with_settings(viewport_width, &settings, IconCache::load());
        tracing::info!(
            locale = %i18n.current_locale(),
            width = settings.width,
            hold_ms = settings.hold.as_millis(),
            "starting"
        );

        let mut app = App {
            draft: i18n.tr("demo-default-message"),
            i18n,
            toast,
            viewport_width,
        };

        let category = flags.startup_category.unwrap_or_default();
        match (config_warning, flags.startup_message) {
            (Some(key), startup_message) => {
                if let Some(text) = startup_message {
                    tracing::warn!(message = %text, "startup message not shown, settings warning takes the toast");
                }
                let text = app.i18n.tr(&key);
                app.toast.notify_default(text, Category::Warning);
            }
            (None, Some(text)) => app.toast.notify_default(text, category),
            (None, None) => {}
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => self.toast.update(toast_message),
            Message::MessageEdited(text) => self.draft = text,
            Message::Notify(category) => {
                self.toast.notify_default(self.draft.clone(), category);
            }
            Message::MoveTopLeft => self.toast.set_position(Point::new(
                config::VIEWPORT_MARGIN,
                config::DEFAULT_TOAST_Y,
            )),
            Message::AlignRight => self.toast.adjust_in_viewport(self.viewport_width),
            Message::ChangeWidth(delta) => {
                let width = (self.toast.width() + delta).clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH);
                self.toast.set_dialog_width(width);
            }
            Message::WindowResized(size) => {
                #[allow(clippy::cast_possible_truncation)]
                let width = size.width.round() as i32;
                self.viewport_width = width;
                self.toast.adjust_in_viewport(width);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            draft: &self.draft,
            toast: &self.toast,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.toast.subscription().map(Message::Toast),
            subscription::create_event_subscription(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Phase;

    fn boot(flags: Flags) -> (App, tempfile::TempDir) {
        let config_dir = tempfile::tempdir().expect("failed to create temp dir");
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(config_dir.path().to_string_lossy().into_owned()),
            ..flags
        });
        (app, config_dir)
    }

    fn app() -> (App, tempfile::TempDir) {
        boot(Flags::default())
    }

    #[test]
    fn starts_hidden_without_startup_message() {
        let (app, _dir) = app();
        assert_eq!(app.toast.phase(), Phase::Hidden);
        assert_eq!(app.draft, "Saved");
    }

    #[test]
    fn startup_message_is_shown_as_success() {
        let (app, _dir) = boot(Flags {
            startup_message: Some("Ready".to_string()),
            ..Flags::default()
        });
        assert_eq!(app.toast.phase(), Phase::Entering);
        assert_eq!(app.toast.message(), "Ready");
        assert_eq!(app.toast.category(), Category::Success);
    }

    #[test]
    fn startup_category_flag_selects_icon() {
        let (app, _dir) = boot(Flags {
            startup_message: Some("Disk almost full".to_string()),
            startup_category: Some(Category::Warning),
            ..Flags::default()
        });
        assert_eq!(app.toast.category(), Category::Warning);
        assert_eq!(app.toast.paint_plan().text, "Disk almost full");
    }

    #[test]
    fn settings_warning_takes_precedence_over_startup_message() {
        let config_dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(config_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("failed to write corrupt config");

        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            config_dir: Some(config_dir.path().to_string_lossy().into_owned()),
            startup_message: Some("Ready".to_string()),
            ..Flags::default()
        });

        assert_eq!(app.toast.phase(), Phase::Entering);
        assert_eq!(app.toast.category(), Category::Warning);
        assert_eq!(app.toast.message(), app.i18n.tr(config::LOAD_ERROR_KEY));
    }

    #[test]
    fn notify_uses_draft_text() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::MessageEdited("Upload failed".to_string()));
        let _ = app.update(Message::Notify(Category::Error));

        assert_eq!(app.toast.phase(), Phase::Entering);
        assert_eq!(app.toast.message(), "Upload failed");
        assert_eq!(app.toast.category(), Category::Error);
    }

    #[test]
    fn resize_realigns_toast() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::WindowResized(iced::Size::new(1000.0, 600.0)));
        assert_eq!(app.toast.position().x, 1000 - (app.toast.width() + 50));
    }

    #[test]
    fn width_changes_are_clamped() {
        let (mut app, _dir) = app();
        for _ in 0..100 {
            let _ = app.update(Message::ChangeWidth(-view::WIDTH_STEP));
        }
        assert_eq!(app.toast.width(), MIN_TOAST_WIDTH);
    }

    #[test]
    fn move_top_left_sets_resting_position() {
        let (mut app, _dir) = app();
        let _ = app.update(Message::MoveTopLeft);
        assert_eq!(app.toast.position(), Point::new(50, 50));
    }
}
