// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Category};
use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(toast::Message),
    /// The notification text field changed.
    MessageEdited(String),
    /// Show the current text with the given category.
    Notify(Category),
    /// Move the toast's resting position to the top-left corner.
    MoveTopLeft,
    /// Right-align the toast in the window again.
    AlignRight,
    /// Grow or shrink the toast by the given number of pixels.
    ChangeWidth(i32),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_NOTIFY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Toast width override, in pixels.
    pub width: Option<i32>,
    /// Hold duration override, in milliseconds.
    pub hold_ms: Option<u64>,
    /// Message shown as a toast right after startup.
    pub startup_message: Option<String>,
    /// Category of the startup toast; success when absent.
    pub startup_category: Option<Category>,
}
