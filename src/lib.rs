// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is a sliding toast notification widget built for the Iced GUI framework.
//!
//! The [`toast`] module holds the widget itself; [`app`] is a small demo
//! application hosting one toast, localized with Fluent and configured from a
//! `settings.toml` file.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod toast;
