// SPDX-License-Identifier: MPL-2.0
//! Sliding toast notification widget.
//!
//! A toast slides down from above the viewport, rests for a hold duration,
//! then slides back out. A left click on the card dismisses it early.
//!
//! # Components
//!
//! - [`widget`] - `ToastWidget` state machine and its Iced view/subscription
//! - [`animation`] - `GeometryAnimation` interpolation driver and easing curves
//! - [`hold_timer`] - cancellable one-shot delay between the two legs
//! - [`icons`] - per-widget cache of rasterized category icons
//! - [`paint`] - paint plan and card widgets
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::toast::{Category, ToastWidget, DEFAULT_HOLD};
//!
//! let mut toast = ToastWidget::new(viewport_width);
//! toast.notify("Image saved", Category::Success, DEFAULT_HOLD);
//!
//! // In the host's view, stack the toast over the content
//! stack![content, toast.view().map(Message::Toast)]
//! ```

pub mod animation;
mod category;
pub mod geometry;
pub mod hold_timer;
pub mod icons;
pub mod paint;
pub mod widget;

pub use animation::{Easing, GeometryAnimation};
pub use category::Category;
pub use geometry::Rect;
pub use icons::IconCache;
pub use widget::{Message, Pacing, Phase, ToastSettings, ToastWidget, DEFAULT_HOLD, SLIDE_DURATION};
