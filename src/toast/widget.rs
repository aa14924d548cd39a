// SPDX-License-Identifier: MPL-2.0
//! The toast widget and its slide-in / hold / slide-out state machine.
//!
//! ```text
//!            notify                 entry leg done             hold timer / click
//!  Hidden ───────────▶ Entering ──────────────────▶ Holding ─────────────────────▶ Exiting
//!    ▲                  │  ▲                                                          │
//!    │                  │  └──────────── notify (from any phase) ◀───────────────────┤
//!    │                  └──── click ──────────────────────────────────────▶ Exiting  │
//!    └────────────────────────────────── exit leg done ◀──────────────────────────────┘
//! ```
//!
//! All methods run on the event-loop thread. Time is injected through the
//! `*_at` variants and [`ToastWidget::tick`]; the Iced glue ([`update`],
//! [`subscription`]) feeds real frame instants.
//!
//! [`update`]: ToastWidget::update
//! [`subscription`]: ToastWidget::subscription

use super::animation::{Easing, GeometryAnimation};
use super::category::Category;
use super::geometry::Rect;
use super::hold_timer::HoldTimer;
use super::icons::IconCache;
use super::paint::{self, PaintPlan};
use crate::config::{
    DEFAULT_HOLD_MS, DEFAULT_TOAST_WIDTH, DEFAULT_TOAST_Y, HOLD_POLL_INTERVAL_MS,
    SLIDE_DURATION_MS, TOAST_HEIGHT, VIEWPORT_MARGIN,
};
use iced::widget::{mouse_area, pin, text, Container};
use iced::{time, window, Element, Length, Point, Subscription};
use std::time::{Duration, Instant};

/// Hold duration used when the caller has no preference.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(DEFAULT_HOLD_MS);

/// Duration of each slide leg.
pub const SLIDE_DURATION: Duration = Duration::from_millis(SLIDE_DURATION_MS);

const HOLD_POLL_INTERVAL: Duration = Duration::from_millis(HOLD_POLL_INTERVAL_MS);

/// Messages the widget handles.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame or hold-timer poll.
    Frame(Instant),
    /// Left mouse button pressed on the card.
    Pressed,
}

/// Lifecycle phase of the current notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Sliding in from above the viewport.
    Entering,
    /// At rest, waiting for the hold timer.
    Holding,
    /// Sliding back out.
    Exiting,
}

impl Phase {
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Entering | Phase::Exiting)
    }
}

/// How often the widget needs [`Message::Frame`] in its current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Every window frame, while a slide leg runs.
    Frames,
    /// A fixed poll interval, while holding.
    Poll(Duration),
    /// Nothing to advance.
    Idle,
}

/// Resolved construction-time settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSettings {
    pub width: i32,
    /// Hold used by callers that do not pass their own.
    pub hold: Duration,
    pub easing: Easing,
    /// Explicit resting x; right-aligned in the viewport when `None`.
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_TOAST_WIDTH,
            hold: DEFAULT_HOLD,
            easing: Easing::default(),
            x: None,
            y: None,
        }
    }
}

/// A single-slot toast notification.
///
/// Only one notification is in flight at a time: calling [`notify`] while a
/// previous one is still visible replaces its text, category and hold, and
/// restarts the entry leg.
///
/// [`notify`]: ToastWidget::notify
#[derive(Debug)]
pub struct ToastWidget {
    x: i32,
    y: i32,
    width: i32,
    message: String,
    category: Category,
    hold: Duration,
    default_hold: Duration,
    phase: Phase,
    visible: bool,
    /// Rectangle the card is drawn at.
    geometry: Rect,
    animation: GeometryAnimation,
    hold_timer: HoldTimer,
    icons: IconCache,
}

impl ToastWidget {
    /// Creates a hidden toast right-aligned in a viewport of the given width,
    /// loading the category icons.
    #[must_use]
    pub fn new(viewport_width: i32) -> Self {
        Self::with_icons(viewport_width, IconCache::load())
    }

    /// Creates a hidden toast with default settings and the given icons.
    #[must_use]
    pub fn with_icons(viewport_width: i32, icons: IconCache) -> Self {
        Self::with_settings(viewport_width, &ToastSettings::default(), icons)
    }

    #[must_use]
    pub fn with_settings(viewport_width: i32, settings: &ToastSettings, icons: IconCache) -> Self {
        let width = settings.width;
        let x = settings
            .x
            .unwrap_or_else(|| right_aligned_x(viewport_width, width));
        let y = settings.y.unwrap_or(DEFAULT_TOAST_Y);

        Self {
            x,
            y,
            width,
            message: String::new(),
            category: Category::default(),
            hold: settings.hold,
            default_hold: settings.hold,
            phase: Phase::Hidden,
            visible: false,
            geometry: Rect::new(x, y, width, TOAST_HEIGHT),
            animation: GeometryAnimation::new(SLIDE_DURATION, settings.easing),
            hold_timer: HoldTimer::new(),
            icons,
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Moves the resting position.
    ///
    /// The card follows immediately unless a slide leg is running; in that case
    /// the new position is picked up by the next leg.
    pub fn set_position(&mut self, position: Point<i32>) {
        self.x = position.x;
        self.y = position.y;
        self.reflow();
    }

    /// Changes the card width. Same reflow rules as [`set_position`].
    ///
    /// [`set_position`]: ToastWidget::set_position
    pub fn set_dialog_width(&mut self, width: i32) {
        self.width = width;
        self.reflow();
    }

    /// Right-aligns the resting x against the viewport width.
    ///
    /// Leaves y, the width and the drawn rectangle untouched; call it before
    /// the next notification, e.g. when the window is resized.
    pub fn adjust_in_viewport(&mut self, viewport_width: i32) {
        self.x = right_aligned_x(viewport_width, self.width);
    }

    fn reflow(&mut self) {
        match self.phase {
            Phase::Hidden => self.geometry = self.resting_rect(),
            Phase::Holding => {
                self.geometry = self.resting_rect();
                self.configure_exit();
            }
            Phase::Entering | Phase::Exiting => {}
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Shows `text` with the icon for `category`, holding it for `hold` once
    /// it has slid in.
    pub fn notify(&mut self, text: impl Into<String>, category: Category, hold: Duration) {
        self.notify_at(text, category, hold, Instant::now());
    }

    /// [`notify`](ToastWidget::notify) with the hold configured at construction.
    pub fn notify_default(&mut self, text: impl Into<String>, category: Category) {
        self.notify(text, category, self.default_hold);
    }

    pub fn notify_at(
        &mut self,
        text: impl Into<String>,
        category: Category,
        hold: Duration,
        now: Instant,
    ) {
        self.message = text.into();
        self.category = category;
        self.hold = hold;
        self.hold_timer.cancel();

        let offscreen = self.offscreen_rect();
        self.animation
            .configure(offscreen, self.resting_rect(), SLIDE_DURATION);
        self.animation.start(now);
        self.geometry = offscreen;
        self.phase = Phase::Entering;
        self.visible = true;

        tracing::debug!(
            category = ?category,
            hold_ms = hold.as_millis(),
            "toast entering"
        );
    }

    /// Starts the exit leg right away, cancelling any pending hold.
    ///
    /// Returns `false` when the card is already hidden or leaving.
    pub fn dismiss(&mut self) -> bool {
        self.dismiss_at(Instant::now())
    }

    pub fn dismiss_at(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Hidden | Phase::Exiting => false,
            Phase::Entering | Phase::Holding => {
                self.hold_timer.cancel();
                self.start_exit(now);
                tracing::debug!("toast dismissed");
                true
            }
        }
    }

    /// Advances the animation and hold timer to `now`.
    ///
    /// Every leg or timer that completed since the last tick is handled in
    /// order, so a late tick cannot skip a transition. Returns the new phase
    /// if it changed.
    pub fn tick(&mut self, now: Instant) -> Option<Phase> {
        let before = self.phase;

        loop {
            match self.phase {
                Phase::Entering | Phase::Exiting => match self.animation.poll_finished(now) {
                    Some(finished_at) => self.on_animation_finished(finished_at),
                    None => break,
                },
                Phase::Holding => match self.hold_timer.poll(now) {
                    Some(deadline) => self.start_exit(deadline),
                    None => break,
                },
                Phase::Hidden => break,
            }
        }

        if self.phase.is_animating() {
            self.geometry = self.animation.value_at(now);
        }

        (self.phase != before).then_some(self.phase)
    }

    /// Completion handler, called once per finished slide leg.
    fn on_animation_finished(&mut self, finished_at: Instant) {
        self.geometry = self.animation.end_value();

        if self.phase == Phase::Entering {
            self.configure_exit();
            self.hold_timer.arm(finished_at, self.hold);
            self.phase = Phase::Holding;
            tracing::debug!(hold_ms = self.hold.as_millis(), "toast holding");
        } else {
            self.phase = Phase::Hidden;
            self.visible = false;
            tracing::debug!("toast hidden");
        }
    }

    fn configure_exit(&mut self) {
        self.animation
            .configure(self.resting_rect(), self.offscreen_rect(), SLIDE_DURATION);
    }

    fn start_exit(&mut self, at: Instant) {
        self.configure_exit();
        self.animation.start(at);
        self.phase = Phase::Exiting;
        tracing::debug!("toast exiting");
    }

    // =========================================================================
    // Iced glue
    // =========================================================================

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Frame(now) => {
                self.tick(now);
            }
            Message::Pressed => {
                self.dismiss();
            }
        }
    }

    /// Frames while a leg runs, a short poll while holding, nothing when hidden.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.pacing() {
            Pacing::Frames => window::frames().map(Message::Frame),
            Pacing::Poll(interval) => time::every(interval).map(Message::Frame),
            Pacing::Idle => Subscription::none(),
        }
    }

    #[must_use]
    pub fn pacing(&self) -> Pacing {
        match self.phase {
            Phase::Entering | Phase::Exiting => Pacing::Frames,
            Phase::Holding => Pacing::Poll(HOLD_POLL_INTERVAL),
            Phase::Hidden => Pacing::Idle,
        }
    }

    /// Renders the card at its current geometry. Meant to be stacked on top
    /// of the host's content.
    pub fn view(&self) -> Element<'_, Message> {
        if !self.visible {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let card = paint::card(&self.paint_plan());
        pin(mouse_area(card).on_press(Message::Pressed))
            .x(self.geometry.x as f32)
            .y(self.geometry.y as f32)
            .into()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Paint plan for the card's current size, category and message.
    #[must_use]
    pub fn paint_plan(&self) -> PaintPlan<'_> {
        paint::plan(
            self.geometry.width,
            self.geometry.height,
            self.category,
            &self.message,
            &self.icons,
        )
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` from `notify` until the exit leg starts.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Holding)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Rectangle the card is currently drawn at.
    #[must_use]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    #[must_use]
    pub fn resting_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, TOAST_HEIGHT)
    }

    /// Start of the entry leg and end of the exit leg: just above the viewport.
    #[must_use]
    pub fn offscreen_rect(&self) -> Rect {
        Rect::new(self.x, -TOAST_HEIGHT, self.width, TOAST_HEIGHT)
    }

    #[must_use]
    pub fn position(&self) -> Point<i32> {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn hold_duration(&self) -> Duration {
        self.hold
    }

    #[must_use]
    pub fn animation(&self) -> &GeometryAnimation {
        &self.animation
    }

    /// Deadline of the pending hold, if armed.
    #[must_use]
    pub fn hold_deadline(&self) -> Option<Instant> {
        self.hold_timer.deadline()
    }
}

fn right_aligned_x(viewport_width: i32, width: i32) -> i32 {
    viewport_width.saturating_sub(width.saturating_add(VIEWPORT_MARGIN))
}
