// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle of a toast, driven with synthetic frame instants.

use iced::Point;
use iced_notify::toast::{Category, IconCache, Phase, Rect, ToastWidget, SLIDE_DURATION};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn saved_notification_full_cycle() {
    let t0 = Instant::now();
    let mut toast = ToastWidget::new(1280);
    let resting = toast.resting_rect();

    toast.notify_at("Saved", Category::Success, ms(200), t0);
    let plan = toast.paint_plan();
    assert_eq!(plan.icon.as_ref().map(|icon| icon.key), Some("success.png"));
    assert_eq!(plan.text, "Saved");
    assert_eq!(toast.animation().end_value(), resting);
    assert!(toast.is_visible());

    // Entry leg runs for the fixed slide duration.
    assert_eq!(toast.tick(t0 + ms(499)), None);
    assert_eq!(toast.tick(t0 + SLIDE_DURATION), Some(Phase::Holding));
    assert_eq!(toast.geometry(), resting);

    // Hold for exactly 200ms.
    assert_eq!(toast.tick(t0 + ms(650)), None);
    assert_eq!(toast.geometry(), resting);
    assert_eq!(toast.tick(t0 + ms(700)), Some(Phase::Exiting));
    assert_eq!(toast.animation().start_value(), resting);
    assert_eq!(
        toast.animation().end_value(),
        Rect::new(resting.x, -100, resting.width, 100)
    );

    // Exit leg, then hidden.
    assert_eq!(toast.tick(t0 + ms(1200)), Some(Phase::Hidden));
    assert!(!toast.is_visible());
    assert!(!toast.is_showing());
}

#[test]
fn click_dismissal_during_hold() {
    let t0 = Instant::now();
    let mut toast = ToastWidget::with_icons(800, IconCache::empty());
    toast.notify_at("Uploading", Category::Warning, ms(5_000), t0);
    toast.tick(t0 + ms(500));
    assert!(toast.is_showing());

    assert!(toast.dismiss_at(t0 + ms(800)));
    assert!(!toast.is_showing());
    assert_eq!(toast.tick(t0 + ms(1300)), Some(Phase::Hidden));

    // The cancelled 5s hold never brings the card back.
    assert_eq!(toast.tick(t0 + ms(6_000)), None);
    assert!(!toast.is_visible());
}

#[test]
fn reconfiguration_between_notifications() {
    let t0 = Instant::now();
    let mut toast = ToastWidget::with_icons(800, IconCache::empty());

    toast.set_position(Point::new(10, 20));
    toast.set_dialog_width(400);
    toast.notify_at("Moved", Category::Error, ms(100), t0);

    assert_eq!(toast.animation().start_value(), Rect::new(10, -100, 400, 100));
    assert_eq!(toast.animation().end_value(), Rect::new(10, 20, 400, 100));

    toast.tick(t0 + ms(2_000));
    assert_eq!(toast.phase(), Phase::Hidden);

    toast.adjust_in_viewport(1024);
    assert_eq!(toast.position(), Point::new(1024 - 450, 20));
    assert_eq!(toast.width(), 400);
}
