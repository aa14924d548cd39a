// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast card.
//!
//! [`PaintPlan`] is computed from the widget's size, category and message
//! without touching any state. [`card`] turns a plan into Iced widgets: a white
//! rounded rectangle, the category icon on the left, and the message centered
//! and word-wrapped in the remaining space.

use super::category::Category;
use super::geometry::Rect;
use super::icons::{Icon, IconCache};
use crate::config::{CORNER_RADIUS, ICON_OFFSET_X, TEXT_OFFSET_X, TEXT_PADDING_Y};
use iced::widget::image::Image;
use iced::widget::{container, text, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Card background color.
pub const BACKGROUND: Color = Color::WHITE;

/// Message text color.
pub const TEXT_COLOR: Color = Color::BLACK;

/// Where the icon goes, relative to the card's top-left corner.
#[derive(Debug, Clone)]
pub struct IconPlacement<'a> {
    pub key: &'static str,
    pub x: i32,
    pub y: i32,
    pub icon: &'a Icon,
}

/// Everything needed to draw one frame of the card.
#[derive(Debug, Clone)]
pub struct PaintPlan<'a> {
    pub width: i32,
    pub height: i32,
    pub corner_radius: f32,
    pub background: Color,
    /// `None` when the category's icon is not in the cache.
    pub icon: Option<IconPlacement<'a>>,
    pub text: &'a str,
    /// Region the text is centered and wrapped in.
    pub text_region: Rect,
    pub text_color: Color,
}

/// Lays out a card of the given size.
#[must_use]
pub fn plan<'a>(
    width: i32,
    height: i32,
    category: Category,
    message: &'a str,
    icons: &'a IconCache,
) -> PaintPlan<'a> {
    let key = category.icon_key();
    let icon = icons.get(key).map(|icon| IconPlacement {
        key,
        x: ICON_OFFSET_X,
        y: height / 2 - icon_height(icon) / 2,
        icon,
    });

    PaintPlan {
        width,
        height,
        corner_radius: CORNER_RADIUS,
        background: BACKGROUND,
        icon,
        text: message,
        text_region: Rect::new(
            TEXT_OFFSET_X,
            TEXT_PADDING_Y,
            width.saturating_sub(TEXT_OFFSET_X),
            height - 2 * TEXT_PADDING_Y,
        ),
        text_color: TEXT_COLOR,
    }
}

#[allow(clippy::cast_possible_wrap)]
// Icon heights are pre-scaled to a small constant.
fn icon_height(icon: &Icon) -> i32 {
    icon.height() as i32
}

/// Builds the card widgets for a plan.
pub fn card<'a, Message: 'a>(plan: &PaintPlan<'a>) -> Element<'a, Message> {
    let icon_slot: Element<'a, Message> = match &plan.icon {
        Some(placement) => Image::new(placement.icon.handle().clone())
            .width(Length::Fixed(placement.icon.width() as f32))
            .height(Length::Fixed(placement.icon.height() as f32))
            .into(),
        None => text("").into(),
    };

    let icon_column = Container::new(icon_slot)
        .width(Length::Fixed(TEXT_OFFSET_X as f32))
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: ICON_OFFSET_X as f32,
        })
        .align_y(alignment::Vertical::Center);

    let message = Text::new(plan.text)
        .color(plan.text_color)
        .wrapping(text::Wrapping::Word)
        .width(Length::Fill)
        .height(Length::Fill)
        .center();

    let text_column = Container::new(message)
        .width(Length::Fixed(plan.text_region.width.max(0) as f32))
        .height(Length::Fill)
        .padding(Padding {
            top: plan.text_region.y as f32,
            right: 0.0,
            bottom: (plan.height - plan.text_region.y - plan.text_region.height) as f32,
            left: 0.0,
        });

    let background = plan.background;
    let radius = plan.corner_radius;

    Container::new(Row::new().push(icon_column).push(text_column))
        .width(Length::Fixed(plan.width as f32))
        .height(Length::Fixed(plan.height as f32))
        .style(move |theme: &Theme| card_style(theme, background, radius))
        .into()
}

/// Style function for the card: filled, rounded, no border stroke.
fn card_style(_theme: &Theme, background: Color, radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius.into(),
        },
        text_color: Some(TEXT_COLOR),
        ..Default::default()
    }
}
