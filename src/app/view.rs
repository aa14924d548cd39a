// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::toast::{Category, ToastWidget};
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

const SPACING: f32 = 12.0;

/// Width change applied by the narrower/wider buttons.
pub const WIDTH_STEP: i32 = 40;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub draft: &'a str,
    pub toast: &'a ToastWidget,
}

/// Renders the form with the toast stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let input = text_input(&i18n.tr("demo-message-placeholder"), ctx.draft)
        .on_input(Message::MessageEdited)
        .on_submit(Message::Notify(Category::Success))
        .width(Length::Fixed(360.0));

    let categories = Row::new()
        .spacing(SPACING)
        .push(labeled_button(i18n, "demo-button-success", Message::Notify(Category::Success)))
        .push(labeled_button(i18n, "demo-button-error", Message::Notify(Category::Error)))
        .push(labeled_button(i18n, "demo-button-warning", Message::Notify(Category::Warning)));

    let width_label = ctx.toast.width().to_string();
    let placement = Row::new()
        .spacing(SPACING)
        .align_y(alignment::Vertical::Center)
        .push(labeled_button(i18n, "demo-button-top-left", Message::MoveTopLeft))
        .push(labeled_button(i18n, "demo-button-align-right", Message::AlignRight))
        .push(labeled_button(i18n, "demo-button-narrower", Message::ChangeWidth(-WIDTH_STEP)))
        .push(labeled_button(i18n, "demo-button-wider", Message::ChangeWidth(WIDTH_STEP)))
        .push(Text::new(
            i18n.tr_with_args("demo-width-label", &[("width", width_label.as_str())]),
        ));

    let form = Column::new()
        .spacing(SPACING * 1.5)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("demo-heading")).size(24))
        .push(input)
        .push(categories)
        .push(placement);

    let content = Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(ctx.toast.view().map(Message::Toast))
        .into()
}

fn labeled_button<'a>(i18n: &I18n, key: &str, message: Message) -> Element<'a, Message> {
    button(Text::new(i18n.tr(key))).on_press(message).into()
}
