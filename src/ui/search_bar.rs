// SPDX-License-Identifier: MPL-2.0
//! Search field and button.
//!
//! The listing filters as the user types; pressing Enter or the button
//! re-applies the current text.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Container, Row};
use iced::{alignment, Background, Color, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub input: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Search(String),
}

pub fn update(message: Message, input: &mut String) -> Event {
    match message {
        Message::InputChanged(value) => {
            let changed = *input != value;
            *input = value;
            if changed {
                Event::Search(input.clone())
            } else {
                Event::None
            }
        }
        Message::Submitted => Event::Search(input.clone()),
    }
}

fn input_style(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: iced::Border::default(),
        icon: palette::WHITE,
        placeholder: Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        },
        value: palette::WHITE,
        selection: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::VIOLET
        },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let field = text_input(&ctx.i18n.tr("search-placeholder"), ctx.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submitted)
        .padding([spacing::SM, spacing::MD])
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(input_style);

    let submit = button(text(ctx.i18n.tr("search-button")).size(typography::BODY_LG))
        .on_press(Message::Submitted)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::search);

    let shell = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(field)
        .push(submit);

    Container::new(
        Container::new(shell)
            .padding(spacing::XS)
            .max_width(sizing::SEARCH_WIDTH)
            .style(styles::container::glass),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}
