// SPDX-License-Identifier: MPL-2.0
//! Hero banner at the top of the listing.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container};
use iced::{alignment, Color, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = text(i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .color(palette::WHITE);
    let subtitle = text(i18n.tr("hero-subtitle"))
        .size(typography::TITLE_MD)
        .color(Color {
            a: 0.9,
            ..palette::WHITE
        });
    let tagline = text(i18n.tr("hero-tagline"))
        .size(typography::BODY)
        .color(Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(tagline);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::hero)
        .into()
}
