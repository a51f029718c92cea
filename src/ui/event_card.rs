// SPDX-License-Identifier: MPL-2.0
//! One event in the listing: cover, title, live countdown and date.

use crate::browser::CountdownClock;
use crate::domain::{Event, EventId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::{ThumbnailState, Thumbnails};
use iced::widget::{button, image, text, Column, Container, Row};
use iced::{alignment, Color, ContentFit, Element, Length};

/// Cover image or a placeholder while it loads or after it failed.
pub fn cover<'a, Message: 'a>(
    i18n: &I18n,
    thumbnails: &Thumbnails,
    url: &str,
    height: f32,
) -> Element<'a, Message> {
    match thumbnails.state(url) {
        Some(ThumbnailState::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        state => {
            let key = if matches!(state, Some(ThumbnailState::Failed)) {
                "image-unavailable"
            } else {
                "image-loading"
            };
            Container::new(text(i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::image_placeholder)
                .into()
        }
    }
}

pub fn view<'a>(
    event: &'a Event,
    clock: &CountdownClock,
    thumbnails: &Thumbnails,
    i18n: &I18n,
) -> Element<'a, EventId> {
    let title = text(event.title.as_str())
        .size(typography::TITLE_SM)
        .color(palette::WHITE)
        .width(Length::Fill);
    let countdown = text(clock.display(event.expires_at))
        .size(typography::BODY)
        .color(Color {
            a: 0.9,
            ..palette::WHITE
        });
    let date = text(i18n.format_date(event.date))
        .size(typography::BODY)
        .color(Color {
            a: opacity::TEXT_SECONDARY,
            ..palette::WHITE
        });

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(countdown);

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(date);

    let content = Column::new()
        .push(cover(i18n, thumbnails, &event.cover_url, sizing::CARD_COVER_HEIGHT))
        .push(Container::new(body).padding(spacing::MD));

    button(content)
        .on_press(event.id.clone())
        .padding(0)
        .width(Length::Fill)
        .clip(true)
        .style(styles::button::card)
        .into()
}
