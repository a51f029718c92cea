// SPDX-License-Identifier: MPL-2.0
//! Modal gallery of the active event's watermarked photos.

use crate::browser::{Photos, Session};
use crate::domain::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::event_card;
use crate::ui::styles;
use crate::ui::thumbnails::Thumbnails;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, opaque, scrollable, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub thumbnails: &'a Thumbnails,
    pub spinner_rotation: f32,
    pub viewport_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Download(Photo),
}

/// Number of tile columns that fit in a window `width` pixels wide.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // positive, bounded by the panel
pub fn columns_for_width(width: f32) -> usize {
    let panel = (width - 2.0 * spacing::MD).min(sizing::MODAL_MAX_WIDTH);
    let inner = panel - 2.0 * spacing::MD;
    let columns = ((inner + spacing::SM) / (sizing::TILE_WIDTH + spacing::SM)).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

fn tile<'a>(photo: &'a Photo, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let footer = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            text(ctx.i18n.tr("gallery-photo"))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(text(ctx.i18n.tr("gallery-download")).size(typography::BODY))
                .on_press(Message::Download(photo.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::download),
        );

    let content = Column::new()
        .push(event_card::cover(
            ctx.i18n,
            ctx.thumbnails,
            &photo.watermarked_url,
            sizing::TILE_IMAGE_HEIGHT,
        ))
        .push(Container::new(footer).padding(spacing::XS));

    Container::new(content)
        .width(Length::FillPortion(1))
        .clip(true)
        .style(styles::container::tile)
        .into()
}

fn tiles<'a>(photos: &'a [Photo], ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = columns_for_width(ctx.viewport_width);

    let rows = photos.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::SM);
        for photo in chunk {
            row = row.push(tile(photo, ctx));
        }
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        Element::from(row)
    });

    scrollable(
        Column::with_children(rows)
            .spacing(spacing::SM)
            .padding([0.0, spacing::MD]),
    )
    .height(Length::Fill)
    .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            text(ctx.session.event.title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::WHITE)
                .width(Length::Fill),
        )
        .push(
            button(text(ctx.i18n.tr("gallery-close")).size(typography::BODY_LG))
                .on_press(Message::Close)
                .style(styles::button::text_link),
        );

    let body: Element<'a, Message> = match &ctx.session.photos {
        Photos::Loading => centered(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(
                    AnimatedSpinner::new(palette::VIOLET, ctx.spinner_rotation).into_element(),
                )
                .push(text(ctx.i18n.tr("gallery-loading"))),
        ),
        Photos::Failed(error) => centered(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(text(ctx.i18n.tr("gallery-load-failed")).size(typography::BODY_LG))
                .push(text(ctx.i18n.tr(error.i18n_key())).size(typography::BODY)),
        ),
        Photos::Loaded(photos) if photos.is_empty() => {
            centered(text(ctx.i18n.tr("gallery-empty")))
        }
        Photos::Loaded(photos) => tiles(photos, &ctx),
    };

    let panel = Container::new(
        Column::new()
            .push(Container::new(header).padding(spacing::MD))
            .push(Container::new(body).height(Length::Fill))
            .push(Space::new().height(Length::Fixed(spacing::MD))),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .max_width(sizing::MODAL_MAX_WIDTH)
    .clip(true)
    .style(styles::container::modal_panel);

    let backdrop = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, spacing::MD])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::modal_backdrop);

    // Block clicks and scrolling from reaching the listing underneath.
    opaque(backdrop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_fill_available_width() {
        assert_eq!(columns_for_width(400.0), 1);
        assert!(columns_for_width(1280.0) >= 4);
    }

    #[test]
    fn panel_width_is_capped() {
        assert_eq!(columns_for_width(4000.0), columns_for_width(8000.0));
    }

    #[test]
    fn tiny_windows_still_show_one_column() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(-10.0), 1);
    }
}
