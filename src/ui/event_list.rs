// SPDX-License-Identifier: MPL-2.0
//! "Live Events" section: header plus the loading, error, empty or grid body.

use crate::browser::{CountdownClock, EventStore, LoadState};
use crate::domain::{Event, EventId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::event_card;
use crate::ui::styles;
use crate::ui::thumbnails::Thumbnails;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length};

/// Below this width the grid shows a single column.
const SINGLE_COLUMN_BELOW: f32 = 640.0;
/// Below this width the grid shows two columns.
const TWO_COLUMNS_BELOW: f32 = 1024.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a EventStore,
    pub clock: &'a CountdownClock,
    pub thumbnails: &'a Thumbnails,
    pub spinner_rotation: f32,
    pub viewport_width: f32,
    pub max_columns: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(EventId),
}

/// Number of card columns for a window `width` pixels wide.
#[must_use]
pub fn columns_for_width(width: f32, max_columns: usize) -> usize {
    let columns = if width < SINGLE_COLUMN_BELOW {
        1
    } else if width < TWO_COLUMNS_BELOW {
        2
    } else {
        max_columns
    };
    columns.clamp(1, max_columns.max(1))
}

fn muted<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(typography::BODY_LG)
        .color(Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        })
        .into()
}

fn header<'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            text(i18n.tr("listing-title"))
                .size(typography::TITLE_LG)
                .color(palette::WHITE)
                .width(Length::Fill),
        )
        .push(
            text(i18n.tr("listing-hint"))
                .size(typography::BODY)
                .color(Color {
                    a: opacity::TEXT_SECONDARY,
                    ..palette::WHITE
                }),
        )
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>, events: Vec<&'a Event>) -> Element<'a, Message> {
    let columns = columns_for_width(ctx.viewport_width, ctx.max_columns);

    let rows = events.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::LG);
        for &event in chunk {
            row = row.push(
                Container::new(
                    event_card::view(event, ctx.clock, ctx.thumbnails, ctx.i18n)
                        .map(Message::Open),
                )
                .width(Length::FillPortion(1)),
            );
        }
        // Keep card widths equal on a short last row.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        Element::from(row)
    });

    Column::with_children(rows).spacing(spacing::LG).into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.store.state() {
        LoadState::Loading => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(AnimatedSpinner::new(palette::TURQUOISE, ctx.spinner_rotation).into_element())
            .push(muted(ctx.i18n.tr("listing-loading")))
            .into(),
        LoadState::Failed(error) => {
            let message = Column::new()
                .spacing(spacing::XXS)
                .push(text(ctx.i18n.tr("listing-error")).size(typography::BODY_LG))
                .push(text(ctx.i18n.tr(error.i18n_key())).size(typography::BODY));
            Container::new(message)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::error_banner)
                .into()
        }
        LoadState::Loaded => {
            let events: Vec<&Event> = ctx.store.filtered().collect();
            if events.is_empty() {
                let key = if ctx.store.events().is_empty() {
                    "listing-empty"
                } else {
                    "listing-no-match"
                };
                muted(ctx.i18n.tr(key))
            } else {
                grid(&ctx, events)
            }
        }
    };

    let section = Column::new()
        .spacing(spacing::LG)
        .push(header(ctx.i18n))
        .push(body);

    Container::new(section)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_WIDTH)
        .padding([spacing::XXL, spacing::LG])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_use_fewer_columns() {
        assert_eq!(columns_for_width(480.0, 3), 1);
        assert_eq!(columns_for_width(800.0, 3), 2);
        assert_eq!(columns_for_width(1280.0, 3), 3);
    }

    #[test]
    fn column_count_never_exceeds_configured_maximum() {
        assert_eq!(columns_for_width(800.0, 1), 1);
        assert_eq!(columns_for_width(1600.0, 0), 1);
    }
}
