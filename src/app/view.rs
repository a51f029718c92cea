// SPDX-License-Identifier: MPL-2.0
//! Root view: the scrollable listing, the gallery modal stacked on top and
//! the toast overlay above everything.

use super::Message;
use crate::browser::Browser;
use crate::config::DEFAULT_GRID_COLUMNS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::thumbnails::Thumbnails;
use crate::ui::{event_list, gallery_modal, hero, search_bar};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a Browser,
    pub search_input: &'a str,
    pub thumbnails: &'a Thumbnails,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
    pub viewport_width: f32,
}

fn listing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let search = search_bar::view(search_bar::ViewContext {
        i18n: ctx.i18n,
        input: ctx.search_input,
    })
    .map(Message::SearchBar);

    let events = event_list::view(event_list::ViewContext {
        i18n: ctx.i18n,
        store: ctx.browser.store(),
        clock: ctx.browser.clock(),
        thumbnails: ctx.thumbnails,
        spinner_rotation: ctx.spinner_rotation,
        viewport_width: ctx.viewport_width,
        max_columns: DEFAULT_GRID_COLUMNS,
    })
    .map(Message::EventList);

    let page = Column::new()
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(hero::view(ctx.i18n))
        .push(Container::new(search).padding([spacing::LG, spacing::LG]))
        .push(events);

    Container::new(scrollable(page).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(listing(&ctx));

    if let Some(session) = ctx.browser.gallery().visible() {
        stack = stack.push(
            gallery_modal::view(gallery_modal::ViewContext {
                i18n: ctx.i18n,
                session,
                thumbnails: ctx.thumbnails,
                spinner_rotation: ctx.spinner_rotation,
                viewport_width: ctx.viewport_width,
            })
            .map(Message::Gallery),
        );
    }

    stack
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
