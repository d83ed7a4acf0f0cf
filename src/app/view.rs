// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is the navbar above one scrollable page body. While the
//! lightbox is open it is stacked over everything, and the page body stops
//! reacting to scroll input.

use super::page::Page;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::portfolio::Portfolio;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::widgets::scroll_locked::scroll_locked;
use crate::ui::{home, projects};
use iced::{
    widget::{Column, Container, Id, Scrollable, Stack},
    Element, Length,
};
use std::path::Path;

/// Identifier of the page body scrollable, target of navbar anchors.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub portfolio: &'a Portfolio,
    pub asset_root: &'a Path,
    pub scroll_locked: bool,
}

/// Renders the window for the mounted page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        owner_name: &ctx.portfolio.profile.name,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.page {
        Page::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            profile: &ctx.portfolio.profile,
            contact: &ctx.portfolio.contact,
            asset_root: ctx.asset_root,
        }),
        Page::Projects(_) => projects::view(projects::ViewContext {
            portfolio: ctx.portfolio,
            asset_root: ctx.asset_root,
        })
        .map(Message::Projects),
    };

    let body = Scrollable::new(body)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let window = Column::new()
        .push(navbar)
        .push(scroll_locked(body, ctx.scroll_locked));
    let window = Container::new(window)
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = ctx
        .page
        .projects()
        .and_then(|state| state.overlay(ctx.i18n, ctx.asset_root))
        .map(|overlay| overlay.map(Message::Projects));

    match overlay {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(window)
            .push(overlay)
            .into(),
        None => window.into(),
    }
}
