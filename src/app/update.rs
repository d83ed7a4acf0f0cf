// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::page::{Page, ViewState};
use super::view::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::portfolio::Portfolio;
use crate::ui::lightbox;
use crate::ui::navbar::{self, Event as NavbarEvent, Section};
use crate::ui::projects;
use crate::ui::state::ScrollLock;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub page: &'a mut Page,
    pub scroll: &'a ScrollLock,
    pub portfolio: &'a Portfolio,
}

/// Place on the Home view a navbar link scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The About section, at the top of the page.
    About,
    /// The Contact section, at the bottom of the page.
    Contact,
}

impl Anchor {
    fn offset(self) -> RelativeOffset {
        match self {
            Anchor::About => RelativeOffset { x: 0.0, y: 0.0 },
            Anchor::Contact => RelativeOffset { x: 0.0, y: 1.0 },
        }
    }
}

/// View and optional anchor a navbar section leads to.
#[must_use]
pub fn destination(section: Section) -> (ViewState, Option<Anchor>) {
    match section {
        Section::About => (ViewState::Home, Some(Anchor::About)),
        Section::Projects => (ViewState::Projects, None),
        Section::Contact => (ViewState::Home, Some(Anchor::Contact)),
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(section) => {
            let (target, anchor) = destination(section);
            ctx.page.navigate(target, ctx.scroll);
            anchor.map_or_else(Task::none, scroll_to)
        }
    }
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    let Some(state) = ctx.page.projects_mut() else {
        // Late message from a view that is no longer mounted.
        log::debug!("Dropping projects message outside the Projects view: {message:?}");
        return Task::none();
    };

    match state.update(message, &ctx.portfolio.projects) {
        lightbox::Event::Opened(image) => log::info!("Showing {image} enlarged"),
        lightbox::Event::Closed(reason) => log::info!("Lightbox dismissed by {reason:?}"),
        lightbox::Event::None => {}
    }
    Task::none()
}

fn scroll_to(anchor: Anchor) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), anchor.offset())
}
