// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native events the portfolio reacts to are key presses while the
//! lightbox is open; every other interaction goes through widgets.

use super::page::Page;
use super::Message;
use iced::Subscription;

/// Subscriptions of the mounted page.
///
/// The Home view listens to nothing. The Projects view forwards its
/// lightbox's Escape listener, which only exists while the lightbox is open.
pub fn create_page_subscription(page: &Page) -> Subscription<Message> {
    match page {
        Page::Home => Subscription::none(),
        Page::Projects(state) => state.subscription().map(Message::Projects),
    }
}
