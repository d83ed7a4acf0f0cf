// SPDX-License-Identifier: MPL-2.0
//! Lightbox showing one gallery image enlarged over the page.
//!
//! The [`Controller`] is either closed or open on exactly one image. While
//! open it holds a [`ScrollGuard`] so the page underneath cannot scroll, and
//! its [`Controller::subscription`] listens for the Escape key. Both go away
//! with the open state: closing the lightbox, or dropping the controller
//! together with the page that owns it, releases the scroll lock and stops
//! the key listener.
//!
//! The overlay closes on a press on the dimmed backdrop or the close button.
//! Presses on the enlarged image itself are absorbed by the panel and never
//! reach the backdrop.

use crate::i18n::fluent::I18n;
use crate::portfolio::{assets, ImageRef};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{ScrollGuard, ScrollLock};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, opaque, tooltip, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    event, keyboard, ContentFit, Element, Length, Subscription,
};
use std::path::Path;

/// Observable state of the lightbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(ImageRef),
}

/// How the user dismissed the lightbox. Every reason closes it the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    EscapeKey,
    BackgroundClick,
    CloseButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(ImageRef),
    Close(CloseReason),
    /// Press on the enlarged image panel. Keeps the lightbox open.
    PanelPressed,
}

/// Transitions reported to the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Opened(ImageRef),
    Closed(CloseReason),
}

enum Inner {
    Closed,
    Open {
        image: ImageRef,
        _guard: ScrollGuard,
    },
}

/// Lightbox state machine and owner of its resources.
pub struct Controller {
    scroll: ScrollLock,
    inner: Inner,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Creates a closed lightbox that locks `scroll` while open.
    #[must_use]
    pub fn new(scroll: ScrollLock) -> Self {
        Self {
            scroll,
            inner: Inner::Closed,
        }
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.current()
            .cloned()
            .map_or(LightboxState::Closed, LightboxState::Open)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.inner, Inner::Open { .. })
    }

    /// Image currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ImageRef> {
        match &self.inner {
            Inner::Closed => None,
            Inner::Open { image, .. } => Some(image),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Open(next) => {
                match &mut self.inner {
                    // Already open: swap the image, keep the one guard.
                    Inner::Open { image, .. } => *image = next.clone(),
                    Inner::Closed => {
                        self.inner = Inner::Open {
                            image: next.clone(),
                            _guard: self.scroll.acquire(),
                        };
                    }
                }
                log::debug!("Lightbox showing {next}");
                Event::Opened(next)
            }
            Message::Close(reason) => {
                if !self.is_open() {
                    return Event::None;
                }
                self.inner = Inner::Closed;
                log::debug!("Lightbox closed ({reason:?})");
                Event::Closed(reason)
            }
            Message::PanelPressed => Event::None,
        }
    }

    /// Escape-key listener, present only while the lightbox is open.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_open() {
            event::listen_with(|event, _status, _window| close_on_escape(&event))
        } else {
            Subscription::none()
        }
    }
}

fn close_on_escape(event: &iced::Event) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Close(CloseReason::EscapeKey)),
        _ => None,
    }
}

/// Contextual data needed to render the open lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: &'a ImageRef,
    pub asset_root: &'a Path,
}

/// Render the overlay covering the whole window.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let picture = Image::new(Handle::from_path(assets::resolve(
        ctx.asset_root,
        ctx.image,
    )))
    .width(Length::Fill)
    .content_fit(ContentFit::Contain);

    let close_button = button(Text::new("✕").size(typography::TITLE_MD))
        .on_press(Message::Close(CloseReason::CloseButton))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::close);
    let close_button = tooltip(
        close_button,
        Text::new(ctx.i18n.tr("lightbox-close-button")).size(typography::BODY),
        tooltip::Position::Bottom,
    );

    let close_corner = Container::new(close_button)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .padding(spacing::XS);

    let panel = Container::new(Stack::new().push(picture).push(close_corner))
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .style(styles::overlay::panel);

    // The panel absorbs its own presses so they never reach the backdrop.
    let panel = mouse_area(panel).on_press(Message::PanelPressed);

    let backdrop = Container::new(panel)
        .padding(spacing::MD)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::overlay::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Close(CloseReason::BackgroundClick)))
}
