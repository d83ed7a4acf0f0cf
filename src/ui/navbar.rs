// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the window.
//!
//! Holds the owner's name and the About, Projects and Contact links. The bar
//! only reports which section was picked; switching views and scrolling is
//! the application's job.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub owner_name: &'a str,
}

/// Page sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SectionPressed(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionPressed(section) => Event::Navigate(section),
    }
}

/// Render the navigation bar.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.owner_name).size(typography::TITLE_MD);

    let links = [
        (Section::About, "navbar-about"),
        (Section::Projects, "navbar-projects"),
        (Section::Contact, "navbar-contact"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (section, key)| {
        row.push(build_link(ctx.i18n.tr(key), section))
    });

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links);

    Container::new(bar)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .style(styles::container::navbar)
        .into()
}

fn build_link<'a>(label: String, section: Section) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::SectionPressed(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link)
        .into()
}
