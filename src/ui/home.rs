// SPDX-License-Identifier: MPL-2.0
//! Home view: the About landing section followed by the Contact section.
//!
//! Neither section is interactive, so the view is generic over the caller's
//! message type.

use crate::i18n::fluent::I18n;
use crate::portfolio::{assets, Contact, Profile};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Stack, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the home view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub contact: &'a Contact,
    pub asset_root: &'a Path,
}

/// Render the About and Contact sections stacked vertically.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(build_about(&ctx))
        .push(build_contact(&ctx))
        .into()
}

fn build_about<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let greeting = Text::new(ctx.profile.greeting.as_str()).size(typography::DISPLAY);
    let bio = Container::new(Text::new(ctx.profile.bio.as_str()).size(typography::BODY_LG))
        .max_width(sizing::BIO_MAX_WIDTH);

    let text = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(greeting)
            .push(bio),
    )
    .padding(spacing::XL)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(styles::container::hero_text);

    match &ctx.profile.background {
        Some(background) => {
            let picture = Image::new(Handle::from_path(assets::resolve(
                ctx.asset_root,
                background,
            )))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover);

            Stack::new()
                .width(Length::Fill)
                .height(sizing::HERO_HEIGHT)
                .push(picture)
                .push(text)
                .into()
        }
        None => Container::new(text)
            .width(Length::Fill)
            .height(sizing::HERO_HEIGHT)
            .style(styles::container::hero)
            .into(),
    }
}

fn build_contact<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG);

    let mut details = Column::new().spacing(spacing::SM);
    if let Some(email) = &ctx.contact.email {
        details = details.push(build_detail(ctx.i18n.tr("contact-email-label"), email));
    }
    if let Some(phone) = &ctx.contact.phone {
        details = details.push(build_detail(ctx.i18n.tr("contact-phone-label"), phone));
    }
    if let Some(url) = &ctx.contact.github_url {
        let shown = ctx.contact.github_label.as_deref().unwrap_or(url);
        details = details.push(build_detail(ctx.i18n.tr("contact-github-label"), shown));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(details);

    Container::new(content)
        .padding([spacing::SECTION, spacing::LG])
        .center_x(Length::Fill)
        .style(styles::container::contact)
        .into()
}

/// One "label: value" line of the contact card.
fn build_detail<'a, Message: 'a>(label: String, value: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(format!("{label}:")).size(typography::BODY_LG))
        .push(Text::new(value).size(typography::BODY_LG))
        .into()
}
