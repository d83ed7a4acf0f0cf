// SPDX-License-Identifier: MPL-2.0
//! Projects view: a heading band and one accent-coloured section per project,
//! each with its logo and gallery.
//!
//! The view owns the lightbox. Its [`State`] only exists while the Projects
//! view is shown, so leaving the view drops the lightbox and with it any
//! scroll lock it holds.

use crate::i18n::fluent::I18n;
use crate::portfolio::{assets, Portfolio, Project};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::lightbox::{self, Controller, LightboxState};
use crate::ui::state::ScrollLock;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    ContentFit, Element, Length, Subscription,
};
use std::path::Path;

/// State of the mounted Projects view.
#[derive(Debug)]
pub struct State {
    lightbox: Controller,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A gallery message tagged with the index of its project.
    Gallery(usize, gallery::Message),
    Lightbox(lightbox::Message),
}

impl State {
    #[must_use]
    pub fn new(scroll: ScrollLock) -> Self {
        Self {
            lightbox: Controller::new(scroll),
        }
    }

    #[must_use]
    pub fn lightbox(&self) -> LightboxState {
        self.lightbox.state()
    }

    /// Applies a message. `projects` is the content the view was rendered from.
    pub fn update(&mut self, message: Message, projects: &[Project]) -> lightbox::Event {
        match message {
            Message::Gallery(project, message) => {
                let Some(project) = projects.get(project) else {
                    log::warn!("Gallery message for unknown project #{project}");
                    return lightbox::Event::None;
                };
                match gallery::update(&project.images, &message) {
                    gallery::Event::OpenLightbox(image) => {
                        self.lightbox.update(lightbox::Message::Open(image))
                    }
                    gallery::Event::None => lightbox::Event::None,
                }
            }
            Message::Lightbox(message) => self.lightbox.update(message),
        }
    }

    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        self.lightbox.subscription().map(Message::Lightbox)
    }

    /// Lightbox overlay to draw above the whole window, when open.
    #[must_use]
    pub fn overlay<'a>(
        &'a self,
        i18n: &'a I18n,
        asset_root: &'a Path,
    ) -> Option<Element<'a, Message>> {
        let ctx = lightbox::ViewContext {
            i18n,
            image: self.lightbox.current()?,
            asset_root,
        };
        Some(lightbox::view(ctx).map(Message::Lightbox))
    }
}

/// Contextual data needed to render the projects view.
pub struct ViewContext<'a> {
    pub portfolio: &'a Portfolio,
    pub asset_root: &'a Path,
}

/// Render the page body. The lightbox is drawn separately by [`State::overlay`].
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Container::new(
        Text::new(ctx.portfolio.projects_heading.as_str()).size(typography::DISPLAY),
    )
    .padding([spacing::XXL, spacing::LG])
    .center_x(Length::Fill)
    .style(styles::container::projects_heading);

    ctx.portfolio
        .projects
        .iter()
        .enumerate()
        .fold(
            Column::new().width(Length::Fill).push(heading),
            |column, (index, project)| {
                column.push(build_project(ctx.asset_root, index, project))
            },
        )
        .into()
}

fn build_project<'a>(
    asset_root: &'a Path,
    index: usize,
    project: &'a Project,
) -> Element<'a, Message> {
    let title: Element<'a, Message> = match &project.logo {
        Some(logo) => Container::new(
            Image::new(Handle::from_path(assets::resolve(asset_root, logo)))
                .width(Length::Fill)
                .content_fit(ContentFit::Contain),
        )
        .max_width(sizing::LOGO_MAX_WIDTH)
        .into(),
        None => Text::new(project.name.as_str())
            .size(typography::TITLE_LG)
            .into(),
    };

    let gallery = gallery::view(gallery::ViewContext {
        images: &project.images,
        asset_root,
    })
    .map(move |message| Message::Gallery(index, message));

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(gallery);

    Container::new(content)
        .padding([spacing::SECTION, spacing::LG])
        .width(Length::Fill)
        .style(styles::container::accent_section(project.accent))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::lightbox::CloseReason;

    fn portfolio() -> Portfolio {
        Portfolio::embedded().expect("embedded content parses")
    }

    #[test]
    fn thumbnail_press_opens_lightbox_on_that_image() {
        let portfolio = portfolio();
        let scroll = ScrollLock::new();
        let mut state = State::new(scroll.clone());

        let event = state.update(
            Message::Gallery(1, gallery::Message::ThumbnailPressed(2)),
            &portfolio.projects,
        );

        let expected = portfolio.projects[1].images[2].clone();
        assert_eq!(event, lightbox::Event::Opened(expected.clone()));
        assert_eq!(state.lightbox(), LightboxState::Open(expected));
        assert!(scroll.is_locked());
    }

    #[test]
    fn unknown_project_is_ignored() {
        let portfolio = portfolio();
        let mut state = State::new(ScrollLock::new());

        let event = state.update(
            Message::Gallery(99, gallery::Message::ThumbnailPressed(0)),
            &portfolio.projects,
        );

        assert_eq!(event, lightbox::Event::None);
        assert_eq!(state.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn lightbox_messages_are_forwarded() {
        let portfolio = portfolio();
        let scroll = ScrollLock::new();
        let mut state = State::new(scroll.clone());
        let _ = state.update(
            Message::Gallery(0, gallery::Message::ThumbnailPressed(0)),
            &portfolio.projects,
        );

        let _ = state.update(
            Message::Lightbox(lightbox::Message::Close(CloseReason::BackgroundClick)),
            &portfolio.projects,
        );

        assert_eq!(state.lightbox(), LightboxState::Closed);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn overlay_exists_only_while_open() {
        let portfolio = portfolio();
        let i18n = I18n::default();
        let mut state = State::new(ScrollLock::new());
        assert!(state.overlay(&i18n, Path::new("public")).is_none());

        let _ = state.update(
            Message::Gallery(2, gallery::Message::ThumbnailPressed(4)),
            &portfolio.projects,
        );
        assert!(state.overlay(&i18n, Path::new("public")).is_some());
    }

    #[test]
    fn projects_view_renders() {
        let portfolio = portfolio();
        let ctx = ViewContext {
            portfolio: &portfolio,
            asset_root: Path::new("public"),
        };
        let _element = view(ctx);
    }

    #[test]
    fn projects_view_renders_without_projects() {
        let portfolio = Portfolio::default();
        let ctx = ViewContext {
            portfolio: &portfolio,
            asset_root: Path::new("public"),
        };
        let _element = view(ctx);
    }
}
