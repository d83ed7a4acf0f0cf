// SPDX-License-Identifier: MPL-2.0
//! Drives the application through its public message API the way the user
//! would: navbar clicks, thumbnail presses and the lightbox close controls.

use iced_folio::app::{App, Message, ViewState};
use iced_folio::portfolio::{ImageRef, Portfolio};
use iced_folio::ui::gallery;
use iced_folio::ui::lightbox::{self, CloseReason, LightboxState};
use iced_folio::ui::navbar::{self, Section};
use iced_folio::ui::projects;
use std::path::PathBuf;

fn app() -> App {
    let portfolio = Portfolio::embedded().expect("built-in content parses");
    App::with_content(portfolio, PathBuf::from("public"))
}

fn navbar(app: &mut App, section: Section) {
    let _ = app.update(Message::Navbar(navbar::Message::SectionPressed(section)));
}

fn thumbnail(app: &mut App, project: usize, index: usize) {
    let _ = app.update(Message::Projects(projects::Message::Gallery(
        project,
        gallery::Message::ThumbnailPressed(index),
    )));
}

fn lightbox(app: &mut App, message: lightbox::Message) {
    let _ = app.update(Message::Projects(projects::Message::Lightbox(message)));
}

#[test]
fn open_then_escape() {
    let mut app = app();
    navbar(&mut app, Section::Projects);

    thumbnail(&mut app, 1, 2);
    assert_eq!(
        app.lightbox(),
        LightboxState::Open(ImageRef::new("/images/tech3.png"))
    );
    assert!(app.is_scroll_locked());

    lightbox(&mut app, lightbox::Message::Close(CloseReason::EscapeKey));
    assert_eq!(app.lightbox(), LightboxState::Closed);
    assert!(!app.is_scroll_locked());
}

#[test]
fn clicking_the_image_keeps_it_open_until_backdrop_click() {
    let mut app = app();
    navbar(&mut app, Section::Projects);
    thumbnail(&mut app, 0, 3);

    lightbox(&mut app, lightbox::Message::PanelPressed);
    assert!(matches!(app.lightbox(), LightboxState::Open(_)));

    lightbox(&mut app, lightbox::Message::Close(CloseReason::BackgroundClick));
    assert_eq!(app.lightbox(), LightboxState::Closed);
    assert!(!app.is_scroll_locked());
}

#[test]
fn second_open_replaces_image_and_one_close_unlocks() {
    let mut app = app();
    navbar(&mut app, Section::Projects);

    thumbnail(&mut app, 2, 0);
    lightbox(
        &mut app,
        lightbox::Message::Open(ImageRef::new("/images/burger2.png")),
    );
    assert_eq!(
        app.lightbox(),
        LightboxState::Open(ImageRef::new("/images/burger2.png"))
    );

    lightbox(&mut app, lightbox::Message::Close(CloseReason::CloseButton));
    assert!(!app.is_scroll_locked());
}

#[test]
fn leaving_projects_while_open_restores_scroll() {
    let mut app = app();
    navbar(&mut app, Section::Projects);
    thumbnail(&mut app, 1, 4);
    assert!(app.is_scroll_locked());

    navbar(&mut app, Section::Contact);

    assert_eq!(app.view_state(), ViewState::Home);
    assert_eq!(app.lightbox(), LightboxState::Closed);
    assert!(!app.is_scroll_locked());

    // A late close message after teardown changes nothing.
    lightbox(&mut app, lightbox::Message::Close(CloseReason::EscapeKey));
    assert_eq!(app.view_state(), ViewState::Home);
}

#[test]
fn galleries_of_built_in_content_follow_the_layout_rule() {
    let app = app();
    for project in &app.portfolio().projects {
        let groups = gallery::layout(&project.images).groups();
        if project.images.len() == 5 {
            assert_eq!(groups.len(), 2, "{}", project.name);
        } else {
            assert_eq!(groups.len(), 1, "{}", project.name);
        }
    }
}
