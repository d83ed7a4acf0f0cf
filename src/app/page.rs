// SPDX-License-Identifier: MPL-2.0
//! Which top-level view is shown.
//!
//! Only one of Home and Projects is mounted at a time. The Projects variant
//! carries the state of the mounted view, so replacing it tears that state
//! down, open lightbox included.

use crate::ui::projects;
use crate::ui::state::ScrollLock;

/// Top-level views of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Projects,
}

/// The mounted view and its state.
#[derive(Debug, Default)]
pub enum Page {
    #[default]
    Home,
    Projects(projects::State),
}

impl Page {
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        match self {
            Page::Home => ViewState::Home,
            Page::Projects(_) => ViewState::Projects,
        }
    }

    /// Switches to `target`, mounting a fresh view.
    ///
    /// Navigating to the view already shown changes nothing and returns
    /// `false`; the mounted state, an open lightbox included, stays as is.
    pub fn navigate(&mut self, target: ViewState, scroll: &ScrollLock) -> bool {
        if self.view_state() == target {
            return false;
        }

        log::debug!("Navigating {:?} -> {target:?}", self.view_state());
        *self = match target {
            ViewState::Home => Page::Home,
            ViewState::Projects => Page::Projects(projects::State::new(scroll.clone())),
        };
        true
    }

    #[must_use]
    pub fn projects(&self) -> Option<&projects::State> {
        match self {
            Page::Projects(state) => Some(state),
            Page::Home => None,
        }
    }

    pub fn projects_mut(&mut self) -> Option<&mut projects::State> {
        match self {
            Page::Projects(state) => Some(state),
            Page::Home => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::ImageRef;
    use crate::ui::lightbox::{self, LightboxState};

    fn open_lightbox(page: &mut Page) {
        let state = page.projects_mut().expect("projects view is mounted");
        let _ = state.update(
            projects::Message::Lightbox(lightbox::Message::Open(ImageRef::new(
                "/images/tech1.png",
            ))),
            &[],
        );
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(Page::default().view_state(), ViewState::Home);
        assert_eq!(ViewState::default(), ViewState::Home);
    }

    #[test]
    fn navigate_switches_views() {
        let scroll = ScrollLock::new();
        let mut page = Page::default();

        assert!(page.navigate(ViewState::Projects, &scroll));
        assert_eq!(page.view_state(), ViewState::Projects);

        assert!(page.navigate(ViewState::Home, &scroll));
        assert_eq!(page.view_state(), ViewState::Home);
    }

    #[test]
    fn navigate_to_current_view_is_a_no_op() {
        let scroll = ScrollLock::new();
        let mut page = Page::default();

        assert!(!page.navigate(ViewState::Home, &scroll));
        assert!(page.navigate(ViewState::Projects, &scroll));
        open_lightbox(&mut page);

        assert!(!page.navigate(ViewState::Projects, &scroll));
        let lightbox = page.projects().map(projects::State::lightbox);
        assert!(matches!(lightbox, Some(LightboxState::Open(_))));
        assert!(scroll.is_locked());
    }

    #[test]
    fn leaving_projects_tears_down_open_lightbox() {
        let scroll = ScrollLock::new();
        let mut page = Page::default();
        page.navigate(ViewState::Projects, &scroll);
        open_lightbox(&mut page);
        assert!(scroll.is_locked());

        page.navigate(ViewState::Home, &scroll);
        assert!(!scroll.is_locked());

        // Coming back mounts a fresh, closed lightbox.
        page.navigate(ViewState::Projects, &scroll);
        let lightbox = page.projects().map(projects::State::lightbox);
        assert_eq!(lightbox, Some(LightboxState::Closed));
    }
}
