// SPDX-License-Identifier: MPL-2.0
//! Image gallery of a project section.
//!
//! A gallery of exactly five images is shown as a three-column group followed
//! by a centered two-column group. Any other number of images (zero included)
//! forms one uniform three-column grid. Narrow windows collapse every group to
//! a single column. Pressing a thumbnail asks the parent to open the lightbox
//! on that image.

use crate::portfolio::{assets, ImageRef};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, responsive, Column, Container, Row, Space};
use iced::{alignment::Horizontal, ContentFit, Element, Length, Size};
use std::path::Path;

/// Number of images that triggers the split arrangement.
const SPLIT_LENGTH: usize = 5;
const PRIMARY_COLUMNS: usize = 3;
const SECONDARY_COLUMNS: usize = 2;

/// Arrangement of a gallery's images into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout<'a> {
    /// One grid holding every image.
    Uniform(&'a [ImageRef]),
    /// A three-column group, then a centered two-column group.
    Split {
        primary: &'a [ImageRef],
        secondary: &'a [ImageRef],
    },
}

/// A run of consecutive images rendered as one grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group<'a> {
    pub images: &'a [ImageRef],
    /// Position of the group's first image in the whole gallery.
    pub offset: usize,
    /// Column count on wide windows.
    pub columns: usize,
    pub max_width: f32,
}

/// Chooses the arrangement for `images`.
#[must_use]
pub fn layout(images: &[ImageRef]) -> Layout<'_> {
    if images.len() == SPLIT_LENGTH {
        let (primary, secondary) = images.split_at(PRIMARY_COLUMNS);
        Layout::Split { primary, secondary }
    } else {
        Layout::Uniform(images)
    }
}

impl<'a> Layout<'a> {
    /// Groups in display order. Their images concatenate back to the input.
    #[must_use]
    pub fn groups(&self) -> Vec<Group<'a>> {
        match *self {
            Layout::Uniform(images) => vec![Group {
                images,
                offset: 0,
                columns: PRIMARY_COLUMNS,
                max_width: sizing::GALLERY_MAX_WIDTH,
            }],
            Layout::Split { primary, secondary } => vec![
                Group {
                    images: primary,
                    offset: 0,
                    columns: PRIMARY_COLUMNS,
                    max_width: sizing::GALLERY_MAX_WIDTH,
                },
                Group {
                    images: secondary,
                    offset: primary.len(),
                    columns: SECONDARY_COLUMNS,
                    max_width: sizing::GALLERY_SPLIT_MAX_WIDTH,
                },
            ],
        }
    }
}

/// Column count for a group given the available width.
#[must_use]
pub fn columns_for(width: f32, preferred: usize) -> usize {
    if width < sizing::NARROW_BREAKPOINT {
        1
    } else {
        preferred.max(1)
    }
}

/// Splits a group into rows of `columns` images, keeping order.
pub fn rows(group: &[ImageRef], columns: usize) -> impl Iterator<Item = &[ImageRef]> {
    group.chunks(columns.max(1))
}

/// Contextual data needed to render a gallery.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub images: &'a [ImageRef],
    pub asset_root: &'a Path,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Index into the gallery's image list.
    ThumbnailPressed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLightbox(ImageRef),
}

/// Maps a thumbnail press to the image it shows.
#[must_use]
pub fn update(images: &[ImageRef], message: &Message) -> Event {
    match message {
        Message::ThumbnailPressed(index) => images
            .get(*index)
            .cloned()
            .map_or(Event::None, Event::OpenLightbox),
    }
}

/// Render the gallery.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    responsive(move |size: Size| {
        let mut content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .align_x(Horizontal::Center);

        for group in layout(ctx.images).groups() {
            content = content.push(build_group(ctx.asset_root, group, size.width));
        }

        content.into()
    })
    .into()
}

fn build_group<'a>(asset_root: &Path, group: Group<'a>, width: f32) -> Element<'a, Message> {
    let columns = columns_for(width, group.columns);
    let mut grid = Column::new().width(Length::Fill).spacing(spacing::LG);

    for (row_index, row) in rows(group.images, columns).enumerate() {
        let first = group.offset + row_index * columns;
        let mut cells = Row::new().width(Length::Fill).spacing(spacing::LG);

        for (column, image) in row.iter().enumerate() {
            cells = cells.push(build_thumbnail(asset_root, image, first + column));
        }
        // Keep cells of a short last row the same width as the rows above.
        for _ in row.len()..columns {
            cells = cells.push(Space::new().width(Length::FillPortion(1)));
        }

        grid = grid.push(cells);
    }

    Container::new(grid)
        .max_width(group.max_width)
        .width(Length::Fill)
        .into()
}

fn build_thumbnail<'a>(asset_root: &Path, image: &ImageRef, index: usize) -> Element<'a, Message> {
    let handle = Handle::from_path(assets::resolve(asset_root, image));
    let picture = Image::new(handle)
        .width(Length::Fill)
        .content_fit(ContentFit::Contain);

    button(picture)
        .on_press(Message::ThumbnailPressed(index))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::thumbnail)
        .into()
}
