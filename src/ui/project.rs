/// Project detail page: gallery with thumbnail strip, details and related work
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, text, Column, Row,
};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use super::theme::{AMBER, MUTED};
use super::widgets::{back_link, heading, picture};
use super::Pictures;
use crate::state::data::ProjectRecord;
use crate::state::gallery::{GalleryAction, GalleryCursor};
use crate::state::library::Catalog;
use crate::state::query::{self, RELATED_LIMIT};
use crate::state::route::Route;
use crate::Message;

const STAGE_HEIGHT: f32 = 440.0;
const STRIP_SIZE: f32 = 80.0;
const RELATED_IMAGE_HEIGHT: f32 = 130.0;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

pub fn view<'a>(
    catalog: &'a Catalog,
    id: &str,
    cursor: &GalleryCursor,
    pictures: &Pictures,
) -> Element<'a, Message> {
    let Some(project) = query::by_id(catalog, id) else {
        return not_found();
    };

    column![
        back_link("Back to Projects", Route::Landing),
        row![
            gallery(project, cursor, pictures),
            details(catalog, project, pictures),
        ]
        .spacing(32),
    ]
    .spacing(24)
    .padding([32, 24])
    .into()
}

fn not_found<'a>() -> Element<'a, Message> {
    let card = container(
        column![
            heading("Project Not Found", 28.0),
            button(text("Return to Home").color(AMBER))
                .style(button::text)
                .on_press(Message::Navigate(Route::Landing)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .style(container::rounded_box);

    container(card).center_x(Length::Fill).padding(80).into()
}

fn gallery<'a>(
    project: &'a ProjectRecord,
    cursor: &GalleryCursor,
    pictures: &Pictures,
) -> Element<'a, Message> {
    let current = project
        .images
        .get(cursor.position())
        .unwrap_or(&project.thumbnail);

    let mut stage = Column::new()
        .spacing(12)
        .push(picture(pictures.full(current), STAGE_HEIGHT));

    // Single-image projects get no navigation chrome at all
    if cursor.has_navigation() {
        stage = stage.push(
            row![
                button(text("‹").size(26))
                    .style(button::secondary)
                    .on_press(Message::Gallery(GalleryAction::Previous)),
                horizontal_space(),
                text(cursor.counter_label()).color(MUTED),
                horizontal_space(),
                button(text("›").size(26))
                    .style(button::secondary)
                    .on_press(Message::Gallery(GalleryAction::Next)),
            ]
            .align_y(Alignment::Center),
        );

        let strip: Vec<Element<'a, Message>> = project
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let style: ButtonStyle = if index == cursor.position() {
                    button::primary
                } else {
                    button::text
                };
                button(picture(pictures.full(image), STRIP_SIZE))
                    .width(STRIP_SIZE + 8.0)
                    .padding(4)
                    .style(style)
                    .on_press(Message::Gallery(GalleryAction::Select(index)))
                    .into()
            })
            .collect();

        stage = stage.push(Wrap::with_elements(strip).spacing(8.0).line_spacing(8.0));
    }

    stage.width(Length::FillPortion(3)).into()
}

fn details<'a>(
    catalog: &'a Catalog,
    project: &'a ProjectRecord,
    pictures: &Pictures,
) -> Element<'a, Message> {
    let category_label = format!("🏷  {}", project.category_name.to_uppercase());
    let category_link = button(text(category_label).size(14).color(AMBER))
        .padding(0)
        .style(button::text)
        .on_press(Message::Navigate(Route::Category(project.category.clone())));

    let mut info = column![
        category_link,
        heading(project.title.as_str(), 40.0),
        text(format!("📅  {}", project.date.display_long())).color(MUTED),
        text(project.description.as_str()).size(18),
    ]
    .spacing(16);

    let related = query::related_to(catalog, project, RELATED_LIMIT);
    if !related.is_empty() {
        let cards: Vec<Element<'a, Message>> = related
            .into_iter()
            .map(|other| {
                button(
                    column![
                        picture(pictures.thumbnail(&other.thumbnail), RELATED_IMAGE_HEIGHT),
                        text(other.title.as_str()).size(16),
                    ]
                    .spacing(6),
                )
                .width(Length::FillPortion(1))
                .padding(0)
                .style(button::text)
                .on_press(Message::Navigate(Route::Project(other.id.clone())))
                .into()
            })
            .collect();

        info = info
            .push(horizontal_rule(1))
            .push(heading(format!("More in {}", project.category_name), 22.0))
            .push(Row::with_children(cards).spacing(16));
    }

    container(info)
        .padding(24)
        .width(Length::FillPortion(2))
        .style(container::rounded_box)
        .into()
}
