use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::theme::MUTED;
use super::widgets::{back_link, empty_state, heading, project_card, project_grid};
use super::Pictures;
use crate::state::categories::{category_name, project_count_label};
use crate::state::library::Catalog;
use crate::state::query;
use crate::state::route::Route;
use crate::Message;

/// Every project in one category
pub fn view<'a>(catalog: &'a Catalog, slug: &str, pictures: &Pictures) -> Element<'a, Message> {
    let projects = query::by_category(catalog, slug);

    let header = column![
        back_link("Back to Home", Route::Landing),
        heading(category_name(catalog, slug), 48.0),
        text(project_count_label(projects.len())).size(18).color(MUTED),
    ]
    .spacing(12);

    let grid = if projects.is_empty() {
        empty_state()
    } else {
        project_grid(
            projects
                .into_iter()
                .map(|project| {
                    project_card(project, pictures.thumbnail(&project.thumbnail), false, true)
                })
                .collect(),
        )
    };

    column![header, container(grid).center_x(Length::Fill)]
        .spacing(32)
        .padding([40, 24])
        .into()
}
