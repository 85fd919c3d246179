use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use super::theme::MUTED;
use super::widgets::{empty_state, heading, project_card, project_grid};
use super::Pictures;
use crate::state::categories::CategoryFilter;
use crate::state::library::Catalog;
use crate::state::query;
use crate::Message;

const TAGLINE: &str = "A catalogue of nearly all the woodworking projects I've done. \
Ranging from wine stoppers to dining room tables, I look to work on interesting \
and new designs that help me grow my ability.";

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

fn category_tabs<'a>(selected: &CategoryFilter) -> Element<'a, Message> {
    let tabs = CategoryFilter::tabs()
        .into_iter()
        .map(|tab| {
            let style: ButtonStyle = if tab == *selected {
                button::primary
            } else {
                button::secondary
            };
            button(text(format!("{}  {}", tab.icon(), tab.label())).size(16))
                .padding([10, 22])
                .style(style)
                .on_press(Message::FilterSelected(tab))
                .into()
        })
        .collect();

    Wrap::with_elements(tabs).spacing(8.0).line_spacing(8.0).into()
}

/// Hero, category tabs and the filtered project grid
pub fn view<'a>(
    catalog: &'a Catalog,
    selected: &CategoryFilter,
    pictures: &Pictures,
) -> Element<'a, Message> {
    let hero = column![
        heading("Handmade Woodworking", 56.0),
        text(TAGLINE).size(20).color(MUTED),
    ]
    .spacing(20)
    .max_width(760)
    .align_x(Alignment::Center);

    let projects = query::filter(catalog, selected);
    let grid = if projects.is_empty() {
        empty_state()
    } else {
        project_grid(
            projects
                .into_iter()
                .map(|project| {
                    project_card(project, pictures.thumbnail(&project.thumbnail), true, false)
                })
                .collect(),
        )
    };

    column![
        container(hero).center_x(Length::Fill).padding([80, 16]),
        container(category_tabs(selected)).center_x(Length::Fill),
        container(grid).center_x(Length::Fill),
    ]
    .spacing(40)
    .padding([0, 24])
    .into()
}
