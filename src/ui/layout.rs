/// Page chrome: header with menu toggle and logo, side menu, footer
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, scrollable, text, Column,
    Space,
};
use iced::{Alignment, Element, Length, Theme};

use super::logo::logo;
use super::theme::{MUTED, SERIF};
use crate::state::route::Route;
use crate::Message;

pub const SITE_NAME: &str = "Arnold Woodworking";

fn nav_links() -> [(&'static str, Route); 4] {
    [
        ("Projects", Route::Landing),
        ("About", Route::About),
        ("Contact Information", Route::Contact),
        ("Request a Quote", Route::Quote),
    ]
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

fn sidebar<'a>(current: &Route) -> Element<'a, Message> {
    let links: Vec<Element<'a, Message>> = nav_links()
        .into_iter()
        .map(|(label, route)| {
            let style: ButtonStyle = if *current == route {
                button::primary
            } else {
                button::text
            };
            button(text(label).size(18).font(SERIF))
                .width(Length::Fill)
                .padding([10, 16])
                .style(style)
                .on_press(Message::Navigate(route))
                .into()
        })
        .collect();

    container(Column::with_children(links).spacing(4))
        .width(240)
        .height(Length::Fill)
        .padding(16)
        .style(container::rounded_box)
        .into()
}

fn header<'a>(menu_open: bool) -> Element<'a, Message> {
    let toggle = button(text(if menu_open { "✕" } else { "☰" }).size(22))
        .style(button::text)
        .on_press(Message::ToggleMenu);

    let brand = button(
        row![logo(40.0), text(SITE_NAME).size(26).font(SERIF)]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .style(button::text)
    .on_press(Message::Navigate(Route::Landing));

    row![
        toggle,
        horizontal_space(),
        brand,
        horizontal_space(),
        // balances the toggle so the brand stays centred
        Space::with_width(40),
    ]
    .align_y(Alignment::Center)
    .padding([8, 16])
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    container(text("Handcrafted with care").color(MUTED))
        .center_x(Length::Fill)
        .padding(24)
        .into()
}

/// Wrap a page in the site chrome
pub fn frame<'a>(
    menu_open: bool,
    current: &Route,
    page: Element<'a, Message>,
) -> Element<'a, Message> {
    let body = scrollable(
        column![page, horizontal_rule(1), footer()]
            .spacing(32)
            .width(Length::Fill),
    )
    .height(Length::Fill);

    let main: Element<'a, Message> = if menu_open {
        row![sidebar(current), body].spacing(8).into()
    } else {
        body.into()
    };

    column![header(menu_open), horizontal_rule(1), main].into()
}
