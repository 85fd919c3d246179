/// Static about and contact pages
use iced::widget::{column, container, row, text, Column};
use iced::{Element, Length};

use super::theme::{AMBER, MUTED};
use super::widgets::heading;
use crate::Message;

const ABOUT: [&str; 3] = [
    "Arnold Woodworking is dedicated to creating beautiful, handcrafted pieces that stand \
the test of time. Each project is approached with meticulous attention to detail and a \
deep respect for the natural beauty of wood.",
    "We believe that furniture should be more than functional. It should tell a story. From \
selecting the perfect piece of lumber to applying the final finish, every step in our \
process is guided by a commitment to quality and craftsmanship.",
    "With years of experience in woodworking, we specialize in custom furniture, home decor, \
and outdoor projects. Whether you're looking for a statement dining table, a unique gift, \
or functional outdoor furniture, we bring your vision to life with skill and passion.",
];

/// (glyph, label, value)
const CONTACT: [(&str, &str, &str); 3] = [
    ("✉", "Email", "contact@arnoldwoodworking.com"),
    ("☎", "Phone", "(555) 123-4567"),
    ("⌂", "Workshop", "123 Workshop Lane\nCraftsville, ST 12345"),
];

const HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 5:00 PM",
    "Saturday: By appointment",
    "Sunday: Closed",
];

/// Title block plus a boxed body, shared by the static pages
fn page<'a>(title: &'a str, subtitle: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![
        column![heading(title, 48.0), text(subtitle).size(18).color(MUTED)].spacing(12),
        container(body)
            .padding(32)
            .width(Length::Fill)
            .style(container::rounded_box),
    ]
    .spacing(32)
    .padding([48, 24])
    .max_width(900)
    .into()
}

pub fn about<'a>() -> Element<'a, Message> {
    let paragraphs = ABOUT.iter().map(|paragraph| text(*paragraph).size(18).into());
    page(
        "About Us",
        "The story behind the shop",
        Column::with_children(paragraphs).spacing(20).into(),
    )
}

pub fn contact<'a>() -> Element<'a, Message> {
    let entries = CONTACT.iter().map(|(glyph, label, value)| {
        row![
            text(*glyph).size(24).color(AMBER),
            column![text(*label).size(14).color(MUTED), text(*value).size(18)].spacing(4),
        ]
        .spacing(16)
        .into()
    });

    let hours = HOURS.iter().map(|line| text(*line).color(MUTED).into());

    let body = column![
        Column::with_children(entries).spacing(24),
        heading("Business Hours", 24.0),
        Column::with_children(hours).spacing(6),
    ]
    .spacing(28);

    page("Contact Information", "Get in touch", body.into())
}
