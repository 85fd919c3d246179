use iced::widget::{button, column, container, image, text, Column};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use super::theme::{AMBER, FAINT, MUTED, SERIF};
use crate::assets::ImageSource;
use crate::state::data::ProjectRecord;
use crate::state::route::Route;
use crate::Message;

pub const CARD_WIDTH: f32 = 300.0;
const CARD_IMAGE_HEIGHT: f32 = 210.0;
/// Roughly two lines of card text
const EXCERPT_CHARS: usize = 110;

/// Render an image, or a labelled placeholder when it cannot be shown
pub fn picture<'a>(source: ImageSource, height: f32) -> Element<'a, Message> {
    match source {
        ImageSource::Local(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        ImageSource::Remote(url) => placeholder(format!("Hosted image\n{url}"), height),
        ImageSource::Missing(path) => {
            placeholder(format!("Image not found\n{}", path.display()), height)
        }
    }
}

fn placeholder<'a>(label: String, height: f32) -> Element<'a, Message> {
    container(text(label).size(12).color(FAINT))
        .padding(8)
        .center_x(Length::Fill)
        .center_y(height)
        .style(container::rounded_box)
        .into()
}

/// Shorten text to at most `max_chars` characters, ending on a word
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches([',', '.', ';', ':']))
}

/// Clickable project tile for grids
pub fn project_card<'a>(
    project: &'a ProjectRecord,
    thumbnail: ImageSource,
    show_category: bool,
    show_date: bool,
) -> Element<'a, Message> {
    let mut details = Column::new().spacing(6).padding(14);
    if show_category {
        details = details.push(text(project.category_name.to_uppercase()).size(12).color(AMBER));
    }
    details = details
        .push(text(project.title.as_str()).size(19).font(SERIF))
        .push(text(excerpt(&project.description, EXCERPT_CHARS)).size(14).color(MUTED));
    if show_date {
        details = details.push(text(project.date.display_long()).size(12).color(FAINT));
    }

    button(column![picture(thumbnail, CARD_IMAGE_HEIGHT), details])
        .width(CARD_WIDTH)
        .padding(0)
        .style(button::secondary)
        .on_press(Message::Navigate(Route::Project(project.id.clone())))
        .into()
}

/// Wrapping grid of cards
pub fn project_grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}

pub fn empty_state<'a>() -> Element<'a, Message> {
    container(text("No projects found in this category.").size(18).color(MUTED))
        .center_x(Length::Fill)
        .padding(48)
        .into()
}

pub fn back_link<'a>(label: &'a str, route: Route) -> Element<'a, Message> {
    button(text(format!("← {label}")).color(MUTED))
        .padding(0)
        .style(button::text)
        .on_press(Message::Navigate(route))
        .into()
}

/// Page heading in the serif face
pub fn heading<'a>(label: impl ToString, size: f32) -> Element<'a, Message> {
    text(label.to_string()).size(size).font(SERIF).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_keeps_short_text() {
        assert_eq!(excerpt("A small bowl.", 20), "A small bowl.");
    }

    #[test]
    fn test_excerpt_cuts_on_word() {
        assert_eq!(
            excerpt("Handcrafted walnut bowl, oiled and waxed", 26),
            "Handcrafted walnut bowl…"
        );
        assert_eq!(excerpt("Unbreakablewordwithoutspaces", 10), "Unbreakabl…");
    }
}
