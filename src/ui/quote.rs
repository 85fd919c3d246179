/// Quote request form. Decorative: submitting only shows a confirmation.
use iced::widget::{button, column, container, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use super::theme::{DANGER, MUTED};
use super::widgets::heading;
use crate::state::quote::{
    Budget, ProjectType, QuoteField, QuoteForm, SubmitOutcome, Timeline, CONFIRMATION,
};
use crate::Message;

fn labelled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label), input.into()]
        .spacing(8)
        .width(Length::Fill)
        .into()
}

fn notice<'a>(outcome: &SubmitOutcome) -> Element<'a, Message> {
    match outcome {
        SubmitOutcome::Confirmed => container(
            column![
                text(CONFIRMATION).size(18),
                button("OK")
                    .style(button::primary)
                    .on_press(Message::DismissNotice),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .padding(24)
        .center_x(Length::Fill)
        .style(container::rounded_box)
        .into(),
        SubmitOutcome::Incomplete(missing) => {
            text(format!("Please fill in: {}", missing.join(", ")))
                .color(DANGER)
                .into()
        }
    }
}

pub fn view<'a>(form: &'a QuoteForm, outcome: Option<&SubmitOutcome>) -> Element<'a, Message> {
    let name = text_input("Your name", &form.name)
        .on_input(|value| Message::Quote(QuoteField::Name(value)))
        .padding(12);
    let email = text_input("your@email.com", &form.email)
        .on_input(|value| Message::Quote(QuoteField::Email(value)))
        .padding(12);
    let phone = text_input("(555) 123-4567", &form.phone)
        .on_input(|value| Message::Quote(QuoteField::Phone(value)))
        .padding(12);
    let project_type = pick_list(ProjectType::ALL, form.project_type, |value| {
        Message::Quote(QuoteField::ProjectType(value))
    })
    .placeholder("Select a type")
    .width(Length::Fill)
    .padding(12);
    let description = text_input(
        "Describe your project, including dimensions, materials, and any specific requirements...",
        &form.description,
    )
    .on_input(|value| Message::Quote(QuoteField::Description(value)))
    .padding(12);
    let budget = pick_list(Budget::ALL, form.budget, |value| {
        Message::Quote(QuoteField::Budget(value))
    })
    .placeholder("Select a range")
    .width(Length::Fill)
    .padding(12);
    let timeline = pick_list(Timeline::ALL, form.timeline, |value| {
        Message::Quote(QuoteField::Timeline(value))
    })
    .placeholder("Select timeline")
    .width(Length::Fill)
    .padding(12);

    let submit = button(container(text("Submit Request").size(18)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(16)
        .style(button::primary)
        .on_press(Message::SubmitQuote);

    let mut fields = Column::new()
        .spacing(24)
        .push(row![labelled("Name *", name), labelled("Email *", email)].spacing(24))
        .push(row![labelled("Phone", phone), labelled("Project Type *", project_type)].spacing(24))
        .push(labelled("Project Description *", description))
        .push(row![labelled("Budget Range", budget), labelled("Timeline", timeline)].spacing(24))
        .push(submit);

    if let Some(outcome) = outcome {
        fields = fields.push(notice(outcome));
    }

    column![
        column![
            heading("Request a Quote", 48.0),
            text("Tell us about your project").size(18).color(MUTED),
        ]
        .spacing(12),
        container(fields)
            .padding(32)
            .width(Length::Fill)
            .style(container::rounded_box),
    ]
    .spacing(32)
    .padding([48, 24])
    .max_width(900)
    .into()
}
