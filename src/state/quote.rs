/// Quote request form state
///
/// The form is decorative: submitting a complete form only shows a
/// confirmation. Nothing is sent or stored.

use std::fmt;

pub const CONFIRMATION: &str = "Thank you for your request! We will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Furniture,
    Decor,
    Outdoor,
    Custom,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Furniture,
        ProjectType::Decor,
        ProjectType::Outdoor,
        ProjectType::Custom,
    ];
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProjectType::Furniture => "Furniture",
            ProjectType::Decor => "Home Decor",
            ProjectType::Outdoor => "Outdoor",
            ProjectType::Custom => "Custom Project",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Under500,
    From500To1000,
    From1000To2500,
    From2500To5000,
    Over5000,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::Under500,
        Budget::From500To1000,
        Budget::From1000To2500,
        Budget::From2500To5000,
        Budget::Over5000,
    ];
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Budget::Under500 => "Under $500",
            Budget::From500To1000 => "$500 - $1,000",
            Budget::From1000To2500 => "$1,000 - $2,500",
            Budget::From2500To5000 => "$2,500 - $5,000",
            Budget::Over5000 => "Over $5,000",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    Flexible,
    OneToTwoMonths,
    ThreeToSixMonths,
    SixMonthsPlus,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Flexible,
        Timeline::OneToTwoMonths,
        Timeline::ThreeToSixMonths,
        Timeline::SixMonthsPlus,
    ];
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Timeline::Flexible => "Flexible",
            Timeline::OneToTwoMonths => "1-2 months",
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::SixMonthsPlus => "6+ months",
        })
    }
}

/// One edit to the form
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteField {
    Name(String),
    Email(String),
    Phone(String),
    ProjectType(ProjectType),
    Description(String),
    Budget(Budget),
    Timeline(Timeline),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: Option<ProjectType>,
    pub description: String,
    pub budget: Option<Budget>,
    pub timeline: Option<Timeline>,
}

/// Outcome of pressing "Submit Request"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    Incomplete(Vec<&'static str>),
}

impl QuoteForm {
    pub fn apply(&mut self, field: QuoteField) {
        match field {
            QuoteField::Name(value) => self.name = value,
            QuoteField::Email(value) => self.email = value,
            QuoteField::Phone(value) => self.phone = value,
            QuoteField::ProjectType(value) => self.project_type = Some(value),
            QuoteField::Description(value) => self.description = value,
            QuoteField::Budget(value) => self.budget = Some(value),
            QuoteField::Timeline(value) => self.timeline = Some(value),
        }
    }

    /// Labels of required fields that are blank or invalid
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("Name");
        }
        if !self.email.trim().contains('@') {
            missing.push("Email");
        }
        if self.project_type.is_none() {
            missing.push("Project Type");
        }
        if self.description.trim().is_empty() {
            missing.push("Project Description");
        }
        missing
    }

    pub fn submit(&self) -> SubmitOutcome {
        let missing = self.missing_fields();
        if missing.is_empty() {
            SubmitOutcome::Confirmed
        } else {
            SubmitOutcome::Incomplete(missing)
        }
    }
}
