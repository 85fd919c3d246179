/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog file and the UI layer.

use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a single handcrafted project in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique slug, used to address the project detail page
    pub id: String,
    /// Display title
    pub title: String,
    /// Category slug (e.g. "cutting-boards")
    pub category: String,
    /// Human-readable label for `category`, repeated on every record
    pub category_name: String,
    /// Relative path to the representative image
    pub thumbnail: String,
    /// Ordered gallery images. Never empty once the catalog is validated.
    #[serde(deserialize_with = "image_list")]
    pub images: Vec<String>,
    /// Free text
    pub description: String,
    /// Year + month the project was finished
    pub date: ProjectDate,
}

/// Calendar month a project is dated to.
///
/// The catalog stores `YYYY-MM`; full dates and ISO timestamps are
/// accepted and truncated to the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectDate {
    year: i32,
    month: u32,
}

impl ProjectDate {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Long display form, e.g. "March 2024"
    pub fn display_long(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl Default for ProjectDate {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
        }
    }
}

impl fmt::Display for ProjectDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ProjectDate {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let invalid = || format!("invalid project date '{value}', expected YYYY-MM");

        // "2024-03-15T10:30:00.000Z" -> "2024-03-15"
        let head = value.get(..10).unwrap_or(value);
        if head.len() == 10 {
            let date = NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|_| invalid())?;
            return Ok(Self {
                year: chrono::Datelike::year(&date),
                month: chrono::Datelike::month(&date),
            });
        }

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ProjectDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectDate> for String {
    fn from(date: ProjectDate) -> Self {
        date.to_string()
    }
}

/// Accepts `images` either as an array of paths or as an object of
/// `path -> timestamp` (keys kept in document order).
fn image_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ImageListVisitor;

    impl<'de> Visitor<'de> for ImageListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an array of image paths or an object keyed by image path")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut images = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(path) = seq.next_element::<String>()? {
                images.push(path);
            }
            Ok(images)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut images = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((path, _captured)) = map.next_entry::<String, de::IgnoredAny>()? {
                images.push(path);
            }
            Ok(images)
        }
    }

    deserializer.deserialize_any(ImageListVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_date() {
        let date: ProjectDate = "2024-03".parse().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 3);
        assert_eq!(date.display_long(), "March 2024");
        assert_eq!(date.to_string(), "2024-03");
    }

    #[test]
    fn test_parse_full_date_and_timestamp() {
        let day: ProjectDate = "2023-11-02".parse().unwrap();
        let stamp: ProjectDate = "2023-11-02T10:30:00.000Z".parse().unwrap();
        assert_eq!(day, stamp);
        assert_eq!(day.display_long(), "November 2023");
    }

    #[test]
    fn test_reject_bad_dates() {
        assert!("2024-13".parse::<ProjectDate>().is_err());
        assert!("March 2024".parse::<ProjectDate>().is_err());
        assert!("24-03".parse::<ProjectDate>().is_err());
    }

    #[test]
    fn test_images_accept_object_form_in_order() {
        let json = r#"{
            "id": "oak-bench",
            "title": "Oak Bench",
            "category": "furniture",
            "categoryName": "Furniture",
            "thumbnail": "/images/furniture/oak-bench/b.jpg",
            "images": {
                "/images/furniture/oak-bench/b.jpg": "2024-02-01T00:00:00.000Z",
                "/images/furniture/oak-bench/a.jpg": "2024-02-03T00:00:00.000Z"
            },
            "description": "A bench.",
            "date": "2024-02"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.images,
            vec![
                "/images/furniture/oak-bench/b.jpg".to_string(),
                "/images/furniture/oak-bench/a.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = ProjectRecord {
            id: "maple-board".into(),
            title: "Maple Board".into(),
            category: "cutting-boards".into(),
            category_name: "Cutting Boards".into(),
            thumbnail: "/images/a.jpg".into(),
            images: vec!["/images/a.jpg".into()],
            description: "End grain.".into(),
            date: ProjectDate::new(2022, 7).unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["categoryName"], "Cutting Boards");
        assert_eq!(value["date"], "2022-07");
        assert!(value["images"].is_array());
    }
}
