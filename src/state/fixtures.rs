/// Test catalog shared by the unit tests

use super::library::Catalog;

pub const CATALOG_JSON: &str = r#"[
  {
    "id": "walnut-bowl",
    "title": "Walnut Bowl",
    "category": "bowls",
    "categoryName": "Bowls",
    "thumbnail": "/images/bowls/walnut-bowl/thumbnail.jpg",
    "images": [
      "/images/bowls/walnut-bowl/1.jpg",
      "/images/bowls/walnut-bowl/2.jpg",
      "/images/bowls/walnut-bowl/3.jpg"
    ],
    "description": "Handcrafted walnut bowl from the Bowls collection.",
    "date": "2023-05"
  },
  {
    "id": "oak-table",
    "title": "Oak Table",
    "category": "furniture",
    "categoryName": "Furniture",
    "thumbnail": "/images/furniture/oak-table/1.jpg",
    "images": ["/images/furniture/oak-table/1.jpg"],
    "description": "Handcrafted oak table from the Furniture collection.",
    "date": "2023-09"
  },
  {
    "id": "maple-board",
    "title": "Maple Board",
    "category": "cutting-boards",
    "categoryName": "Cutting Boards",
    "thumbnail": "https://cdn.example.com/maple-board.jpg",
    "images": [
      "/images/cutting-boards/maple-board/1.jpg",
      "/images/cutting-boards/maple-board/2.jpg"
    ],
    "description": "Handcrafted maple board from the Cutting Boards collection.",
    "date": "2024-01"
  },
  {
    "id": "cherry-bowl",
    "title": "Cherry Bowl",
    "category": "bowls",
    "categoryName": "Bowls",
    "thumbnail": "/images/bowls/cherry-bowl/1.jpg",
    "images": ["/images/bowls/cherry-bowl/1.jpg"],
    "description": "Handcrafted cherry bowl from the Bowls collection.",
    "date": "2024-02"
  },
  {
    "id": "ash-bowl",
    "title": "Ash Bowl",
    "category": "bowls",
    "categoryName": "Bowls",
    "thumbnail": "/images/bowls/ash-bowl/1.jpg",
    "images": [
      "/images/bowls/ash-bowl/1.jpg",
      "/images/bowls/ash-bowl/2.jpg"
    ],
    "description": "Handcrafted ash bowl from the Bowls collection.",
    "date": "2024-04"
  }
]"#;

pub fn catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).expect("fixture catalog is valid")
}
