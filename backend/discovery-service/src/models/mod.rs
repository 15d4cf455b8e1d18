use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point on the globe in degrees.
///
/// Serialized as a `[lon, lat]` pair to match the catalog file format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.lon, coordinate.lat]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub blurhash: String,
    pub launch_date: NaiveDate,
    pub location: Coordinate,
    pub name: String,
    pub online: bool,
    pub popularity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionTitle {
    #[serde(rename = "Popular Restaurants")]
    Popular,
    #[serde(rename = "New Restaurants")]
    New,
    #[serde(rename = "Nearby Restaurants")]
    Nearby,
}

impl SectionTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Popular => "Popular Restaurants",
            SectionTitle::New => "New Restaurants",
            SectionTitle::Nearby => "Nearby Restaurants",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: SectionTitle,
    pub restaurants: Vec<Restaurant>,
}

/// Response payload of `GET /discovery`. Sections are never empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub sections: Vec<Section>,
}

impl Discovery {
    pub fn section(&self, title: SectionTitle) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }
}
