// src/domain/property.rs

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Closed set of listing categories. Commercial listings carry no
/// bedroom/bathroom counts (enforced at catalog load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "commercial" => Ok(PropertyType::Commercial),
            other => Err(format!("unknown property type '{other}'")),
        }
    }
}

/// Filter parameter as it arrives from the query string. Anything that is
/// not a known property type degrades to `All`, matching the behaviour of
/// the "all" sentinel in the UI dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTypeFilter {
    All,
    Only(PropertyType),
}

impl PropertyTypeFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) => s
                .parse::<PropertyType>()
                .map(PropertyTypeFilter::Only)
                .unwrap_or(PropertyTypeFilter::All),
            None => PropertyTypeFilter::All,
        }
    }

    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            PropertyTypeFilter::All => true,
            PropertyTypeFilter::Only(t) => *t == property_type,
        }
    }

    /// Value for the dropdown / export query string.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            PropertyTypeFilter::All => "all",
            PropertyTypeFilter::Only(t) => t.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One month of a listing's own asking-price history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub price: i64,
}

/// A single listing as seeded from the catalog file. Immutable for the
/// life of the process; there is no write path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: i64,
    pub city: String,
    pub district: String,
    pub property_type: PropertyType,
    /// Square meters.
    pub area: f64,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub year_built: Option<i32>,
    pub description: String,
    pub coordinates: Coordinates,
    pub listed_date: NaiveDate,
    pub features: Vec<String>,
    #[serde(default)]
    pub price_history: Option<Vec<PricePoint>>,
}

impl Property {
    pub fn price_per_sqm(&self) -> f64 {
        if self.area > 0.0 {
            self.price as f64 / self.area
        } else {
            0.0
        }
    }

    /// Case-insensitive substring match over title, city and district,
    /// used by the dashboard search box.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self.city.to_lowercase().contains(&q)
            || self.district.to_lowercase().contains(&q)
    }
}
