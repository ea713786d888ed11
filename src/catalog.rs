// src/catalog.rs

use crate::domain::{CityStats, MarketDataPoint, Property, SeasonalPoint};
use crate::errors::ServerError;
use serde::Deserialize;
use std::collections::HashSet;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// The authoritative, immutable market dataset. Loaded once at startup
/// from the embedded JSON document and validated before the server binds.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub city_stats: Vec<CityStats>,
    pub market_trends: Vec<MarketDataPoint>,
    pub seasonal: Vec<SeasonalPoint>,
}

impl Catalog {
    /// Parses and validates the catalog bundled into the binary.
    pub fn embedded() -> Result<Self, ServerError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServerError> {
        let catalog: Catalog = serde_json::from_str(raw)
            .map_err(|e| ServerError::CatalogError(format!("Failed to parse catalog: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Invariants the rest of the system relies on. The aggregation code
    /// assumes validated input, so a violation here is fatal at startup.
    fn validate(&self) -> Result<(), ServerError> {
        let mut seen_ids = HashSet::new();
        for p in &self.properties {
            if !seen_ids.insert(p.id.as_str()) {
                return Err(invalid(format!("duplicate property id '{}'", p.id)));
            }
            if p.price <= 0 {
                return Err(invalid(format!(
                    "property '{}' has non-positive price {}",
                    p.id, p.price
                )));
            }
            if p.area <= 0.0 {
                return Err(invalid(format!(
                    "property '{}' has non-positive area {}",
                    p.id, p.area
                )));
            }
            if p.property_type == crate::domain::PropertyType::Commercial
                && (p.bedrooms.is_some() || p.bathrooms.is_some())
            {
                return Err(invalid(format!(
                    "commercial property '{}' must not have bedrooms or bathrooms",
                    p.id
                )));
            }
        }

        if self.seasonal.len() != 12 {
            return Err(invalid(format!(
                "seasonal table must have 12 entries, found {}",
                self.seasonal.len()
            )));
        }

        if self.city_stats.is_empty() {
            return Err(invalid("city stats table is empty".to_string()));
        }
        if self.market_trends.is_empty() {
            return Err(invalid("market trend table is empty".to_string()));
        }

        Ok(())
    }

    pub fn find_property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Listings matching the dashboard search box, catalog order preserved.
    /// An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Property> {
        let q = query.trim();
        self.properties
            .iter()
            .filter(|p| q.is_empty() || p.matches_search(q))
            .collect()
    }

    /// Distinct city names in trend-table order, for the city dropdown.
    pub fn trend_cities(&self) -> Vec<&str> {
        let mut cities = Vec::new();
        for point in &self.market_trends {
            if !cities.contains(&point.city.as_str()) {
                cities.push(point.city.as_str());
            }
        }
        cities
    }
}

fn invalid(msg: String) -> ServerError {
    ServerError::CatalogError(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_and_validates() {
        let catalog = Catalog::embedded().expect("embedded catalog must be valid");
        assert_eq!(catalog.properties.len(), 20);
        assert_eq!(catalog.seasonal.len(), 12);
        assert_eq!(catalog.city_stats.len(), 3);
        assert_eq!(catalog.trend_cities(), vec!["Tbilisi", "Batumi", "Kutaisi"]);
    }

    #[test]
    fn find_property_by_id() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(
            catalog.find_property("2").map(|p| p.title.as_str()),
            Some("Luxury Penthouse Vake")
        );
        assert!(catalog.find_property("999").is_none());
    }

    #[test]
    fn search_matches_district_and_empty_query_returns_all() {
        let catalog = Catalog::embedded().unwrap();
        let hits = catalog.search("gldani");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.district == "Gldani"));
        assert_eq!(catalog.search("").len(), catalog.properties.len());
    }

    fn minimal(properties_json: &str, seasonal_entries: usize) -> String {
        let seasonal: Vec<String> = (0..seasonal_entries)
            .map(|i| format!(r#"{{ "month": "M{i}", "avg_price": 100000, "savings": 1.0 }}"#))
            .collect();
        format!(
            r#"{{
                "properties": [{properties_json}],
                "city_stats": [{{ "city": "Tbilisi", "average_price": 1.0, "total_listings": 1, "price_change": 1.0, "demand_score": 50 }}],
                "market_trends": [{{ "month": "Jan 2024", "average_price": 1.0, "total_listings": 1, "city": "Tbilisi" }}],
                "seasonal": [{}]
            }}"#,
            seasonal.join(",")
        )
    }

    const OK_PROPERTY: &str = r#"{
        "id": "a", "title": "T", "price": 1000, "city": "Tbilisi", "district": "Vake",
        "property_type": "apartment", "area": 50, "description": "d",
        "coordinates": { "lat": 0.0, "lng": 0.0 }, "listed_date": "2024-01-01", "features": []
    }"#;

    #[test]
    fn rejects_duplicate_ids() {
        let raw = minimal(&format!("{OK_PROPERTY},{OK_PROPERTY}"), 12);
        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("duplicate property id"));
    }

    #[test]
    fn rejects_non_positive_price_and_area() {
        let bad_price = OK_PROPERTY.replace(r#""price": 1000"#, r#""price": 0"#);
        let err = Catalog::from_json(&minimal(&bad_price, 12)).unwrap_err();
        assert!(err.to_string().contains("non-positive price"));

        let bad_area = OK_PROPERTY.replace(r#""area": 50"#, r#""area": -3"#);
        let err = Catalog::from_json(&minimal(&bad_area, 12)).unwrap_err();
        assert!(err.to_string().contains("non-positive area"));
    }

    #[test]
    fn rejects_commercial_with_bedrooms() {
        let bad = OK_PROPERTY
            .replace(r#""property_type": "apartment""#, r#""property_type": "commercial""#)
            .replace(r#""area": 50"#, r#""area": 50, "bedrooms": 2"#);
        let err = Catalog::from_json(&minimal(&bad, 12)).unwrap_err();
        assert!(err.to_string().contains("commercial"));
    }

    #[test]
    fn rejects_wrong_seasonal_cardinality() {
        let err = Catalog::from_json(&minimal(OK_PROPERTY, 11)).unwrap_err();
        assert!(err.to_string().contains("12 entries"));
    }
}
