// src/analytics/demand.rs

use crate::analytics::areas::AreaKey;
use crate::domain::Property;
use std::collections::HashMap;

/// Weighting between activity volume and price level. Listing count alone
/// would undervalue prestige districts with high prices but low turnover,
/// so a small price component is blended in. Product-chosen coefficients,
/// not derived quantities.
pub const LISTING_WEIGHT: f64 = 10.0;
pub const PRICE_WEIGHT: f64 = 0.1;

/// One district with its heuristic desirability score.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandZone {
    pub key: AreaKey,
    pub listings: usize,
    pub average_price: f64,
    pub score: u32,
}

/// score = 10 * listings + 0.1 * (average price in thousands), rounded.
pub fn demand_score(listings: usize, average_price: f64) -> u32 {
    let raw = listings as f64 * LISTING_WEIGHT + average_price / 1000.0 * PRICE_WEIGHT;
    raw.round() as u32
}

/// Groups the catalog by district and ranks descending by demand score.
/// The sort is stable, so ties keep their first-seen grouping order.
pub fn rank_by_demand(properties: &[Property]) -> Vec<DemandZone> {
    let mut order: Vec<AreaKey> = Vec::new();
    let mut totals: HashMap<AreaKey, (usize, i64)> = HashMap::new();

    for property in properties {
        let key = AreaKey::new(&property.district, &property.city);
        if !totals.contains_key(&key) {
            order.push(key.clone());
        }
        let (count, price_sum) = totals.entry(key).or_insert((0, 0));
        *count += 1;
        *price_sum += property.price;
    }

    let mut zones: Vec<DemandZone> = order
        .into_iter()
        .map(|key| {
            let (listings, price_sum) = totals[&key];
            let average_price = price_sum as f64 / listings as f64;
            DemandZone {
                key,
                listings,
                average_price,
                score: demand_score(listings, average_price),
            }
        })
        .collect();

    zones.sort_by(|a, b| b.score.cmp(&a.score));
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn score_blends_listings_and_price() {
        // 3 listings at an average of 100k: 30 + 0.1 * 100 = 40.
        assert_eq!(demand_score(3, 100_000.0), 40);
        // A lone expensive listing still scores above a lone cheap one.
        assert!(demand_score(1, 350_000.0) > demand_score(1, 42_000.0));
        assert_eq!(demand_score(0, 0.0), 0);
    }

    #[test]
    fn ranking_is_descending() {
        let catalog = Catalog::embedded().unwrap();
        let zones = rank_by_demand(&catalog.properties);
        assert!(!zones.is_empty());
        assert!(zones.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ranking_blends_volume_and_price_on_the_seed_data() {
        let catalog = Catalog::embedded().unwrap();
        let zones = rank_by_demand(&catalog.properties);
        // New Boulevard: 2 listings at a 295k average, 20 + 29.5 = 50.
        assert_eq!(zones[0].key, AreaKey::new("New Boulevard", "Batumi"));
        assert_eq!(zones[0].score, 50);
        // Volume still matters: three-listing Saburtalo outranks
        // two-listing Old Town at a similar price level.
        let position = |district: &str| {
            zones
                .iter()
                .position(|z| z.key.district == district)
                .unwrap()
        };
        assert!(position("Saburtalo") < position("Old Town"));
    }

    #[test]
    fn zone_totals_cover_the_whole_catalog() {
        let catalog = Catalog::embedded().unwrap();
        let zones = rank_by_demand(&catalog.properties);
        let total: usize = zones.iter().map(|z| z.listings).sum();
        assert_eq!(total, catalog.properties.len());
    }
}
