// src/analytics/areas.rs

use crate::domain::{Property, PropertyType, PropertyTypeFilter};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Composite grouping key. District names repeat across cities
/// ("Center" exists in both Tbilisi and Kutaisi), so grouping must key on
/// the pair, not a concatenated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaKey {
    pub district: String,
    pub city: String,
}

impl AreaKey {
    pub fn new(district: &str, city: &str) -> Self {
        Self {
            district: district.to_string(),
            city: city.to_string(),
        }
    }
}

impl fmt::Display for AreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.district, self.city)
    }
}

/// Price rollup for one district.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRollup {
    pub key: AreaKey,
    pub average_price: f64,
    /// Area-weighted: sum(prices) / sum(areas), not a mean of per-listing
    /// ratios. Large listings count for more.
    pub price_per_sqm: f64,
    pub property_count: usize,
    /// Distinct types present in the group, in enum order.
    pub property_types: Vec<PropertyType>,
}

#[derive(Default)]
struct Accumulator {
    price_sum: i64,
    area_sum: f64,
    count: usize,
    types: BTreeSet<PropertyType>,
}

/// Rolls the catalog up by district, keeping only listings that match the
/// type filter. Districts with no matching listings are omitted entirely
/// rather than reported with empty totals. The result is sorted ascending
/// by average price (stable), ready for "cheapest areas" ranking.
pub fn group_by_district(
    properties: &[Property],
    filter: PropertyTypeFilter,
) -> Vec<AreaRollup> {
    let mut order: Vec<AreaKey> = Vec::new();
    let mut groups: HashMap<AreaKey, Accumulator> = HashMap::new();

    for property in properties {
        if !filter.matches(property.property_type) {
            continue;
        }
        let key = AreaKey::new(&property.district, &property.city);
        if !groups.contains_key(&key) {
            order.push(key.clone());
        }
        let acc = groups.entry(key).or_default();
        acc.price_sum += property.price;
        acc.area_sum += property.area;
        acc.count += 1;
        acc.types.insert(property.property_type);
    }

    let mut rollups: Vec<AreaRollup> = order
        .into_iter()
        .map(|key| {
            let acc = &groups[&key];
            AreaRollup {
                key,
                average_price: acc.price_sum as f64 / acc.count as f64,
                price_per_sqm: if acc.area_sum > 0.0 {
                    acc.price_sum as f64 / acc.area_sum
                } else {
                    0.0
                },
                property_count: acc.count,
                property_types: acc.types.iter().copied().collect(),
            }
        })
        .collect();

    rollups.sort_by(|a, b| a.average_price.total_cmp(&b.average_price));
    rollups
}
