// src/domain/market.rs

use serde::Deserialize;

/// Per-city rollup as seeded from the catalog file.
///
/// These figures are precomputed seed data and are intentionally *not*
/// derived from the property records (the listing counts cover the whole
/// market, not just the catalog sample).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityStats {
    pub city: String,
    pub average_price: f64,
    pub total_listings: u32,
    /// Year-over-year price change, percent.
    pub price_change: f64,
    /// 0-100 heuristic, see analytics::demand for the per-district variant.
    pub demand_score: u32,
}

/// One month of one city's market trend series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketDataPoint {
    pub month: String,
    pub average_price: f64,
    pub total_listings: u32,
    pub city: String,
}

/// Per-calendar-month average price and savings vs. the annual baseline.
/// The catalog always carries exactly twelve of these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonalPoint {
    pub month: String,
    pub avg_price: f64,
    /// Percent below (+) or above (-) the annual baseline.
    pub savings: f64,
}
