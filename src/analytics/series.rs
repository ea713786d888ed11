// src/analytics/series.rs

use crate::domain::MarketDataPoint;
use std::collections::HashMap;

/// Direction for [`select_extremum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// Picks the element with the largest or smallest key. The first winner is
/// kept on ties. Returns `None` on an empty series; the fixed seasonal and
/// city datasets are validated non-empty, so callers on those may rely on
/// `Some`.
pub fn select_extremum<'a, T, F>(series: &'a [T], key: F, direction: Extremum) -> Option<&'a T>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(&T, f64)> = None;
    for item in series {
        let value = key(item);
        let better = match best {
            None => true,
            Some((_, current)) => match direction {
                Extremum::Max => value > current,
                Extremum::Min => value < current,
            },
        };
        if better {
            best = Some((item, value));
        }
    }
    best.map(|(item, _)| item)
}

/// One month of a (possibly merged) trend series, city dimension dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub average_price: f64,
    pub total_listings: u32,
}

/// Collapses a multi-city trend table into one series per month label,
/// preserving first-seen month order. The merged price is the arithmetic
/// mean over all contributing cities and listings are summed.
pub fn merge_city_series(points: &[MarketDataPoint]) -> Vec<TrendPoint> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, u32, u32)> = HashMap::new();

    for point in points {
        if !sums.contains_key(&point.month) {
            order.push(point.month.clone());
        }
        let (price_sum, listings, contributors) =
            sums.entry(point.month.clone()).or_insert((0.0, 0, 0));
        *price_sum += point.average_price;
        *listings += point.total_listings;
        *contributors += 1;
    }

    order
        .into_iter()
        .map(|month| {
            let (price_sum, listings, contributors) = sums[&month];
            TrendPoint {
                month,
                average_price: price_sum / contributors as f64,
                total_listings: listings,
            }
        })
        .collect()
}

/// One city's slice of the trend table, file order preserved.
pub fn city_series(points: &[MarketDataPoint], city: &str) -> Vec<TrendPoint> {
    points
        .iter()
        .filter(|p| p.city == city)
        .map(|p| TrendPoint {
            month: p.month.clone(),
            average_price: p.average_price,
            total_listings: p.total_listings,
        })
        .collect()
}

/// Trailing window over a chronologically ordered series. No wraparound,
/// no gap-filling; a short series is returned whole.
pub fn window_by_recency<T>(series: &[T], month_count: usize) -> &[T] {
    let start = series.len().saturating_sub(month_count);
    &series[start..]
}

/// Period-over-period percentage changes. The first period has no
/// predecessor and reports 0; so does any period following a zero value.
pub fn sequential_change(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i == 0 {
                return 0.0;
            }
            let previous = values[i - 1];
            if previous == 0.0 {
                0.0
            } else {
                (value - previous) / previous * 100.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn point(month: &str, price: f64, listings: u32, city: &str) -> MarketDataPoint {
        MarketDataPoint {
            month: month.to_string(),
            average_price: price,
            total_listings: listings,
            city: city.to_string(),
        }
    }

    #[test]
    fn seasonal_extremes_match_the_fixed_dataset() {
        let catalog = Catalog::embedded().unwrap();
        let best = select_extremum(&catalog.seasonal, |m| m.savings, Extremum::Max).unwrap();
        assert_eq!(best.month, "Dec");
        assert!((best.savings - 7.1).abs() < 1e-9);

        let worst = select_extremum(&catalog.seasonal, |m| m.savings, Extremum::Min).unwrap();
        assert_eq!(worst.month, "May");
        assert!((worst.savings - (-6.5)).abs() < 1e-9);
    }

    #[test]
    fn extremum_keeps_first_winner_on_ties_and_guards_empty() {
        let points = [
            point("Jan", 100.0, 1, "A"),
            point("Feb", 100.0, 2, "A"),
            point("Mar", 50.0, 3, "A"),
        ];
        let max = select_extremum(&points, |p| p.average_price, Extremum::Max).unwrap();
        assert_eq!(max.month, "Jan");

        let empty: [MarketDataPoint; 0] = [];
        assert!(select_extremum(&empty, |p| p.average_price, Extremum::Max).is_none());
    }

    #[test]
    fn merge_averages_across_cities_and_sums_listings() {
        let points = [
            point("Jan 2024", 100.0, 10, "Tbilisi"),
            point("Jan 2024", 200.0, 5, "Batumi"),
        ];
        let merged = merge_city_series(&points);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].month, "Jan 2024");
        assert!((merged[0].average_price - 150.0).abs() < 1e-9);
        assert_eq!(merged[0].total_listings, 15);
    }

    #[test]
    fn merge_is_a_true_mean_over_three_cities() {
        // A pairwise running average would give ((100+200)/2 + 400)/2 = 275.
        let points = [
            point("Jan 2024", 100.0, 1, "A"),
            point("Jan 2024", 200.0, 1, "B"),
            point("Jan 2024", 400.0, 1, "C"),
        ];
        let merged = merge_city_series(&points);
        assert!((merged[0].average_price - 700.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn merge_preserves_first_seen_month_order() {
        let catalog = Catalog::embedded().unwrap();
        let merged = merge_city_series(&catalog.market_trends);
        let months: Vec<&str> = merged.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["Aug 2023", "Sep 2023", "Oct 2023", "Nov 2023", "Dec 2023", "Jan 2024"]
        );
    }

    #[test]
    fn window_takes_trailing_entries_and_caps_at_length() {
        let series = [1, 2, 3, 4, 5, 6];
        assert_eq!(window_by_recency(&series, 3), &[4, 5, 6]);
        assert_eq!(window_by_recency(&series, 100), &series[..]);
        let empty: [i32; 0] = [];
        assert!(window_by_recency(&empty, 3).is_empty());
    }

    #[test]
    fn sequential_change_reports_percentages() {
        let changes = sequential_change(&[100.0, 110.0, 99.0]);
        assert_eq!(changes.len(), 3);
        assert!((changes[0] - 0.0).abs() < 1e-9);
        assert!((changes[1] - 10.0).abs() < 1e-9);
        assert!((changes[2] - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn sequential_change_guards_zero_denominator() {
        let changes = sequential_change(&[0.0, 50.0]);
        assert_eq!(changes, vec![0.0, 0.0]);
        assert!(sequential_change(&[]).is_empty());
    }

    #[test]
    fn city_series_filters_one_city_in_order() {
        let catalog = Catalog::embedded().unwrap();
        let batumi = city_series(&catalog.market_trends, "Batumi");
        assert_eq!(batumi.len(), 6);
        assert_eq!(batumi[0].month, "Aug 2023");
        assert_eq!(batumi[5].month, "Jan 2024");
        assert!((batumi[5].average_price - 175_000.0).abs() < 1e-9);
    }
}
