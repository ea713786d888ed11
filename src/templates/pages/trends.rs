use crate::analytics::{
    city_series, merge_city_series, sequential_change, window_by_recency, TrendPoint,
};
use crate::catalog::Catalog;
use crate::templates::components::{bar_chart, card, line_chart, ChartPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_signed_pct, fmt_thousands, fmt_usd, fmt_usd_compact};
use maud::{html, Markup};

/// Trailing window selected by the time-range dropdown. Unknown values
/// fall back to six months, same as a missing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl TimeRange {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("3months") => TimeRange::ThreeMonths,
            Some("1year") => TimeRange::OneYear,
            _ => TimeRange::SixMonths,
        }
    }

    pub fn months(&self) -> usize {
        match self {
            TimeRange::ThreeMonths => 3,
            TimeRange::SixMonths => 6,
            TimeRange::OneYear => 12,
        }
    }

    pub fn as_query_value(&self) -> &'static str {
        match self {
            TimeRange::ThreeMonths => "3months",
            TimeRange::SixMonths => "6months",
            TimeRange::OneYear => "1year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ThreeMonths => "Last 3 Months",
            TimeRange::SixMonths => "Last 6 Months",
            TimeRange::OneYear => "Last Year",
        }
    }
}

const RANGES: [TimeRange; 3] = [
    TimeRange::ThreeMonths,
    TimeRange::SixMonths,
    TimeRange::OneYear,
];

pub struct TrendsVm {
    /// "all" or a known city name.
    pub city: String,
    pub cities: Vec<String>,
    pub range: TimeRange,
    pub points: Vec<TrendPoint>,
    /// Month-over-month price change, percent, aligned with `points`.
    pub changes: Vec<f64>,
    pub total_growth: f64,
    pub mean_price: f64,
    pub mean_listings: f64,
}

impl TrendsVm {
    pub fn build(catalog: &Catalog, city_param: Option<&str>, range_param: Option<&str>) -> Self {
        let cities: Vec<String> = catalog
            .trend_cities()
            .into_iter()
            .map(str::to_string)
            .collect();

        // Unknown city names behave like the "all" sentinel.
        let city = match city_param {
            Some(c) if cities.iter().any(|known| known == c) => c.to_string(),
            _ => "all".to_string(),
        };
        let range = TimeRange::parse(range_param);

        let series = if city == "all" {
            merge_city_series(&catalog.market_trends)
        } else {
            city_series(&catalog.market_trends, &city)
        };
        let points = window_by_recency(&series, range.months()).to_vec();

        let prices: Vec<f64> = points.iter().map(|p| p.average_price).collect();
        let changes = sequential_change(&prices);

        let total_growth = match (prices.first(), prices.last()) {
            (Some(first), Some(last)) if *first > 0.0 => (last - first) / first * 100.0,
            _ => 0.0,
        };
        let mean_price = if prices.is_empty() {
            0.0
        } else {
            prices.iter().sum::<f64>() / prices.len() as f64
        };
        let mean_listings = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.total_listings as f64).sum::<f64>() / points.len() as f64
        };

        TrendsVm {
            city,
            cities,
            range,
            points,
            changes,
            total_growth,
            mean_price,
            mean_listings,
        }
    }
}

pub fn trends_page(vm: &TrendsVm) -> Markup {
    let price_points: Vec<ChartPoint> = vm
        .points
        .iter()
        .map(|p| {
            ChartPoint::new(
                p.month.clone(),
                p.average_price,
                fmt_usd_compact(p.average_price),
            )
        })
        .collect();

    let change_points: Vec<ChartPoint> = vm
        .points
        .iter()
        .zip(&vm.changes)
        .map(|(p, change)| ChartPoint::new(p.month.clone(), *change, fmt_signed_pct(*change)))
        .collect();

    let listing_points: Vec<ChartPoint> = vm
        .points
        .iter()
        .map(|p| {
            ChartPoint::new(
                p.month.clone(),
                p.total_listings as f64,
                fmt_thousands(p.total_listings as i64),
            )
        })
        .collect();

    desktop_layout(
        "Price Trends",
        "/trends",
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Price Trends" }
                    p class="subtitle" { "Property price movements and market activity over time." }
                }

                section class="card" {
                    h2 { "Filter Data" }
                    form action="/trends" method="get" class="filter-form" {
                        label for="city" { "City" }
                        select name="city" id="city" {
                            option value="all" selected[vm.city == "all"] { "All Cities" }
                            @for city in &vm.cities {
                                option value=(city) selected[vm.city == *city] { (city) }
                            }
                        }

                        label for="range" { "Time Range" }
                        select name="range" id="range" {
                            @for range in RANGES {
                                option value=(range.as_query_value()) selected[vm.range == range] {
                                    (range.label())
                                }
                            }
                        }

                        button type="submit" { "Apply" }
                    }
                }

                (card("Average Price Trend", line_chart(&price_points)))
                (card("Monthly Price Changes", line_chart(&change_points)))
                (card("Market Activity (Total Listings)", bar_chart(&listing_points)))

                div class="stat-grid stat-grid-3" {
                    section class="card stat-card" {
                        p class="stat-value accent-success" { (fmt_signed_pct(vm.total_growth)) }
                        p class="stat-description" { "Total price growth over period" }
                    }
                    section class="card stat-card" {
                        p class="stat-value accent-info" { (fmt_usd(vm.mean_price.round() as i64)) }
                        p class="stat-description" { "Average price over period" }
                    }
                    section class="card stat-card" {
                        p class="stat-value accent-warning" { (fmt_thousands(vm.mean_listings.round() as i64)) }
                        p class="stat-description" { "Average listings per month" }
                    }
                }
            }
        },
    )
}
