use crate::analytics::{merge_city_series, window_by_recency, TrendPoint};
use crate::catalog::Catalog;
use crate::domain::Property;
use crate::templates::components::{card, line_chart, property_card, stat_card, ChartPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_signed_pct, fmt_thousands, fmt_usd, fmt_usd_compact};
use maud::{html, Markup};

/// Trailing months shown in the overview chart.
const OVERVIEW_WINDOW: usize = 6;

pub struct DashboardVm<'a> {
    pub query: String,
    pub total_listings: u32,
    pub average_price: f64,
    pub cities_tracked: usize,
    pub average_growth: f64,
    pub trend: Vec<TrendPoint>,
    pub results: Vec<&'a Property>,
}

impl<'a> DashboardVm<'a> {
    pub fn build(catalog: &'a Catalog, query: &str) -> Self {
        let total_listings = catalog.city_stats.iter().map(|c| c.total_listings).sum();
        let average_price = catalog
            .city_stats
            .iter()
            .map(|c| c.average_price)
            .sum::<f64>()
            / catalog.city_stats.len() as f64;
        let average_growth = catalog
            .city_stats
            .iter()
            .map(|c| c.price_change)
            .sum::<f64>()
            / catalog.city_stats.len() as f64;

        let merged = merge_city_series(&catalog.market_trends);
        let trend = window_by_recency(&merged, OVERVIEW_WINDOW).to_vec();

        DashboardVm {
            query: query.to_string(),
            total_listings,
            average_price,
            cities_tracked: catalog.city_stats.len(),
            average_growth,
            trend,
            results: catalog.search(query),
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let trend_points: Vec<ChartPoint> = vm
        .trend
        .iter()
        .map(|p| {
            ChartPoint::new(
                p.month.clone(),
                p.average_price,
                fmt_usd_compact(p.average_price),
            )
        })
        .collect();

    desktop_layout(
        "Dashboard",
        "/",
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Market Pulse Dashboard" }
                    p class="subtitle" {
                        "Market insights and analytics for Georgian real estate."
                    }
                }

                div class="stat-grid" {
                    (stat_card(
                        "Total Listings",
                        &fmt_thousands(vm.total_listings as i64),
                        "Active properties",
                    ))
                    (stat_card(
                        "Average Price",
                        &fmt_usd(vm.average_price.round() as i64),
                        "Across all cities",
                    ))
                    (stat_card(
                        "Cities Tracked",
                        &vm.cities_tracked.to_string(),
                        "Major Georgian cities",
                    ))
                    (stat_card(
                        "Market Growth",
                        &fmt_signed_pct(vm.average_growth),
                        "Year over year",
                    ))
                }

                (card("Market Trend Overview", line_chart(&trend_points)))

                section class="card" {
                    h2 { "Browse Properties" }
                    form action="/" method="get" class="search-form" {
                        label for="q" class="sr-only" { "Search" }
                        input type="search" id="q" name="q" value=(vm.query)
                            placeholder="Search by title, city or district...";
                        button type="submit" { "Search" }
                        a class="button-link" href="/export" { "Download XLSX" }
                    }

                    @if vm.results.is_empty() {
                        p class="empty-note" { "No properties match \"" (vm.query) "\"." }
                    } @else {
                        div class="property-grid" {
                            @for property in &vm.results {
                                (property_card(property))
                            }
                        }
                    }
                }
            }
        },
    )
}
