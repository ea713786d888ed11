use crate::analytics::{select_extremum, Extremum};
use crate::catalog::Catalog;
use crate::domain::{CityStats, Property, SeasonalPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_pct, fmt_signed_pct, fmt_thousands, fmt_usd};
use maud::{html, Markup};

pub struct InsightsVm<'a> {
    pub cheapest_listing: &'a Property,
    pub best_month: &'a SeasonalPoint,
    pub fastest_growing: &'a CityStats,
    pub highest_demand: &'a CityStats,
    pub average_price: f64,
    pub average_growth: f64,
    pub total_listings: u32,
}

impl<'a> InsightsVm<'a> {
    /// `None` only if one of the seed tables is empty, which catalog
    /// validation rules out.
    pub fn build(catalog: &'a Catalog) -> Option<Self> {
        let cheapest_listing =
            select_extremum(&catalog.properties, |p| p.price as f64, Extremum::Min)?;
        let best_month = select_extremum(&catalog.seasonal, |m| m.savings, Extremum::Max)?;
        let fastest_growing =
            select_extremum(&catalog.city_stats, |c| c.price_change, Extremum::Max)?;
        let highest_demand =
            select_extremum(&catalog.city_stats, |c| c.demand_score as f64, Extremum::Max)?;

        let count = catalog.city_stats.len() as f64;
        Some(InsightsVm {
            cheapest_listing,
            best_month,
            fastest_growing,
            highest_demand,
            average_price: catalog.city_stats.iter().map(|c| c.average_price).sum::<f64>() / count,
            average_growth: catalog.city_stats.iter().map(|c| c.price_change).sum::<f64>() / count,
            total_listings: catalog.city_stats.iter().map(|c| c.total_listings).sum(),
        })
    }
}

struct Insight {
    title: &'static str,
    description: String,
    href: &'static str,
    action: &'static str,
    accent: &'static str,
}

pub fn insights_page(vm: &InsightsVm) -> Markup {
    let insights = [
        Insight {
            title: "Best Investment Opportunity",
            description: format!(
                "{}, {} offers excellent value at {}",
                vm.cheapest_listing.district,
                vm.cheapest_listing.city,
                fmt_usd(vm.cheapest_listing.price)
            ),
            href: "/cheapest-areas",
            action: "View Areas",
            accent: "success",
        },
        Insight {
            title: "Optimal Buying Time",
            description: format!(
                "{} is the best month to buy, offering up to {} savings",
                vm.best_month.month,
                fmt_pct(vm.best_month.savings)
            ),
            href: "/best-time",
            action: "See Seasonal Analysis",
            accent: "info",
        },
        Insight {
            title: "Fastest Growing Market",
            description: format!(
                "{} shows {} price growth",
                vm.fastest_growing.city,
                fmt_signed_pct(vm.fastest_growing.price_change)
            ),
            href: "/trends",
            action: "Explore Trends",
            accent: "warning",
        },
        Insight {
            title: "Highest Demand Area",
            description: format!(
                "{} has the highest demand score of {}",
                vm.highest_demand.city, vm.highest_demand.demand_score
            ),
            href: "/hot-zones",
            action: "Check Hot Zones",
            accent: "primary",
        },
    ];

    desktop_layout(
        "Market Insights",
        "/insights",
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Market Insights" }
                    p class="subtitle" {
                        "Headline findings and recommendations from the current snapshot."
                    }
                }

                section class="card summary-band" {
                    div class="summary-figure" {
                        p class="stat-value" { (fmt_usd(vm.average_price.round() as i64)) }
                        p class="stat-description" { "Average Market Price" }
                    }
                    div class="summary-figure" {
                        p class="stat-value" { (fmt_signed_pct(vm.average_growth)) }
                        p class="stat-description" { "Average Growth Rate" }
                    }
                    div class="summary-figure" {
                        p class="stat-value" { (fmt_thousands(vm.total_listings as i64)) }
                        p class="stat-description" { "Active Listings" }
                    }
                }

                div class="insight-grid" {
                    @for insight in &insights {
                        section class={ "card callout callout-" (insight.accent) } {
                            h3 { (insight.title) }
                            p { (insight.description) }
                            a class="button-link" href=(insight.href) { (insight.action) }
                        }
                    }
                }

                section class="card" {
                    h2 { "Market Alerts" }
                    ul class="alert-list" {
                        li {
                            strong { "Market Growth: " }
                            "Average price growth of " (fmt_pct(vm.average_growth))
                            " indicates a healthy market."
                        }
                        li {
                            strong { "Inventory Levels: " }
                            (fmt_thousands(vm.total_listings as i64))
                            " active listings provide good selection for buyers."
                        }
                        li {
                            strong { "Investment Climate: " }
                            "Multiple districts show strong potential with varied price points."
                        }
                    }
                }
            }
        },
    )
}
