use crate::analytics::{rank_by_demand, DemandZone};
use crate::catalog::Catalog;
use crate::domain::CityStats;
use crate::templates::components::{bar_chart, card, stat_card, ChartPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_thousands, fmt_usd};
use maud::{html, Markup};

/// Zones shown in the activity chart; the ranking lists them all.
const CHART_LIMIT: usize = 6;

pub struct HotZonesVm<'a> {
    pub zones: Vec<DemandZone>,
    pub city_stats: &'a [CityStats],
}

impl<'a> HotZonesVm<'a> {
    pub fn build(catalog: &'a Catalog) -> Self {
        HotZonesVm {
            zones: rank_by_demand(&catalog.properties),
            city_stats: &catalog.city_stats,
        }
    }

    fn total_listings(&self) -> usize {
        self.zones.iter().map(|z| z.listings).sum()
    }

    fn average_score(&self) -> f64 {
        if self.zones.is_empty() {
            return 0.0;
        }
        self.zones.iter().map(|z| z.score as f64).sum::<f64>() / self.zones.len() as f64
    }
}

fn intensity(rank: usize) -> (&'static str, &'static str) {
    if rank < 3 {
        ("high", "Very High Demand")
    } else if rank < 6 {
        ("medium", "High Demand")
    } else {
        ("low", "Moderate Demand")
    }
}

pub fn hot_zones_page(vm: &HotZonesVm) -> Markup {
    let chart_points: Vec<ChartPoint> = vm
        .zones
        .iter()
        .take(CHART_LIMIT)
        .map(|zone| {
            ChartPoint::new(
                zone.key.district.clone(),
                zone.score as f64,
                zone.score.to_string(),
            )
        })
        .collect();

    desktop_layout(
        "Hot Zones",
        "/hot-zones",
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Hot Zones" }
                    p class="subtitle" {
                        "High-demand locations with the most market activity."
                    }
                }

                div class="stat-grid" {
                    (stat_card(
                        "Hottest Zone",
                        vm.zones.first().map(|z| z.key.district.as_str()).unwrap_or("N/A"),
                        "Highest demand score",
                    ))
                    (stat_card(
                        "Peak Demand Score",
                        &vm.zones.first().map(|z| z.score.to_string()).unwrap_or_else(|| "0".to_string()),
                        "Top of the ranking",
                    ))
                    (stat_card(
                        "Listings Analyzed",
                        &vm.total_listings().to_string(),
                        "Across all districts",
                    ))
                    (stat_card(
                        "Avg Demand Score",
                        &format!("{:.0}", vm.average_score()),
                        "All zones",
                    ))
                }

                (card("Market Activity by Area", bar_chart(&chart_points)))

                section class="card" {
                    h2 { "High-Demand Areas Ranking" }
                    ol class="ranking" {
                        @for (rank, zone) in vm.zones.iter().enumerate() {
                            @let (level, label) = intensity(rank);
                            li class={ "ranking-row intensity-" (level) } {
                                div {
                                    h3 { (zone.key) }
                                    p class="muted" {
                                        (zone.listings) " active listings • Avg: "
                                        (fmt_usd(zone.average_price.round() as i64))
                                    }
                                }
                                div class="ranking-figures" {
                                    p class="ranking-price" { (zone.score) }
                                    p class="muted" { (label) }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h2 { "Market Activity by City" }
                    table class="city-table" {
                        thead {
                            tr { th { "City" } th { "Listings" } th { "Demand Score" } }
                        }
                        tbody {
                            @for city in vm.city_stats {
                                tr {
                                    td { (city.city) }
                                    td { (fmt_thousands(city.total_listings as i64)) }
                                    td { (city.demand_score) }
                                }
                            }
                        }
                    }
                }

                section class="card callout callout-info" {
                    h3 { "Market Intelligence" }
                    ul {
                        @for zone in vm.zones.iter().take(3) {
                            li {
                                strong { (zone.key.district) ": " }
                                (zone.score) " demand score"
                            }
                        }
                    }
                    p class="muted" {
                        "Areas with high demand scores indicate strong market activity "
                        "and good resale potential."
                    }
                }
            }
        },
    )
}
