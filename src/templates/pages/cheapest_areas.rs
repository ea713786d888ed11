use crate::analytics::{group_by_district, AreaRollup};
use crate::catalog::Catalog;
use crate::domain::{PropertyType, PropertyTypeFilter};
use crate::templates::components::{bar_chart, card, ChartPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_thousands, fmt_usd, fmt_usd_compact};
use maud::{html, Markup};

/// Areas shown in the comparison chart; the ranking below lists them all.
const CHART_LIMIT: usize = 8;

pub struct CheapestAreasVm {
    pub filter: PropertyTypeFilter,
    pub areas: Vec<AreaRollup>,
}

impl CheapestAreasVm {
    pub fn build(catalog: &Catalog, filter_param: Option<&str>) -> Self {
        let filter = PropertyTypeFilter::parse(filter_param);
        CheapestAreasVm {
            filter,
            areas: group_by_district(&catalog.properties, filter),
        }
    }

    fn mean_across_areas(&self) -> f64 {
        if self.areas.is_empty() {
            return 0.0;
        }
        self.areas.iter().map(|a| a.average_price).sum::<f64>() / self.areas.len() as f64
    }

    fn properties_analyzed(&self) -> usize {
        self.areas.iter().map(|a| a.property_count).sum()
    }
}

const TYPE_OPTIONS: [(PropertyTypeFilter, &str); 4] = [
    (PropertyTypeFilter::All, "All Property Types"),
    (PropertyTypeFilter::Only(PropertyType::Apartment), "Apartments"),
    (PropertyTypeFilter::Only(PropertyType::House), "Houses"),
    (PropertyTypeFilter::Only(PropertyType::Commercial), "Commercial"),
];

pub fn cheapest_areas_page(vm: &CheapestAreasVm) -> Markup {
    let chart_points: Vec<ChartPoint> = vm
        .areas
        .iter()
        .take(CHART_LIMIT)
        .map(|area| {
            ChartPoint::new(
                area.key.district.clone(),
                area.average_price,
                fmt_usd_compact(area.average_price),
            )
        })
        .collect();

    desktop_layout(
        "Cheapest Areas",
        "/cheapest-areas",
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Cheapest Areas" }
                    p class="subtitle" {
                        "The most affordable districts and neighborhoods for property investment."
                    }
                }

                section class="card" {
                    h2 { "Filter by Property Type" }
                    form action="/cheapest-areas" method="get" class="filter-form" {
                        label for="property_type" class="sr-only" { "Property type" }
                        select name="property_type" id="property_type" {
                            @for (option, label) in TYPE_OPTIONS {
                                option value=(option.as_query_value()) selected[vm.filter == option] {
                                    (label)
                                }
                            }
                        }
                        button type="submit" { "Apply" }
                        a class="button-link"
                            href={ "/export?property_type=" (vm.filter.as_query_value()) } {
                            "Download XLSX"
                        }
                    }
                }

                (card("Average Prices by Area", bar_chart(&chart_points)))

                section class="card" {
                    h2 { "Most Affordable Areas Ranking" }
                    @if vm.areas.is_empty() {
                        p class="empty-note" { "No areas match the selected property type." }
                    } @else {
                        ol class="ranking" {
                            @for area in &vm.areas {
                                li class="ranking-row" {
                                    div {
                                        h3 { (area.key) }
                                        p class="muted" {
                                            (area.property_count)
                                            @if area.property_count == 1 { " property" } @else { " properties" }
                                            " • "
                                            (area.property_types
                                                .iter()
                                                .map(|t| t.as_str())
                                                .collect::<Vec<_>>()
                                                .join(", "))
                                        }
                                    }
                                    div class="ranking-figures" {
                                        p class="ranking-price" { (fmt_usd(area.average_price.round() as i64)) }
                                        p class="muted" { "$" (fmt_thousands(area.price_per_sqm.round() as i64)) "/m²" }
                                    }
                                }
                            }
                        }
                    }
                }

                @if let Some(cheapest) = vm.areas.first() {
                    div class="stat-grid stat-grid-3" {
                        section class="card stat-card" {
                            p class="stat-value accent-success" {
                                (fmt_usd(cheapest.average_price.round() as i64))
                            }
                            p class="stat-description" { "Most affordable area" }
                            p class="muted" { (cheapest.key) }
                        }
                        section class="card stat-card" {
                            p class="stat-value accent-info" {
                                (fmt_usd(vm.mean_across_areas().round() as i64))
                            }
                            p class="stat-description" { "Average across all areas" }
                        }
                        section class="card stat-card" {
                            p class="stat-value accent-warning" { (vm.properties_analyzed()) }
                            p class="stat-description" { "Total properties analyzed" }
                        }
                    }

                    section class="card callout callout-success" {
                        h3 { "Investment Insight" }
                        p {
                            strong { (cheapest.key) }
                            " offers the best value with an average price of "
                            strong { (fmt_usd(cheapest.average_price.round() as i64)) }
                            " across "
                            strong { (cheapest.property_count) }
                            @if cheapest.property_count == 1 { " available property." }
                            @else { " available properties." }
                        }
                    }
                }
            }
        },
    )
}
