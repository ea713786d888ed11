use crate::analytics::{select_extremum, Extremum};
use crate::catalog::Catalog;
use crate::domain::SeasonalPoint;
use crate::templates::components::{bar_chart, card, line_chart, ChartPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_pct, fmt_signed_pct, fmt_usd, fmt_usd_compact};
use maud::{html, Markup};

pub struct BestTimeVm<'a> {
    pub seasonal: &'a [SeasonalPoint],
    pub best: &'a SeasonalPoint,
    pub worst: &'a SeasonalPoint,
}

impl<'a> BestTimeVm<'a> {
    /// `None` only on an empty seasonal table, which catalog validation
    /// rules out.
    pub fn build(catalog: &'a Catalog) -> Option<Self> {
        let best = select_extremum(&catalog.seasonal, |m| m.savings, Extremum::Max)?;
        let worst = select_extremum(&catalog.seasonal, |m| m.savings, Extremum::Min)?;
        Some(BestTimeVm {
            seasonal: &catalog.seasonal,
            best,
            worst,
        })
    }

    fn annual_variation(&self) -> f64 {
        self.best.savings - self.worst.savings
    }
}

pub fn best_time_page(vm: &BestTimeVm) -> Markup {
    let price_points: Vec<ChartPoint> = vm
        .seasonal
        .iter()
        .map(|m| ChartPoint::new(m.month.clone(), m.avg_price, fmt_usd_compact(m.avg_price)))
        .collect();

    let savings_points: Vec<ChartPoint> = vm
        .seasonal
        .iter()
        .map(|m| ChartPoint::new(m.month.clone(), m.savings, fmt_signed_pct(m.savings)))
        .collect();

    desktop_layout(
        "Best Time to Buy",
        "/best-time",
        html! {
            main class="container" {
                div class="page-header" {
                    h1 { "Best Time to Buy" }
                    p class="subtitle" {
                        "Seasonal analysis of the optimal timing for property purchases."
                    }
                }

                div class="stat-grid stat-grid-3" {
                    section class="card stat-card callout-success" {
                        p class="stat-title" { "Best Month to Buy" }
                        p class="stat-value accent-success" { (vm.best.month) }
                        p class="stat-description" {
                            "Save up to " (fmt_pct(vm.best.savings))
                        }
                    }
                    section class="card stat-card callout-danger" {
                        p class="stat-title" { "Most Expensive" }
                        p class="stat-value accent-danger" { (vm.worst.month) }
                        p class="stat-description" {
                            (fmt_pct(vm.worst.savings.abs())) " above average"
                        }
                    }
                    section class="card stat-card callout-info" {
                        p class="stat-title" { "Price Range" }
                        p class="stat-value accent-info" { (fmt_pct(vm.annual_variation())) }
                        p class="stat-description" { "Annual variation" }
                    }
                }

                (card("Average Prices by Month", bar_chart(&price_points)))
                (card("Potential Savings by Month", line_chart(&savings_points)))

                section class="card" {
                    h2 { "Detailed Monthly Analysis" }
                    ol class="ranking" {
                        @for month in vm.seasonal {
                            @let row_class = if month.month == vm.best.month {
                                "ranking-row highlight-success"
                            } else if month.month == vm.worst.month {
                                "ranking-row highlight-danger"
                            } else {
                                "ranking-row"
                            };
                            li class=(row_class) {
                                div {
                                    h3 { (month.month) }
                                    p class="muted" {
                                        @if month.month == vm.best.month { "Best time to buy" }
                                        @else if month.month == vm.worst.month { "Most expensive month" }
                                        @else { "Regular market period" }
                                    }
                                }
                                div class="ranking-figures" {
                                    p class="ranking-price" { (fmt_usd(month.avg_price.round() as i64)) }
                                    p class="muted" { (fmt_signed_pct(month.savings)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
