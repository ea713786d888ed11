use crate::domain::Property;
use crate::templates::components::{card, line_chart, ChartPoint};
use crate::templates::desktop_layout;
use crate::templates::format::{fmt_thousands, fmt_usd, fmt_usd_compact};
use maud::{html, Markup};

pub fn property_details_page(property: &Property) -> Markup {
    let history_points: Vec<ChartPoint> = property
        .price_history
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|point| {
            ChartPoint::new(
                point.month.clone(),
                point.price as f64,
                fmt_usd_compact(point.price as f64),
            )
        })
        .collect();

    desktop_layout(
        &property.title,
        "/",
        html! {
            main class="container" {
                p { a href="/" { "← Back to dashboard" } }

                div class="page-header" {
                    span class={ "badge badge-" (property.property_type.as_str()) } {
                        (property.property_type.label())
                    }
                    h1 { (property.title) }
                    p class="subtitle" { (property.district) ", " (property.city) }
                }

                section class="card" {
                    h2 { (fmt_usd(property.price)) }
                    p class="muted" {
                        "$" (fmt_thousands(property.price_per_sqm().round() as i64)) " per m²"
                    }
                    p { (property.description) }

                    dl class="property-facts" {
                        dt { "Area" }
                        dd { (property.area) " m²" }
                        @if let Some(bedrooms) = property.bedrooms {
                            dt { "Bedrooms" }
                            dd { (bedrooms) }
                        }
                        @if let Some(bathrooms) = property.bathrooms {
                            dt { "Bathrooms" }
                            dd { (bathrooms) }
                        }
                        @if let Some(year) = property.year_built {
                            dt { "Year Built" }
                            dd { (year) }
                        }
                        dt { "Listed" }
                        dd { (property.listed_date.format("%B %e, %Y")) }
                        dt { "Coordinates" }
                        dd { (property.coordinates.lat) ", " (property.coordinates.lng) }
                    }
                }

                @if !property.features.is_empty() {
                    section class="card" {
                        h2 { "Features" }
                        ul class="feature-tags" {
                            @for feature in &property.features {
                                li { (feature) }
                            }
                        }
                    }
                }

                @if !history_points.is_empty() {
                    (card("Asking Price History", line_chart(&history_points)))
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn renders_history_chart_only_when_present() {
        let catalog = Catalog::embedded().unwrap();

        let with_history = catalog.find_property("2").unwrap();
        let page = property_details_page(with_history).into_string();
        assert!(page.contains("Asking Price History"));

        let without_history = catalog.find_property("1").unwrap();
        let page = property_details_page(without_history).into_string();
        assert!(!page.contains("Asking Price History"));
    }

    #[test]
    fn commercial_listing_shows_no_bedroom_facts() {
        let catalog = Catalog::embedded().unwrap();
        let commercial = catalog.find_property("4").unwrap();
        let page = property_details_page(commercial).into_string();
        assert!(!page.contains("Bedrooms"));
        assert!(page.contains("Commercial"));
    }
}
