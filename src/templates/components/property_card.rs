use crate::domain::Property;
use crate::templates::format::{fmt_thousands, fmt_usd};
use maud::{html, Markup};

pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="card property-card" {
            div class="property-card-header" {
                span class={ "badge badge-" (property.property_type.as_str()) } {
                    (property.property_type.label())
                }
                span class="property-price" { (fmt_usd(property.price)) }
            }
            h3 {
                a href={ "/property?id=" (property.id) } { (property.title) }
            }
            p class="property-location" { (property.district) ", " (property.city) }
            ul class="property-specs" {
                li { (property.area) " m²" }
                @if let Some(bedrooms) = property.bedrooms {
                    li { (bedrooms) " bed" }
                }
                @if let Some(bathrooms) = property.bathrooms {
                    li { (bathrooms) " bath" }
                }
                li { "$" (fmt_thousands(property.price_per_sqm().round() as i64)) "/m²" }
            }
        }
    }
}
