use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, test_catalog};

#[test]
fn dashboard_shows_stats_and_listings() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/").expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("Market Pulse Dashboard"));
    assert!(body.contains("Total Listings"));
    // 890 + 160 + 48 seeded listings across the three cities.
    assert!(body.contains("1,098"));
    assert!(body.contains("Luxury Penthouse Vake"));
}

#[test]
fn dashboard_search_narrows_results() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/?q=batumi").unwrap();
    let body = body_string(resp);

    assert!(body.contains("Beachfront Villa Batumi"));
    assert!(!body.contains("Family House Kutaisi"));
}

#[test]
fn dashboard_search_decodes_url_encoding() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/?q=Old+Town").unwrap();
    let body = body_string(resp);

    assert!(body.contains("Cozy House in Batumi Old Town"));
    assert!(!body.contains("Studio Apartment Vera"));
}

#[test]
fn trends_page_renders_for_every_filter_combination() {
    let catalog = test_catalog();
    for uri in [
        "/trends",
        "/trends?city=all&range=3months",
        "/trends?city=Tbilisi&range=6months",
        "/trends?city=Kutaisi&range=1year",
    ] {
        let resp = get(&catalog, uri).expect("Failed to handle request");
        assert_eq!(resp.status(), 200, "non-200 for {uri}");
        let body = body_string(resp);
        assert!(body.contains("Average Price Trend"), "missing chart on {uri}");
    }
}

#[test]
fn trends_unknown_city_behaves_like_all_cities() {
    let catalog = test_catalog();
    let unknown = body_string(get(&catalog, "/trends?city=Paris").unwrap());
    let all = body_string(get(&catalog, "/trends?city=all").unwrap());
    assert_eq!(unknown, all);
}

#[test]
fn cheapest_areas_ranks_ascending_and_filters() {
    let catalog = test_catalog();
    let body = body_string(get(&catalog, "/cheapest-areas").unwrap());

    // Gldani (46.5k average) leads the affordability ranking.
    assert!(body.contains("Gldani, Tbilisi"));
    assert!(body.contains("Most affordable area"));
    let gldani = body.find("Gldani, Tbilisi").unwrap();
    let boulevard = body.find("New Boulevard, Batumi").unwrap();
    assert!(gldani < boulevard, "cheapest area must be listed first");

    let commercial = body_string(get(&catalog, "/cheapest-areas?property_type=commercial").unwrap());
    assert!(commercial.contains("Vera, Tbilisi"));
    assert!(!commercial.contains("Gldani, Tbilisi"));
}

#[test]
fn cheapest_areas_unknown_filter_shows_everything() {
    let catalog = test_catalog();
    let unknown = body_string(get(&catalog, "/cheapest-areas?property_type=castle").unwrap());
    let all = body_string(get(&catalog, "/cheapest-areas?property_type=all").unwrap());
    assert_eq!(unknown, all);
}

#[test]
fn best_time_names_the_seasonal_extremes() {
    let catalog = test_catalog();
    let body = body_string(get(&catalog, "/best-time").unwrap());

    assert!(body.contains("Best Month to Buy"));
    assert!(body.contains("Dec"));
    assert!(body.contains("7.1%"));
    assert!(body.contains("May"));
    assert!(body.contains("6.5%"));
}

#[test]
fn hot_zones_ranks_demand_descending() {
    let catalog = test_catalog();
    let body = body_string(get(&catalog, "/hot-zones").unwrap());

    assert!(body.contains("High-Demand Areas Ranking"));
    let top = body.find("New Boulevard, Batumi").unwrap();
    let bottom = body.find("Isani, Tbilisi").unwrap();
    assert!(top < bottom, "highest-scoring zone must be listed first");
}

#[test]
fn insights_surfaces_headline_findings() {
    let catalog = test_catalog();
    let body = body_string(get(&catalog, "/insights").unwrap());

    assert!(body.contains("Best Investment Opportunity"));
    assert!(body.contains("Kutaisi"));
    assert!(body.contains("Dec is the best month to buy"));
    assert!(body.contains("Tbilisi has the highest demand score of 85"));
}

#[test]
fn property_details_route_round_trips() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/property?id=8").unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Beachfront Villa Batumi"));
    assert!(body.contains("Asking Price History"));
}

#[test]
fn property_details_missing_or_unknown_id() {
    let catalog = test_catalog();
    assert!(matches!(
        get(&catalog, "/property?id=999"),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        get(&catalog, "/property"),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn stylesheet_is_served_with_css_content_type() {
    let catalog = test_catalog();
    let resp = get(&catalog, "/static/main.css").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css"
    );
}

#[test]
fn unknown_route_is_not_found() {
    let catalog = test_catalog();
    assert!(matches!(
        get(&catalog, "/admin"),
        Err(ServerError::NotFound)
    ));
}
