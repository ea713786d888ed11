use crate::catalog::Catalog;
use crate::domain::PropertyTypeFilter;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{css_response, html_response};
use crate::spreadsheets::export_properties_xlsx;
use crate::templates::pages::{
    best_time_page, cheapest_areas_page, dashboard_page, hot_zones_page, insights_page,
    property_details_page, trends_page, BestTimeVm, CheapestAreasVm, DashboardVm, HotZonesVm,
    InsightsVm, TrendsVm,
};
use astra::Request;
use std::collections::HashMap;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => {
            let query = params.get("q").map(String::as_str).unwrap_or("");
            let vm = DashboardVm::build(catalog, query);
            html_response(dashboard_page(&vm))
        }

        ("GET", "/trends") => {
            let vm = TrendsVm::build(
                catalog,
                params.get("city").map(String::as_str),
                params.get("range").map(String::as_str),
            );
            html_response(trends_page(&vm))
        }

        ("GET", "/cheapest-areas") => {
            let vm =
                CheapestAreasVm::build(catalog, params.get("property_type").map(String::as_str));
            html_response(cheapest_areas_page(&vm))
        }

        ("GET", "/best-time") => {
            let vm = BestTimeVm::build(catalog).ok_or(ServerError::InternalError)?;
            html_response(best_time_page(&vm))
        }

        ("GET", "/hot-zones") => {
            let vm = HotZonesVm::build(catalog);
            html_response(hot_zones_page(&vm))
        }

        ("GET", "/insights") => {
            let vm = InsightsVm::build(catalog).ok_or(ServerError::InternalError)?;
            html_response(insights_page(&vm))
        }

        ("GET", "/property") => {
            let id = params
                .get("id")
                .ok_or_else(|| ServerError::BadRequest("Missing property id".to_string()))?;
            let property = catalog.find_property(id).ok_or(ServerError::NotFound)?;
            html_response(property_details_page(property))
        }

        ("GET", "/export") => {
            let filter = PropertyTypeFilter::parse(params.get("property_type").map(String::as_str));
            let selection: Vec<_> = catalog
                .properties
                .iter()
                .filter(|p| filter.matches(p.property_type))
                .collect();
            export_properties_xlsx(&selection, filter.as_query_value())
        }

        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}
