pub mod best_time;
pub mod cheapest_areas;
pub mod dashboard;
pub mod hot_zones;
pub mod insights;
pub mod property_details;
pub mod trends;

pub use best_time::{best_time_page, BestTimeVm};
pub use cheapest_areas::{cheapest_areas_page, CheapestAreasVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use hot_zones::{hot_zones_page, HotZonesVm};
pub use insights::{insights_page, InsightsVm};
pub use property_details::property_details_page;
pub use trends::{trends_page, TimeRange, TrendsVm};
