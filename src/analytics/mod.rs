//! Pure transforms from the catalog into view-ready derived data.
//!
//! Everything in here is deterministic, side-effect free and cheap enough
//! to recompute on every request.

pub mod areas;
pub mod demand;
pub mod series;

pub use areas::{group_by_district, AreaKey, AreaRollup};
pub use demand::{demand_score, rank_by_demand, DemandZone};
pub use series::{
    city_series, merge_city_series, select_extremum, sequential_change, window_by_recency,
    Extremum, TrendPoint,
};
