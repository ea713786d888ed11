pub mod market;
pub mod property;

pub use market::{CityStats, MarketDataPoint, SeasonalPoint};
pub use property::{Property, PropertyType, PropertyTypeFilter};
