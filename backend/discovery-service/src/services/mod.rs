//! Discovery core.
//!
//! Geodistance, catalog filters and the three ranking pipelines are pure
//! functions over borrowed restaurants. `DiscoveryService` ties them to a
//! catalog snapshot and a clock.

pub mod catalog;
pub mod catalog_filter;
pub mod clock;
pub mod geo;
pub mod ranking;
pub mod sections;

pub use catalog::{Catalog, CatalogError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use sections::{assemble_sections, DiscoveryPolicy, DiscoveryService};
