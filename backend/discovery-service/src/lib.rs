pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Coordinate, Discovery, Restaurant, Section, SectionTitle};
pub use services::{Catalog, DiscoveryPolicy, DiscoveryService};
