//! Order-preserving filters over a restaurant set.
//!
//! Every filter borrows its input and returns the survivors in input order.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::geo::distance_km;
use crate::models::{Coordinate, Restaurant};

pub const DEFAULT_RADIUS_KM: f64 = 1.5;
pub const DEFAULT_MAX_MONTHS: i32 = 4;

/// Keeps restaurants strictly closer than `radius_km` to `user`.
pub fn filter_by_proximity<'a, I>(
    restaurants: I,
    user: Coordinate,
    radius_km: f64,
) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| distance_km(restaurant.location, user) < radius_km)
        .collect()
}

pub fn partition_by_status<'a, I>(restaurants: I, online: bool) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    restaurants
        .into_iter()
        .filter(|restaurant| restaurant.online == online)
        .collect()
}

/// Whole calendar months from `launch` to `now`, ignoring the day of month.
///
/// Negative when `launch` falls in a later month than `now`.
pub fn months_between(launch: NaiveDate, now: NaiveDate) -> i32 {
    (now.year() - launch.year()) * 12 + (now.month() as i32 - launch.month() as i32)
}

/// Keeps restaurants launched at most `max_months` calendar months before `now`.
///
/// Launch dates in the future always pass.
pub fn filter_by_recency<'a, I>(
    restaurants: I,
    now: DateTime<Utc>,
    max_months: i32,
) -> Vec<&'a Restaurant>
where
    I: IntoIterator<Item = &'a Restaurant>,
{
    let today = now.date_naive();
    restaurants
        .into_iter()
        .filter(|restaurant| months_between(restaurant.launch_date, today) <= max_months)
        .collect()
}
