//! Ranking pipelines for the Popular, New and Nearby sections.
//!
//! All three share one policy: online restaurants ranked first, offline
//! restaurants appended only while the list is shorter than the limit, then
//! truncated to the limit. Sorting is stable, so ties keep their input order.

use chrono::{DateTime, Utc};

use super::catalog_filter::{filter_by_recency, partition_by_status};
use super::geo::distance_km;
use crate::models::{Coordinate, Restaurant};

pub const SECTION_LIMIT: usize = 10;

fn rank_in_tiers<'a, S>(candidates: &[&'a Restaurant], limit: usize, sort: S) -> Vec<&'a Restaurant>
where
    S: Fn(&mut [&'a Restaurant]),
{
    let mut ranked = partition_by_status(candidates.iter().copied(), true);
    sort(ranked.as_mut_slice());

    if ranked.len() < limit {
        let mut fallback = partition_by_status(candidates.iter().copied(), false);
        sort(fallback.as_mut_slice());
        ranked.extend(fallback);
    }

    ranked.truncate(limit);
    ranked
}

/// Highest popularity first.
pub fn popular_restaurants<'a>(candidates: &[&'a Restaurant], limit: usize) -> Vec<&'a Restaurant> {
    rank_in_tiers(candidates, limit, |tier| {
        tier.sort_by(|a, b| b.popularity.total_cmp(&a.popularity))
    })
}

/// Newest launch first, among restaurants launched within `max_months` of `now`.
///
/// The recency filter runs before the status split, so offline fallbacks are
/// recent too.
pub fn new_restaurants<'a>(
    candidates: &[&'a Restaurant],
    now: DateTime<Utc>,
    max_months: i32,
    limit: usize,
) -> Vec<&'a Restaurant> {
    let recent = filter_by_recency(candidates.iter().copied(), now, max_months);
    rank_in_tiers(&recent, limit, |tier| {
        tier.sort_by(|a, b| b.launch_date.cmp(&a.launch_date))
    })
}

/// Closest to `user` first.
pub fn nearby_restaurants<'a>(
    candidates: &[&'a Restaurant],
    user: Coordinate,
    limit: usize,
) -> Vec<&'a Restaurant> {
    rank_in_tiers(candidates, limit, |tier: &mut [&'a Restaurant]| {
        let mut keyed: Vec<(f64, &'a Restaurant)> = tier
            .iter()
            .map(|restaurant| (distance_km(restaurant.location, user), *restaurant))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (slot, (_, restaurant)) in tier.iter_mut().zip(keyed) {
            *slot = restaurant;
        }
    })
}
