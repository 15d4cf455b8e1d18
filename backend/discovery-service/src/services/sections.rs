//! Section assembly and the discovery service facade.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::catalog::Catalog;
use super::catalog_filter::{filter_by_proximity, DEFAULT_MAX_MONTHS, DEFAULT_RADIUS_KM};
use super::clock::Clock;
use super::ranking::{nearby_restaurants, new_restaurants, popular_restaurants, SECTION_LIMIT};
use crate::models::{Coordinate, Discovery, Restaurant, Section, SectionTitle};

/// Tunables for a discovery query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscoveryPolicy {
    pub radius_km: f64,
    pub section_limit: usize,
    pub new_max_months: i32,
}

impl Default for DiscoveryPolicy {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            section_limit: SECTION_LIMIT,
            new_max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

/// Builds the Popular, New and Nearby sections for `user`, in that order.
///
/// Empty sections are left out.
pub fn assemble_sections(
    restaurants: &[Restaurant],
    user: Coordinate,
    now: DateTime<Utc>,
    policy: &DiscoveryPolicy,
) -> Discovery {
    let nearby_set = filter_by_proximity(restaurants, user, policy.radius_km);

    let ranked = [
        (
            SectionTitle::Popular,
            popular_restaurants(&nearby_set, policy.section_limit),
        ),
        (
            SectionTitle::New,
            new_restaurants(&nearby_set, now, policy.new_max_months, policy.section_limit),
        ),
        (
            SectionTitle::Nearby,
            nearby_restaurants(&nearby_set, user, policy.section_limit),
        ),
    ];

    let sections: Vec<Section> = ranked
        .into_iter()
        .filter(|(_, list)| !list.is_empty())
        .map(|(title, list)| Section {
            title,
            restaurants: list.into_iter().cloned().collect(),
        })
        .collect();

    debug!(
        lon = user.lon,
        lat = user.lat,
        within_radius = nearby_set.len(),
        sections = sections.len(),
        "Discovery sections assembled"
    );

    Discovery { sections }
}

/// Answers discovery queries against an immutable catalog snapshot.
#[derive(Clone)]
pub struct DiscoveryService {
    catalog: Arc<Catalog>,
    policy: DiscoveryPolicy,
    clock: Arc<dyn Clock>,
}

impl DiscoveryService {
    pub fn new(catalog: Arc<Catalog>, policy: DiscoveryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            policy,
            clock,
        }
    }

    pub fn discover(&self, user: Coordinate) -> Discovery {
        assemble_sections(
            self.catalog.restaurants(),
            user,
            self.clock.now(),
            &self.policy,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::FixedClock;
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Restaurant `lat_offset` degrees north of the equator/meridian origin.
    fn restaurant(
        name: &str,
        lat_offset: f64,
        online: bool,
        popularity: f64,
        launch: NaiveDate,
    ) -> Restaurant {
        Restaurant {
            blurhash: String::new(),
            launch_date: launch,
            location: Coordinate::new(0.0, lat_offset),
            name: name.to_string(),
            online,
            popularity,
        }
    }

    fn old() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
    }

    fn discover_at_origin(catalog: &[Restaurant]) -> Discovery {
        assemble_sections(
            catalog,
            Coordinate::new(0.0, 0.0),
            now(),
            &DiscoveryPolicy::default(),
        )
    }

    fn titles(discovery: &Discovery) -> Vec<SectionTitle> {
        discovery.sections.iter().map(|s| s.title).collect()
    }

    fn names(section: &Section) -> Vec<&str> {
        section.restaurants.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog_has_no_sections() {
        let discovery = discover_at_origin(&[]);
        assert!(discovery.sections.is_empty());
    }

    #[test]
    fn test_isolated_user_has_no_sections() {
        let catalog = vec![restaurant("far", 1.0, true, 0.9, old())];
        let discovery = discover_at_origin(&catalog);
        assert!(discovery.sections.is_empty());
    }

    #[test]
    fn test_nearby_scenario_half_and_one_km() {
        // 0.0045 deg of latitude ~ 0.5 km
        let catalog = vec![
            restaurant("two-km", 0.018, true, 0.1, old()),
            restaurant("one-km", 0.009, true, 0.2, old()),
            restaurant("half-km", 0.0045, true, 0.3, old()),
        ];

        let discovery = discover_at_origin(&catalog);
        assert_eq!(titles(&discovery), vec![SectionTitle::Popular, SectionTitle::Nearby]);

        let nearby = discovery.section(SectionTitle::Nearby).unwrap();
        assert_eq!(names(nearby), vec!["half-km", "one-km"]);
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let recent = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let catalog = vec![
            restaurant("new", 0.001, true, 0.1, recent),
            restaurant("popular", 0.002, true, 0.9, old()),
        ];

        let discovery = discover_at_origin(&catalog);
        assert_eq!(
            titles(&discovery),
            vec![SectionTitle::Popular, SectionTitle::New, SectionTitle::Nearby]
        );
        assert_eq!(
            names(discovery.section(SectionTitle::Popular).unwrap()),
            vec!["popular", "new"]
        );
        assert_eq!(names(discovery.section(SectionTitle::New).unwrap()), vec!["new"]);
    }

    #[test]
    fn test_every_section_capped() {
        let catalog: Vec<Restaurant> = (0..25)
            .map(|i| {
                let launch = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
                restaurant(&format!("r{i}"), 0.0001 * i as f64, i % 3 != 0, i as f64, launch)
            })
            .collect();

        let discovery = discover_at_origin(&catalog);
        assert_eq!(discovery.sections.len(), 3);
        for section in &discovery.sections {
            assert_eq!(section.restaurants.len(), 10);
            assert!(section.restaurants.iter().all(|r| r.online));
        }
    }

    #[test]
    fn test_service_uses_injected_clock() {
        let launch = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let catalog = Arc::new(Catalog::new(vec![restaurant("fresh", 0.001, true, 0.5, launch)]));
        let user = Coordinate::new(0.0, 0.0);

        let in_june = DiscoveryService::new(
            catalog.clone(),
            DiscoveryPolicy::default(),
            Arc::new(FixedClock(now())),
        );
        assert!(in_june.discover(user).section(SectionTitle::New).is_some());

        let next_year = DiscoveryService::new(
            catalog,
            DiscoveryPolicy::default(),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())),
        );
        let discovery = next_year.discover(user);
        assert!(discovery.section(SectionTitle::New).is_none());
        assert_eq!(
            titles(&discovery),
            vec![SectionTitle::Popular, SectionTitle::Nearby]
        );
    }
}
