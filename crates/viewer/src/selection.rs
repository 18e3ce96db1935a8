//! Shared selection and globe-settings state.
//!
//! The site keeps the selected build, the selected country/location, and
//! the globe display toggles in ambient context objects; here that maps to
//! an explicit hub holding each field behind its own `tokio::sync::watch`
//! channel. Components subscribe to exactly the fields they react to (the
//! carousel follows the location only) and read current values on demand.

use std::collections::{HashMap, HashSet};

use tokio::sync::watch;

use meridian_core::markers::{Marker, MarkerKind};

/// Snapshot of the selected country and location. Empty strings mean "none".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TravelSelection {
    pub country: String,
    pub location: String,
}

/// Globe display toggles. All default to off; turning the globe on is an
/// explicit user action because it is the expensive part of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobeSettings {
    /// When false the location dropdown is shown instead of the globe.
    pub show_globe: bool,
    /// Keep the globe mounted but visually collapsed.
    pub minimize: bool,
    pub hide_markers: bool,
    pub rotate: bool,
    pub show_atmosphere: bool,
    pub show_day_night: bool,
    pub show_shooting_star: bool,
    pub show_satellite: bool,
    pub high_quality: bool,
}

/// Owner of the shared selection state.
///
/// The update methods validate against the known names (derived from the
/// marker set and the build list) and clear the field when handed an
/// unknown value. Every update notifies that field's subscribers, including
/// updates that set the same value again -- reselecting a location restarts
/// the carousel flow.
pub struct SelectionHub {
    known_locations: HashSet<String>,
    known_countries: HashSet<String>,
    known_builds: HashSet<String>,
    /// Location name -> parent country, for convenience lookups.
    location_countries: HashMap<String, String>,
    location_tx: watch::Sender<String>,
    country_tx: watch::Sender<String>,
    build_tx: watch::Sender<String>,
    settings_tx: watch::Sender<GlobeSettings>,
}

impl SelectionHub {
    /// Build a hub whose known travel names come from the marker set (group
    /// markers contribute countries, city markers contribute locations) and
    /// whose known build names are given directly.
    pub fn new(markers: &[Marker], builds: impl IntoIterator<Item = String>) -> Self {
        let mut known_locations = HashSet::new();
        let mut known_countries = HashSet::new();
        let mut location_countries = HashMap::new();

        for marker in markers {
            match marker.kind {
                MarkerKind::Group => {
                    known_countries.insert(marker.name.clone());
                }
                MarkerKind::City => {
                    known_locations.insert(marker.name.clone());
                    if let Some(parent) = &marker.parent {
                        known_countries.insert(parent.clone());
                        location_countries.insert(marker.name.clone(), parent.clone());
                    }
                }
            }
        }

        let (location_tx, _) = watch::channel(String::new());
        let (country_tx, _) = watch::channel(String::new());
        let (build_tx, _) = watch::channel(String::new());
        let (settings_tx, _) = watch::channel(GlobeSettings::default());

        Self {
            known_locations,
            known_countries,
            known_builds: builds.into_iter().collect(),
            location_countries,
            location_tx,
            country_tx,
            build_tx,
            settings_tx,
        }
    }

    pub fn subscribe_location(&self) -> watch::Receiver<String> {
        self.location_tx.subscribe()
    }

    pub fn subscribe_country(&self) -> watch::Receiver<String> {
        self.country_tx.subscribe()
    }

    pub fn subscribe_build(&self) -> watch::Receiver<String> {
        self.build_tx.subscribe()
    }

    pub fn subscribe_settings(&self) -> watch::Receiver<GlobeSettings> {
        self.settings_tx.subscribe()
    }

    /// Current country/location pair.
    pub fn selection(&self) -> TravelSelection {
        TravelSelection {
            country: self.country_tx.borrow().clone(),
            location: self.location_tx.borrow().clone(),
        }
    }

    /// Currently selected build. Empty string means "none".
    pub fn build(&self) -> String {
        self.build_tx.borrow().clone()
    }

    pub fn settings(&self) -> GlobeSettings {
        *self.settings_tx.borrow()
    }

    /// Set the selected location, clearing it if the name is unknown.
    pub fn update_location(&self, location: &str) {
        let value = if self.known_locations.contains(location) {
            location.to_string()
        } else {
            String::new()
        };
        self.location_tx.send_replace(value);
    }

    /// Set the selected country, clearing it if the name is unknown.
    pub fn update_country(&self, country: &str) {
        let value = if self.known_countries.contains(country) {
            country.to_string()
        } else {
            String::new()
        };
        self.country_tx.send_replace(value);
    }

    /// Set the selected build, clearing it if the name is unknown.
    pub fn update_build(&self, build: &str) {
        let value = if self.known_builds.contains(build) {
            build.to_string()
        } else {
            String::new()
        };
        self.build_tx.send_replace(value);
    }

    /// Parent country of a known location, if the marker data named one.
    pub fn country_of(&self, location: &str) -> Option<&str> {
        self.location_countries.get(location).map(String::as_str)
    }

    /// Flip display toggles in place.
    pub fn update_settings(&self, apply: impl FnOnce(&mut GlobeSettings)) {
        self.settings_tx.send_modify(apply);
    }
}
