//! Combustion and cazimi: a planet close to the Sun is weakened (combust),
//! but one in the heart of the Sun is empowered (cazimi).

use crate::zodiac::angular_separation;

/// 17 arc-minutes.
pub const CAZIMI_ORB: f64 = 0.283;
pub const COMBUST_ORB: f64 = 8.5;

/// A planet's condition relative to the Sun. Cazimi and combust are
/// exclusive even though the cazimi orb lies inside the combust orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarProximity {
    Cazimi,
    Combust,
    Clear,
}

impl SolarProximity {
    pub fn is_combust(&self) -> bool {
        matches!(self, SolarProximity::Combust)
    }

    pub fn is_cazimi(&self) -> bool {
        matches!(self, SolarProximity::Cazimi)
    }
}

/// Classify a planet against the Sun. The caller never passes the Sun itself.
pub fn solar_proximity(planet_longitude: f64, sun_longitude: f64) -> SolarProximity {
    let diff = angular_separation(planet_longitude, sun_longitude);
    if diff <= CAZIMI_ORB {
        SolarProximity::Cazimi
    } else if diff <= COMBUST_ORB {
        SolarProximity::Combust
    } else {
        SolarProximity::Clear
    }
}

/// `(is_combust, is_cazimi)` for a planet against the Sun.
pub fn check_combust_cazimi(planet_longitude: f64, sun_longitude: f64) -> (bool, bool) {
    let proximity = solar_proximity(planet_longitude, sun_longitude);
    (proximity.is_combust(), proximity.is_cazimi())
}
