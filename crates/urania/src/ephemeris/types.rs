use crate::error::ChartError;
use crate::zodiac::{self, SIGN_NAMES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One body's state as supplied by the ephemeris layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Body name ("Sun", "Moon", ..., "North Node")
    pub name: String,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day, negative = retrograde)
    pub speed: f64,
    /// Zodiac sign the body occupies
    pub sign: String,
    /// Whole-sign house (1-12)
    pub house: u8,
    /// Degree within the sign (0-30)
    pub sign_degree: f64,
}

impl BodyPosition {
    /// Derive sign, degree-within-sign, and whole-sign house from a longitude.
    pub fn from_longitude(name: &str, longitude: f64, speed: f64, ascendant_index: usize) -> Self {
        let longitude = zodiac::normalize_degrees(longitude);
        let (index, sign_degree) = zodiac::sign_for_longitude(longitude);
        Self {
            name: name.to_string(),
            longitude,
            speed,
            sign: SIGN_NAMES[index].to_string(),
            house: zodiac::whole_sign_house(index, ascendant_index),
            sign_degree,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }

    fn validate(&self) -> Result<(), ChartError> {
        if !self.longitude.is_finite() || !(0.0..360.0).contains(&self.longitude) {
            return Err(ChartError::LongitudeOutOfRange {
                body: self.name.clone(),
                value: self.longitude,
            });
        }
        if !self.speed.is_finite() {
            return Err(ChartError::NonFiniteSpeed {
                body: self.name.clone(),
            });
        }
        if !(1..=12).contains(&self.house) {
            return Err(ChartError::HouseOutOfRange {
                body: self.name.clone(),
                value: self.house,
            });
        }
        if !self.sign_degree.is_finite() || !(0.0..30.0).contains(&self.sign_degree) {
            return Err(ChartError::SignDegreeOutOfRange {
                body: self.name.clone(),
                value: self.sign_degree,
            });
        }
        Ok(())
    }
}

/// Check every body and reject duplicate names.
pub fn validate_bodies(bodies: &[BodyPosition]) -> Result<(), ChartError> {
    let mut seen = HashSet::new();
    for body in bodies {
        body.validate()?;
        if !seen.insert(body.name.as_str()) {
            return Err(ChartError::DuplicateBody(body.name.clone()));
        }
    }
    Ok(())
}

/// Complete natal snapshot for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// Bodies in ephemeris order; this order is kept in every output list
    pub planets: Vec<BodyPosition>,
    pub ascendant_sign: String,
    /// Ascendant degree within its sign (0-30)
    pub ascendant_degree: f64,
    /// True when the Sun is above the horizon
    pub is_day_chart: bool,
}

impl ChartSnapshot {
    pub fn body(&self, name: &str) -> Option<&BodyPosition> {
        self.planets.iter().find(|b| b.name == name)
    }

    pub fn sun(&self) -> Result<&BodyPosition, ChartError> {
        self.body("Sun")
            .ok_or_else(|| ChartError::MissingBody("Sun".to_string()))
    }

    /// Check the ephemeris contract: the Sun is present, every value is in
    /// range, and no body appears twice.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.ascendant_degree.is_finite() || !(0.0..30.0).contains(&self.ascendant_degree) {
            return Err(ChartError::AscendantDegreeOutOfRange(self.ascendant_degree));
        }
        validate_bodies(&self.planets)?;
        self.sun()?;
        Ok(())
    }
}
