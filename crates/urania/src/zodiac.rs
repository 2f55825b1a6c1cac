//! Zodiac ordering and ecliptic geometry shared by every calculator.

/// Tropical sign names in zodiacal order, starting from Aries.
pub const SIGN_NAMES: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer",
    "Leo", "Virgo", "Libra", "Scorpio",
    "Sagittarius", "Capricorn", "Aquarius", "Pisces",
];

/// Normalize any longitude into [0, 360).
pub fn normalize_degrees(longitude: f64) -> f64 {
    let normalized = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign index (0-11) and degree-within-sign for a longitude.
pub fn sign_for_longitude(longitude: f64) -> (usize, f64) {
    let normalized = normalize_degrees(longitude);
    let index = ((normalized / 30.0) as usize).min(11);
    (index, normalized - index as f64 * 30.0)
}

/// Position of a sign name in the built-in ordering.
pub fn sign_index(sign: &str) -> Option<usize> {
    SIGN_NAMES.iter().position(|name| *name == sign)
}

/// Whole-sign house (1-12) of `sign_index` counted from the ascendant's sign.
pub fn whole_sign_house(sign_index: usize, ascendant_index: usize) -> u8 {
    ((sign_index % 12 + 12 - ascendant_index % 12) % 12 + 1) as u8
}

/// Angular separation reflected into [0, 180].
///
/// Takes the raw absolute difference and folds it once, so inputs are
/// expected to already lie in [0, 360).
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (lon1 - lon2).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Lunar and solar nodes never take part in aspects or the planet list.
pub fn is_node(body: &str) -> bool {
    body.contains("Node")
}

/// Round to two decimal places, halves to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_for_longitude() {
        assert_eq!(sign_for_longitude(0.0), (0, 0.0));
        let (idx, deg) = sign_for_longitude(135.5);
        assert_eq!(idx, 4); // Leo
        assert!((deg - 15.5).abs() < 1e-9);
        let (idx, _) = sign_for_longitude(-10.0);
        assert_eq!(idx, 11); // Pisces
    }

    #[test]
    fn test_whole_sign_house() {
        // Leo rising: Leo is the 1st, Sagittarius the 5th, Cancer the 12th
        assert_eq!(whole_sign_house(4, 4), 1);
        assert_eq!(whole_sign_house(8, 4), 5);
        assert_eq!(whole_sign_house(3, 4), 12);
    }

    #[test]
    fn test_angular_separation_reflects() {
        assert_eq!(angular_separation(90.0, 0.0), 90.0);
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(10.0, 190.0), 180.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(4.996), 5.0);
    }

    #[test]
    fn test_is_node() {
        assert!(is_node("North Node"));
        assert!(is_node("Mean_Node"));
        assert!(!is_node("Moon"));
    }
}
