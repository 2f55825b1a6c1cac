//! Annual profections: the ascendant advances one whole sign per year of
//! age, and the ruler of that sign becomes the Lord of the Year.

use crate::knowledge::KnowledgeBase;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Theme for each profected house, 1st through 12th.
pub const HOUSE_THEMES: [&str; 12] = [
    "Self, Identity, and New Beginnings",
    "Finances, Resources, and Values",
    "Communication, Learning, and Siblings",
    "Home, Family, and Foundations",
    "Creativity, Romance, and Joy",
    "Health, Work, and Daily Routines",
    "Partnerships and Relationships",
    "Transformation, Shared Resources, and Intimacy",
    "Travel, Philosophy, and Higher Learning",
    "Career, Reputation, and Public Image",
    "Friends, Networks, and Future Goals",
    "Spirituality, Solitude, and Hidden Matters",
];

pub const DEFAULT_HOUSE_THEME: &str = "General Life Themes";

/// Time lord used when the profected sign has no ruler in the knowledge base.
pub const DEFAULT_TIME_LORD: &str = "Sun";

/// Sign index used when the ascendant sign is not recognised (Aries).
pub const DEFAULT_ASCENDANT_INDEX: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profection {
    pub age: u32,
    /// Profected house (1-12), computed from age alone
    pub house: u8,
    pub profected_sign: String,
    pub time_lord: String,
    pub theme: String,
}

/// Completed years of age on `reference`, never negative.
pub fn age_on(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Theme label for a profected house.
pub fn house_theme(house: u8) -> &'static str {
    match house {
        1..=12 => HOUSE_THEMES[(house - 1) as usize],
        _ => DEFAULT_HOUSE_THEME,
    }
}

pub struct ProfectionCalculator<'a> {
    knowledge: &'a KnowledgeBase,
}

impl<'a> ProfectionCalculator<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Profect the ascendant to `reference`.
    ///
    /// The profected sign is `(ascendant index + age) mod 12`; the house is
    /// `(age mod 12) + 1`. The two are computed independently and only
    /// coincide for an Aries ascendant.
    pub fn profect(&self, birth: NaiveDate, reference: NaiveDate, ascendant_sign: &str) -> Profection {
        let age = age_on(birth, reference);

        let ascendant_index = match self.knowledge.sign_index(ascendant_sign) {
            Some(index) => index,
            None => {
                log::warn!("Unknown ascendant sign: {}, defaulting to Aries", ascendant_sign);
                DEFAULT_ASCENDANT_INDEX
            }
        };

        let profected_index = (ascendant_index + age as usize) % 12;
        let profected_sign = self.knowledge.sign_name(profected_index).to_string();
        let house = (age % 12) as u8 + 1;
        let time_lord = match self.knowledge.ruler_of(&profected_sign) {
            Some(ruler) => ruler.to_string(),
            None => {
                log::warn!("No ruler for {}, defaulting time lord to {}", profected_sign, DEFAULT_TIME_LORD);
                DEFAULT_TIME_LORD.to_string()
            }
        };

        log::debug!("Profections: age {}, house {}, time lord {}", age, house, time_lord);

        Profection {
            age,
            house,
            profected_sign,
            time_lord,
            theme: house_theme(house).to_string(),
        }
    }
}
