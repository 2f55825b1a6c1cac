pub mod combustion;
pub mod dignities;
pub mod profections;
pub mod sect;

pub use combustion::{check_combust_cazimi, solar_proximity, SolarProximity, CAZIMI_ORB, COMBUST_ORB};
pub use dignities::{is_afflicted, DignitiesService, DignityType, AFFLICTION_THRESHOLD};
pub use profections::{age_on, house_theme, Profection, ProfectionCalculator};
pub use sect::{MaleficSeverity, Sect, SectInfo, SectResolver};
