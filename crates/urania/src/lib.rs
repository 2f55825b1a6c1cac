//! Urania: the chart calculation engine behind astro cards.
//!
//! Turns one ephemeris snapshot into a Cosmic Data Object (CDO): annual
//! profections, essential dignity, sect, aspects with applying/separating
//! motion, combustion, and transits to the Lord of the Year.

pub mod error;
pub mod zodiac;
pub mod knowledge;
pub mod ephemeris;
pub mod western;
pub mod aspects;
pub mod cdo;

#[cfg(test)]
mod test_log;

pub use error::{ChartError, KnowledgeError};
pub use ephemeris::{BodyPosition, ChartSnapshot};
pub use knowledge::{KnowledgeBase, Remedy};
pub use cdo::{summarize, BuildOptions, CdoBuilder, CdoSummary, CosmicDataObject};
