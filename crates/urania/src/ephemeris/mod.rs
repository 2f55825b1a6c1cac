pub mod types;

pub use types::{validate_bodies, BodyPosition, ChartSnapshot};
