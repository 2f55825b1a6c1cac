pub mod builder;
pub mod summary;
pub mod types;

pub use builder::{is_cusp, BuildOptions, CdoBuilder, DEFAULT_CUSP_THRESHOLD};
pub use summary::{render_activation, render_aspect, summarize};
pub use types::{CdoSummary, CosmicDataObject, PlanetPosition};
