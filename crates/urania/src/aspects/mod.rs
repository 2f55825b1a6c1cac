pub mod activation;
pub mod calculator;
pub mod types;

pub use activation::{detect_time_lord_activations, Intensity, TimeLordActivation};
pub use calculator::{is_aspect_applying, AspectCalculator, DEFAULT_ORB_MULTIPLIER};
pub use types::{
    Aspect, AspectCore, AspectDefinition, AspectKind, AspectMatch, AspectNature, ASPECT_PRIORITY,
};
