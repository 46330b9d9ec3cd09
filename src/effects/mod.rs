mod celebration;

pub use celebration::{Celebration, DEFAULT_CELEBRATION, Particle, fade_opacity};
