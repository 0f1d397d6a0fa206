pub mod rounding;
pub mod sampling;

pub use rounding::round_div;
pub use sampling::{gaussian_poly, session_rng, ternary_poly, uniform_poly};
