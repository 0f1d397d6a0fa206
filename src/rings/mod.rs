pub mod builder;
pub mod context;
pub mod poly;

pub use builder::RingContextBuilder;
pub use context::RingContext;
pub use poly::Poly;
