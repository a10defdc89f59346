pub mod distribution;
pub mod normal;

pub use distribution::ContinuousDistribution;
pub use normal::Normal;
