mod acklam;
pub mod normal;

pub use normal::{Normal, NormalParameters};
