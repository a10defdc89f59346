pub mod distributions;
pub mod errors;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
