pub mod sequence_rng;

pub use sequence_rng::SequenceRng;
