// Position scoring
//
// Only mobility is scored: how many moves each side has, weighted per
// piece kind.

mod mobility;

#[cfg(test)]
mod tests;

pub use mobility::{MobilityEvaluator, MobilityWeights, TEMPO_BONUS};
