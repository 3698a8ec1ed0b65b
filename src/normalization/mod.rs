mod logistic_normalizer;
mod min_max_normalizer;
mod normalizer;
mod normalizer_choice;
mod z_score_normalizer;

pub use logistic_normalizer::LogisticNormalizer;
pub use min_max_normalizer::MinMaxNormalizer;
pub use normalizer::Normalizer;
pub use normalizer_choice::{NoParams, NormalizerChoice, NormalizerKind};
pub use z_score_normalizer::ZScoreNormalizer;
