use quiz_core::model::{RawQuiz, Tier};

/// Maps a raw integer difficulty to its tier.
///
/// Levels 2 and 3 share the `easy` tier. Anything outside 1..=6 falls back
/// to `medium`.
pub fn classify(level: i64) -> Tier {
    match level {
        1 => Tier::VeryEasy,
        2 | 3 => Tier::Easy,
        4 => Tier::Medium,
        5 => Tier::Hard,
        6 => Tier::VeryHard,
        _ => Tier::Medium,
    }
}

/// Tier of a raw quiz. A missing difficulty counts as the default level; a
/// difficulty that is present but not an integral number goes to `medium`.
pub fn classify_quiz(quiz: &RawQuiz) -> Tier {
    quiz.effective_level().map_or(Tier::Medium, classify)
}
