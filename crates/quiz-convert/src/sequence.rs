use quiz_core::model::NormalizedQuiz;

use crate::transform::PendingQuiz;

/// Renumbers one tier's group 1..=len in its current order, overwriting
/// whatever identifier each record came with.
pub fn sequence(group: Vec<PendingQuiz>) -> Vec<NormalizedQuiz> {
    group
        .into_iter()
        .zip(1u64..)
        .map(|(quiz, id)| quiz.assign_id(id))
        .collect()
}
