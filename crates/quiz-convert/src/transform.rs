use std::collections::BTreeMap;

use quiz_core::model::{NormalizedAnswer, NormalizedQuiz, RawAnswer, RawQuiz, Tier};
use serde_json::Value;

use crate::classify::classify_quiz;
use crate::sequence::sequence;

/// A normalized quiz that still carries its source identifier. The source
/// identifier is a placeholder only; [`PendingQuiz::assign_id`] replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuiz {
    pub source_id: Option<Value>,
    pub title: Option<String>,
    pub theme: Option<String>,
    pub difficulty: Value,
    pub answers: Vec<NormalizedAnswer>,
}

impl PendingQuiz {
    /// Finalises the record under a tier-local identifier, discarding the
    /// source identifier.
    pub fn assign_id(self, id: u64) -> NormalizedQuiz {
        NormalizedQuiz {
            id,
            title: self.title,
            theme: self.theme,
            difficulty: self.difficulty,
            answers: self.answers,
        }
    }
}

pub fn normalize_answer(answer: &RawAnswer) -> NormalizedAnswer {
    NormalizedAnswer {
        name: answer.name.clone(),
        nationality: answer.nationality.clone(),
        hint: answer.hint.clone().unwrap_or_default(),
    }
}

/// Reduces a raw quiz to the exported field subset. The stored difficulty
/// is the source value, never the tier.
pub fn normalize(quiz: &RawQuiz) -> PendingQuiz {
    PendingQuiz {
        source_id: quiz.id.clone(),
        title: quiz.title.clone(),
        theme: quiz.theme.clone(),
        difficulty: quiz.difficulty_value(),
        answers: quiz.answers.iter().map(normalize_answer).collect(),
    }
}

/// Normalized quizzes grouped by tier, each group in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierGroups {
    groups: BTreeMap<Tier, Vec<PendingQuiz>>,
}

impl TierGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `quiz` and appends it to its tier's group.
    pub fn push(&mut self, quiz: &RawQuiz) -> Tier {
        let tier = classify_quiz(quiz);
        self.groups.entry(tier).or_default().push(normalize(quiz));
        tier
    }

    pub fn from_quizzes<'a, I>(quizzes: I) -> Self
    where
        I: IntoIterator<Item = &'a RawQuiz>,
    {
        let mut groups = Self::new();
        for quiz in quizzes {
            groups.push(quiz);
        }
        groups
    }

    pub fn group(&self, tier: Tier) -> &[PendingQuiz] {
        self.groups.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of records in each non-empty tier, easiest first.
    pub fn counts(&self) -> BTreeMap<Tier, usize> {
        self.groups
            .iter()
            .map(|(tier, group)| (*tier, group.len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Assigns tier-local identifiers to every group.
    pub fn into_sequenced(self) -> BTreeMap<Tier, Vec<NormalizedQuiz>> {
        self.groups
            .into_iter()
            .map(|(tier, group)| (tier, sequence(group)))
            .collect()
    }
}
