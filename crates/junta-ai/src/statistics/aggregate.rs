use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::Submission;

/// Answer label to number of times it was chosen.
pub type AnswerCounts = BTreeMap<String, u64>;

/// Frequency table of answers per question across a set of submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    #[serde(rename = "total_respostas")]
    pub total_submissions: usize,
    #[serde(rename = "analise")]
    pub per_question: BTreeMap<String, AnswerCounts>,
}

impl AggregateStats {
    pub fn answers_for(&self, question_key: &str) -> Option<&AnswerCounts> {
        self.per_question.get(question_key)
    }

    /// Sums the counts of answers accepted by `predicate` across the given questions.
    /// Questions never answered are skipped.
    pub fn count_matching<P>(&self, question_keys: &[String], predicate: P) -> u64
    where
        P: Fn(&str) -> bool,
    {
        question_keys
            .iter()
            .filter_map(|key| self.per_question.get(key))
            .flat_map(|counts| counts.iter())
            .filter(|(label, _)| predicate(label.as_str()))
            .map(|(_, count)| *count)
            .sum()
    }

    /// Same as [`count_matching`](Self::count_matching) over every question seen.
    pub fn count_all_matching<P>(&self, predicate: P) -> u64
    where
        P: Fn(&str) -> bool,
    {
        self.per_question
            .values()
            .flat_map(|counts| counts.iter())
            .filter(|(label, _)| predicate(label.as_str()))
            .map(|(_, count)| *count)
            .sum()
    }
}

/// Full re-scan of `submissions`; order does not matter.
pub fn aggregate(submissions: &[Submission]) -> AggregateStats {
    let mut per_question: BTreeMap<String, AnswerCounts> = BTreeMap::new();

    for submission in submissions {
        for (question_key, answer) in &submission.answers {
            *per_question
                .entry(question_key.clone())
                .or_default()
                .entry(answer.clone())
                .or_insert(0) += 1;
        }
    }

    AggregateStats {
        total_submissions: submissions.len(),
        per_question,
    }
}
