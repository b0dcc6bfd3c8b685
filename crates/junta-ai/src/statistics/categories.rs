use std::collections::BTreeMap;

use serde::Serialize;

use super::aggregate::AggregateStats;
use super::round2;
use crate::questionnaire::Intensity;

/// Semantic grouping of questions used in aggregate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "psicologica")]
    Psychological,
    #[serde(rename = "fisica")]
    Physical,
    #[serde(rename = "controle")]
    Control,
    #[serde(rename = "sexual")]
    Sexual,
    #[serde(rename = "ameaca")]
    Threat,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Psychological,
        Self::Physical,
        Self::Control,
        Self::Sexual,
        Self::Threat,
    ];

    pub const fn question_ids(self) -> &'static [u8] {
        match self {
            Self::Psychological => &[1, 2, 9, 11],
            Self::Physical => &[4, 10],
            Self::Control => &[3, 5, 8],
            Self::Sexual => &[6],
            Self::Threat => &[7, 12],
        }
    }

    fn question_keys(self) -> Vec<String> {
        self.question_ids().iter().map(u8::to_string).collect()
    }
}

/// Concerning answers within one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    #[serde(rename = "total_respostas_preocupantes")]
    pub count: u64,
    #[serde(rename = "percentual")]
    pub percentage: f64,
}

/// True for answers at the "often" level or above on either scale.
pub(crate) fn is_concerning(label: &str) -> bool {
    Intensity::from_label(label).is_some_and(Intensity::is_concerning)
}

/// Share of concerning answers per category over `total × questions in category`.
/// Zero submissions yields 0 for every category.
pub fn category_breakdown(
    stats: &AggregateStats,
    categories: &[Category],
) -> BTreeMap<Category, CategoryBreakdown> {
    categories
        .iter()
        .map(|&category| {
            let keys = category.question_keys();
            let count = stats.count_matching(&keys, is_concerning);
            let slots = stats.total_submissions * keys.len();
            let percentage = if slots == 0 {
                0.0
            } else {
                round2(count as f64 / slots as f64 * 100.0)
            };
            (category, CategoryBreakdown { count, percentage })
        })
        .collect()
}
