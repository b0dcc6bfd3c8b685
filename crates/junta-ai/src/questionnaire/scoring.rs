use serde::Serialize;

use super::bank::Intensity;
use super::Answers;

const HIGH_RISK_THRESHOLD: u32 = 30;
const MEDIUM_RISK_THRESHOLD: u32 = 15;

/// Risk classification derived from a submission's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTier {
    #[serde(rename = "baixo")]
    Low,
    #[serde(rename = "medio")]
    Medium,
    #[serde(rename = "alto")]
    High,
}

impl RiskTier {
    pub const fn from_points(points: u32) -> Self {
        if points >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if points >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "baixo",
            Self::Medium => "medio",
            Self::High => "alto",
        }
    }

    pub const fn advisory(self) -> &'static str {
        match self {
            Self::High => "Seus resultados indicam sinais significativos de violência. Considere buscar ajuda imediatamente.",
            Self::Medium => "Seus resultados indicam alguns sinais preocupantes. Recomendamos conversar com alguém de confiança.",
            Self::Low => "Seus resultados indicam sinais baixos de violência.",
        }
    }
}

/// Outcome of scoring one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    #[serde(rename = "nivel_risco")]
    pub tier: RiskTier,
    #[serde(rename = "mensagem")]
    pub message: &'static str,
    #[serde(rename = "pontuacao")]
    pub points: u32,
}

/// Stateless scorer. Every answered label counts by its intensity on either
/// scale, regardless of which question it was given for.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Unrecognized labels (including casing mismatches) contribute nothing.
    pub fn score(&self, answers: &Answers) -> RiskAssessment {
        let points: u32 = answers
            .values()
            .filter_map(|label| Intensity::from_label(label))
            .map(Intensity::points)
            .sum();

        let tier = RiskTier::from_points(points);
        RiskAssessment {
            tier,
            message: tier.advisory(),
            points,
        }
    }
}
