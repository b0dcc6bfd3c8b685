use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::aggregate::{AggregateStats, AnswerCounts};
use super::categories::{category_breakdown, Category, CategoryBreakdown};
use super::round2;
use crate::questionnaire::Intensity;

/// Body of `GET /estatisticas`. Category analysis is omitted when there is
/// nothing to analyse.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    #[serde(flatten)]
    pub stats: AggregateStats,
    #[serde(
        rename = "analise_categorias",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<BTreeMap<Category, CategoryBreakdown>>,
}

impl StatisticsReport {
    pub fn from_stats(stats: AggregateStats) -> Self {
        let categories =
            (stats.total_submissions > 0).then(|| category_breakdown(&stats, &Category::ALL));
        Self { stats, categories }
    }
}

/// Body of `GET /estatisticas/pergunta/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBreakdown {
    pub pergunta_id: u8,
    pub respostas: AnswerCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentuais: Option<BTreeMap<String, f64>>,
    pub total: u64,
}

/// Share of each answer among the answers given to one question.
pub fn question_breakdown(stats: &AggregateStats, question_id: u8) -> QuestionBreakdown {
    let Some(counts) = stats.answers_for(&question_id.to_string()) else {
        return QuestionBreakdown {
            pergunta_id: question_id,
            respostas: AnswerCounts::new(),
            percentuais: None,
            total: 0,
        };
    };

    let total: u64 = counts.values().sum();
    let percentuais = counts
        .iter()
        .map(|(label, count)| {
            let share = if total == 0 {
                0.0
            } else {
                round2(*count as f64 / total as f64 * 100.0)
            };
            (label.clone(), share)
        })
        .collect();

    QuestionBreakdown {
        pergunta_id: question_id,
        respostas: counts.clone(),
        percentuais: Some(percentuais),
        total,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalEstimate {
    pub alto_risco: u64,
    pub medio_risco: u64,
    pub mensagem: &'static str,
}

fn level_in(levels: &'static [Intensity]) -> impl Fn(&str) -> bool {
    move |label| Intensity::from_label(label).is_some_and(|level| levels.contains(&level))
}

/// Body of `GET /estatisticas/resumo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatisticsSummary {
    Empty {
        total_respostas: usize,
        mensagem: &'static str,
    },
    Populated {
        total_respostas: usize,
        estimativa_sinais: SignalEstimate,
        ultima_atualizacao: NaiveDateTime,
    },
}

impl StatisticsSummary {
    /// High signals count `Always`-level answers; medium signals count the
    /// `Often` and `Sometimes` levels.
    pub fn from_stats(stats: &AggregateStats, now: NaiveDateTime) -> Self {
        if stats.total_submissions == 0 {
            return Self::Empty {
                total_respostas: 0,
                mensagem: "Ainda não há dados suficientes para análise",
            };
        }

        Self::Populated {
            total_respostas: stats.total_submissions,
            estimativa_sinais: SignalEstimate {
                alto_risco: stats.count_all_matching(level_in(&[Intensity::Always])),
                medio_risco: stats
                    .count_all_matching(level_in(&[Intensity::Often, Intensity::Sometimes])),
                mensagem: "Estes são dados agregados e não representam indivíduos específicos",
            },
            ultima_atualizacao: now,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub projeto: &'static str,
    pub descricao: &'static str,
    pub data_exportacao: NaiveDateTime,
    pub total_participantes: usize,
    pub aviso: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub total_respostas: usize,
    pub analise_respostas: BTreeMap<String, AnswerCounts>,
    pub categorias: BTreeMap<Category, CategoryBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReferences {
    pub lei_maria_penha: &'static str,
    pub oms: &'static str,
    pub forum_seguranca: &'static str,
}

/// Body of `GET /estatisticas/exportar`, shaped for academic use.
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub metadata: ExportMetadata,
    pub dados: ExportData,
    pub referencias: ExportReferences,
}

impl ExportReport {
    pub fn from_report(report: StatisticsReport, now: NaiveDateTime) -> Self {
        let StatisticsReport { stats, categories } = report;
        Self {
            metadata: ExportMetadata {
                projeto: "Junta AÍ",
                descricao: "Dados agregados e anônimos sobre violência em relacionamentos",
                data_exportacao: now,
                total_participantes: stats.total_submissions,
                aviso: "Todos os dados são completamente anônimos e agregados",
            },
            dados: ExportData {
                total_respostas: stats.total_submissions,
                analise_respostas: stats.per_question,
                categorias: categories.unwrap_or_default(),
            },
            referencias: ExportReferences {
                lei_maria_penha: "Lei 11.340/2006",
                oms: "Organização Mundial da Saúde - Dados sobre violência contra mulheres",
                forum_seguranca: "Fórum Brasileiro de Segurança Pública",
            },
        }
    }
}
