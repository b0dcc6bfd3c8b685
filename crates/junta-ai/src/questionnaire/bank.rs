use serde::Serialize;

/// Ordered answer level shared by every scale in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl Intensity {
    const LEVELS: [Intensity; 5] = [
        Intensity::Never,
        Intensity::Rarely,
        Intensity::Sometimes,
        Intensity::Often,
        Intensity::Always,
    ];

    pub const fn points(self) -> u32 {
        match self {
            Self::Never => 0,
            Self::Rarely => 1,
            Self::Sometimes => 2,
            Self::Often => 3,
            Self::Always => 4,
        }
    }

    /// Levels counted as warning signs in aggregate reports.
    pub const fn is_concerning(self) -> bool {
        matches!(self, Self::Often | Self::Always)
    }

    /// Resolves a label from any scale. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        AnswerScale::ALL
            .iter()
            .find_map(|scale| scale.intensity_of(label))
    }
}

/// Wording used for a question's options, from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerScale {
    /// How often a behaviour happens.
    Frequency,
    /// How many times an event happened.
    Occurrence,
}

impl AnswerScale {
    pub const ALL: [AnswerScale; 2] = [AnswerScale::Frequency, AnswerScale::Occurrence];

    pub const fn labels(self) -> [&'static str; 5] {
        match self {
            Self::Frequency => ["Nunca", "Raramente", "Às vezes", "Frequentemente", "Sempre"],
            Self::Occurrence => [
                "Nunca",
                "Uma vez",
                "Poucas vezes",
                "Várias vezes",
                "Constantemente",
            ],
        }
    }

    pub fn intensity_of(self, label: &str) -> Option<Intensity> {
        self.labels()
            .iter()
            .position(|candidate| *candidate == label)
            .map(|index| Intensity::LEVELS[index])
    }

    pub fn contains(self, label: &str) -> bool {
        self.intensity_of(label).is_some()
    }
}

/// A multiple-choice screening question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub scale: AnswerScale,
}

impl Question {
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    pub fn options(&self) -> [&'static str; 5] {
        self.scale.labels()
    }

    pub fn to_view(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            texto: self.text,
            tipo: "multipla",
            opcoes: self.options().to_vec(),
        }
    }
}

/// Wire representation served by `GET /perguntas`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: u8,
    pub texto: &'static str,
    pub tipo: &'static str,
    pub opcoes: Vec<&'static str>,
}

/// Fixed, ordered set of questions defined at startup.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        use AnswerScale::{Frequency, Occurrence};

        let definitions: [(&'static str, AnswerScale); 12] = [
            (
                "Seu parceiro(a) te critica constantemente ou diminui suas conquistas?",
                Frequency,
            ),
            (
                "Você sente medo de expressar suas opiniões ou vontades?",
                Frequency,
            ),
            (
                "Seu parceiro(a) controla suas redes sociais, mensagens ou quem você pode ver?",
                Frequency,
            ),
            (
                "Já sofreu agressão física (empurrões, tapas, socos)?",
                Occurrence,
            ),
            (
                "Seu parceiro(a) controla o dinheiro que você ganha ou impede que trabalhe?",
                Frequency,
            ),
            (
                "Você já foi forçada(o) a ter relações sexuais contra sua vontade?",
                Occurrence,
            ),
            (
                "Seu parceiro(a) te ameaça ou ameaça pessoas próximas a você?",
                Frequency,
            ),
            (
                "Você se sente isolada(o) de amigos e familiares por causa do relacionamento?",
                Frequency,
            ),
            (
                "Seu parceiro(a) culpa você pelos problemas do relacionamento ou por suas atitudes violentas?",
                Frequency,
            ),
            (
                "Você tem ferimentos físicos que tenta esconder dos outros?",
                Frequency,
            ),
            (
                "Sente que está \"pisando em ovos\" ao redor de seu parceiro(a)?",
                Frequency,
            ),
            (
                "Já pensou em pedir ajuda mas teve medo das consequências?",
                Frequency,
            ),
        ];

        let questions = definitions
            .into_iter()
            .zip(1u8..)
            .map(|((text, scale), id)| Question { id, text, scale })
            .collect();

        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u8) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Looks up a question by the string key used in answer maps.
    pub fn by_key(&self, key: &str) -> Option<&Question> {
        key.trim().parse::<u8>().ok().and_then(|id| self.get(id))
    }

    pub fn views(&self) -> Vec<QuestionView> {
        self.questions.iter().map(Question::to_view).collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_twelve_sequential_questions() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 12);
        let ids: Vec<u8> = bank.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn physical_and_sexual_questions_use_occurrence_scale() {
        let bank = QuestionBank::standard();
        for question in bank.questions() {
            let expected = if matches!(question.id, 4 | 6) {
                AnswerScale::Occurrence
            } else {
                AnswerScale::Frequency
            };
            assert_eq!(question.scale, expected, "question {}", question.id);
        }
    }

    #[test]
    fn labels_resolve_across_scales() {
        assert_eq!(Intensity::from_label("Sempre"), Some(Intensity::Always));
        assert_eq!(
            Intensity::from_label("Constantemente"),
            Some(Intensity::Always)
        );
        assert_eq!(Intensity::from_label("Várias vezes"), Some(Intensity::Often));
        assert_eq!(Intensity::from_label("Nunca"), Some(Intensity::Never));
        assert_eq!(Intensity::from_label("sempre"), None);
    }

    #[test]
    fn view_lists_options_in_order() {
        let bank = QuestionBank::standard();
        let view = bank.get(4).expect("question 4").to_view();
        assert_eq!(view.tipo, "multipla");
        assert_eq!(view.opcoes.first(), Some(&"Nunca"));
        assert_eq!(view.opcoes.last(), Some(&"Constantemente"));
    }

    #[test]
    fn by_key_ignores_unknown_and_malformed_ids() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.by_key("7").map(|q| q.id), Some(7));
        assert!(bank.by_key("13").is_none());
        assert!(bank.by_key("seven").is_none());
    }
}
