use super::bank::QuestionBank;
use super::Answers;

/// Reasons a raw answer map is rejected. Messages are shown to respondents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Esperado {expected} respostas, recebido {received}")]
    WrongCount { expected: usize, received: usize },
    #[error("Falta resposta para pergunta {0}")]
    MissingAnswer(u8),
    #[error("Resposta inválida para pergunta {0}")]
    InvalidAnswer(u8),
}

/// Checks that every question is answered exactly once, whatever the label.
pub fn check_complete(bank: &QuestionBank, answers: &Answers) -> Result<(), ValidationError> {
    if answers.len() != bank.len() {
        return Err(ValidationError::WrongCount {
            expected: bank.len(),
            received: answers.len(),
        });
    }

    match bank
        .questions()
        .iter()
        .find(|question| !answers.contains_key(&question.key()))
    {
        Some(question) => Err(ValidationError::MissingAnswer(question.id)),
        None => Ok(()),
    }
}

/// Completeness plus option membership on each question's own scale.
pub fn validate(bank: &QuestionBank, answers: &Answers) -> Result<(), ValidationError> {
    check_complete(bank, answers)?;

    match bank.questions().iter().find(|question| {
        answers
            .get(&question.key())
            .is_some_and(|answer| !question.scale.contains(answer))
    }) {
        Some(question) => Err(ValidationError::InvalidAnswer(question.id)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_answers(bank: &QuestionBank) -> Answers {
        bank.questions()
            .iter()
            .map(|question| (question.key(), question.options()[0].to_string()))
            .collect()
    }

    #[test]
    fn accepts_complete_valid_answers() {
        let bank = QuestionBank::standard();
        assert_eq!(validate(&bank, &complete_answers(&bank)), Ok(()));
    }

    #[test]
    fn rejects_eleven_answers() {
        let bank = QuestionBank::standard();
        let mut answers = complete_answers(&bank);
        answers.remove("12");

        let err = validate(&bank, &answers).expect_err("one answer missing");
        assert_eq!(
            err,
            ValidationError::WrongCount {
                expected: 12,
                received: 11
            }
        );
        assert_eq!(err.to_string(), "Esperado 12 respostas, recebido 11");
    }

    #[test]
    fn rejects_value_outside_options() {
        let bank = QuestionBank::standard();
        let mut answers = complete_answers(&bank);
        answers.insert("1".to_string(), "Maybe".to_string());

        let err = validate(&bank, &answers).expect_err("invalid option");
        assert_eq!(err, ValidationError::InvalidAnswer(1));
        assert_eq!(err.to_string(), "Resposta inválida para pergunta 1");
    }

    #[test]
    fn rejects_label_from_the_other_scale() {
        let bank = QuestionBank::standard();
        let mut answers = complete_answers(&bank);
        answers.insert("4".to_string(), "Sempre".to_string());

        assert_eq!(
            validate(&bank, &answers),
            Err(ValidationError::InvalidAnswer(4))
        );
    }

    #[test]
    fn completeness_ignores_labels() {
        let bank = QuestionBank::standard();
        let mut answers = complete_answers(&bank);
        answers.insert("4".to_string(), "Sempre".to_string());
        answers.insert("9".to_string(), "Maybe".to_string());

        assert_eq!(check_complete(&bank, &answers), Ok(()));
    }

    #[test]
    fn completeness_reports_count_before_keys() {
        let bank = QuestionBank::standard();
        let mut answers = complete_answers(&bank);
        answers.remove("3");

        assert_eq!(
            check_complete(&bank, &answers),
            Err(ValidationError::WrongCount {
                expected: 12,
                received: 11
            })
        );

        answers.insert("42".to_string(), "Nunca".to_string());
        assert_eq!(
            check_complete(&bank, &answers),
            Err(ValidationError::MissingAnswer(3))
        );
    }

    #[test]
    fn rejects_right_count_with_unknown_key() {
        let bank = QuestionBank::standard();
        let mut answers = complete_answers(&bank);
        answers.remove("7");
        answers.insert("13".to_string(), "Nunca".to_string());

        assert_eq!(
            validate(&bank, &answers),
            Err(ValidationError::MissingAnswer(7))
        );
    }
}
