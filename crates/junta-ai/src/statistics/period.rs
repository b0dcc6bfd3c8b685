use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};

use crate::store::Submission;

/// Window of submissions considered by `GET /estatisticas?periodo=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingPeriod {
    Week,
    Month,
    Year,
    #[default]
    Total,
}

impl ReportingPeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "semana",
            Self::Month => "mes",
            Self::Year => "ano",
            Self::Total => "total",
        }
    }

    const fn window_days(self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Year => Some(365),
            Self::Total => None,
        }
    }

    /// Earliest timestamp still inside the window, `None` for the whole history.
    pub fn cutoff(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        self.window_days().map(|days| now - Duration::days(days))
    }

    pub fn filter(self, submissions: Vec<Submission>, now: NaiveDateTime) -> Vec<Submission> {
        match self.cutoff(now) {
            Some(cutoff) => submissions
                .into_iter()
                .filter(|submission| submission.timestamp >= cutoff)
                .collect(),
            None => submissions,
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Período inválido: '{0}' (use semana, mes, ano ou total)")]
pub struct ParsePeriodError(pub String);

impl FromStr for ReportingPeriod {
    type Err = ParsePeriodError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "semana" => Ok(Self::Week),
            "mes" | "mês" => Ok(Self::Month),
            "ano" => Ok(Self::Year),
            "total" | "" => Ok(Self::Total),
            _ => Err(ParsePeriodError(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::Answers;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, day)
            .and_then(|date| date.and_hms_opt(10, 0, 0))
            .expect("valid timestamp")
    }

    fn submission(id: u64, timestamp: NaiveDateTime) -> Submission {
        Submission {
            id,
            answers: Answers::new(),
            timestamp,
        }
    }

    #[test]
    fn parses_known_periods() {
        assert_eq!("semana".parse(), Ok(ReportingPeriod::Week));
        assert_eq!("MES".parse(), Ok(ReportingPeriod::Month));
        assert_eq!("ano".parse(), Ok(ReportingPeriod::Year));
        assert_eq!("total".parse(), Ok(ReportingPeriod::Total));
        assert!("decada".parse::<ReportingPeriod>().is_err());
    }

    #[test]
    fn week_excludes_older_submissions() {
        let now = at(30);
        let kept = ReportingPeriod::Week.filter(
            vec![submission(1, at(1)), submission(2, at(23)), submission(3, at(29))],
            now,
        );
        let ids: Vec<u64> = kept.iter().map(|submission| submission.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn total_keeps_everything() {
        let kept = ReportingPeriod::Total.filter(vec![submission(1, at(1))], at(30));
        assert_eq!(kept.len(), 1);
    }
}
