use serde::{Deserialize, Serialize};

/// Region code for entries available across the whole country.
pub const NATIONWIDE: &str = "BR";

/// Minimum length of a directory search term, in characters.
pub const MIN_SEARCH_TERM_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "emergencia")]
    Emergency,
    #[serde(rename = "policial")]
    Police,
    #[serde(rename = "apoio")]
    Support,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Emergency, Self::Police, Self::Support];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergencia",
            Self::Police => "policial",
            Self::Support => "apoio",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// A helpline, police unit or support centre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: ResourceKind,
    #[serde(rename = "estado", default = "nationwide")]
    pub region: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(rename = "site", default)]
    pub website: Option<String>,
    #[serde(rename = "horario", default)]
    pub hours: Option<String>,
}

fn nationwide() -> String {
    NATIONWIDE.to_string()
}

impl ResourceEntry {
    pub fn is_nationwide(&self) -> bool {
        self.region == NATIONWIDE
    }

    fn matches_term(&self, lowered_term: &str) -> bool {
        self.name.to_lowercase().contains(lowered_term)
            || self.description.to_lowercase().contains(lowered_term)
    }
}

/// Seed catalog written to a fresh data file.
pub fn default_catalog() -> Vec<ResourceEntry> {
    let entry = |id: u32, name: &str, description: &str, kind, phone: Option<&str>| {
        ResourceEntry {
            id,
            name: name.to_string(),
            description: description.to_string(),
            kind,
            region: nationwide(),
            phone: phone.map(str::to_string),
            address: None,
            website: None,
            hours: None,
        }
    };

    vec![
        entry(
            1,
            "190 - Central de Atendimento à Mulher",
            "Atendimento 24h para denúncias e orientações",
            ResourceKind::Emergency,
            Some("180"),
        ),
        entry(
            2,
            "Delegacia da Mulher",
            "Registro de boletim de ocorrência e medidas protetivas",
            ResourceKind::Police,
            Some("190"),
        ),
        entry(
            3,
            "CRAS - Centro de Referência de Assistência Social",
            "Apoio psicológico e social gratuito",
            ResourceKind::Support,
            None,
        ),
        entry(
            4,
            "Casa da Mulher Brasileira",
            "Atendimento humanizado e multiprofissional",
            ResourceKind::Support,
            None,
        ),
    ]
}

/// Upper-cases and trims a state code; blank input means "no region".
pub fn normalize_region(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_ascii_uppercase())
}

/// Nationwide entries, plus entries for `region` when given. Each entry
/// appears at most once and catalog order is kept.
pub fn for_region(entries: &[ResourceEntry], region: Option<&str>) -> Vec<ResourceEntry> {
    let region = region.and_then(normalize_region);
    entries
        .iter()
        .filter(|entry| entry.is_nationwide() || region.as_deref() == Some(entry.region.as_str()))
        .cloned()
        .collect()
}

pub fn of_kind(entries: Vec<ResourceEntry>, kind: ResourceKind) -> Vec<ResourceEntry> {
    entries.into_iter().filter(|entry| entry.kind == kind).collect()
}

pub fn find(entries: &[ResourceEntry], id: u32) -> Option<ResourceEntry> {
    entries.iter().find(|entry| entry.id == id).cloned()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Termo de busca muito curto (mínimo 2 caracteres)")]
    TermTooShort,
}

/// Case-insensitive substring match over name and description.
pub fn search(entries: &[ResourceEntry], term: &str) -> Result<Vec<ResourceEntry>, SearchError> {
    let lowered = term.to_lowercase();
    if lowered.chars().count() < MIN_SEARCH_TERM_CHARS {
        return Err(SearchError::TermTooShort);
    }

    Ok(entries
        .iter()
        .filter(|entry| entry.matches_term(&lowered))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with_regions() -> Vec<ResourceEntry> {
        let mut entries = default_catalog();
        entries.push(ResourceEntry {
            id: 5,
            name: "Centro de Referência Clarice Lispector".to_string(),
            description: "Acolhimento psicossocial em Recife".to_string(),
            kind: ResourceKind::Support,
            region: "PE".to_string(),
            phone: Some("0800 281 8187".to_string()),
            address: None,
            website: None,
            hours: Some("Seg-Sex 8h-17h".to_string()),
        });
        entries.push(ResourceEntry {
            id: 6,
            name: "DDM Centro".to_string(),
            description: "Delegacia de Defesa da Mulher".to_string(),
            kind: ResourceKind::Police,
            region: "SP".to_string(),
            phone: None,
            address: None,
            website: None,
            hours: None,
        });
        entries
    }

    #[test]
    fn region_filter_unions_nationwide_without_duplicates() {
        let entries = catalog_with_regions();
        let pe = for_region(&entries, Some("PE"));
        let ids: Vec<u32> = pe.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn region_filter_normalizes_case() {
        let entries = catalog_with_regions();
        assert_eq!(for_region(&entries, Some(" sp ")).len(), 5);
    }

    #[test]
    fn nationwide_region_returns_each_entry_once() {
        let entries = catalog_with_regions();
        assert_eq!(for_region(&entries, Some("BR")).len(), 4);
        assert_eq!(for_region(&entries, None).len(), 4);
    }

    #[test]
    fn search_requires_two_characters() {
        let entries = default_catalog();
        assert_eq!(search(&entries, "a"), Err(SearchError::TermTooShort));
        assert_eq!(search(&entries, ""), Err(SearchError::TermTooShort));
    }

    #[test]
    fn search_matches_name_or_description_ignoring_case() {
        let entries = catalog_with_regions();
        let found = search(&entries, "MULHER").expect("valid term");
        let ids: Vec<u32> = found.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 6]);

        let found = search(&entries, "psicológico").expect("valid term");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn kind_parses_wire_names() {
        assert_eq!(ResourceKind::parse("policial"), Some(ResourceKind::Police));
        assert_eq!(ResourceKind::parse("Apoio"), Some(ResourceKind::Support));
        assert_eq!(ResourceKind::parse("hospital"), None);
    }

    #[test]
    fn optional_fields_serialize_as_null() {
        let value = serde_json::to_value(&default_catalog()[2]).expect("serializes");
        assert_eq!(value["tipo"], "apoio");
        assert_eq!(value["estado"], "BR");
        assert!(value["telefone"].is_null());
    }
}
