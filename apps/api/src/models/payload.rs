use serde::{Deserialize, Deserializer, Serialize};

/// One of the six fixed feedback categories collected by the REX form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    ManagerRelationship,
    Workload,
    Objectives,
    Motivation,
    Development,
    Team,
}

impl Theme {
    /// All themes in form order.
    pub const ALL: [Theme; 6] = [
        Theme::ManagerRelationship,
        Theme::Workload,
        Theme::Objectives,
        Theme::Motivation,
        Theme::Development,
        Theme::Team,
    ];

    /// Upper-case heading used in the prompt context block.
    pub fn heading(self) -> &'static str {
        match self {
            Theme::ManagerRelationship => "RELATION MANAGER",
            Theme::Workload => "CHARGE DE TRAVAIL",
            Theme::Objectives => "OBJECTIFS",
            Theme::Motivation => "MOTIVATION",
            Theme::Development => "DÉVELOPPEMENT",
            Theme::Team => "ÉQUIPE",
        }
    }

    /// Matches a free-text theme label from the model ("Relation Manager",
    /// "charge_travail", "Développement", …). Case, accents and separators are ignored.
    pub fn from_label(label: &str) -> Option<Theme> {
        let folded: String = label
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| match c {
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'à' | 'â' | 'ä' => 'a',
                'î' | 'ï' => 'i',
                'ô' | 'ö' => 'o',
                'ù' | 'û' | 'ü' => 'u',
                'ç' => 'c',
                '_' | '-' => ' ',
                other => other,
            })
            .collect();

        if folded.contains("relation") || folded.contains("manager") {
            Some(Theme::ManagerRelationship)
        } else if folded.contains("charge") || folded.contains("workload") {
            Some(Theme::Workload)
        } else if folded.contains("objectif") || folded.contains("objective") {
            Some(Theme::Objectives)
        } else if folded.contains("motivation") {
            Some(Theme::Motivation)
        } else if folded.contains("developpement") || folded.contains("development") {
            Some(Theme::Development)
        } else if folded.contains("equipe") || folded.contains("team") {
            Some(Theme::Team)
        } else {
            None
        }
    }

    /// 1-based position in the form.
    pub fn number(self) -> usize {
        match self {
            Theme::ManagerRelationship => 1,
            Theme::Workload => 2,
            Theme::Objectives => 3,
            Theme::Motivation => 4,
            Theme::Development => 5,
            Theme::Team => 6,
        }
    }
}

/// Sentiment + free-text detail for one theme. Both halves are optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeFeedback<'a> {
    pub sentiment: Option<&'a str>,
    pub detail: Option<&'a str>,
}

/// A structured employee feedback submission, as posted by the collection form.
///
/// Identity fields are required. Everything else is optional, and blank strings
/// are normalized to `None` at deserialization time so that downstream code only
/// ever has to handle absence one way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackPayload {
    pub prenom: String,
    pub nom: String,
    pub email: String,
    pub metier: String,
    pub manager_nom: String,
    pub manager_email: String,
    pub mode_anonyme: bool,
    #[serde(default)]
    pub rdv_souhaite: bool,

    #[serde(default, deserialize_with = "non_blank")]
    pub t1_relation_ressenti: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t1_relation_detail: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t2_charge_ressenti: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t2_charge_detail: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t3_objectifs_ressenti: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t3_objectifs_detail: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t4_motivation_ressenti: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t4_motivation_detail: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t5_developpement_ressenti: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t5_developpement_detail: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t6_equipe_ressenti: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub t6_equipe_detail: Option<String>,

    #[serde(default, deserialize_with = "non_blank")]
    pub priorite_principale: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub attente_manager: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub projet_focus: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub positif: Option<String>,

    /// Raw conversation transcript, when the collection tool provides one.
    #[serde(default, deserialize_with = "non_blank")]
    pub conversation: Option<String>,
}

impl FeedbackPayload {
    /// Returns the sentiment/detail pair collected for `theme`.
    pub fn theme(&self, theme: Theme) -> ThemeFeedback<'_> {
        let (sentiment, detail) = match theme {
            Theme::ManagerRelationship => (&self.t1_relation_ressenti, &self.t1_relation_detail),
            Theme::Workload => (&self.t2_charge_ressenti, &self.t2_charge_detail),
            Theme::Objectives => (&self.t3_objectifs_ressenti, &self.t3_objectifs_detail),
            Theme::Motivation => (&self.t4_motivation_ressenti, &self.t4_motivation_detail),
            Theme::Development => (
                &self.t5_developpement_ressenti,
                &self.t5_developpement_detail,
            ),
            Theme::Team => (&self.t6_equipe_ressenti, &self.t6_equipe_detail),
        };
        ThemeFeedback {
            sentiment: sentiment.as_deref(),
            detail: detail.as_deref(),
        }
    }

    /// Sets the sentiment for `theme`. Used by fixtures and form adapters.
    pub fn set_theme_sentiment(&mut self, theme: Theme, sentiment: impl Into<String>) {
        let slot = match theme {
            Theme::ManagerRelationship => &mut self.t1_relation_ressenti,
            Theme::Workload => &mut self.t2_charge_ressenti,
            Theme::Objectives => &mut self.t3_objectifs_ressenti,
            Theme::Motivation => &mut self.t4_motivation_ressenti,
            Theme::Development => &mut self.t5_developpement_ressenti,
            Theme::Team => &mut self.t6_equipe_ressenti,
        };
        *slot = Some(sentiment.into());
    }

    /// "Prénom Nom", as shown in documents and prompts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }

    /// Checks the identity fields the documents cannot be produced without.
    pub fn missing_identity_fields(&self) -> Vec<&'static str> {
        [
            ("prenom", &self.prenom),
            ("nom", &self.nom),
            ("manager_nom", &self.manager_nom),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserializes_with_only_identity_fields() {
        let json = serde_json::json!({
            "prenom": "Alice",
            "nom": "Martin",
            "email": "alice@x.com",
            "metier": "Ingénieure",
            "manager_nom": "Bob",
            "manager_email": "bob@x.com",
            "mode_anonyme": false
        });
        let payload: FeedbackPayload = serde_json::from_value(json).unwrap();
        assert!(!payload.rdv_souhaite);
        assert!(payload.conversation.is_none());
        assert!(payload.theme(Theme::Team).sentiment.is_none());
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let json = serde_json::json!({
            "prenom": "Alice",
            "nom": "Martin",
            "email": "",
            "metier": "",
            "manager_nom": "Bob",
            "manager_email": "",
            "mode_anonyme": true,
            "positif": "   ",
            "t2_charge_detail": ""
        });
        let payload: FeedbackPayload = serde_json::from_value(json).unwrap();
        assert!(payload.positif.is_none());
        assert!(payload.theme(Theme::Workload).detail.is_none());
    }

    #[test]
    fn test_missing_identity_field_fails_deserialization() {
        let json = serde_json::json!({ "prenom": "Alice", "mode_anonyme": false });
        assert!(serde_json::from_value::<FeedbackPayload>(json).is_err());
    }

    #[test]
    fn test_theme_accessor_maps_each_theme() {
        let mut payload = FeedbackPayload::default();
        for theme in Theme::ALL {
            payload.set_theme_sentiment(theme, format!("s{}", theme.number()));
        }
        for theme in Theme::ALL {
            assert_eq!(
                payload.theme(theme).sentiment,
                Some(format!("s{}", theme.number()).as_str())
            );
        }
    }

    #[test]
    fn test_theme_from_label_is_lenient() {
        assert_eq!(Theme::from_label("Relation Manager"), Some(Theme::ManagerRelationship));
        assert_eq!(Theme::from_label("charge_travail"), Some(Theme::Workload));
        assert_eq!(Theme::from_label("OBJECTIFS"), Some(Theme::Objectives));
        assert_eq!(Theme::from_label("Développement"), Some(Theme::Development));
        assert_eq!(Theme::from_label("ÉQUIPE"), Some(Theme::Team));
        assert_eq!(Theme::from_label("Motivation"), Some(Theme::Motivation));
        assert_eq!(Theme::from_label("Rémunération"), None);
    }

    #[test]
    fn test_missing_identity_fields_lists_blank_names() {
        let payload = FeedbackPayload {
            prenom: "Alice".to_string(),
            nom: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(payload.missing_identity_fields(), vec!["nom", "manager_nom"]);
    }
}
