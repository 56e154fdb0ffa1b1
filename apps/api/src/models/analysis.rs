use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Enumerations with an explicit fallback
//
// The model is asked for a fixed vocabulary but may drift. Unrecognized values
// are kept verbatim in `Other` so the renderer can apply its documented fallback.
// ────────────────────────────────────────────────────────────────────────────

/// Health of one theme as judged by the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeStatus {
    Positive,
    Neutral,
    Attention,
    Critical,
    Other(String),
}

impl From<String> for ThemeStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "positif" => ThemeStatus::Positive,
            "neutre" => ThemeStatus::Neutral,
            "attention" => ThemeStatus::Attention,
            "critique" => ThemeStatus::Critical,
            _ => ThemeStatus::Other(value),
        }
    }
}

impl From<ThemeStatus> for String {
    fn from(value: ThemeStatus) -> Self {
        match value {
            ThemeStatus::Positive => "positif".to_string(),
            ThemeStatus::Neutral => "neutre".to_string(),
            ThemeStatus::Attention => "attention".to_string(),
            ThemeStatus::Critical => "critique".to_string(),
            ThemeStatus::Other(raw) => raw,
        }
    }
}

/// Urgency of a manager-facing priority point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PointPriority {
    Urgent,
    High,
    Medium,
    Other(String),
}

impl From<String> for PointPriority {
    fn from(value: String) -> Self {
        match value.trim() {
            "urgente" => PointPriority::Urgent,
            "haute" => PointPriority::High,
            "moyenne" => PointPriority::Medium,
            _ => PointPriority::Other(value),
        }
    }
}

impl From<PointPriority> for String {
    fn from(value: PointPriority) -> Self {
        match value {
            PointPriority::Urgent => "urgente".to_string(),
            PointPriority::High => "haute".to_string(),
            PointPriority::Medium => "moyenne".to_string(),
            PointPriority::Other(raw) => raw,
        }
    }
}

/// Urgency of an action plan item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionPriority {
    Urgent,
    Important,
    MediumTerm,
    Other(String),
}

impl From<String> for ActionPriority {
    fn from(value: String) -> Self {
        match value.trim() {
            "urgent" => ActionPriority::Urgent,
            "important" => ActionPriority::Important,
            "moyen_terme" => ActionPriority::MediumTerm,
            _ => ActionPriority::Other(value),
        }
    }
}

impl From<ActionPriority> for String {
    fn from(value: ActionPriority) -> Self {
        match value {
            ActionPriority::Urgent => "urgent".to_string(),
            ActionPriority::Important => "important".to_string(),
            ActionPriority::MediumTerm => "moyen_terme".to_string(),
            ActionPriority::Other(raw) => raw,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis result
// ────────────────────────────────────────────────────────────────────────────

/// Full structured output of one REX analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub synthese_collaborateur: CollaboratorSynthesis,
    pub analyse_manager: ManagerAnalysis,
}

/// The part of the analysis addressed to the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorSynthesis {
    pub titre: String,
    pub message_remerciement: String,
    pub ce_que_nous_avons_compris: String,
    pub prochaines_etapes: String,
    pub message_cloture: String,
}

/// The part of the analysis addressed to the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerAnalysis {
    pub resume_executif: String,
    pub analyse_par_thematique: Vec<ThematicAnalysis>,
    pub points_prioritaires: Vec<PriorityPoint>,
    pub plan_action: Vec<ActionItem>,
    pub kit_manager: ManagerKit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThematicAnalysis {
    pub thematique: String,
    pub statut: ThemeStatus,
    pub ressenti: String,
    pub synthese: String,
    /// Empty when the model found nothing worth flagging.
    #[serde(default)]
    pub signaux_faibles: String,
    #[serde(default)]
    pub impact_potentiel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityPoint {
    pub priorite: PointPriority,
    pub thematique: String,
    pub point: String,
    pub pourquoi_prioritaire: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: u32,
    pub action: String,
    pub thematique: String,
    pub priorite: ActionPriority,
    pub echeance_recommandee: String,
    pub qui: String,
    pub comment: String,
    pub ressources_necessaires: String,
    pub indicateurs_succes: String,
    pub risque_si_non_traite: String,
}

/// Ready-to-use communication material generated for the manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagerKit {
    #[serde(default)]
    pub emails_prerediges: Vec<EmailTemplate>,
    #[serde(default)]
    pub guide_reunion: MeetingGuide,
    #[serde(default)]
    pub messages_slack: Vec<ChatMessage>,
    #[serde(default)]
    pub invitations_calendrier: Vec<CalendarInvite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    #[serde(rename = "type")]
    pub kind: String,
    pub objet: String,
    pub corps: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingGuide {
    #[serde(default)]
    pub preparation: MeetingPreparation,
    #[serde(default)]
    pub deroule: Vec<AgendaStep>,
    /// Keyed by theme slug (`relation_manager`, `charge_travail`, …), kept in
    /// the order the model wrote them.
    #[serde(default, with = "ordered_map")]
    pub questions_par_thematique: Vec<(String, Vec<String>)>,
    #[serde(default)]
    pub posture: MeetingPosture,
    #[serde(default)]
    pub post_reunion: PostMeeting,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingPreparation {
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub points_a_preparer: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaStep {
    pub etape: String,
    pub duree: String,
    pub objectif: String,
    pub script: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingPosture {
    #[serde(default)]
    pub a_faire: Vec<String>,
    #[serde(default)]
    pub a_eviter: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostMeeting {
    #[serde(default)]
    pub checklist: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub contenu: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarInvite {
    #[serde(rename = "type")]
    pub kind: String,
    pub titre: String,
    pub duree: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordre_du_jour: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequence: Option<String>,
}

/// A JSON object read into and written from a `Vec` of entries, preserving key order.
mod ordered_map {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, Serializer};

    pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        serializer.collect_map(entries.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
