//! Prompt context — serializes a `FeedbackPayload` into the text block appended
//! to the analysis instruction template.
//!
//! Pure and stable: the same payload always yields byte-identical text.
//! Absent optional fields become fixed French placeholders, never errors.

use crate::models::payload::{FeedbackPayload, Theme};

pub const UNSPECIFIED_F: &str = "Non spécifiée";
pub const UNSPECIFIED_M: &str = "Non spécifié";
pub const NO_POSITIVES: &str = "Aucun point positif mentionné";
pub const NO_SENTIMENT: &str = "Non renseigné";
pub const NO_DETAIL: &str = "Aucun commentaire";
pub const CONVERSATION_HEADER: &str = "--- CONVERSATION COMPLÈTE ---";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "OUI"
    } else {
        "NON"
    }
}

/// Builds the context block for one submission.
pub fn build_prompt_context(payload: &FeedbackPayload) -> String {
    let or = |value: &Option<String>, placeholder: &'static str| -> String {
        value.as_deref().unwrap_or(placeholder).to_string()
    };

    let mut out = String::from("\n");
    out.push_str(&format!("COLLABORATEUR : {}\n", payload.full_name()));
    out.push_str(&format!("MÉTIER : {}\n", payload.metier));
    out.push_str(&format!("MANAGER : {}\n", payload.manager_nom));
    out.push_str(&format!("MODE ANONYME : {}\n", yes_no(payload.mode_anonyme)));
    out.push_str(&format!("RDV SOUHAITÉ : {}\n\n", yes_no(payload.rdv_souhaite)));

    out.push_str(&format!(
        "PRIORITÉ PRINCIPALE : {}\n",
        or(&payload.priorite_principale, UNSPECIFIED_F)
    ));
    out.push_str(&format!(
        "ATTENTE VIS-À-VIS DU MANAGER : {}\n",
        or(&payload.attente_manager, UNSPECIFIED_F)
    ));
    out.push_str(&format!(
        "PROJET EN FOCUS : {}\n",
        or(&payload.projet_focus, UNSPECIFIED_M)
    ));
    out.push_str(&format!(
        "POINTS POSITIFS : {}\n\n",
        or(&payload.positif, NO_POSITIVES)
    ));

    out.push_str("--- FEEDBACK PAR THÉMATIQUE ---\n");
    for theme in Theme::ALL {
        let feedback = payload.theme(theme);
        out.push_str(&format!(
            "\n{}. {}\nRessenti : {}\nDétail : {}\n",
            theme.number(),
            theme.heading(),
            feedback.sentiment.unwrap_or(NO_SENTIMENT),
            feedback.detail.unwrap_or(NO_DETAIL),
        ));
    }

    if let Some(conversation) = &payload.conversation {
        out.push_str(&format!("\n\n{CONVERSATION_HEADER}\n{conversation}\n"));
    }

    out
}
