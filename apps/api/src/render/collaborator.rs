//! Collaborator synthesis: the thank-you document sent back to the employee.

use chrono::NaiveDate;

use crate::models::analysis::AnalysisResult;
use crate::models::payload::FeedbackPayload;
use crate::render::styles::COLLABORATOR_CSS;
use crate::render::{escape_html, format_long_date, paragraphs, PRODUCT_NAME};

/// Shown only when the collaborator asked for a meeting.
pub const MEETING_REQUESTED_NOTICE: &str = "✓ Vous avez demandé un rendez-vous : votre manager va vous contacter prochainement pour échanger sur ces points.";

pub fn render_collaborator_html(
    analysis: &AnalysisResult,
    payload: &FeedbackPayload,
    issued_on: NaiveDate,
) -> String {
    let synthese = &analysis.synthese_collaborateur;

    let meeting_block = if payload.rdv_souhaite {
        format!(
            r#"
  <div class="highlight">
    <p>{MEETING_REQUESTED_NOTICE}</p>
  </div>
"#
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Synthèse REX - {prenom}</title>
  <style>{css}</style>
</head>
<body>
  <div class="header">
    <h1>{titre}</h1>
    <p class="subtitle">Votre retour d'expérience du {date}</p>
  </div>

  <div class="section">
    <div class="content-box">
      <p>{remerciement}</p>
    </div>
  </div>

  <div class="section">
    <h2 class="section-title">Ce que nous avons compris</h2>
    <div class="content-box">
      <p>{compris}</p>
    </div>
  </div>

  <div class="section">
    <h2 class="section-title">Prochaines étapes</h2>
    <div class="content-box">
      <p>{etapes}</p>
    </div>
  </div>
{meeting_block}
  <div class="section">
    <div class="content-box">
      <p>{cloture}</p>
    </div>
  </div>

  <div class="footer">
    <p><strong>{PRODUCT_NAME}</strong> - Système de feedback collaborateur</p>
    <p>Ce document est confidentiel et destiné uniquement à {destinataire}</p>
  </div>
</body>
</html>"#,
        prenom = escape_html(&payload.prenom),
        css = COLLABORATOR_CSS,
        titre = escape_html(&synthese.titre),
        date = format_long_date(issued_on),
        remerciement = escape_html(&synthese.message_remerciement),
        compris = paragraphs(&synthese.ce_que_nous_avons_compris),
        etapes = escape_html(&synthese.prochaines_etapes),
        cloture = escape_html(&synthese.message_cloture),
        destinataire = escape_html(&payload.full_name()),
    )
}
