//! Manager report: cover, executive summary, priorities, thematic breakdown,
//! action plan and the complete manager kit.

use chrono::NaiveDate;

use crate::models::analysis::{
    ActionItem, ActionPriority, AnalysisResult, CalendarInvite, ChatMessage, EmailTemplate,
    MeetingGuide, PointPriority, PriorityPoint, ThematicAnalysis, ThemeStatus,
};
use crate::models::payload::FeedbackPayload;
use crate::render::styles::MANAGER_CSS;
use crate::render::{
    escape_html, format_short_date, line_breaks, list_items, paragraphs, PRODUCT_NAME,
};

pub const MEETING_REQUESTED_MARK: &str = "⚠ RDV SOUHAITÉ";
pub const ANONYMOUS_MARK: &str = " (MODE ANONYME)";

// ────────────────────────────────────────────────────────────────────────────
// Badges and classes
// ────────────────────────────────────────────────────────────────────────────

/// Colored badge for a theme status. Unrecognized statuses render as neutral.
pub fn status_badge(status: &ThemeStatus) -> String {
    let (color, label) = match status {
        ThemeStatus::Positive => ("#10b981", "POSITIF"),
        ThemeStatus::Neutral | ThemeStatus::Other(_) => ("#6366f1", "NEUTRE"),
        ThemeStatus::Attention => ("#f59e0b", "ATTENTION"),
        ThemeStatus::Critical => ("#ef4444", "CRITIQUE"),
    };
    format!(r#"<span class="badge" style="background: {color};">{label}</span>"#)
}

/// CSS class suffix for a priority point. Unrecognized values use the medium class.
pub fn point_class(priority: &PointPriority) -> &'static str {
    match priority {
        PointPriority::Urgent => "urgente",
        PointPriority::High => "haute",
        PointPriority::Medium | PointPriority::Other(_) => "moyenne",
    }
}

/// CSS class suffix for an action. Unrecognized values use the medium-term class.
pub fn action_class(priority: &ActionPriority) -> &'static str {
    match priority {
        ActionPriority::Urgent => "urgent",
        ActionPriority::Important => "important",
        ActionPriority::MediumTerm | ActionPriority::Other(_) => "moyen_terme",
    }
}

fn badge_label(raw: impl Into<String>) -> String {
    escape_html(&raw.into().replace('_', " ").to_uppercase())
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn render_theme(t: &ThematicAnalysis) -> String {
    let mut body = format!(
        "<p><strong>Ressenti exprimé :</strong> {}</p>\n        <p><strong>Synthèse :</strong> {}</p>",
        escape_html(&t.ressenti),
        escape_html(&t.synthese)
    );
    if !t.signaux_faibles.trim().is_empty() {
        body.push_str(&format!(
            "\n        <p><strong>⚠ Signaux faibles :</strong> {}</p>",
            escape_html(&t.signaux_faibles)
        ));
    }
    if !t.impact_potentiel.trim().is_empty() {
        body.push_str(&format!(
            "\n        <p><strong>Impact potentiel :</strong> {}</p>",
            escape_html(&t.impact_potentiel)
        ));
    }

    format!(
        r#"
    <div class="thematique-card">
      <div class="thematique-header">
        <h3>{title}</h3>
        {badge}
      </div>
      <div class="thematique-body">
        {body}
      </div>
    </div>"#,
        title = escape_html(&t.thematique),
        badge = status_badge(&t.statut),
    )
}

fn render_priority(index: usize, p: &PriorityPoint) -> String {
    format!(
        r#"
    <div class="priorite-item priorite-{class}">
      <div class="priorite-numero">{index}</div>
      <div class="priorite-content">
        <div class="priorite-badge">{label}</div>
        <h4>{point}</h4>
        <p><strong>Thématique :</strong> {theme}</p>
        <p><strong>Pourquoi prioritaire :</strong> {why}</p>
      </div>
    </div>"#,
        class = point_class(&p.priorite),
        label = badge_label(p.priorite.clone()),
        point = escape_html(&p.point),
        theme = escape_html(&p.thematique),
        why = escape_html(&p.pourquoi_prioritaire),
    )
}

fn render_action(a: &ActionItem) -> String {
    format!(
        r#"
    <div class="action-card priorite-{class}">
      <div class="action-header">
        <div class="action-id">Action #{id}</div>
        <div class="action-priorite-badge">{label}</div>
      </div>
      <h4 class="action-titre">{action}</h4>
      <div class="action-details">
        <div class="action-detail"><strong>Thématique :</strong> {theme}</div>
        <div class="action-detail"><strong>Échéance :</strong> {deadline}</div>
        <div class="action-detail"><strong>Qui :</strong> {owner}</div>
        <div class="action-detail"><strong>Comment :</strong> {method}</div>
        <div class="action-detail"><strong>Ressources nécessaires :</strong> {resources}</div>
        <div class="action-detail"><strong>Indicateurs de succès :</strong> {indicators}</div>
        <div class="action-detail warning"><strong>⚠ Risque si non traité :</strong> {risk}</div>
      </div>
    </div>"#,
        class = action_class(&a.priorite),
        id = a.id,
        label = badge_label(a.priorite.clone()),
        action = escape_html(&a.action),
        theme = escape_html(&a.thematique),
        deadline = escape_html(&a.echeance_recommandee),
        owner = escape_html(&a.qui),
        method = escape_html(&a.comment),
        resources = escape_html(&a.ressources_necessaires),
        indicators = escape_html(&a.indicateurs_succes),
        risk = escape_html(&a.risque_si_non_traite),
    )
}

fn render_email(email: &EmailTemplate) -> String {
    format!(
        r#"
    <div class="kit-item">
      <h4>{kind}</h4>
      <p><strong>Objet :</strong> {subject}</p>
      <div class="email-body">{body}</div>
    </div>"#,
        kind = badge_label(email.kind.as_str()),
        subject = escape_html(&email.objet),
        body = line_breaks(&email.corps),
    )
}

fn render_chat_message(msg: &ChatMessage) -> String {
    format!(
        r#"
    <div class="kit-item">
      <h4>Slack - {kind}</h4>
      <div class="slack-message">{content}</div>
    </div>"#,
        kind = escape_html(&msg.kind.replace('_', " ")),
        content = escape_html(&msg.contenu),
    )
}

/// `<h5>` + `<ul>`, or nothing for an empty list.
fn labeled_list(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("\n      <h5>{title}</h5>\n      <ul>{}</ul>", list_items(items))
}

fn render_meeting_guide(guide: &MeetingGuide) -> String {
    let preparation = format!(
        "{}{}{}",
        labeled_list("Checklist", &guide.preparation.checklist),
        labeled_list("Points à préparer", &guide.preparation.points_a_preparer),
        labeled_list("Documents", &guide.preparation.documents),
    );

    let agenda: String = guide
        .deroule
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                r#"
      <div class="agenda-step">
        <p><strong>{n}. {etape}</strong> <span class="duree">({duree})</span></p>
        <p><strong>Objectif :</strong> {objectif}</p>
        <p><strong>Script :</strong> {script}</p>
      </div>"#,
                n = i + 1,
                etape = escape_html(&step.etape),
                duree = escape_html(&step.duree),
                objectif = escape_html(&step.objectif),
                script = line_breaks(&step.script),
            )
        })
        .collect();

    let questions: String = guide
        .questions_par_thematique
        .iter()
        .map(|(theme, questions)| labeled_list(&badge_label(theme.as_str()), questions))
        .collect();

    let posture = format!(
        "{}{}",
        labeled_list("À faire", &guide.posture.a_faire),
        labeled_list("À éviter", &guide.posture.a_eviter),
    );

    format!(
        r#"
    <div class="kit-item">
      <h4>Préparation</h4>{preparation}
    </div>
    <div class="kit-item">
      <h4>Déroulé</h4>{agenda}
    </div>
    <div class="kit-item">
      <h4>Questions par thématique</h4>{questions}
    </div>
    <div class="kit-item">
      <h4>Posture</h4>{posture}
    </div>
    <div class="kit-item">
      <h4>Après la réunion</h4>{post}
    </div>"#,
        post = labeled_list("Checklist", &guide.post_reunion.checklist),
    )
}

fn render_invite(invite: &CalendarInvite) -> String {
    let agenda = invite
        .ordre_du_jour
        .as_deref()
        .map(|items| labeled_list("Ordre du jour", items))
        .unwrap_or_default();
    let frequency = invite
        .frequence
        .as_deref()
        .map(|f| format!("\n      <p><strong>Fréquence :</strong> {}</p>", escape_html(f)))
        .unwrap_or_default();

    format!(
        r#"
    <div class="kit-item">
      <h4>{title}</h4>
      <p><strong>Durée :</strong> {duration}</p>{frequency}
      <p>{description}</p>{agenda}
    </div>"#,
        title = escape_html(&invite.titre),
        duration = escape_html(&invite.duree),
        description = line_breaks(&invite.description),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

pub fn render_manager_html(
    analysis: &AnalysisResult,
    payload: &FeedbackPayload,
    issued_on: NaiveDate,
) -> String {
    let analyse = &analysis.analyse_manager;
    let kit = &analyse.kit_manager;

    let priorities: String = analyse
        .points_prioritaires
        .iter()
        .enumerate()
        .map(|(i, p)| render_priority(i + 1, p))
        .collect();
    let themes: String = analyse.analyse_par_thematique.iter().map(render_theme).collect();
    let actions: String = analyse.plan_action.iter().map(render_action).collect();
    let emails: String = kit.emails_prerediges.iter().map(render_email).collect();
    let chat: String = kit.messages_slack.iter().map(render_chat_message).collect();
    let invites: String = kit.invitations_calendrier.iter().map(render_invite).collect();

    let anonymous = if payload.mode_anonyme { ANONYMOUS_MARK } else { "" };
    let meeting = if payload.rdv_souhaite {
        format!(r#"<strong class="rdv">{MEETING_REQUESTED_MARK}</strong>"#)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8">
  <title>REX Manager - {name}</title>
  <style>{css}</style>
</head>
<body>
  <div class="cover">
    <h1>REX Manager</h1>
    <p class="subtitle">Retour d'Expérience Collaborateur</p>
    <p class="meta">
      <strong>Collaborateur :</strong> {name}{anonymous}<br>
      <strong>Métier :</strong> {metier}<br>
      <strong>Manager :</strong> {manager}<br>
      <strong>Date :</strong> {date}<br>
      {meeting}
    </p>
  </div>

  <div class="section">
    <h2 class="section-title">Résumé Exécutif</h2>
    <div class="resume-executif">
      <p>{resume}</p>
    </div>
  </div>

  <div class="section">
    <h2 class="section-title">Points Prioritaires</h2>{priorities}
  </div>

  <div class="page-break"></div>

  <div class="section">
    <h2 class="section-title">Analyse par Thématique</h2>{themes}
  </div>

  <div class="page-break"></div>

  <div class="section">
    <h2 class="section-title">Plan d'Action ({action_count} actions)</h2>{actions}
  </div>

  <div class="page-break"></div>

  <div class="section">
    <h2 class="section-title">Kit Manager Complet</h2>
    <h3 class="subsection-title">📧 Emails pré-rédigés</h3>
    <div class="kit-section">{emails}
    </div>
    <h3 class="subsection-title">💬 Messages Slack</h3>
    <div class="kit-section">{chat}
    </div>
    <h3 class="subsection-title">🗓 Guide de réunion</h3>
    <div class="kit-section">{guide}
    </div>
    <h3 class="subsection-title">📅 Invitations calendrier</h3>
    <div class="kit-section">{invites}
    </div>
  </div>

  <div class="footer">
    <p><strong>{PRODUCT_NAME}</strong> - Document confidentiel</p>
  </div>
</body>
</html>"#,
        name = escape_html(&payload.full_name()),
        css = MANAGER_CSS,
        metier = escape_html(&payload.metier),
        manager = escape_html(&payload.manager_nom),
        date = format_short_date(issued_on),
        resume = paragraphs(&analyse.resume_executif),
        action_count = analyse.plan_action.len(),
        guide = render_meeting_guide(&kit.guide_reunion),
    )
}
