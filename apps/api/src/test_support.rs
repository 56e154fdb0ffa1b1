//! Shared helpers for unit tests: in-process stubs for the external services
//! and a complete analysis fixture.

use axum::Router;

use crate::models::analysis::{
    ActionItem, ActionPriority, AgendaStep, AnalysisResult, CalendarInvite, ChatMessage,
    CollaboratorSynthesis, EmailTemplate, ManagerAnalysis, ManagerKit, MeetingGuide,
    MeetingPosture, MeetingPreparation, PointPriority, PostMeeting, PriorityPoint,
    ThematicAnalysis, ThemeStatus,
};
use crate::models::payload::{FeedbackPayload, Theme};

/// Catch-all for `/v1beta/models/{model}:generateContent`.
pub const GEMINI_STUB_ROUTE: &str = "/v1beta/models/*call";

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

/// The end-to-end scenario payload: Alice Martin, every theme "neutre".
pub fn alice_payload() -> FeedbackPayload {
    let mut payload = FeedbackPayload {
        prenom: "Alice".to_string(),
        nom: "Martin".to_string(),
        email: "alice@x.com".to_string(),
        metier: "Ingénieure".to_string(),
        manager_nom: "Bob".to_string(),
        manager_email: "bob@x.com".to_string(),
        mode_anonyme: false,
        rdv_souhaite: true,
        ..Default::default()
    };
    for theme in Theme::ALL {
        payload.set_theme_sentiment(theme, "neutre");
    }
    payload
}

/// A complete analysis honoring every documented minimum.
pub fn sample_analysis() -> AnalysisResult {
    let themes = [
        "Relation Manager",
        "Charge de travail",
        "Objectifs",
        "Motivation",
        "Développement",
        "Équipe",
    ];
    AnalysisResult {
        synthese_collaborateur: CollaboratorSynthesis {
            titre: "Merci pour votre retour, Alice".to_string(),
            message_remerciement: "Merci d'avoir pris le temps de partager votre ressenti."
                .to_string(),
            ce_que_nous_avons_compris: "Vous vous sentez stable.\nVous attendez plus de visibilité."
                .to_string(),
            prochaines_etapes: "Bob va vous proposer un échange.".to_string(),
            message_cloture: "À très bientôt.".to_string(),
        },
        analyse_manager: ManagerAnalysis {
            resume_executif: "Feedback globalement neutre.\nAucun signal critique.".to_string(),
            analyse_par_thematique: themes
                .iter()
                .map(|t| ThematicAnalysis {
                    thematique: t.to_string(),
                    statut: ThemeStatus::Neutral,
                    ressenti: "neutre".to_string(),
                    synthese: format!("Synthèse {t}"),
                    signaux_faibles: String::new(),
                    impact_potentiel: "Faible".to_string(),
                })
                .collect(),
            points_prioritaires: vec![
                point(PointPriority::Urgent, "Clarifier les objectifs"),
                point(PointPriority::High, "Planifier un point mensuel"),
                point(PointPriority::Medium, "Parler formation"),
            ],
            plan_action: (1..=5)
                .map(|id| ActionItem {
                    id,
                    action: format!("Action {id}"),
                    thematique: "Objectifs".to_string(),
                    priorite: ActionPriority::Important,
                    echeance_recommandee: "1 mois".to_string(),
                    qui: "Bob".to_string(),
                    comment: "En 1:1".to_string(),
                    ressources_necessaires: "30 min".to_string(),
                    indicateurs_succes: "Objectifs écrits".to_string(),
                    risque_si_non_traite: "Démotivation".to_string(),
                })
                .collect(),
            kit_manager: ManagerKit {
                emails_prerediges: vec![EmailTemplate {
                    kind: "remerciement_collaborateur".to_string(),
                    objet: "Merci Alice".to_string(),
                    corps: "Bonjour Alice,\nMerci pour ton retour.".to_string(),
                }],
                guide_reunion: MeetingGuide {
                    preparation: MeetingPreparation {
                        checklist: vec!["Relire le REX".to_string()],
                        points_a_preparer: vec!["Objectifs T4".to_string()],
                        documents: vec!["Fiche de poste".to_string()],
                    },
                    deroule: vec![AgendaStep {
                        etape: "Introduction".to_string(),
                        duree: "5 min".to_string(),
                        objectif: "Mettre à l'aise".to_string(),
                        script: "Merci d'être là.".to_string(),
                    }],
                    questions_par_thematique: vec![(
                        "objectifs".to_string(),
                        vec!["Qu'est-ce qui manque ?".to_string()],
                    )],
                    posture: MeetingPosture {
                        a_faire: vec!["Écouter".to_string()],
                        a_eviter: vec!["Se justifier".to_string()],
                    },
                    post_reunion: PostMeeting {
                        checklist: vec!["Envoyer le compte-rendu".to_string()],
                    },
                },
                messages_slack: vec![ChatMessage {
                    kind: "accuse_reception".to_string(),
                    contenu: "Merci Alice, bien reçu !".to_string(),
                }],
                invitations_calendrier: vec![CalendarInvite {
                    kind: "reunion_debriefing_rex".to_string(),
                    titre: "Debrief REX".to_string(),
                    duree: "60 min".to_string(),
                    description: "Échange sur ton retour".to_string(),
                    ordre_du_jour: Some(vec!["Tour de table".to_string()]),
                    frequence: None,
                }],
            },
        },
    }
}

fn point(priorite: PointPriority, text: &str) -> PriorityPoint {
    PriorityPoint {
        priorite,
        thematique: "Objectifs".to_string(),
        point: text.to_string(),
        pourquoi_prioritaire: "Impact direct".to_string(),
    }
}
