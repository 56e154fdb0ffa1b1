// Inlined stylesheets. Brand green is #6B9078.

pub const COLLABORATOR_CSS: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; line-height: 1.6; color: #1a1a1a; background: #ffffff; padding: 60px 80px; }
    .header { border-bottom: 4px solid #6B9078; padding-bottom: 30px; margin-bottom: 50px; }
    .header h1 { font-size: 36px; font-weight: 700; color: #6B9078; margin-bottom: 10px; }
    .header .subtitle { font-size: 18px; color: #64748b; }
    .section { margin-bottom: 40px; }
    .section-title { font-size: 24px; font-weight: 600; color: #1e293b; margin-bottom: 20px; padding-bottom: 10px; border-bottom: 2px solid #e2e8f0; }
    .content-box { background: #F4F7F5; border-left: 4px solid #6B9078; padding: 25px; margin-bottom: 20px; border-radius: 8px; }
    .content-box p { font-size: 16px; line-height: 1.8; color: #334155; margin-bottom: 15px; }
    .content-box p:last-child { margin-bottom: 0; }
    .highlight { background: #fef3c7; padding: 20px; border-radius: 8px; border-left: 4px solid #f59e0b; margin: 30px 0; }
    .highlight p { color: #92400e; font-size: 16px; font-weight: 500; }
    .footer { margin-top: 60px; padding-top: 30px; border-top: 2px solid #e2e8f0; text-align: center; color: #64748b; font-size: 14px; }
"#;

pub const MANAGER_CSS: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Inter', -apple-system, sans-serif; line-height: 1.6; color: #1a1a1a; padding: 40px 60px; font-size: 14px; }
    .cover { text-align: center; padding: 100px 0; border-bottom: 6px solid #6B9078; margin-bottom: 60px; }
    .cover h1 { font-size: 48px; font-weight: 700; color: #6B9078; margin-bottom: 20px; }
    .cover .subtitle { font-size: 24px; color: #64748b; margin-bottom: 10px; }
    .cover .meta { font-size: 16px; color: #94a3b8; margin-top: 40px; }
    .cover .rdv { color: #ef4444; }
    .section { margin-bottom: 50px; page-break-inside: avoid; }
    .section-title { font-size: 28px; font-weight: 700; color: #1e293b; margin-bottom: 25px; padding-bottom: 15px; border-bottom: 3px solid #e2e8f0; }
    .subsection-title { font-size: 20px; font-weight: 600; color: #334155; margin: 30px 0 15px 0; }
    .resume-executif { background: #F4F7F5; padding: 30px; border-radius: 10px; border-left: 6px solid #6B9078; margin-bottom: 40px; }
    .resume-executif p { font-size: 16px; line-height: 1.8; color: #1e293b; margin-bottom: 15px; }
    .thematique-card { background: #ffffff; border: 2px solid #e2e8f0; border-radius: 8px; padding: 20px; margin-bottom: 20px; }
    .thematique-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 15px; padding-bottom: 10px; border-bottom: 1px solid #e2e8f0; }
    .thematique-header h3 { font-size: 18px; font-weight: 600; color: #1e293b; }
    .thematique-body p { margin-bottom: 10px; font-size: 14px; }
    .badge { color: white; padding: 4px 12px; border-radius: 4px; font-size: 12px; font-weight: 600; }
    .priorite-item { display: flex; gap: 20px; padding: 20px; border-radius: 8px; margin-bottom: 15px; }
    .priorite-item.priorite-urgente { background: #fef2f2; border-left: 6px solid #ef4444; }
    .priorite-item.priorite-haute { background: #fef3c7; border-left: 6px solid #f59e0b; }
    .priorite-item.priorite-moyenne { background: #eff6ff; border-left: 6px solid #3b82f6; }
    .priorite-numero { flex-shrink: 0; width: 40px; height: 40px; background: #6B9078; color: white; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 18px; }
    .priorite-content { flex: 1; }
    .priorite-content h4 { font-size: 16px; margin-bottom: 10px; }
    .priorite-badge { display: inline-block; padding: 4px 12px; border-radius: 4px; font-size: 11px; font-weight: 700; margin-bottom: 10px; }
    .priorite-urgente .priorite-badge { background: #ef4444; color: white; }
    .priorite-haute .priorite-badge { background: #f59e0b; color: white; }
    .priorite-moyenne .priorite-badge { background: #3b82f6; color: white; }
    .action-card { background: #ffffff; border: 2px solid #e2e8f0; border-radius: 8px; padding: 20px; margin-bottom: 20px; }
    .action-card.priorite-urgent { border-left: 6px solid #ef4444; }
    .action-card.priorite-important { border-left: 6px solid #f59e0b; }
    .action-card.priorite-moyen_terme { border-left: 6px solid #3b82f6; }
    .action-header { display: flex; justify-content: space-between; margin-bottom: 15px; }
    .action-id { font-size: 12px; font-weight: 600; color: #64748b; }
    .action-priorite-badge { padding: 4px 12px; border-radius: 4px; font-size: 11px; font-weight: 700; background: #6B9078; color: white; }
    .action-titre { font-size: 16px; font-weight: 600; margin-bottom: 15px; }
    .action-details { display: grid; gap: 12px; }
    .action-detail { font-size: 13px; padding: 10px; background: #f8fafc; border-radius: 4px; }
    .action-detail.warning { background: #fef2f2; border-left: 3px solid #ef4444; }
    .kit-section { background: #f8fafc; padding: 30px; border-radius: 10px; margin-bottom: 30px; }
    .kit-item { background: white; padding: 20px; border-radius: 6px; margin-bottom: 20px; border: 1px solid #e2e8f0; }
    .kit-item h4 { font-size: 16px; color: #6B9078; margin-bottom: 12px; }
    .kit-item ul { margin: 8px 0 0 20px; }
    .email-body, .slack-message { background: #f1f5f9; padding: 15px; border-radius: 4px; font-family: monospace; font-size: 12px; margin-top: 10px; white-space: pre-wrap; }
    .agenda-step { border-left: 3px solid #6B9078; padding-left: 12px; margin-bottom: 15px; }
    .agenda-step .duree { color: #64748b; font-size: 12px; }
    .footer { margin-top: 80px; padding-top: 30px; border-top: 2px solid #e2e8f0; text-align: center; color: #64748b; font-size: 12px; }
    .page-break { page-break-after: always; }
"#;
