// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output-format rules appended to every structured-output instruction template.
pub const JSON_ONLY_RULES: &str = "\
4. FORMAT JSON strict :
   - Retourne UNIQUEMENT le JSON
   - Pas de texte avant ou après
   - Respecte exactement la structure donnée";

/// Editorial rules shared by every feedback analysis prompt.
pub const EDITORIAL_RULES: &str = "\
1. PERSONNALISATION obligatoire :
   - Utilise le prénom du collaborateur
   - Adapte le ton au contexte
   - Référence les éléments spécifiques du feedback

2. ACTIONNABLE :
   - Chaque action doit être concrète et réalisable
   - Évite le jargon
   - Privilégie les verbes d'action

3. BIENVEILLANCE :
   - Ton positif et orienté solutions
   - Pas de jugement
   - Focus sur l'amélioration continue";
