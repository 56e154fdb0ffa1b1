// REX analysis: prompt context → Gemini call → parsed, validated AnalysisResult.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod analyzer;
pub mod context;
pub mod prompts;
pub mod validation;
