// Resume assistant: canned system/user message pairs for the four domain
// operations. All calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod skills;

use serde_json::{Map, Value};

use crate::llm_client::{CompletionClient, CompletionOptions, LlmError, Message};
use skills::{parse_skill_list, SkillParsePolicy};

/// Smaller model used by the brief analysis and skill prompts.
pub const BRIEF_MODEL: &str = "meta/llama-3.1-8b-instruct";
/// Job descriptions are cut to this many chars before skill extraction.
pub const SKILL_PROMPT_CHAR_LIMIT: usize = 500;

/// Resume contents as a free-form JSON object.
pub type ResumeData = Map<String, Value>;

/// Which prompt family to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// One-line prompts for the HTTP service.
    Brief,
    /// Checklist prompts for the interactive CLI.
    Detailed,
}

impl PromptStyle {
    fn skill_policy(self) -> SkillParsePolicy {
        match self {
            PromptStyle::Brief => SkillParsePolicy::BRIEF,
            PromptStyle::Detailed => SkillParsePolicy::DETAILED,
        }
    }

    fn render_resume(self, resume_data: &ResumeData) -> String {
        let value = Value::Object(resume_data.clone());
        match self {
            PromptStyle::Brief => value.to_string(),
            PromptStyle::Detailed => format!("{value:#}"),
        }
    }
}

fn completion_options(model: Option<&str>, max_tokens: u32) -> CompletionOptions {
    let mut options = CompletionOptions {
        max_tokens,
        ..Default::default()
    };
    if let Some(model) = model {
        options.model = model.to_string();
    }
    options
}

// ────────────────────────────────────────────────────────────────────────────
// Message builders
// ────────────────────────────────────────────────────────────────────────────

pub fn analysis_messages(resume_content: &str, style: PromptStyle) -> Vec<Message> {
    match style {
        PromptStyle::Brief => vec![
            Message::system(prompts::ANALYSIS_SYSTEM_BRIEF),
            Message::user(prompts::analysis_prompt_brief(resume_content)),
        ],
        PromptStyle::Detailed => vec![
            Message::system(prompts::ANALYSIS_SYSTEM_DETAILED),
            Message::user(prompts::analysis_prompt_detailed(resume_content)),
        ],
    }
}

pub fn enhancement_messages(
    resume_data: &ResumeData,
    job_description: &str,
    style: PromptStyle,
) -> Vec<Message> {
    let resume_json = style.render_resume(resume_data);
    match style {
        PromptStyle::Brief => vec![
            Message::system(prompts::ENHANCEMENT_SYSTEM_BRIEF),
            Message::user(prompts::enhancement_prompt_brief(
                &resume_json,
                job_description,
            )),
        ],
        PromptStyle::Detailed => vec![
            Message::system(prompts::ENHANCEMENT_SYSTEM_DETAILED),
            Message::user(prompts::enhancement_prompt_detailed(
                &resume_json,
                job_description,
            )),
        ],
    }
}

pub fn cover_letter_messages(
    resume_data: &ResumeData,
    job_description: &str,
    company_name: &str,
    style: PromptStyle,
) -> Vec<Message> {
    let resume_json = style.render_resume(resume_data);
    match style {
        PromptStyle::Brief => vec![
            Message::system(prompts::COVER_LETTER_SYSTEM_BRIEF),
            Message::user(prompts::cover_letter_prompt_brief(
                &resume_json,
                job_description,
                company_name,
            )),
        ],
        PromptStyle::Detailed => vec![
            Message::system(prompts::COVER_LETTER_SYSTEM_DETAILED),
            Message::user(prompts::cover_letter_prompt_detailed(
                &resume_json,
                job_description,
                company_name,
            )),
        ],
    }
}

pub fn skill_extraction_messages(job_description: &str, style: PromptStyle) -> Vec<Message> {
    let truncated = truncate_chars(job_description, SKILL_PROMPT_CHAR_LIMIT);
    match style {
        PromptStyle::Brief => vec![
            Message::system(prompts::SKILLS_SYSTEM_BRIEF),
            Message::user(prompts::skills_prompt_brief(truncated)),
        ],
        PromptStyle::Detailed => vec![
            Message::system(prompts::SKILLS_SYSTEM_DETAILED),
            Message::user(prompts::skills_prompt_detailed(truncated)),
        ],
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Critiques a resume and returns the model's feedback.
pub async fn analyze_resume(
    llm: &CompletionClient,
    resume_content: &str,
    style: PromptStyle,
) -> Result<String, LlmError> {
    let options = match style {
        PromptStyle::Brief => completion_options(Some(BRIEF_MODEL), 1500),
        PromptStyle::Detailed => completion_options(None, 2000),
    };
    llm.chat_completion(&analysis_messages(resume_content, style), &options)
        .await
}

/// Rewrites resume content, optionally tailored to a job description.
pub async fn enhance_resume(
    llm: &CompletionClient,
    resume_data: &ResumeData,
    job_description: &str,
    style: PromptStyle,
) -> Result<String, LlmError> {
    let messages = enhancement_messages(resume_data, job_description, style);
    llm.chat_completion(&messages, &completion_options(None, 2000)).await
}

pub async fn generate_cover_letter(
    llm: &CompletionClient,
    resume_data: &ResumeData,
    job_description: &str,
    company_name: &str,
    style: PromptStyle,
) -> Result<String, LlmError> {
    let messages = cover_letter_messages(resume_data, job_description, company_name, style);
    llm.chat_completion(&messages, &completion_options(None, 1500)).await
}

/// Extracts a bounded skill list from a job description.
pub async fn extract_job_skills(
    llm: &CompletionClient,
    job_description: &str,
    style: PromptStyle,
) -> Result<Vec<String>, LlmError> {
    let options = match style {
        PromptStyle::Brief => completion_options(Some(BRIEF_MODEL), 300),
        PromptStyle::Detailed => completion_options(None, 800),
    };
    let response = llm
        .chat_completion(&skill_extraction_messages(job_description, style), &options)
        .await?;
    Ok(parse_skill_list(&response, style.skill_policy()))
}
