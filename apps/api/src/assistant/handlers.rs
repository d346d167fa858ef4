//! Axum route handlers for the resume assistant API.
//!
//! Required fields are checked here, before any upstream call is made.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::{self, PromptStyle, ResumeData};
use crate::errors::AppError;
use crate::llm_client::{CompletionOptions, Message};
use crate::routes::json::ApiJson;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    #[serde(default)]
    pub stream: bool,
}

impl ChatRequest {
    fn options(&self) -> Result<CompletionOptions, AppError> {
        let defaults = CompletionOptions::default();
        let options = CompletionOptions {
            model: self.model.clone().unwrap_or(defaults.model),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            top_p: self.top_p.unwrap_or(defaults.top_p),
            stream: self.stream,
        };

        if options.max_tokens == 0 {
            return Err(AppError::Validation(
                "max_tokens must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&options.temperature) {
            return Err(AppError::Validation(
                "temperature must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&options.top_p) {
            return Err(AppError::Validation(
                "top_p must be between 0 and 1".to_string(),
            ));
        }
        Ok(options)
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub resume_content: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub success: bool,
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceResumeRequest {
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResumeResponse {
    pub success: bool,
    pub enhancement: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub success: bool,
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub success: bool,
    pub skills: Vec<String>,
}

fn require_text(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

fn require_resume<'a>(
    value: &'a Option<ResumeData>,
    message: &str,
) -> Result<&'a ResumeData, AppError> {
    value
        .as_ref()
        .filter(|data| !data.is_empty())
        .ok_or_else(|| AppError::Validation(message.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/chat
///
/// General chat completion. Messages are forwarded as given; their roles are not checked.
pub async fn handle_chat(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.messages.is_empty() {
        return Err(AppError::Validation("Messages are required".to_string()));
    }
    let options = request.options()?;

    let content = state.llm.chat_completion(&request.messages, &options).await?;

    Ok(Json(ChatResponse {
        success: true,
        content,
    }))
}

/// POST /api/ai/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    require_text(&request.resume_content, "Resume content is required")?;

    let analysis =
        assistant::analyze_resume(&state.llm, &request.resume_content, PromptStyle::Brief).await?;

    Ok(Json(AnalyzeResumeResponse {
        success: true,
        analysis,
    }))
}

/// POST /api/ai/enhance-resume
pub async fn handle_enhance_resume(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EnhanceResumeRequest>,
) -> Result<Json<EnhanceResumeResponse>, AppError> {
    let resume_data = require_resume(&request.resume_data, "Resume data is required")?;

    let enhancement = assistant::enhance_resume(
        &state.llm,
        resume_data,
        request.job_description.trim(),
        PromptStyle::Brief,
    )
    .await?;

    Ok(Json(EnhanceResumeResponse {
        success: true,
        enhancement,
    }))
}

/// POST /api/ai/generate-cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    const MISSING: &str = "Resume data, job description, and company name are required";
    let resume_data = require_resume(&request.resume_data, MISSING)?;
    require_text(&request.job_description, MISSING)?;
    require_text(&request.company_name, MISSING)?;

    let cover_letter = assistant::generate_cover_letter(
        &state.llm,
        resume_data,
        &request.job_description,
        &request.company_name,
        PromptStyle::Brief,
    )
    .await?;

    Ok(Json(CoverLetterResponse {
        success: true,
        cover_letter,
    }))
}

/// POST /api/ai/extract-job-skills
///
/// Returns at most 8 skills unless the model answers with a JSON array.
pub async fn handle_extract_job_skills(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    require_text(&request.job_description, "Job description is required")?;

    let skills =
        assistant::extract_job_skills(&state.llm, &request.job_description, PromptStyle::Brief)
            .await?;

    Ok(Json(ExtractSkillsResponse {
        success: true,
        skills,
    }))
}
