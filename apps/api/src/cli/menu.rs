//! Interactive menu: numbered choices mapped onto the resume assistant.
//!
//! Input and output are generic so the loop can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde_json::Value;

use crate::assistant::{self, PromptStyle, ResumeData};
use crate::llm_client::{CompletionClient, CompletionOptions, LlmError, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Chat,
    AnalyzeResume,
    EnhanceResume,
    CoverLetter,
    ExtractSkills,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Chat),
            "2" => Some(Self::AnalyzeResume),
            "3" => Some(Self::EnhanceResume),
            "4" => Some(Self::CoverLetter),
            "5" => Some(Self::ExtractSkills),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nWhat would you like to do?
1. Chat with AI
2. Analyze a resume
3. Enhance a resume
4. Generate a cover letter
5. Extract job skills
6. Exit";

/// Runs the menu until the user picks Exit or input ends.
/// Operation failures are printed and the loop continues.
pub async fn run_menu<R: BufRead, W: Write>(
    llm: &CompletionClient,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "HireSense AI assistant")?;

    loop {
        writeln!(output, "{MENU}")?;
        let Some(line) = prompt(input, output, "\nEnter your choice (1-6): ")? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Some(choice) => run_choice(llm, choice, input, output).await?,
            None => writeln!(output, "Invalid choice. Please enter 1-6.")?,
        }
    }

    Ok(())
}

async fn run_choice<R: BufRead, W: Write>(
    llm: &CompletionClient,
    choice: MenuChoice,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    match choice {
        MenuChoice::Chat => {
            let Some(message) = prompt(input, output, "Ask AI anything: ")? else {
                return Ok(());
            };
            let result = llm
                .chat_completion(&[Message::user(message)], &CompletionOptions::default())
                .await;
            report(output, "AI response", result)?;
        }
        MenuChoice::AnalyzeResume => {
            writeln!(
                output,
                "Paste your resume content (press Enter twice when done):"
            )?;
            let resume_content = read_block(input)?;
            if resume_content.trim().is_empty() {
                writeln!(output, "Error: No resume content provided")?;
                return Ok(());
            }
            let result =
                assistant::analyze_resume(llm, &resume_content, PromptStyle::Detailed).await;
            report(output, "Resume analysis", result)?;
        }
        MenuChoice::EnhanceResume => {
            let Some(summary) = prompt(input, output, "Enter your resume summary: ")? else {
                return Ok(());
            };
            let Some(job_description) =
                prompt(input, output, "Enter job description (optional): ")?
            else {
                return Ok(());
            };
            let result = assistant::enhance_resume(
                llm,
                &summary_data(summary),
                job_description.trim(),
                PromptStyle::Detailed,
            )
            .await;
            report(output, "Enhanced resume", result)?;
        }
        MenuChoice::CoverLetter => {
            let Some(summary) = prompt(input, output, "Enter your resume summary: ")? else {
                return Ok(());
            };
            let Some(job_description) = prompt(input, output, "Enter job description: ")? else {
                return Ok(());
            };
            let Some(company) = prompt(input, output, "Enter company name: ")? else {
                return Ok(());
            };
            let result = assistant::generate_cover_letter(
                llm,
                &summary_data(summary),
                &job_description,
                &company,
                PromptStyle::Detailed,
            )
            .await;
            report(output, "Cover letter", result)?;
        }
        MenuChoice::ExtractSkills => {
            let Some(job_description) = prompt(input, output, "Enter job description: ")? else {
                return Ok(());
            };
            match assistant::extract_job_skills(llm, &job_description, PromptStyle::Detailed)
                .await
            {
                Ok(skills) => {
                    writeln!(output, "\nExtracted skills:")?;
                    for (i, skill) in skills.iter().enumerate() {
                        writeln!(output, "{}. {skill}", i + 1)?;
                    }
                }
                Err(e) => writeln!(output, "Error: {e}")?,
            }
        }
        MenuChoice::Exit => {}
    }

    Ok(())
}

fn summary_data(summary: String) -> ResumeData {
    let mut data = ResumeData::new();
    data.insert("content".to_string(), Value::String(summary));
    data
}

fn report<W: Write>(output: &mut W, title: &str, result: Result<String, LlmError>) -> Result<()> {
    match result {
        Ok(text) => writeln!(output, "\n{title}:\n{text}")?,
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(())
}

/// Prints `label` and reads one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads lines until a blank line follows some content, or input ends.
fn read_block<R: BufRead>(input: &mut R) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockUpstream;
    use std::io::Cursor;

    async fn drive(llm: &CompletionClient, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(llm, &mut input, &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Chat));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::ExtractSkills));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_read_block_stops_at_blank_after_content() {
        let mut input = Cursor::new("\nJane Doe\nRust engineer\n\nleftover\n");
        assert_eq!(read_block(&mut input).unwrap(), "Jane Doe\nRust engineer");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("leftover"));
    }

    #[tokio::test]
    async fn test_invalid_choice_then_exit() {
        let upstream = MockUpstream::completion("unused").await;
        let out = drive(&upstream.client(), "9\n6\n").await;
        assert!(out.contains("Invalid choice. Please enter 1-6."));
        assert!(out.contains("Goodbye!"));
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let upstream = MockUpstream::completion("unused").await;
        let out = drive(&upstream.client(), "").await;
        assert!(out.contains("Enter your choice"));
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_chat_prints_response() {
        let upstream = MockUpstream::completion("Use kill -9 <pid>.").await;
        let out = drive(&upstream.client(), "1\nHow do I kill a process?\n6\n").await;
        assert!(out.contains("AI response:\nUse kill -9 <pid>."));

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body["messages"],
            serde_json::json!([{"role": "user", "content": "How do I kill a process?"}])
        );
    }

    #[tokio::test]
    async fn test_empty_resume_paste_is_reported() {
        let upstream = MockUpstream::completion("unused").await;
        let out = drive(&upstream.client(), "2\n").await;
        assert!(out.contains("Error: No resume content provided"));
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_extract_skills_prints_numbered_list() {
        let upstream = MockUpstream::completion("- Rust\n- SQL").await;
        let out = drive(&upstream.client(), "5\nWe need Rust and SQL\n6\n").await;
        assert!(out.contains("1. Rust\n2. SQL\n"));
    }

    #[tokio::test]
    async fn test_enhance_wraps_summary() {
        let upstream = MockUpstream::completion("Better.").await;
        let out = drive(&upstream.client(), "3\nBackend engineer\n\n6\n").await;
        assert!(out.contains("Enhanced resume:\nBetter."));

        let prompt = upstream.requests()[0].body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(prompt.contains("\"content\": \"Backend engineer\""));
        assert!(!prompt.contains("Job Description"));
    }

    #[tokio::test]
    async fn test_operation_error_keeps_loop_running() {
        let upstream = MockUpstream::json(
            axum::http::StatusCode::UNAUTHORIZED,
            serde_json::json!({"error": {"message": "bad key"}}),
        )
        .await;
        let out = drive(&upstream.client(), "1\nhello\n6\n").await;
        assert!(out.contains("Error: API error (status 401): bad key"));
        assert!(out.contains("Goodbye!"));
    }
}
