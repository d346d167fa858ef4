// Prompt text for the resume assistant.
// Brief prompts back the HTTP service; detailed prompts back the interactive CLI.

pub const ANALYSIS_SYSTEM_BRIEF: &str = "You are an expert resume analyst with deep knowledge \
    of ATS optimization and hiring trends.";

pub const ANALYSIS_SYSTEM_DETAILED: &str = "You are an expert resume analyst with deep knowledge \
    of ATS optimization, industry best practices, and hiring trends. \
    Provide detailed, actionable feedback.";

pub const ENHANCEMENT_SYSTEM_BRIEF: &str =
    "You are an expert resume writer that enhances resumes for job applications.";

pub const ENHANCEMENT_SYSTEM_DETAILED: &str = "You are an expert resume writer that enhances \
    resumes to match job requirements while maintaining authenticity and ATS optimization.";

pub const COVER_LETTER_SYSTEM_BRIEF: &str = "You are an expert cover letter writer.";

pub const COVER_LETTER_SYSTEM_DETAILED: &str = "You are an expert cover letter writer who \
    creates compelling, personalized cover letters that highlight relevant experience and \
    show genuine interest in the role.";

pub const SKILLS_SYSTEM_BRIEF: &str =
    "Extract key skills from job descriptions. List them clearly.";

pub const SKILLS_SYSTEM_DETAILED: &str = "You are an expert at analyzing job descriptions and \
    extracting key skills, technologies, and requirements.";

pub fn analysis_prompt_brief(resume_content: &str) -> String {
    format!("Analyze this resume and provide improvement suggestions: {resume_content}")
}

pub fn analysis_prompt_detailed(resume_content: &str) -> String {
    format!(
        "Analyze this resume and provide comprehensive feedback:

{resume_content}

Please provide:
1. Overall assessment and ATS compatibility score (1-10)
2. Strengths and weaknesses
3. Specific improvement suggestions
4. Keyword optimization recommendations
5. Formatting and structure feedback
6. Industry-specific advice if applicable

Format your response in a clear, structured manner."
    )
}

/// `job_description` is left out entirely when empty.
pub fn enhancement_prompt_brief(resume_json: &str, job_description: &str) -> String {
    if job_description.is_empty() {
        format!("Enhance this resume: {resume_json}")
    } else {
        format!("Enhance this resume: {resume_json}\n\nJob Description: {job_description}")
    }
}

/// `job_description` is left out entirely when empty.
pub fn enhancement_prompt_detailed(resume_json: &str, job_description: &str) -> String {
    let job_context = if job_description.is_empty() {
        String::new()
    } else {
        format!("\n\nJob Description to match:\n{job_description}")
    };

    format!(
        "Enhance this resume content:

{resume_json}
{job_context}

Please provide enhanced content that:
1. Maintains all truthful information
2. Improves language and impact
3. Adds relevant keywords naturally
4. Optimizes for ATS scanning
5. Highlights achievements with metrics
6. Ensures proper formatting and structure

Provide the enhanced content in a structured format."
    )
}

pub fn cover_letter_prompt_brief(
    resume_json: &str,
    job_description: &str,
    company_name: &str,
) -> String {
    format!(
        "Write a professional cover letter for {company_name}. \
        Resume: {resume_json}. Job: {job_description}"
    )
}

pub fn cover_letter_prompt_detailed(
    resume_json: &str,
    job_description: &str,
    company_name: &str,
) -> String {
    format!(
        "Create a professional cover letter based on:

Resume Data:
{resume_json}

Job Description:
{job_description}

Company: {company_name}

The cover letter should:
1. Be 3-4 paragraphs long
2. Show genuine interest in the role and company
3. Highlight relevant experience and achievements
4. Use a professional but engaging tone
5. Include a strong opening and closing
6. Be ATS-friendly

Please generate a complete cover letter."
    )
}

pub fn skills_prompt_brief(job_description: &str) -> String {
    format!("List the key skills required in this job: {job_description}")
}

pub fn skills_prompt_detailed(job_description: &str) -> String {
    format!(
        "Extract all skills, technologies, and requirements from this job description:

{job_description}

Please provide:
1. Technical skills (programming languages, tools, frameworks)
2. Soft skills
3. Required experience levels
4. Educational requirements
5. Industry-specific knowledge

Format the response as a JSON list of skills for easy parsing."
    )
}
