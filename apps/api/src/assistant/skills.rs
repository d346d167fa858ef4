//! Skill-list post-processing — turns free-text model output into a short list of skills.
//!
//! Two branches with different bounds:
//! - the whole response is a JSON array of strings → returned as-is, never capped
//! - anything else → line filter, then capped by the policy
//!
//! Under a strict-JSON policy, any other valid JSON document yields no skills.

use serde_json::Value;

/// Substrings removed from every candidate line, applied in order.
const STRIPPED_MARKERS: &[&str] = &["- ", "• ", "\"", ","];

/// Line-filter limits for one call path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillParsePolicy {
    /// Lines with at least this many chars are dropped. `None` keeps all lengths.
    pub max_len: Option<usize>,
    /// Maximum number of lines kept.
    pub cap: usize,
    /// Drop lines that open or close a JSON object.
    pub skip_braces: bool,
    /// Valid JSON that is not an array of strings yields an empty list.
    pub strict_json: bool,
}

impl SkillParsePolicy {
    /// Short extraction used by the HTTP service.
    pub const BRIEF: Self = Self {
        max_len: Some(50),
        cap: 8,
        skip_braces: false,
        strict_json: false,
    };

    /// Richer extraction used by the interactive CLI.
    pub const DETAILED: Self = Self {
        max_len: None,
        cap: 20,
        skip_braces: true,
        strict_json: true,
    };
}

/// Parses a model response into an ordered skill list.
/// Returns an empty list when every line is filtered out.
pub fn parse_skill_list(response: &str, policy: SkillParsePolicy) -> Vec<String> {
    if let Ok(value) = serde_json::from_str::<Value>(response.trim()) {
        if let Some(skills) = string_array(&value) {
            return skills;
        }
        if policy.strict_json {
            return Vec::new();
        }
    }

    response
        .lines()
        .filter_map(|line| clean_line(line, policy))
        .take(policy.cap)
        .collect()
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn clean_line(line: &str, policy: SkillParsePolicy) -> Option<String> {
    let line = line.trim();
    if policy.skip_braces && (line.starts_with('{') || line.starts_with('}')) {
        return None;
    }

    let cleaned = STRIPPED_MARKERS
        .iter()
        .fold(line.to_string(), |acc, marker| acc.replace(marker, ""));

    if cleaned.is_empty() || cleaned.starts_with('*') {
        return None;
    }
    if policy
        .max_len
        .is_some_and(|max| cleaned.chars().count() >= max)
    {
        return None;
    }

    Some(cleaned)
}
