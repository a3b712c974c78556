use crate::domain::changelog::{ChangelogRequest, ChatMessage};
use crate::domain::commit::CommitRecord;

const BASE_TOKENS: u32 = 500;
const TOKENS_PER_COMMIT: u32 = 5;
const MAX_TOKENS: u32 = 2000;

const INSTRUCTIONS: &str = "Generate a concise changelog summarizing the following git commit messages. \
Focus on grouping related changes together, avoiding unnecessary details, and keeping the summary brief. \
Ensure the changelog is structured with clear sections like:\n\
- **New Features** (Major additions users should know about)\n\
- **Improvements** (Performance, UI, or usability enhancements)\n\
- **Bug Fixes** (Resolved issues and stability fixes)\n\
- **Other Updates** (Anything else that is relevant but not critical)\n\n\
Summarize multiple small commits into a single bullet point if they are related, and do not list every commit separately. \
The goal is to keep the changelog short and readable.\n\n\
Return **only the formatted changelog**, with no introductions or explanations. \
Do not include phrases like 'Here's a concise changelog' or additional notes at the end.\n\n\
### Commits to process:\n\n";

#[derive(Debug, Clone)]
pub struct PromptSettings {
    pub model: String,
    pub temperature: f32,
}

/// Output budget for `commit_count` commits, clamped to `[500, 2000]`.
pub fn token_budget(commit_count: usize) -> u32 {
    let count = u32::try_from(commit_count).unwrap_or(u32::MAX);
    BASE_TOKENS
        .saturating_add(count.saturating_mul(TOKENS_PER_COMMIT))
        .min(MAX_TOKENS)
}

pub fn build_changelog_request(
    commits: &[CommitRecord],
    settings: &PromptSettings,
) -> ChangelogRequest {
    let commit_log = commits
        .iter()
        .map(CommitRecord::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    ChangelogRequest {
        model: settings.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: format!("{INSTRUCTIONS}{commit_log}"),
        }],
        max_tokens: token_budget(commits.len()),
        temperature: settings.temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

    fn settings() -> PromptSettings {
        PromptSettings {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    fn records(lines: &[&str]) -> Vec<CommitRecord> {
        lines.iter().map(|line| CommitRecord::new(*line)).collect()
    }

    #[test]
    fn builds_request_for_two_commits() {
        let commits = records(&["abcd123 Fix bug", "xyz789 Add feature"]);
        let request = build_changelog_request(&commits, &settings());

        assert_eq!(request.model, "claude-3-5-sonnet-latest");
        assert_eq!(request.max_tokens, 510);
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");

        let prompt = request.prompt().unwrap();
        assert!(prompt.ends_with("### Commits to process:\n\nabcd123 Fix bug\nxyz789 Add feature"));
    }

    #[test]
    fn token_budget_is_clamped_linear() {
        for count in [0usize, 1, 2, 100, 299, 300, 301, 1000, usize::MAX] {
            let expected = (500u128 + 5 * count as u128).clamp(500, 2000) as u32;
            assert_eq!(token_budget(count), expected, "count {count}");
        }
    }

    #[test]
    fn keeps_every_line_verbatim_and_in_order() {
        let lines: Vec<String> = (0..40).map(|i| format!("{i:07x} Commit number {i}")).collect();
        let commits: Vec<CommitRecord> = lines.iter().map(CommitRecord::new).collect();
        let request = build_changelog_request(&commits, &settings());
        let prompt = request.prompt().unwrap();

        let mut cursor = 0;
        for line in &lines {
            let found = prompt[cursor..]
                .find(line.as_str())
                .unwrap_or_else(|| panic!("missing or out of order: {line}"));
            cursor += found + line.len();
        }
        assert_eq!(request.max_tokens, 700);
    }

    #[test]
    fn prompt_asks_for_the_four_sections() {
        let request = build_changelog_request(&records(&["a1 One"]), &settings());
        let prompt = request.prompt().unwrap();
        for section in ["New Features", "Improvements", "Bug Fixes", "Other Updates"] {
            assert!(prompt.contains(&format!("**{section}**")), "{section}");
        }
        assert!(prompt.contains("do not list every commit separately"));
    }

    #[test]
    fn uses_injected_model_and_temperature() {
        let custom = PromptSettings {
            model: "claude-test".to_string(),
            temperature: 0.2,
        };
        let request = build_changelog_request(&[], &custom);
        assert_eq!(request.model, "claude-test");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 500);
    }
}
