use std::fmt;

/// One line of history: `<short-hash> <subject>`, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord(String);

impl CommitRecord {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits `git log --pretty=format:"%h %s"` output into records, most recent first.
pub fn parse_log_output(output: &str) -> Vec<CommitRecord> {
    output
        .trim()
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(CommitRecord::new)
        .collect()
}
