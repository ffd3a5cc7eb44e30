//! The fixed set of topic categories tracked by the summary.

use serde::Serialize;

/// Topic category of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Business,
    Sport,
    Tech,
    Politics,
    Entertainment,
}

impl Topic {
    /// All categories, in display order.
    pub const ALL: [Topic; 5] = [
        Topic::Business,
        Topic::Sport,
        Topic::Tech,
        Topic::Politics,
        Topic::Entertainment,
    ];

    /// The exact value used in the dataset's `topic` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Business => "business",
            Topic::Sport => "sport",
            Topic::Tech => "tech",
            Topic::Politics => "politics",
            Topic::Entertainment => "entertainment",
        }
    }

    /// Row label in the summary table, e.g. `Business related topic`.
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!(
                "{}{} related topic",
                first.to_uppercase(),
                chars.as_str()
            ),
            None => String::new(),
        }
    }

    /// Exact match only: `"Tech"` or `" tech"` are not [`Topic::Tech`].
    pub fn matches(&self, value: &str) -> bool {
        value == self.as_str()
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Topic::Business.label(), "Business related topic");
        assert_eq!(Topic::Entertainment.label(), "Entertainment related topic");
    }

    #[test]
    fn test_exact_matching() {
        assert!(Topic::Tech.matches("tech"));
        assert!(!Topic::Tech.matches("Tech"));
        assert!(!Topic::Tech.matches("technology"));
    }
}
