use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub name: String,
    pub language: String,
    pub code: String,
    pub date: DateTime<Utc>,
}

/// Index entry returned when listing a user's snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetSummary {
    pub name: String,
    pub language: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CodeBook {
    pub email: String,
    pub snippets: Json<Vec<CodeSnippet>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CodeBook {
    /// `{name, language}` for every snippet, in submission order.
    pub fn summaries(&self) -> Vec<SnippetSummary> {
        self.snippets
            .iter()
            .map(|s| SnippetSummary {
                name: s.name.clone(),
                language: s.language.clone(),
            })
            .collect()
    }

    /// First snippet with the given name. Names are not unique; later
    /// snippets sharing a name are never returned here.
    pub fn find_snippet(&self, name: &str) -> Option<&CodeSnippet> {
        self.snippets.iter().find(|s| s.name == name)
    }
}
