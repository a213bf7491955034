// src/tools/relevance.rs
//! Relevance predicates for the Hacker News scan.
//!
//! The default is a plain keyword gate: lowercase `"<title> <text>"` and accept
//! when any keyword occurs as a substring, so short keywords such as "ai" also
//! hit inside longer words. Any `Fn(&str, Option<&str>) -> bool` closure is a
//! predicate too.

/// Built-in AI/ML keyword list.
pub const AI_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "ml",
    "machine learning",
    "deep learning",
    "neural network",
    "llm",
    "gpt",
    "transformer",
    "generative",
    "diffusion",
    "pytorch",
    "tensorflow",
    "hugging face",
    "openai",
    "anthropic",
    "claude",
    "chatgpt",
    "stable diffusion",
    "midjourney",
    "langchain",
    "embedding",
    "fine-tuning",
    "reinforcement learning",
    "computer vision",
    "nlp",
    "natural language",
    "rag",
    "retrieval augmented",
];

pub trait RelevancePredicate: Send + Sync {
    fn is_relevant(&self, title: &str, text: Option<&str>) -> bool;
}

impl<F> RelevancePredicate for F
where
    F: Fn(&str, Option<&str>) -> bool + Send + Sync,
{
    fn is_relevant(&self, title: &str, text: Option<&str>) -> bool {
        self(title, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPredicate {
    keywords: Vec<String>,
}

impl KeywordPredicate {
    /// Keywords are trimmed and lowercased; blanks are dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn ai_ml() -> Self {
        Self::new(AI_KEYWORDS)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordPredicate {
    fn default() -> Self {
        Self::ai_ml()
    }
}

impl RelevancePredicate for KeywordPredicate {
    fn is_relevant(&self, title: &str, text: Option<&str>) -> bool {
        let content = format!("{} {}", title, text.unwrap_or_default()).to_lowercase();
        self.keywords.iter().any(|k| content.contains(k.as_str()))
    }
}
