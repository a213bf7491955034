// src/tools/providers/mod.rs
pub mod arxiv;
pub mod hacker_news;
pub mod hf_papers;
pub mod hf_spaces;

pub use arxiv::ArxivTool;
pub use hacker_news::HackerNewsTool;
pub use hf_papers::HuggingFacePapersTool;
pub use hf_spaces::HuggingFaceSpacesTool;
