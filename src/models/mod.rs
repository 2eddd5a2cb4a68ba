pub mod code_book;
pub mod form;

pub use code_book::{CodeBook, CodeSnippet, SnippetSummary};
pub use form::FormSubmission;
