//! Lexical sentiment engines
//!
//! Two independent engines back the dual analyzer:
//! - [`VaderEngine`]: compound score tuned for social media text
//! - [`PatternEngine`]: word-level polarity with subjectivity

pub mod pattern;
pub mod vader;

pub use pattern::PatternEngine;
pub use vader::VaderEngine;
