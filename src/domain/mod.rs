// Analytics summary types
pub mod analytics;

// Domain-specific error types
pub mod errors;

// Tag extraction
pub mod hashtags;

// Port interfaces (lexical engines)
pub mod ports;

// Scored records and listing queries
pub mod record;

// Relevance scoring
pub mod relevance;

// Repository traits
pub mod repositories;

// Labels, threshold rule and fusion
pub mod sentiment;
