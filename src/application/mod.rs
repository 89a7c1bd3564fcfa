// Dual-engine sentiment analysis
pub mod analyzer;

// Overview and trending aggregation
pub mod analytics;

// Ingestion pipeline
pub mod ingestion;

// Demo data
pub mod sample_generator;
