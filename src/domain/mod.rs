// Domain layer - Immutable value records for the inspection-to-quote workflow
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod kpi;
pub mod quote;
pub mod workflow;
