// Application layer - Use cases over the workflow data
pub mod dashboard_service;
pub mod streaming_service;
pub mod workflow_repository;
