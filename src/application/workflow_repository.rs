// Repository trait for workflow data access
use crate::domain::workflow::WorkflowSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait WorkflowRepository: Send + Sync {
    /// Everything shown on the dashboard, in display order
    async fn snapshot(&self) -> anyhow::Result<WorkflowSnapshot>;
}
