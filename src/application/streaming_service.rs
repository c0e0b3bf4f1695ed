// Streaming dashboard service - Directives delivered one chunk at a time
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::Directive;
use crate::domain::filter::FilterSelection;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StreamMessage {
    Directive { sequence: usize, directive: Directive },
    Complete { directives: usize, duration_ms: u64 },
    Error { message: String },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
    channel_capacity: usize,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService, channel_capacity: usize) -> Self {
        Self {
            dashboard_service,
            channel_capacity: channel_capacity.max(1),
        }
    }

    /// Emits every directive in render order, then a completion message.
    pub fn stream_dashboard(&self, selection: FilterSelection) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        let service = self.dashboard_service.clone();

        tokio::spawn(async move {
            let start_time = Instant::now();

            let dashboard = match service.get_dashboard(&selection).await {
                Ok(dashboard) => dashboard,
                Err(e) => {
                    tracing::error!("Error rendering dashboard for stream: {}", e);
                    let _ = tx
                        .send(StreamMessage::Error {
                            message: e.to_string(),
                        })
                        .await;
                    return;
                }
            };

            let total = dashboard.directives.len();
            for (sequence, directive) in dashboard.directives.into_iter().enumerate() {
                if tx.send(StreamMessage::Directive { sequence, directive }).await.is_err() {
                    tracing::debug!("Stream receiver dropped after {} directives", sequence);
                    return;
                }
            }

            let complete = StreamMessage::Complete {
                directives: total,
                duration_ms: start_time.elapsed().as_millis() as u64,
            };
            let _ = tx.send(complete).await;
        });

        rx
    }
}
