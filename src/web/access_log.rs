use axum::http::{Response, StatusCode};
use std::time::Duration;
use tower_http::trace::OnResponse;
use tracing::Span;

/// Access log line emitted once per response.
///
/// `304 Not Modified` responses (repeat static asset fetches) are dropped
/// unless `log_not_modified` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLog {
    log_not_modified: bool,
}

impl AccessLog {
    pub fn new(log_not_modified: bool) -> Self {
        Self { log_not_modified }
    }

    pub fn should_log(&self, status: StatusCode) -> bool {
        self.log_not_modified || status != StatusCode::NOT_MODIFIED
    }
}

impl<B> OnResponse<B> for AccessLog {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        if !self.should_log(status) {
            return;
        }

        let latency_ms = latency.as_millis() as u64;
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), latency_ms, "response");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "response");
        }
    }
}
