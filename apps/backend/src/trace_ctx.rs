//! Task-local trace context for web requests.
//!
//! Holds the current request's trace_id in Tokio task-local storage so that
//! error rendering and logging can pick it up without threading it through
//! every call. The scope is established by the request-trace middleware;
//! service code should not import this module directly.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// The trace_id of the current task, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
