//! Delayed, cancellable loading of form data
//!
//! Stands in for a remote fetch: after a delay the data source is queried and
//! the result is handed to the app loop over a channel. Cancelling (or
//! dropping) the loader stops the task, so a torn-down form never receives a
//! late write.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Where prefill data comes from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<Value>;
}

/// Data the signup form is prefilled with
pub fn sample_data() -> Value {
    json!({
        "email": "foo@bar.com",
        "address": {
            "street": "Rua das tetas",
            "number": "123"
        }
    })
}

/// Data source answering with [`sample_data`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataSource;

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self) -> Result<Value> {
        Ok(sample_data())
    }
}

/// Result of a finished load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Loaded(Value),
    Failed(String),
}

/// Handle to a running load task
pub struct DataLoader {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
    events: UnboundedReceiver<LoadEvent>,
}

impl DataLoader {
    /// Start loading from `source` once `delay` has elapsed
    pub fn spawn(source: Arc<dyn DataSource>, delay: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let (tx, events) = unbounded_channel();

        let handle = tokio::spawn(async move {
            let load = async {
                tokio::time::sleep(delay).await;
                source.fetch().await
            };

            tokio::select! {
                _ = token.cancelled() => debug!("Data load cancelled"),
                result = load => {
                    let event = match result {
                        Ok(data) => LoadEvent::Loaded(data),
                        Err(e) => {
                            warn!("Data load failed: {e:#}");
                            LoadEvent::Failed(format!("{e:#}"))
                        }
                    };
                    if !token.is_cancelled() {
                        let _ = tx.send(event);
                    }
                }
            }
        });

        Self {
            cancel,
            handle,
            events,
        }
    }

    /// Take the load result if it has arrived
    pub fn try_recv(&mut self) -> Option<LoadEvent> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.events.try_recv().ok()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DataLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
