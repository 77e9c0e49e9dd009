use crate::clipboard::ClipboardWriter;
use crate::document::Document;
use crate::notify::Notifier;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::{self, JoinHandle};
use tracing::{debug, warn};

pub const DEFAULT_MESSAGE: &str = "Copied!";

/// A single request to copy one element's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub element_id: String,
}

impl CopyRequest {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

/// What a copy request did.
///
/// Callers may drop this; the clipboard write runs to completion either way.
#[derive(Debug)]
pub enum CopyOutcome {
    /// No element has the requested id.
    Missing,
    /// The element's trimmed text is empty.
    Empty,
    /// No Tokio runtime was available to run the write.
    NoRuntime,
    /// A clipboard write is in flight.
    Scheduled(JoinHandle<()>),
}

impl CopyOutcome {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, CopyOutcome::Scheduled(_))
    }

    /// Waits for a scheduled write and its confirmation to finish.
    pub async fn wait(self) {
        if let CopyOutcome::Scheduled(handle) = self {
            if let Err(err) = handle.await {
                warn!(error = %err, "Copy task did not complete");
            }
        }
    }
}

/// Copies element text from a document to a clipboard and confirms it.
#[derive(Clone)]
pub struct ClipboardCopier {
    document: Arc<dyn Document>,
    clipboard: Arc<dyn ClipboardWriter>,
    notifier: Arc<dyn Notifier>,
    message: String,
}

impl ClipboardCopier {
    pub fn new(
        document: Arc<dyn Document>,
        clipboard: Arc<dyn ClipboardWriter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            document,
            clipboard,
            notifier,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Runs once the document is ready. Currently has nothing to do.
    pub fn on_ready(&self) {
        debug!("Document ready");
    }

    /// Copies the trimmed text of the element with `id`.
    ///
    /// Does nothing when the element is missing or its text is empty. Otherwise
    /// the write happens on a background task and the confirmation is shown once
    /// it succeeds. Neither a failed write nor a failed confirmation is reported
    /// to the caller. Outside a Tokio runtime nothing is written.
    pub fn copy_text_by_id(&self, id: &str) -> CopyOutcome {
        self.copy(CopyRequest::new(id))
    }

    pub fn copy(&self, request: CopyRequest) -> CopyOutcome {
        let Some(element) = self.document.find_by_id(&request.element_id) else {
            debug!(id = %request.element_id, "No element with this id");
            return CopyOutcome::Missing;
        };

        let text = element.visible_text();
        if text.is_empty() {
            debug!(id = %request.element_id, "Element has no text");
            return CopyOutcome::Empty;
        }

        let Ok(runtime) = Handle::try_current() else {
            debug!(id = %request.element_id, "No runtime to run the clipboard write");
            return CopyOutcome::NoRuntime;
        };

        let text = text.to_string();
        let clipboard = Arc::clone(&self.clipboard);
        let notifier = Arc::clone(&self.notifier);
        let message = self.message.clone();
        let id = request.element_id;

        CopyOutcome::Scheduled(runtime.spawn(async move {
            let written = task::spawn_blocking(move || clipboard.write_text(&text)).await;

            match written {
                Ok(Ok(())) => {
                    debug!(%id, "Copied element text to clipboard");
                    confirm(notifier, message).await;
                }
                Ok(Err(err)) => warn!(%id, error = %err, "Clipboard write failed"),
                Err(err) => warn!(%id, error = %err, "Clipboard write did not complete"),
            }
        }))
    }
}

async fn confirm(notifier: Arc<dyn Notifier>, message: String) {
    match task::spawn_blocking(move || notifier.notify(&message)).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => debug!(error = %err, "Confirmation not shown"),
        Err(err) => debug!(error = %err, "Confirmation not shown"),
    }
}
