//! Scheduled reveal of chat replies, one character at a time.
//!
//! The reveal runs as a tokio task owned by a [`RevealHandle`]. Dropping
//! or cancelling the handle stops it; a closed receiver stops it too.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Owner of a running reveal task.
#[derive(Debug)]
pub struct RevealHandle {
    task: Option<JoinHandle<()>>,
}

/// Start revealing `text`, sending each longer prefix to `sink` every
/// `interval`. The last message sent is the full text.
///
/// Must be called from within a tokio runtime.
pub fn spawn(text: impl Into<String>, interval: Duration, sink: mpsc::Sender<String>) -> RevealHandle {
    let text = text.into();
    let task = tokio::spawn(async move {
        let boundaries = text
            .char_indices()
            .map(|(index, c)| index + c.len_utf8());
        for end in boundaries {
            tokio::time::sleep(interval).await;
            if sink.send(text[..end].to_string()).await.is_err() {
                debug!("Reveal receiver closed");
                return;
            }
        }
    });
    RevealHandle { task: Some(task) }
}

impl RevealHandle {
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stop the reveal where it is.
    pub fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Wait for the reveal to end. Returns `false` if it was aborted.
    pub async fn finished(mut self) -> bool {
        match self.task.take() {
            Some(task) => task.await.is_ok(),
            None => false,
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
