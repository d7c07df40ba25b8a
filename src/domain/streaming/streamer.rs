//! Response streamer: contextual templating plus timed chunk emission.
//!
//! Given a prompt and a conversation-context summary, renders a templated
//! response and re-emits it as growing word prefixes over a channel,
//! sleeping between chunks per the computed schedule. Dropping the stream
//! stops production; any internal fault collapses into a single final
//! apology chunk so consumers always see exactly one completion event.

use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use crate::domain::foundation::MessageId;

use super::plan::StreamPlan;
use super::template::{render, select_template, ContextValues};

/// Fallback text when rendering or scheduling fails.
const APOLOGY_TEXT: &str =
    "I apologize, but I'm having trouble generating a response right now. Please try again.";

/// Buffered chunks before backpressure kicks in.
const CHANNEL_CAPACITY: usize = 32;

/// One streamed chunk: the cumulative response prefix so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    pub text: String,
    pub is_final: bool,
    /// Present only on the final chunk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<MessageId>,
}

/// Internal fault while preparing a response for streaming. Never escapes
/// the stream; it becomes the apology chunk.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error("Template left an unresolved placeholder: {0}")]
    UnresolvedPlaceholder(String),
}

/// A live chunk sequence. Implements `Stream`; dropping it cancels the
/// producer.
pub struct ResponseStream {
    receiver: mpsc::Receiver<StreamChunk>,
}

impl ResponseStream {
    /// Receives the next chunk, or `None` once the final chunk was taken.
    pub async fn next_chunk(&mut self) -> Option<StreamChunk> {
        self.receiver.recv().await
    }
}

impl Stream for ResponseStream {
    type Item = StreamChunk;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<StreamChunk>> {
        self.receiver.poll_recv(cx)
    }
}

/// Streams templated responses with a typewriter cadence.
#[derive(Debug, Clone, Copy)]
pub struct ResponseStreamer {
    base_delay: Duration,
}

impl ResponseStreamer {
    /// Creates a streamer with the given base inter-word delay.
    pub fn new(base_delay: Duration) -> Self {
        Self { base_delay }
    }

    /// Creates a streamer that emits without pausing, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Renders a contextual response and streams it as growing prefixes.
    ///
    /// Restartable per call: every invocation recomputes the template and
    /// word split. The returned stream always terminates with exactly one
    /// final chunk carrying a fresh message id.
    pub fn stream_response(&self, prompt: &str, context_summary: &str) -> ResponseStream {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let outcome = self.compose(prompt, context_summary);

        tokio::spawn(async move {
            Self::run(outcome, tx).await;
        });

        ResponseStream { receiver: rx }
    }

    /// Builds the emission schedule, or a typed fault for the apology path.
    fn compose(&self, prompt: &str, context_summary: &str) -> Result<StreamPlan, StreamError> {
        let template = select_template(prompt, context_summary);
        let values = ContextValues::parse(context_summary);
        let rendered = render(template, &values);
        debug!(?template, words = rendered.split_whitespace().count(), "composed response");

        if rendered.contains('{') || rendered.contains('}') {
            return Err(StreamError::UnresolvedPlaceholder(rendered));
        }
        Ok(StreamPlan::new(&rendered, self.base_delay))
    }

    async fn run(outcome: Result<StreamPlan, StreamError>, tx: mpsc::Sender<StreamChunk>) {
        let plan = match outcome {
            Ok(plan) => plan,
            Err(err) => {
                debug!(%err, "streaming fault, sending apology");
                let _ = tx.send(Self::apology_chunk()).await;
                return;
            }
        };

        for planned in plan {
            let chunk = StreamChunk {
                text: planned.text,
                is_final: planned.is_final,
                message_id: planned.is_final.then(MessageId::new),
            };
            if tx.send(chunk).await.is_err() {
                // Consumer stopped iterating; no more chunks, no more timers.
                return;
            }
            if let Some(delay) = planned.delay_after {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    fn apology_chunk() -> StreamChunk {
        StreamChunk {
            text: APOLOGY_TEXT.to_string(),
            is_final: true,
            message_id: Some(MessageId::new()),
        }
    }
}
