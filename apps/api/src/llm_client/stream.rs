//! Server-sent-event accumulation for streaming completions.

use std::pin::pin;

use eventsource_stream::{EventStreamError, Eventsource};
use futures_util::StreamExt;
use reqwest::Response;
use tracing::trace;

use super::{CompletionResponse, LlmError};

/// Reads the body as SSE and concatenates every `choices[0].delta.content`.
/// Events that do not decode are skipped. Only transport failures are errors.
pub(super) async fn collect_stream(response: Response) -> Result<String, LlmError> {
    let mut events = pin!(response.bytes_stream().eventsource());
    let mut content = String::new();

    while let Some(event) = events.next().await {
        let event = match event {
            Ok(event) => event,
            Err(EventStreamError::Transport(e)) => return Err(LlmError::Http(e)),
            Err(e) => {
                trace!("Skipping undecodable SSE event: {e}");
                continue;
            }
        };

        if let Some(fragment) = delta_content(&event.data) {
            content.push_str(&fragment);
        }
    }

    Ok(content)
}

/// Extracts the first choice's delta text from one event payload.
fn delta_content(data: &str) -> Option<String> {
    let chunk: CompletionResponse = serde_json::from_str(data).ok()?;
    chunk.choices.into_iter().next()?.delta?.content
}
