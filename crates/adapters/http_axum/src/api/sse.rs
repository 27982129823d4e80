//! Server-Sent Events stream of ingested events.

use axum::extract::State;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use bridgeview_app::ports::PluginBridge;

use crate::state::AppState;

/// `GET /api/events/stream` — one JSON `data:` frame per ingested event.
///
/// The stream lives until the client disconnects. Slow subscribers skip
/// the events they missed rather than blocking ingestion.
pub async fn stream<B>(
    State(state): State<AppState<B>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<SseEvent, std::convert::Infallible>>>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let event_rx = state.event_bus.subscribe();
    let frames = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(SseEvent::default().event("event").data(json))),
            Err(err) => {
                tracing::warn!(%err, event_id = %event.id, "dropping unserializable event");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "event stream subscriber lagged");
            None
        }
    });

    Sse::new(frames).keep_alive(KeepAlive::default())
}
