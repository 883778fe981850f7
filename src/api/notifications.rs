//! Notification stream endpoint

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

/// Server-sent events stream of booking notifications
#[utoipa::path(
    get,
    path = "/notifications/stream",
    tag = "notifications",
    responses(
        (status = 200, description = "SSE stream of notification events")
    )
)]
pub async fn stream_notifications(
    State(state): State<crate::AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.services.notifications.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|msg| {
        // Lagged receivers skip missed notifications rather than erroring
        let event = msg
            .ok()
            .and_then(|n| Event::default().event("notification").json_data(&n).ok());
        event.map(Ok::<_, Infallible>)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
