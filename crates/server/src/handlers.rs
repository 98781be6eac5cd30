use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::web;
use futures::StreamExt;
use rky_core::ID;
use rky_gameroom::Connection;
use rky_gameroom::Coordinator;
use rky_gameroom::Protocol;
use rky_gameroom::ServerMessage;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;

/// Upgrades the request and spawns the per-connection bridge task.
pub async fn connect(
    coordinator: web::Data<Coordinator>,
    body: web::Payload,
    req: HttpRequest,
) -> HttpResponse {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            bridge(coordinator.into_inner(), session, stream);
            response
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Pumps coordinator messages out to the socket and socket frames into
/// the coordinator until either side closes, then sweeps the handle out
/// of every room.
fn bridge(
    coordinator: Arc<Coordinator>,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) {
    let handle = ID::<Connection>::default();
    let (tx, mut rx) = unbounded_channel::<ServerMessage>();
    log::debug!("[bridge {}] connected", handle);
    actix_web::rt::spawn(async move {
        'sesh: loop {
            tokio::select! {
                biased;
                message = rx.recv() => match message {
                    Some(message) => if session.text(message.to_json()).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                frame = stream.next() => match frame {
                    Some(Ok(actix_ws::Message::Text(text))) => match Protocol::decode(&text) {
                        Ok(message) => coordinator.dispatch(handle, &tx, message).await,
                        Err(e) => log::debug!("[bridge {}] dropped frame: {}", handle, e),
                    },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        coordinator.disconnect(handle).await;
        log::debug!("[bridge {}] disconnected", handle);
    });
}
