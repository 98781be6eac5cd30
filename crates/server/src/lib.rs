//! HTTP + WebSocket front for the room coordinator.
//!
//! One actix-web server exposes `/ws` for game connections and
//! `/health` for liveness. Everything stateful lives in the shared
//! [`Coordinator`]; this crate only moves frames.
//!
//! ## Submodules
//!
//! - [`handlers`] — WebSocket upgrade and per-connection bridge

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use rky_gameroom::Coordinator;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn run(host: &str, port: u16) -> Result<(), std::io::Error> {
    let coordinator = web::Data::new(Coordinator::new());
    log::info!("serving rooms on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(coordinator.clone())
            .route("/health", web::get().to(health))
            .route("/ws", web::get().to(handlers::connect))
    })
    .bind((host, port))?
    .run()
    .await
}
