use actix_web::{web, App, HttpResponse, HttpServer};
use herald_api::Application;
use herald_infra::{setup_context, Config};
use herald_sdk::HeraldSDK;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, HeraldSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = HeraldSDK::new(address.clone());
    (app, sdk, address)
}

pub type ReceivedPayloads = Arc<Mutex<Vec<serde_json::Value>>>;

async fn accept_hook(
    payloads: web::Data<ReceivedPayloads>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    payloads.lock().unwrap().push(body.0);
    HttpResponse::Ok().finish()
}

async fn reject_hook(
    payloads: web::Data<ReceivedPayloads>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    payloads.lock().unwrap().push(body.0);
    HttpResponse::InternalServerError().finish()
}

// Launch an endpoint that records the webhook notifications it receives.
// `/hook` accepts them, `/reject` records them but answers 500.
pub async fn spawn_webhook_receiver() -> (String, ReceivedPayloads) {
    let payloads: ReceivedPayloads = Arc::new(Mutex::new(Vec::new()));
    let state = payloads.clone();

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind receiver");
    let port = listener.local_addr().expect("Receiver address").port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .route("/hook", web::post().to(accept_hook))
            .route("/reject", web::post().to(reject_hook))
    })
    .listen(listener)
    .expect("Failed to listen on receiver")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    (format!("http://127.0.0.1:{}", port), payloads)
}
