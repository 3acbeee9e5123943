use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;

use cfp_backend::api::{AuthApi, HealthApi};
use cfp_backend::app_data::AppData;
use cfp_backend::config::{self, BootstrapSettings, SystemEnvironment, init_logging};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings =
        BootstrapSettings::load(&SystemEnvironment).expect("Failed to load bootstrap settings");

    let db = config::init_database(&settings)
        .await
        .expect("Failed to connect to database");

    config::migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = Arc::new(AppData::init(db, &settings));

    let auth_api = AuthApi::new(app_data);

    let api_service = OpenApiService::new((HealthApi, auth_api), "CFP Backend", "0.1.0")
        .server(format!("http://{}/api", settings.listen_addr()));

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.listen_addr());
    tracing::info!(
        "Swagger UI available at http://{}/swagger",
        settings.listen_addr()
    );

    Server::new(TcpListener::bind(settings.listen_addr()))
        .run(app)
        .await
}
