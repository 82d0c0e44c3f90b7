use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use leavedesk::Config;
use leavedesk::database::{
    init_database,
    repositories::{LicenseRepository, MedicalRepository, VacationRepository},
};
use leavedesk::handlers::leaves;
use leavedesk::middleware::RequestIdMiddleware;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("LeaveDesk API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting LeaveDesk API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // One repository per leave category, constructed once and handed to the
    // app as shared data. No lazy singletons.
    let vacation_repository = VacationRepository::new(pool.clone());
    let medical_repository = MedicalRepository::new(pool.clone());
    let license_repository = LicenseRepository::new(pool.clone());

    let vacation_repo_data = web::Data::new(vacation_repository);
    let medical_repo_data = web::Data::new(medical_repository);
    let license_repo_data = web::Data::new(license_repository);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        // Mobile clients send no Origin header; the open policy only serves
        // browser tooling during development.
        let cors = if config.is_production() {
            Cors::default()
        } else {
            Cors::default().allow_any_origin()
        }
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec!["Content-Type", "Accept", "X-Correlation-ID"])
        .max_age(3600);

        App::new()
            .app_data(vacation_repo_data.clone())
            .app_data(medical_repo_data.clone())
            .app_data(license_repo_data.clone())
            .app_data(config_data.clone())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .service(
                web::scope("/api/v1").service(
                    web::scope("/leaves")
                        .route("", web::post().to(leaves::submit_leave))
                        .route("", web::get().to(leaves::list_leaves))
                        .route("/validate", web::post().to(leaves::validate_leave))
                        .route("/derive-end-date", web::post().to(leaves::derive_end_date))
                        .route("/{category}/{id}", web::delete().to(leaves::delete_leave)),
                ),
            )
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
