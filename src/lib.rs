use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod lookup;
pub mod proposal;
pub mod render;
pub mod session;
pub mod state;


pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::proposal::handlers::get_proposal,
            crate::proposal::handlers::set_validity,
            crate::proposal::handlers::add_plan,
            crate::proposal::handlers::update_plan_field,
            crate::proposal::handlers::remove_plan,
            crate::proposal::handlers::generate_document,
            crate::proposal::handlers::serve_document,
            crate::proposal::handlers::get_options,
            crate::lookup::handlers::lookup_client,
        ),
        components(
            schemas(
                proposal::models::PlanLineItem,
                proposal::models::PlanField,
                proposal::handlers::ProposalFormView,
                proposal::handlers::SetValidityRequest,
                proposal::handlers::UpdatePlanRequest,
                proposal::handlers::GenerateResponse,
                proposal::handlers::DocumentInfo,
                proposal::handlers::ProposalOptions,
                lookup::model::ClientRecord,
                lookup::handlers::LookupRequest,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Proposal Form", description = "Editable proposal state and catalog generation."),
            (name = "Documents", description = "Generated catalog preview and download."),
            (name = "Client Lookup", description = "Company lookup in the public CNPJ registry.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Localhost server")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok(); // Load .env file
    let app_state = web::Data::new(AppState::from_env());

    let prometheus = PrometheusMetricsBuilder::new("folhita_catalog_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .configure(proposal::handlers::config)
                    .configure(lookup::handlers::config),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
