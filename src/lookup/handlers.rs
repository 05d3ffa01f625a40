use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::model::ClientRecord;
use super::LookupError;
use crate::state::AppState;
use crate::ErrorResponse;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/clients/lookup").route(web::post().to(lookup_client)),
    );
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LookupRequest {
    #[schema(example = "11.222.333/0001-81")]
    pub cnpj: String,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Client Lookup",
    post,
    path = "/clients/lookup",
    request_body = LookupRequest,
    responses(
        (status = 200, description = "Company found in the registry", body = ClientRecord),
        (status = 400, description = "Input is not a valid 14-digit CNPJ", body = ErrorResponse),
        (status = 409, description = "Another lookup is already in flight", body = ErrorResponse),
        (status = 502, description = "Registry call failed or company not found", body = ErrorResponse)
    )
)]
pub async fn lookup_client(
    req: web::Json<LookupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    {
        let mut session = data.session.write();
        if !session.begin_lookup() {
            return HttpResponse::Conflict().json(ErrorResponse::new(
                "LookupBusy",
                "Uma consulta de CNPJ já está em andamento",
            ));
        }
    }

    let result = data.registry.lookup(&req.cnpj).await;

    let mut session = data.session.write();
    match result {
        Ok(record) => {
            session.finish_lookup(Some(record.clone()));
            HttpResponse::Ok().json(record)
        }
        Err(err) => {
            session.finish_lookup(None);
            log::warn!("CNPJ lookup failed: {}", err);
            let body = ErrorResponse::new(err.code(), &err.to_string());
            match err {
                LookupError::InvalidIdentifier => HttpResponse::BadRequest().json(body),
                LookupError::LookupFailed(_) => HttpResponse::BadGateway().json(body),
            }
        }
    }
}
