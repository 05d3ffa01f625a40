use actix_web::{
    web::{self, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::form::RemovePlanOutcome;
use super::models::{PlanField, PlanLineItem, CONTRACT_TIMES, DURATIONS, LOCATIONS, MONTHS};
use crate::lookup::model::ClientRecord;
use crate::session::{ProposalSession, StoredDocument};
use crate::state::AppState;
use crate::ErrorResponse;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/proposal").route(web::get().to(get_proposal)))
        .service(web::resource("/proposal/validity").route(web::put().to(set_validity)))
        .service(web::resource("/proposal/plans").route(web::post().to(add_plan)))
        .service(
            web::resource("/proposal/plans/{id}")
                .route(web::put().to(update_plan_field))
                .route(web::delete().to(remove_plan)),
        )
        .service(web::resource("/proposal/generate").route(web::post().to(generate_document)))
        .service(web::resource("/proposal/options").route(web::get().to(get_options)))
        .service(web::resource("/documents/{id}").route(web::get().to(serve_document)));
}

/// Snapshot of the editable form state plus the current artifact, if any.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposalFormView {
    #[schema(example = "Julho")]
    pub valid_until: String,
    pub plans: Vec<PlanLineItem>,
    pub client: Option<ClientRecord>,
    pub document: Option<DocumentInfo>,
}

impl ProposalFormView {
    fn from_session(session: &ProposalSession) -> Self {
        ProposalFormView {
            valid_until: session.form.valid_until().to_string(),
            plans: session.form.plans().to_vec(),
            client: session.form.client().cloned(),
            document: session.current_document().map(DocumentInfo::from_stored),
        }
    }
}

/// Metadata of a generated catalog, addressed by its preview id.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub id: Uuid,
    #[schema(example = "proposta-comercial-folhita-1754500000000.pdf")]
    pub filename: String,
    pub size_bytes: usize,
    pub page_count: usize,
    pub created_at: String,
}

impl DocumentInfo {
    fn from_stored(stored: &StoredDocument) -> Self {
        DocumentInfo {
            id: stored.id,
            filename: stored.document.filename.clone(),
            size_bytes: stored.document.pdf.len(),
            page_count: stored.document.page_count,
            created_at: stored.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetValidityRequest {
    #[schema(example = "Julho")]
    pub valid_until: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePlanRequest {
    pub field: PlanField,
    #[schema(example = "R$ 1.650,00")]
    pub value: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[schema(example = "Gerando catálogo PDF - Código: FCV260715093005")]
    pub message: String,
    pub proposal_code: String,
    #[schema(example = "Eunápolis - BA")]
    pub location: String,
    pub document: DocumentInfo,
}

/// Fixed option sets for the form's select inputs.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposalOptions {
    pub months: Vec<String>,
    pub durations: Vec<String>,
    pub locations: Vec<String>,
    pub contract_times: Vec<String>,
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    get,
    path = "/proposal",
    responses(
        (status = 200, description = "Current form state", body = ProposalFormView)
    )
)]
pub async fn get_proposal(data: web::Data<AppState>) -> impl Responder {
    let session = data.session.read();
    HttpResponse::Ok().json(ProposalFormView::from_session(&session))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    put,
    path = "/proposal/validity",
    request_body = SetValidityRequest,
    responses(
        (status = 200, description = "Validity month selected", body = ProposalFormView)
    )
)]
pub async fn set_validity(
    req: web::Json<SetValidityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut session = data.session.write();
    session.form.set_valid_until(req.into_inner().valid_until);
    HttpResponse::Ok().json(ProposalFormView::from_session(&session))
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    post,
    path = "/proposal/plans",
    responses(
        (status = 201, description = "Plan row appended", body = PlanLineItem)
    )
)]
pub async fn add_plan(data: web::Data<AppState>) -> impl Responder {
    let mut session = data.session.write();
    let plan = session.form.add_plan();
    HttpResponse::Created().json(plan)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    put,
    path = "/proposal/plans/{id}",
    request_body = UpdatePlanRequest,
    responses(
        (status = 200, description = "Field replaced", body = ProposalFormView),
        (status = 404, description = "No plan with that id", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "Id of the plan to edit")
    )
)]
pub async fn update_plan_field(
    id: Path<Uuid>,
    req: web::Json<UpdatePlanRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut session = data.session.write();
    let req = req.into_inner();
    if session.form.update_field(&id.into_inner(), req.field, req.value) {
        HttpResponse::Ok().json(ProposalFormView::from_session(&session))
    } else {
        HttpResponse::NotFound().json(ErrorResponse::not_found("Plano não encontrado"))
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    delete,
    path = "/proposal/plans/{id}",
    responses(
        (status = 204, description = "Plan removed"),
        (status = 404, description = "No plan with that id", body = ErrorResponse),
        (status = 409, description = "The last remaining plan cannot be removed", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "Id of the plan to remove")
    )
)]
pub async fn remove_plan(id: Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let mut session = data.session.write();
    match session.form.remove_plan(&id.into_inner()) {
        RemovePlanOutcome::Removed => HttpResponse::NoContent().finish(),
        RemovePlanOutcome::LastPlan => HttpResponse::Conflict().json(ErrorResponse::new(
            "LastPlan",
            "Você deve ter pelo menos um plano",
        )),
        RemovePlanOutcome::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Plano não encontrado"))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    post,
    path = "/proposal/generate",
    responses(
        (status = 201, description = "Catalog generated and installed as the current artifact", body = GenerateResponse),
        (status = 400, description = "Validation failed; the form is unchanged", body = ErrorResponse),
        (status = 409, description = "A catalog is already being generated", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn generate_document(data: web::Data<AppState>) -> impl Responder {
    let submission = {
        let mut session = data.session.write();
        if !session.begin_render() {
            return HttpResponse::Conflict().json(ErrorResponse::new(
                "RenderBusy",
                "Um catálogo já está sendo gerado",
            ));
        }
        match session.form.submit() {
            Ok(submission) => submission,
            Err(err) => {
                session.finish_render();
                return HttpResponse::BadRequest()
                    .json(ErrorResponse::new(err.code(), &err.to_string()));
            }
        }
    };

    let rendered = data.renderer.render(&submission);

    let mut session = data.session.write();
    session.finish_render();
    match rendered {
        Ok(document) => {
            log::info!(
                "generated catalog {} ({} pages, {} bytes)",
                submission.proposal_code,
                document.page_count,
                document.pdf.len()
            );
            let stored = session.install_document(document);
            HttpResponse::Created().json(GenerateResponse {
                message: format!(
                    "Gerando catálogo PDF - Código: {}",
                    submission.proposal_code
                ),
                proposal_code: submission.proposal_code.clone(),
                location: submission.location.clone(),
                document: DocumentInfo::from_stored(stored),
            })
        }
        Err(err) => {
            log::error!("catalog rendering failed: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "RenderFailure",
                "Erro ao gerar PDF. Tente novamente.",
            ))
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Documents",
    get,
    path = "/documents/{id}",
    responses(
        (status = 200, description = "Catalog PDF served as application/pdf"),
        (status = 404, description = "Unknown or superseded preview id", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "Preview id returned by the generate call")
    )
)]
pub async fn serve_document(id: Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let session = data.session.read();
    match session.document(&id.into_inner()) {
        Some(stored) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!("inline; filename=\"{}\"", stored.document.filename),
            ))
            .body(stored.document.pdf.clone()),
        None => HttpResponse::NotFound().json(ErrorResponse::not_found(
            "Documento não encontrado ou substituído",
        )),
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Proposal Form",
    get,
    path = "/proposal/options",
    responses(
        (status = 200, description = "Fixed option sets for the form selects", body = ProposalOptions)
    )
)]
pub async fn get_options() -> impl Responder {
    HttpResponse::Ok().json(ProposalOptions {
        months: MONTHS.iter().map(|m| m.to_string()).collect(),
        durations: DURATIONS.iter().map(|d| d.to_string()).collect(),
        locations: LOCATIONS.iter().map(|l| l.to_string()).collect(),
        contract_times: CONTRACT_TIMES.iter().map(|c| c.to_string()).collect(),
    })
}
