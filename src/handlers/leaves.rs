use actix_web::{HttpResponse, Result, web};
use serde::Serialize;

use crate::database::models::{LeaveCard, LeaveCategory, LeaveRequest};
use crate::database::repositories::{LicenseRepository, MedicalRepository, VacationRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::form::{FormController, FormEvent, FormState};
use crate::services::validation::Verdict;
use crate::services::{dates, feed};

/// What a successful submit hands back: the stored row plus the form as the
/// client should show it next, which is always the empty default.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub stored: LeaveCard,
    pub form: FormState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub verdict: Verdict,
    pub form: FormState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedEndDate {
    pub end_date: Option<String>,
}

/// Submit a leave request: validate, assemble the category-specific request,
/// store it, reset the form.
pub async fn submit_leave(
    vacations: web::Data<VacationRepository>,
    medicals: web::Data<MedicalRepository>,
    licenses: web::Data<LicenseRepository>,
    input: web::Json<FormState>,
) -> Result<HttpResponse> {
    let mut controller = FormController::from_state(input.into_inner());

    let verdict = controller.validate();
    if !verdict.ok {
        let form = controller.state().clone();
        // A silent rejection carries no message, matching the blank-field and
        // missing-document failure modes.
        return Ok(match verdict.error {
            Some(message) => {
                HttpResponse::UnprocessableEntity().json(ApiResponse::error_with_data(form, &message))
            }
            None => HttpResponse::UnprocessableEntity().json(ApiResponse::error_data_only(form)),
        });
    }

    let Some(request) = controller.submission() else {
        // Unreachable in practice: validation already rejects a missing leave
        // type or license subtype.
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::<()>::error("must select a leave type")));
    };

    let stored = match request {
        LeaveRequest::Vacation(new) => vacations.insert(new).await.map(LeaveCard::Vacation),
        LeaveRequest::Medical(new) => medicals.insert(new).await.map(LeaveCard::Medical),
        LeaveRequest::License(new) => licenses.insert(new).await.map(LeaveCard::License),
    };

    match stored {
        Ok(card) => {
            controller.apply(FormEvent::Reset);
            let outcome = SubmitOutcome {
                stored: card,
                form: controller.state().clone(),
            };
            Ok(match verdict.warning {
                Some(warning) => {
                    HttpResponse::Created().json(ApiResponse::success_with_message(Some(outcome), &warning))
                }
                None => HttpResponse::Created().json(ApiResponse::success(outcome)),
            })
        }
        Err(err) => {
            log::error!("Error storing leave request: {}", err);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to store leave request")))
        }
    }
}

/// Run the validator alone. The echoed form carries the refreshed overlays
/// and any forced gender.
pub async fn validate_leave(input: web::Json<FormState>) -> Result<HttpResponse> {
    let mut controller = FormController::from_state(input.into_inner());
    let verdict = controller.validate();
    let outcome = ValidationOutcome {
        verdict,
        form: controller.state().clone(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome)))
}

/// Derive the entitlement end date for the current form. A null end date
/// means not yet computable, the client keeps whatever was entered.
pub async fn derive_end_date(input: web::Json<FormState>) -> Result<HttpResponse> {
    let form = input.into_inner();
    let end_date = dates::derive_end_date(
        &form.start_date,
        form.effective_subtype().as_ref(),
        form.relationship.as_ref(),
        form.gender.as_ref(),
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(DerivedEndDate { end_date })))
}

/// The combined history across all three categories, newest start date first.
pub async fn list_leaves(
    vacations: web::Data<VacationRepository>,
    medicals: web::Data<MedicalRepository>,
    licenses: web::Data<LicenseRepository>,
) -> Result<HttpResponse, AppError> {
    let vacation_rows = vacations.list().await?;
    let medical_rows = medicals.list().await?;
    let license_rows = licenses.list().await?;

    let cards = feed::merge_feed(vacation_rows, medical_rows, license_rows);
    Ok(HttpResponse::Ok().json(ApiResponse::success(cards)))
}

/// Delete one request from its category table.
pub async fn delete_leave(
    vacations: web::Data<VacationRepository>,
    medicals: web::Data<MedicalRepository>,
    licenses: web::Data<LicenseRepository>,
    path: web::Path<(String, i64)>,
) -> Result<HttpResponse, AppError> {
    let (raw_category, id) = path.into_inner();
    let category = raw_category
        .parse::<LeaveCategory>()
        .map_err(AppError::BadRequest)?;

    let deleted = match category {
        LeaveCategory::Vacation => vacations.delete(id).await?,
        LeaveCategory::Medical => medicals.delete(id).await?,
        LeaveCategory::License => licenses.delete(id).await?,
    };

    if deleted {
        Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_with_message(None, "Leave request deleted")))
    } else {
        Err(AppError::NotFound(format!(
            "No {} leave request with id {}",
            category, id
        )))
    }
}
