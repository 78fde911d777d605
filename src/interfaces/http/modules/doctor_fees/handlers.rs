//! Doctor fees REST API handlers
//!
//! Mounted under `/api/doctors/doctorfees`.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::dto::{DoctorFeeResponse, SaveFeesRequest, UpdateDoctorFeesRequest};
use crate::application::{DoctorFeeService, SharedDoctorFeeService};
use crate::infrastructure::SeaOrmDoctorFeeRepository;
use crate::interfaces::http::common::{ApiResponse, ApiResult, IdPath, ValidatedJson};

pub type FeeService = DoctorFeeService<SeaOrmDoctorFeeRepository>;

#[derive(Clone)]
pub struct DoctorFeesState {
    pub service: SharedDoctorFeeService<SeaOrmDoctorFeeRepository>,
}

fn to_responses(fees: Vec<crate::domain::DoctorFee>) -> Vec<DoctorFeeResponse> {
    fees.into_iter().map(Into::into).collect()
}

#[utoipa::path(
    post,
    path = "/api/doctors/doctorfees/saveFees",
    tag = "Doctor Fees",
    request_body = SaveFeesRequest,
    responses(
        (status = 201, description = "Fees saved", body = Vec<DoctorFeeResponse>),
        (status = 400, description = "Malformed JSON", body = ApiResponse<String>),
        (status = 422, description = "Invalid fee record", body = ApiResponse<String>),
        (status = 500, description = "Persistence failure", body = ApiResponse<String>)
    )
)]
pub async fn save_fees(
    State(state): State<DoctorFeesState>,
    ValidatedJson(req): ValidatedJson<SaveFeesRequest>,
) -> ApiResult<(StatusCode, Json<Vec<DoctorFeeResponse>>)> {
    let new_fees = req.0.into_iter().map(Into::into).collect();
    let saved = state.service.save_fees(new_fees).await?;
    info!(count = saved.len(), "Doctor fees saved successfully");
    Ok((StatusCode::CREATED, Json(to_responses(saved))))
}

#[utoipa::path(
    get,
    path = "/api/doctors/doctorfees/getDoctorFeesById/{doctorId}",
    tag = "Doctor Fees",
    params(("doctorId" = i64, Path, description = "Fee record ID (feesId)")),
    responses(
        (status = 200, description = "Fee record", body = DoctorFeeResponse),
        (status = 400, description = "Non-numeric id", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_doctor_fees(
    State(state): State<DoctorFeesState>,
    IdPath(fees_id): IdPath<i64>,
) -> ApiResult<Json<DoctorFeeResponse>> {
    let fee = state.service.get_fees_by_id(fees_id).await?;
    Ok(Json(fee.into()))
}

#[utoipa::path(
    get,
    path = "/api/doctors/doctorfees/getAllDoctorFees",
    tag = "Doctor Fees",
    responses(
        (status = 200, description = "All fee records", body = Vec<DoctorFeeResponse>),
        (status = 500, description = "Persistence failure", body = ApiResponse<String>)
    )
)]
pub async fn get_all_doctor_fees(
    State(state): State<DoctorFeesState>,
) -> ApiResult<Json<Vec<DoctorFeeResponse>>> {
    let fees = state.service.get_all_fees().await?;
    Ok(Json(to_responses(fees)))
}

/// Responds 201 Created on success, like the save endpoint.
#[utoipa::path(
    put,
    path = "/api/doctors/doctorfees/updateDoctorFeesById/{doctorID}",
    tag = "Doctor Fees",
    params(("doctorID" = i64, Path, description = "Fee record ID (feesId)")),
    request_body = UpdateDoctorFeesRequest,
    responses(
        (status = 201, description = "Fee amount updated", body = DoctorFeeResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid fee amount", body = ApiResponse<String>)
    )
)]
pub async fn update_doctor_fees(
    State(state): State<DoctorFeesState>,
    IdPath(fees_id): IdPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateDoctorFeesRequest>,
) -> ApiResult<(StatusCode, Json<DoctorFeeResponse>)> {
    let updated = state.service.update_fees_by_id(fees_id, req.fees).await?;
    Ok((StatusCode::CREATED, Json(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/doctors/doctorfees/deleteDoctorFeesById/{doctorID}",
    tag = "Doctor Fees",
    params(("doctorID" = i64, Path, description = "Fee record ID (feesId)")),
    responses(
        (status = 200, description = "Deleted record", body = DoctorFeeResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_doctor_fees(
    State(state): State<DoctorFeesState>,
    IdPath(fees_id): IdPath<i64>,
) -> ApiResult<Json<DoctorFeeResponse>> {
    let deleted = state.service.delete_fees_by_id(fees_id).await?;
    Ok(Json(deleted.into()))
}

#[utoipa::path(
    get,
    path = "/api/doctors/doctorfees/findDoctorById/{doctorId}",
    tag = "Doctor Fees",
    params(("doctorId" = i64, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Fee records of the doctor (empty if none)", body = Vec<DoctorFeeResponse>),
        (status = 500, description = "Persistence failure", body = ApiResponse<String>)
    )
)]
pub async fn find_by_doctor_id(
    State(state): State<DoctorFeesState>,
    IdPath(doctor_id): IdPath<i64>,
) -> ApiResult<Json<Vec<DoctorFeeResponse>>> {
    let fees = state.service.find_by_doctor_id(doctor_id).await?;
    Ok(Json(to_responses(fees)))
}
