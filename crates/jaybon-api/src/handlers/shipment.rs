//! Shipment handlers — submission, dashboard listing, and quotes.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use jaybon_core::error::AppError;
use crate::error::ApiError;
use jaybon_entity::payment::PaymentMethod;
use jaybon_entity::shipment::{Shipment, ShipmentType};
use jaybon_service::shipment::service::{
    PaymentOutcome, StandardSubmission, SubmissionResult, Submitter, WaybillSubmission,
};

use crate::dto::request::{QuoteQuery, StandardShipmentRequest, WaybillShipmentRequest};
use crate::dto::response::{ApiResponse, QuoteResponse};
use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

/// GET /api/shipments
pub async fn list_shipments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Shipment>>>, ApiError> {
    let shipments = state.shipment_service.list_dashboard(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(shipments)))
}

/// POST /api/shipments
///
/// Accepts anonymous submissions: without a bearer token the request is
/// treated as a guest submission identified by `sender_email`.
pub async fn submit_shipment(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(req): Json<StandardShipmentRequest>,
) -> Result<Json<ApiResponse<SubmissionResult>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let submitter = resolve_submitter(&state, &auth, req.sender_email.as_deref()).await?;
    let payment = parse_outcome(&req.payment_method, req.payment_reference.clone())?;

    let result = state
        .shipment_service
        .submit_standard(
            &submitter,
            StandardSubmission {
                sender_name: req.sender_name,
                sender_phone: req.sender_phone,
                receiver_name: req.receiver_name,
                receiver_phone: req.receiver_phone,
                pickup_area: req.pickup_area,
                pickup_landmark: req.pickup_landmark,
                delivery_area: req.delivery_area,
                delivery_landmark: req.delivery_landmark,
                package_description: req.package_description,
                service_type: req.service_type,
                payment,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/shipments/waybill
///
/// Accepts anonymous submissions, same as the standard entry point.
pub async fn submit_waybill(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Json(req): Json<WaybillShipmentRequest>,
) -> Result<Json<ApiResponse<SubmissionResult>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let submitter = resolve_submitter(&state, &auth, req.sender_email.as_deref()).await?;
    let payment = parse_outcome(&req.payment_method, req.payment_reference.clone())?;

    let result = state
        .shipment_service
        .submit_waybill(
            &submitter,
            WaybillSubmission {
                sender_name: req.sender_name,
                sender_phone: req.sender_phone,
                receiver_name: req.receiver_name,
                receiver_phone: req.receiver_phone,
                park_name: req.park_name,
                recipient_id: req.recipient_id,
                package_description: req.package_description,
                payment,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/shipments/quote
pub async fn quote(
    State(state): State<AppState>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<ApiResponse<QuoteResponse>>, ApiError> {
    let shipment_type: ShipmentType = query.shipment_type.parse()?;
    let amount = state
        .shipment_service
        .quote(shipment_type, &query.service_type);

    Ok(Json(ApiResponse::ok(QuoteResponse {
        shipment_type: shipment_type.to_string(),
        service_type: query.service_type,
        amount,
        amount_minor: jaybon_service::shipment::pricing::minor_units(amount),
    })))
}

/// Resolves the submitting identity: the signed-in user's account, or a
/// guest identified by the form's sender email. The guest email is
/// validated by the submission service.
async fn resolve_submitter(
    state: &AppState,
    auth: &OptionalAuthUser,
    sender_email: Option<&str>,
) -> Result<Submitter, AppError> {
    match &auth.0 {
        Some(ctx) => {
            let user = state
                .user_repo
                .find_by_id(ctx.user_id)
                .await?
                .ok_or_else(|| AppError::authentication("User account no longer exists"))?;
            Ok(Submitter::account(&user))
        }
        None => Ok(Submitter::guest(sender_email.unwrap_or_default().trim())),
    }
}

fn parse_outcome(method: &str, reference: Option<String>) -> Result<PaymentOutcome, AppError> {
    let method: PaymentMethod = method.parse()?;
    Ok(PaymentOutcome { method, reference })
}
