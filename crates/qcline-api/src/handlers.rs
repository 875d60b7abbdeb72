//! API Handlers
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use qcline_aql::{
    classify_risk, inspect, validate_lot_size, DefectCounts, InspectionStats, InspectionVerdict,
    LotSamplingPlan, RiskLevel, INSPECTION_LEVEL, SAMPLING_PLANS,
};
use qcline_core::{QcError, QCLINE_VERSION};
use qcline_report::{ReportModel, ReportRequest};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::AppState;

/// Raw counts as submitted; signed so negatives reach validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsBody {
    #[serde(default)]
    pub critical: i64,
    #[serde(default)]
    pub major: i64,
    #[serde(default)]
    pub minor: i64,
}

impl CountsBody {
    fn validate(&self) -> Result<DefectCounts, QcError> {
        DefectCounts::try_new(self.critical, self.major, self.minor)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBody {
    pub lot_size: i64,
    #[serde(flatten)]
    pub counts: CountsBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub verdict: InspectionVerdict,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub request_id: Uuid,
    pub verdicts: Vec<InspectionVerdict>,
    pub stats: InspectionStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResponse {
    pub risk_level: RiskLevel,
    pub label: String,
    pub explanation: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub request_id: Uuid,
    pub report: ReportModel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub request_id: Uuid,
    pub fingerprint: Option<String>,
    pub banner_line: String,
    pub section_digest: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansResponse {
    pub inspection_level: &'static str,
    pub plans: &'static [LotSamplingPlan],
}

fn evaluate_one(state: &AppState, body: &EvaluateBody) -> Result<InspectionVerdict, QcError> {
    let lot_size = validate_lot_size(body.lot_size)?;
    let counts = body.counts.validate()?;
    let verdict = inspect(lot_size, counts);
    state.metrics.record_evaluation(verdict.result);
    Ok(verdict)
}

pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EvaluateBody>,
) -> ApiResult<Json<EvaluateResponse>> {
    let verdict = evaluate_one(&state, &body)?;
    Ok(Json(EvaluateResponse {
        request_id: Uuid::new_v4(),
        verdict,
    }))
}

/// Evaluate several lots and roll them up for the dashboard
pub async fn evaluate_batch(
    State(state): State<Arc<AppState>>,
    Json(bodies): Json<Vec<EvaluateBody>>,
) -> ApiResult<Json<BatchResponse>> {
    let verdicts = bodies
        .iter()
        .map(|body| evaluate_one(&state, body))
        .collect::<Result<Vec<_>, _>>()?;
    let stats = InspectionStats::from_verdicts(&verdicts);
    Ok(Json(BatchResponse {
        request_id: Uuid::new_v4(),
        verdicts,
        stats,
    }))
}

pub async fn risk(Json(body): Json<CountsBody>) -> ApiResult<Json<RiskResponse>> {
    let counts = body.validate()?;
    let level = classify_risk(counts.major, counts.minor, counts.critical);
    Ok(Json(RiskResponse {
        risk_level: level,
        label: level.to_string(),
        explanation: level.explanation(),
    }))
}

fn build_model(state: &AppState, request: &ReportRequest) -> Result<ReportModel, QcError> {
    for defect in &request.defects {
        defect.validate()?;
    }
    let model = state.builder.build_request(request);
    state.metrics.record_report(model.verdict.risk_level);
    Ok(model)
}

pub async fn report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let report = build_model(&state, &request)?;
    Ok(Json(ReportResponse {
        request_id: Uuid::new_v4(),
        report,
    }))
}

pub async fn report_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<Json<SummaryResponse>> {
    let model = build_model(&state, &request)?;
    Ok(Json(SummaryResponse {
        request_id: Uuid::new_v4(),
        banner_line: state.renderer.banner_line(&model)?,
        section_digest: state.renderer.section_digest(&model)?,
        summary: state.renderer.email_summary(&model)?,
        fingerprint: model.fingerprint,
    }))
}

pub async fn plans() -> Json<PlansResponse> {
    Json(PlansResponse {
        inspection_level: INSPECTION_LEVEL,
        plans: &SAMPLING_PLANS,
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": QCLINE_VERSION,
            "profile": state.builder.profile().name,
            "templates": state.renderer.list_templates(),
        })),
    )
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let body = state.metrics.encode()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}
