// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::ForwardedToken,
    models::dashboard::{DashboardView, PeriodQuery},
};

// GET /api/dashboard/employee-sales
//
// Um ciclo de renderização por requisição: a página chama este endpoint de
// novo a cada mudança nos date pickers.
#[utoipa::path(
    get,
    path = "/api/dashboard/employee-sales",
    tag = "Dashboard",
    params(
        PeriodQuery,
        ("X-Forwarded-Access-Token" = Option<String>, Header, description = "Token do usuário final, encaminhado pelo proxy reverso")
    ),
    responses(
        (status = 200, description = "Modelo de renderização do painel (com dados ou com o aviso de período vazio)", body = DashboardView),
        (status = 401, description = "Token de acesso ausente"),
        (status = 502, description = "Falha ao conectar ao warehouse"),
        (status = 500, description = "Falha ao executar a consulta")
    )
)]
pub async fn employee_sales(
    State(app_state): State<AppState>,
    ForwardedToken(token): ForwardedToken,
    Query(params): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = params.resolve();

    tracing::debug!(
        "Consultando vendas por funcionário ({} a {})",
        period.start_str(),
        period.end_str()
    );

    let view = app_state
        .dashboard_service
        .employee_sales(token.as_deref(), &period)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}
