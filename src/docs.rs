// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::employee_sales,
    ),
    components(
        schemas(
            models::dashboard::DashboardView,
            models::dashboard::ViewStatus,
            models::dashboard::MetricCard,
            models::dashboard::ColumnSpec,
            models::dashboard::SalesTableRow,
            models::dashboard::SalesCharts,
            models::dashboard::ChartPoint,
        )
    ),
    tags(
        (name = "Dashboard", description = "Vendas agregadas por funcionário")
    )
)]
pub struct ApiDoc;
