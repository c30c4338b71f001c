// src/models/dashboard.rs

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

// ---
// Linha bruta do warehouse (uma por funcionário no período)
// ---

// O agrupamento garante que todo funcionário retornado tem pelo menos um
// pedido no intervalo, então os agregados nunca vêm nulos.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EmployeeSales {
    pub employee_id: i64,
    pub name_first: String,
    pub name_last: String,
    pub full_name: String,
    pub order_count: i64,
    pub total_sales: Decimal,
    pub total_gross: Decimal,
    pub total_tax: Decimal,
    pub average_order_value: Decimal,
    pub first_order_date: NaiveDateTime,
    pub last_order_date: NaiveDateTime,
}

// ---
// Parâmetros de período (os dois date pickers)
// ---

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// Data inicial do período (padrão: 2023-01-01)
    pub start_date: Option<NaiveDate>,
    /// Data final do período (padrão: hoje)
    pub end_date: Option<NaiveDate>,
}

impl PeriodQuery {
    pub fn resolve(self) -> Period {
        Period {
            start: self.start_date.unwrap_or_else(default_start_date),
            end: self.end_date.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("data fixa válida")
}

// Período já resolvido. Não validamos start <= end de propósito: um intervalo
// invertido é vazio no filtro BETWEEN e cai no aviso de "sem dados".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    pub fn label(&self) -> String {
        format!("{} ~ {}", self.start_str(), self.end_str())
    }
}

// ---
// Modelo de renderização (o que a página consome)
// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ViewStatus {
    Ok,
    Empty,
}

// Agregados do período, recomputáveis a partir das linhas brutas.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub employee_count: i64,
    pub total_sales: Decimal,
    pub total_orders: i64,
    pub average_order_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    #[schema(example = "Vendas totais")]
    pub label: String,
    #[schema(example = "$1,234.50")]
    pub value: String,
}

// Vocabulário fixo de exibição: a página renderiza os cabeçalhos nesta ordem.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    #[schema(example = "totalSales")]
    pub key: String,
    #[schema(example = "Vendas Líquidas")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesTableRow {
    pub employee_id: i64,
    #[schema(example = "Maria Silva")]
    pub full_name: String,
    pub order_count: i64,
    #[schema(example = "$12,340.00")]
    pub total_sales: String,
    pub total_gross: String,
    pub total_tax: String,
    pub average_order_value: String,
    #[schema(example = "2023-01-05")]
    pub first_order_date: String,
    pub last_order_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

// As duas séries de barras, limitadas aos primeiros 10 funcionários
// (as linhas já chegam ordenadas por vendas líquidas decrescentes).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesCharts {
    pub sales_by_employee: Vec<ChartPoint>,
    pub orders_by_employee: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub status: ViewStatus,
    #[schema(example = "2023-01-01 ~ 2023-12-31")]
    pub period: String,
    pub metrics: Vec<MetricCard>,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<SalesTableRow>,
    pub charts: Option<SalesCharts>,
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_query_resolve_applies_defaults() {
        let period = PeriodQuery {
            start_date: None,
            end_date: None,
        }
        .resolve();

        assert_eq!(period.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(period.end, Utc::now().date_naive());
    }

    #[test]
    fn period_formats_bounds_as_iso_dates() {
        let period = Period {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        };

        assert_eq!(period.start_str(), "2023-01-01");
        assert_eq!(period.end_str(), "2023-12-31");
        assert_eq!(period.label(), "2023-01-01 ~ 2023-12-31");
    }

    #[test]
    fn reversed_period_is_kept_as_is() {
        // Intervalo invertido não é erro: o BETWEEN fica vazio e a view
        // cai no caminho de aviso.
        let period = PeriodQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
        .resolve();

        assert!(period.start > period.end);
    }
}
