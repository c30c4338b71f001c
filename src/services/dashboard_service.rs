// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::{
    common::{
        error::AppError,
        format::{format_count, format_currency},
    },
    db::SalesRepository,
    models::dashboard::{
        ChartPoint, ColumnSpec, DashboardView, EmployeeSales, MetricCard, Period, SalesCharts,
        SalesTableRow, SummaryMetrics, ViewStatus,
    },
};

// Os gráficos mostram só os primeiros colocados do ranking.
pub const CHART_TOP_EMPLOYEES: usize = 10;

const EMPTY_WARNING: &str = "Nenhuma venda encontrada no período selecionado.";

// Vocabulário fixo de exibição da tabela, na ordem de renderização.
const DISPLAY_COLUMNS: [(&str, &str); 9] = [
    ("employeeId", "ID do Funcionário"),
    ("fullName", "Nome Completo"),
    ("orderCount", "Pedidos"),
    ("totalSales", "Vendas Líquidas"),
    ("totalGross", "Vendas Brutas"),
    ("totalTax", "Impostos"),
    ("averageOrderValue", "Ticket Médio"),
    ("firstOrderDate", "Primeiro Pedido"),
    ("lastOrderDate", "Último Pedido"),
];

#[derive(Clone)]
pub struct DashboardService {
    repo: SalesRepository,
}

impl DashboardService {
    pub fn new(repo: SalesRepository) -> Self {
        Self { repo }
    }

    // Um ciclo de renderização completo: token -> consulta -> modelo de view.
    // Sem estado entre chamadas; entradas iguais produzem views iguais.
    pub async fn employee_sales(
        &self,
        token: Option<&str>,
        period: &Period,
    ) -> Result<DashboardView, AppError> {
        let token = token.ok_or(AppError::AuthMissing)?;
        let rows = self.repo.fetch_employee_sales(token, period).await?;
        Ok(build_view(period, &rows))
    }
}

// Montagem pura do modelo de renderização a partir das linhas do warehouse.
pub fn build_view(period: &Period, rows: &[EmployeeSales]) -> DashboardView {
    if rows.is_empty() {
        return DashboardView {
            status: ViewStatus::Empty,
            period: period.label(),
            metrics: Vec::new(),
            columns: Vec::new(),
            rows: Vec::new(),
            charts: None,
            warning: Some(EMPTY_WARNING.to_string()),
        };
    }

    let metrics = summary_metrics(rows);

    DashboardView {
        status: ViewStatus::Ok,
        period: period.label(),
        metrics: metric_cards(&metrics),
        columns: display_columns(),
        rows: table_rows(rows),
        charts: Some(chart_series(rows)),
        warning: None,
    }
}

// Os quatro agregados do topo, recomputados aqui a partir das linhas brutas
// (e não reaproveitados da consulta) para o painel ser auditável.
pub fn summary_metrics(rows: &[EmployeeSales]) -> SummaryMetrics {
    let total_sales: Decimal = rows.iter().map(|row| row.total_sales).sum();
    let total_orders: i64 = rows.iter().map(|row| row.order_count).sum();
    let aov_sum: Decimal = rows.iter().map(|row| row.average_order_value).sum();

    SummaryMetrics {
        employee_count: rows.len() as i64,
        total_sales,
        total_orders,
        average_order_value: aov_sum / Decimal::from(rows.len() as i64),
    }
}

fn metric_cards(metrics: &SummaryMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Funcionários com vendas".to_string(),
            value: format_count(metrics.employee_count),
        },
        MetricCard {
            label: "Vendas totais".to_string(),
            value: format_currency(metrics.total_sales),
        },
        MetricCard {
            label: "Total de pedidos".to_string(),
            value: format_count(metrics.total_orders),
        },
        MetricCard {
            label: "Ticket médio".to_string(),
            value: format_currency(metrics.average_order_value),
        },
    ]
}

fn display_columns() -> Vec<ColumnSpec> {
    DISPLAY_COLUMNS
        .iter()
        .map(|(key, label)| ColumnSpec {
            key: key.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn table_rows(rows: &[EmployeeSales]) -> Vec<SalesTableRow> {
    rows.iter()
        .map(|row| SalesTableRow {
            employee_id: row.employee_id,
            full_name: row.full_name.clone(),
            order_count: row.order_count,
            total_sales: format_currency(row.total_sales),
            total_gross: format_currency(row.total_gross),
            total_tax: format_currency(row.total_tax),
            average_order_value: format_currency(row.average_order_value),
            first_order_date: row.first_order_date.format("%Y-%m-%d").to_string(),
            last_order_date: row.last_order_date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

// As linhas já chegam ordenadas por vendas líquidas decrescentes, então o
// top N é só o prefixo.
fn chart_series(rows: &[EmployeeSales]) -> SalesCharts {
    let top = &rows[..rows.len().min(CHART_TOP_EMPLOYEES)];

    SalesCharts {
        sales_by_employee: top
            .iter()
            .map(|row| ChartPoint {
                label: row.full_name.clone(),
                value: row.total_sales,
            })
            .collect(),
        orders_by_employee: top
            .iter()
            .map(|row| ChartPoint {
                label: row.full_name.clone(),
                value: Decimal::from(row.order_count),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WarehouseConfig;
    use chrono::NaiveDate;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn period() -> Period {
        Period {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        }
    }

    // Linhas em ordem decrescente de vendas, como o warehouse devolve.
    fn sample_rows(count: usize) -> Vec<EmployeeSales> {
        (0..count)
            .map(|i| {
                let day = NaiveDate::from_ymd_opt(2023, 3, 1 + i as u32 % 28)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap();

                EmployeeSales {
                    employee_id: 100 + i as i64,
                    name_first: format!("Nome{}", i),
                    name_last: format!("Sobrenome{}", i),
                    full_name: format!("Nome{} Sobrenome{}", i, i),
                    order_count: 50 - i as i64,
                    total_sales: dec("1000.50") - Decimal::from(i as i64 * 50),
                    total_gross: dec("1200.00") - Decimal::from(i as i64 * 50),
                    total_tax: dec("199.50"),
                    average_order_value: dec("20.01") + Decimal::from(i as i64),
                    first_order_date: day,
                    last_order_date: day,
                }
            })
            .collect()
    }

    #[test]
    fn metrics_match_independent_recomputation() {
        let rows = sample_rows(4);
        let metrics = summary_metrics(&rows);

        let expected_sales: Decimal = rows.iter().map(|r| r.total_sales).sum();
        let expected_orders: i64 = rows.iter().map(|r| r.order_count).sum();
        let expected_aov: Decimal =
            rows.iter().map(|r| r.average_order_value).sum::<Decimal>() / Decimal::from(4);

        assert_eq!(metrics.employee_count, 4);
        assert_eq!(metrics.total_sales, expected_sales);
        assert_eq!(metrics.total_orders, expected_orders);
        assert_eq!(metrics.average_order_value, expected_aov);
    }

    #[test]
    fn charts_take_exactly_the_first_ten_rows() {
        let rows = sample_rows(15);
        let charts = chart_series(&rows);

        assert_eq!(charts.sales_by_employee.len(), 10);
        assert_eq!(charts.orders_by_employee.len(), 10);

        for (i, point) in charts.sales_by_employee.iter().enumerate() {
            assert_eq!(point.label, rows[i].full_name);
            assert_eq!(point.value, rows[i].total_sales);
        }

        for (i, point) in charts.orders_by_employee.iter().enumerate() {
            assert_eq!(point.label, rows[i].full_name);
            assert_eq!(point.value, Decimal::from(rows[i].order_count));
        }
    }

    #[test]
    fn fewer_rows_than_the_chart_cap_keeps_them_all() {
        let rows = sample_rows(3);
        let charts = chart_series(&rows);

        assert_eq!(charts.sales_by_employee.len(), 3);
        assert_eq!(charts.orders_by_employee.len(), 3);
    }

    #[test]
    fn empty_result_renders_the_warning_view() {
        let view = build_view(&period(), &[]);

        assert_eq!(view.status, ViewStatus::Empty);
        assert!(view.metrics.is_empty());
        assert!(view.rows.is_empty());
        assert!(view.charts.is_none());
        assert_eq!(view.warning.as_deref(), Some(EMPTY_WARNING));
    }

    #[test]
    fn non_empty_view_formats_currency_columns() {
        let rows = sample_rows(1);
        let view = build_view(&period(), &rows);

        assert_eq!(view.status, ViewStatus::Ok);
        assert_eq!(view.metrics.len(), 4);
        assert_eq!(view.columns.len(), DISPLAY_COLUMNS.len());
        assert_eq!(view.rows[0].total_sales, "$1,000.50");
        assert_eq!(view.rows[0].total_tax, "$199.50");
        assert_eq!(view.rows[0].first_order_date, "2023-03-01");
        assert!(view.warning.is_none());
    }

    #[test]
    fn view_construction_is_idempotent() {
        let rows = sample_rows(7);

        let first = build_view(&period(), &rows);
        let second = build_view(&period(), &rows);

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn missing_token_is_an_auth_error_not_an_empty_view() {
        let config = WarehouseConfig {
            host: "warehouse.exemplo.com".to_string(),
            port: 5432,
            warehouse_id: "abc123".to_string(),
        };
        let service = DashboardService::new(SalesRepository::new(config));

        let err = service.employee_sales(None, &period()).await.unwrap_err();
        assert!(matches!(err, AppError::AuthMissing));
    }
}
