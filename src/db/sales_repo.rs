// src/db/sales_repo.rs

use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};

use crate::{
    common::error::AppError,
    config::WarehouseConfig,
    models::dashboard::{EmployeeSales, Period},
};

// Convenção do warehouse para autenticação por token: o usuário da conexão
// é fixo e o token encaminhado entra como credencial.
const WAREHOUSE_USER: &str = "token";

// A consulta de agregação, com os dois limites de data como placeholders.
// Os binds chegam como strings `YYYY-MM-DD` e viram timestamps de meia-noite,
// então o intervalo é fechado em dias inteiros: [start 00:00, end 00:00].
pub const EMPLOYEE_SALES_QUERY: &str = r#"
SELECT
    e.employee_id,
    e.name_first,
    e.name_last,
    e.name_first || ' ' || e.name_last AS full_name,
    COUNT(DISTINCT so.salesorder_id) AS order_count,
    SUM(so.net_amount) AS total_sales,
    SUM(so.gross_amount) AS total_gross,
    SUM(so.tax_amount) AS total_tax,
    AVG(so.net_amount) AS average_order_value,
    MIN(so.created_at) AS first_order_date,
    MAX(so.created_at) AS last_order_date
FROM bikes_sales.employees e
JOIN bikes_sales.salesorders so ON so.created_by = e.employee_id
WHERE so.created_at BETWEEN $1::timestamp AND $2::timestamp
GROUP BY e.employee_id, e.name_first, e.name_last
ORDER BY total_sales DESC
"#;

#[derive(Clone)]
pub struct SalesRepository {
    config: WarehouseConfig,
}

impl SalesRepository {
    pub fn new(config: WarehouseConfig) -> Self {
        Self { config }
    }

    // Executa exatamente uma consulta por renderização, numa conexão aberta
    // com o token do próprio usuário. Sem retry e sem paginação: o resultado
    // completo volta de uma vez e a conexão é liberada em seguida (o drop
    // fecha o socket também no caminho de erro).
    pub async fn fetch_employee_sales(
        &self,
        token: &str,
        period: &Period,
    ) -> Result<Vec<EmployeeSales>, AppError> {
        let options = PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .database(&self.config.warehouse_id)
            .username(WAREHOUSE_USER)
            .password(token);

        let mut conn = PgConnection::connect_with(&options)
            .await
            .map_err(AppError::ConnectionFailed)?;

        let rows = sqlx::query_as::<_, EmployeeSales>(EMPLOYEE_SALES_QUERY)
            .bind(period.start_str())
            .bind(period.end_str())
            .fetch_all(&mut conn)
            .await
            .map_err(AppError::QueryFailed)?;

        if let Err(error) = conn.close().await {
            tracing::warn!("Falha ao encerrar a conexão com o warehouse: {}", error);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A consulta é fixa; o que variamos são só os dois binds de data.
    #[test]
    fn query_filters_on_bound_closed_interval() {
        assert!(EMPLOYEE_SALES_QUERY.contains("BETWEEN $1::timestamp AND $2::timestamp"));
        assert!(!EMPLOYEE_SALES_QUERY.contains("$3"));
    }

    #[test]
    fn query_groups_by_employee_and_orders_by_net_sales() {
        assert!(EMPLOYEE_SALES_QUERY.contains("GROUP BY e.employee_id, e.name_first, e.name_last"));
        assert!(EMPLOYEE_SALES_QUERY.contains("ORDER BY total_sales DESC"));
    }

    #[test]
    fn query_aggregates_match_the_report_columns() {
        for aggregate in [
            "COUNT(DISTINCT so.salesorder_id) AS order_count",
            "SUM(so.net_amount) AS total_sales",
            "SUM(so.gross_amount) AS total_gross",
            "SUM(so.tax_amount) AS total_tax",
            "AVG(so.net_amount) AS average_order_value",
            "MIN(so.created_at) AS first_order_date",
            "MAX(so.created_at) AS last_order_date",
        ] {
            assert!(
                EMPLOYEE_SALES_QUERY.contains(aggregate),
                "agregado ausente: {}",
                aggregate
            );
        }
    }
}
