// src/config.rs

use crate::{common::error::AppError, db::SalesRepository, services::dashboard_service::DashboardService};
use std::collections::HashMap;
use std::env;

pub const ENV_WAREHOUSE_HOST: &str = "WAREHOUSE_HOST";
pub const ENV_WAREHOUSE_ID: &str = "WAREHOUSE_ID";
pub const ENV_WAREHOUSE_PORT: &str = "WAREHOUSE_PORT";

const DEFAULT_WAREHOUSE_PORT: u16 = 5432;

// Identidade do warehouse, lida uma única vez no startup e imutável depois.
// O token do usuário NÃO mora aqui: ele chega por requisição, no header.
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub host: String,
    pub port: u16,
    pub warehouse_id: String,
}

impl WarehouseConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let kv: HashMap<String, String> = env::vars().collect();
        Self::from_kv(&kv)
    }

    // Separado do ambiente real para ser testável.
    pub fn from_kv(kv: &HashMap<String, String>) -> Result<Self, AppError> {
        let host = require_nonempty(kv, ENV_WAREHOUSE_HOST)?;
        let warehouse_id = require_nonempty(kv, ENV_WAREHOUSE_ID)?;

        let port = match kv.get(ENV_WAREHOUSE_PORT).map(|value| value.trim()) {
            None | Some("") => DEFAULT_WAREHOUSE_PORT,
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| AppError::ConfigMissing(ENV_WAREHOUSE_PORT))?,
        };

        Ok(Self {
            host,
            port,
            warehouse_id,
        })
    }
}

fn require_nonempty(kv: &HashMap<String, String>, key: &'static str) -> Result<String, AppError> {
    kv.get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(AppError::ConfigMissing(key))
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    // Se a configuração obrigatória estiver ausente, a aplicação não deve
    // iniciar: o chamador decide abortar.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = WarehouseConfig::from_env()?;

        tracing::info!(
            "✅ Warehouse configurado (host={}, warehouse={})",
            config.host,
            config.warehouse_id
        );

        // --- Monta o gráfico de dependências ---
        let sales_repo = SalesRepository::new(config);
        let dashboard_service = DashboardService::new(sales_repo);

        Ok(Self { dashboard_service })
    }
}
