use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Dica estática exibida junto com qualquer erro de renderização.
const ERROR_HINT: &str =
    "Pode haver um problema na conexão com o warehouse ou na execução da consulta.";

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O conjunto é fechado de propósito: cada falha do ciclo de renderização
// cai em exatamente um destes tipos.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuração obrigatória ausente ou inválida: {0}")]
    ConfigMissing(&'static str),

    #[error("Token de acesso do usuário ausente")]
    AuthMissing,

    #[error("Falha ao conectar ao warehouse")]
    ConnectionFailed(#[source] sqlx::Error),

    #[error("Falha ao executar a consulta de vendas")]
    QueryFailed(#[source] sqlx::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ConfigMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::AuthMissing => StatusCode::UNAUTHORIZED,
            AppError::ConnectionFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::QueryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // O `tracing` loga a causa detalhada; a resposta carrega só a
        // mensagem genérica. O token do usuário nunca aparece aqui.
        match &self {
            AppError::AuthMissing => {
                tracing::warn!("Requisição sem token de acesso encaminhado");
            }
            other => {
                tracing::error!("Erro ao montar o painel: {:?}", other);
            }
        }

        let body = Json(json!({
            "error": self.to_string(),
            "hint": ERROR_HINT,
        }));

        (status, body).into_response()
    }
}
