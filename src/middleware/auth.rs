// src/middleware/auth.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

// O nome do cabeçalho injetado pelo proxy reverso na frente da aplicação.
pub const FORWARDED_TOKEN_HEADER: &str = "x-forwarded-access-token";

// O token que representa o usuário final perante o warehouse.
// É reextraído a cada requisição: nada de cache nem fallback de processo.
// A ausência não rejeita a requisição aqui; ela vira um erro de autenticação
// na hora de conectar ao warehouse.
#[derive(Debug, Clone)]
pub struct ForwardedToken(pub Option<String>);

impl<S> FromRequestParts<S> for ForwardedToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(FORWARDED_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(ForwardedToken(token))
    }
}
