// src/handlers/ui.rs

use axum::response::Html;

// GET /
//
// A página do painel: cabeçalho, sidebar com os dois date pickers e as
// instruções de uso, e a área principal com métricas, tabela e gráficos.
// Toda a reatividade mora aqui; o backend só produz o modelo de renderização.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
