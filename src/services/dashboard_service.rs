use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::DadosDashboard;

use super::extrair_erro;

/// Agregado da dashboard administrativa: exames de hoje, exames por dia
/// nos próximos dias, empresas com mais exames e agendamentos recentes.
pub async fn obter_dados(token: &str) -> Result<DadosDashboard, String> {
    let url = format!("{}/dashboard/dados", CONFIG.backend_url());
    log::info!("📊 Carregando dados da dashboard");

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<DadosDashboard>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}
