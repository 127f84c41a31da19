use serde::{Deserialize, Serialize};

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{EstatisticasEmpresa, Exame, DashboardTrabalhador, RespostaLista, Usuario};

use super::extrair_erro;

/// Corpo do agendamento em lote: um exame por usuário selecionado,
/// todos na mesma data e para a mesma empresa.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct CriarExamesLote {
    pub company_id: String,
    pub users: Vec<String>,
    pub exam_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RespostaLote {
    #[serde(default)]
    pub exams_created: u32,
    #[serde(default)]
    pub mensagem: Option<String>,
}

/// Agenda exames em lote para vários trabalhadores de uma empresa
pub async fn criar_em_lote(token: &str, lote: &CriarExamesLote) -> Result<RespostaLote, String> {
    let url = format!("{}/exames/criar_em_lote", CONFIG.backend_url());
    log::info!(
        "📅 Agendando {} exames para a empresa {}",
        lote.users.len(),
        lote.company_id
    );

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(lote)
        .map_err(|e| format!("Erro montando requisição: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<RespostaLote>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}

/// Trabalhadores vinculados a uma empresa, para a seleção do agendamento
pub async fn usuarios_por_empresa(token: &str, company_id: &str) -> Result<Vec<Usuario>, String> {
    let url = format!(
        "{}/exames/usuarios_por_empresa/{}",
        CONFIG.backend_url(),
        company_id
    );
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let lista = response
        .json::<RespostaLista<Usuario>>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))?;
    Ok(lista.normalizar().0)
}

/// Exames de uma empresa dentro de um intervalo de datas (inclusivo),
/// com o usuário de cada exame embutido na resposta
pub async fn listar_por_empresa_e_datas(
    token: &str,
    company_id: &str,
    data_inicial: &str,
    data_final: &str,
) -> Result<Vec<Exame>, String> {
    let url = format!(
        "{}/exames/listar_por_empresa_e_datas?company_id={}&data_inicial={}&data_final={}",
        CONFIG.backend_url(),
        company_id,
        data_inicial,
        data_final
    );
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let lista = response
        .json::<RespostaLista<Exame>>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))?;
    Ok(lista.normalizar().0)
}

/// Contadores agregados da dashboard da empresa
pub async fn estatisticas_por_empresa(
    token: &str,
    company_id: &str,
) -> Result<EstatisticasEmpresa, String> {
    let url = format!(
        "{}/exames/estatisticas_por_empresa/{}",
        CONFIG.backend_url(),
        company_id
    );
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<EstatisticasEmpresa>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}

/// Dashboard pessoal do trabalhador: exames agendados e histórico
pub async fn dashboard_trabalhador(
    token: &str,
    user_id: &str,
) -> Result<DashboardTrabalhador, String> {
    let url = format!(
        "{}/usuario/dashboard/trabalhador/{}",
        CONFIG.backend_url(),
        user_id
    );
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<DashboardTrabalhador>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}
