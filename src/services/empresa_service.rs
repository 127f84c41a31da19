use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Empresa, MensagemApi, RespostaLista};

use super::extrair_erro;

/// Lista paginada de empresas, espelho da listagem de usuários
pub async fn listar(
    token: &str,
    critery: &str,
    pagina: u32,
    limite: u32,
) -> Result<(Vec<Empresa>, u32), String> {
    let url = if critery.trim().is_empty() {
        format!("{}/empresas/all/{}/{}", CONFIG.backend_url(), pagina, limite)
    } else {
        format!(
            "{}/empresas/find_by_substring/{}/{}/{}",
            CONFIG.backend_url(),
            critery.trim(),
            pagina,
            limite
        )
    };

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let lista = response
        .json::<RespostaLista<Empresa>>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))?;
    Ok(lista.normalizar())
}

pub async fn obter(token: &str, id: &str) -> Result<Empresa, String> {
    let url = format!("{}/empresa/obter/{}", CONFIG.backend_url(), id);
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<Empresa>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}

/// Busca exata por CNPJ; 404 vira `Ok(None)` como na busca por CPF
pub async fn buscar_por_cnpj(token: &str, cnpj: &str) -> Result<Option<Empresa>, String> {
    let url = format!("{}/empresas/find_by_cnpj/{}", CONFIG.backend_url(), cnpj.trim());
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<Empresa>()
        .await
        .map(Some)
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}

/// Registra uma empresa. A conta nasce inativa: o backend dispara o e-mail
/// de confirmação para a empresa definir a própria senha.
pub async fn registrar(token: &str, empresa: &Empresa) -> Result<String, String> {
    let url = format!("{}/empresa/registrar", CONFIG.backend_url());
    log::info!("📝 Registrando empresa {}", empresa.email);
    enviar(
        Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(empresa),
    )
    .await
}

pub async fn editar(token: &str, id: &str, empresa: &Empresa) -> Result<String, String> {
    let url = format!("{}/empresas/editar/{}", CONFIG.backend_url(), id);
    log::info!("✏️ Editando empresa {}", id);
    enviar(
        Request::put(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(empresa),
    )
    .await
}

pub async fn deletar(token: &str, id: &str) -> Result<String, String> {
    let url = format!("{}/empresa/deletar/{}", CONFIG.backend_url(), id);
    log::info!("🗑️ Deletando empresa {}", id);
    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let msg = response.json::<MensagemApi>().await.unwrap_or_default();
    Ok(msg
        .mensagem
        .unwrap_or_else(|| "Empresa deletada com sucesso".to_string()))
}

/// Reenvia o e-mail de confirmação para uma empresa ainda inativa
pub async fn reenviar_email(token: &str, id: &str) -> Result<String, String> {
    let url = format!("{}/empresa/reenviaremail/{}", CONFIG.backend_url(), id);
    log::info!("📧 Reenviando e-mail de confirmação para empresa {}", id);
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let msg = response.json::<MensagemApi>().await.unwrap_or_default();
    Ok(msg
        .mensagem
        .unwrap_or_else(|| "E-mail reenviado com sucesso".to_string()))
}

async fn enviar(request: Result<Request, gloo_net::Error>) -> Result<String, String> {
    let response = request
        .map_err(|e| format!("Erro montando requisição: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let msg = response.json::<MensagemApi>().await.unwrap_or_default();
    Ok(msg
        .mensagem
        .unwrap_or_else(|| "Operação realizada com sucesso".to_string()))
}
