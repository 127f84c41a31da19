use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{MensagemApi, RespostaLista, Usuario};

use super::extrair_erro;

/// Lista paginada de usuários; com critério de busca usa o endpoint de
/// substring, sem critério usa a listagem completa. As duas formas de
/// resposta (paginada ou array puro) são normalizadas em (itens, páginas).
pub async fn listar(
    token: &str,
    critery: &str,
    pagina: u32,
    limite: u32,
) -> Result<(Vec<Usuario>, u32), String> {
    let url = if critery.trim().is_empty() {
        format!("{}/usuarios/all/{}/{}", CONFIG.backend_url(), pagina, limite)
    } else {
        format!(
            "{}/usuarios/find_by_substring/{}/{}/{}",
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
        .json::<RespostaLista<Usuario>>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))?;
    Ok(lista.normalizar())
}

pub async fn obter(token: &str, id: &str) -> Result<Usuario, String> {
    let url = format!("{}/usuario/obter/{}", CONFIG.backend_url(), id);
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<Usuario>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}

/// Busca exata por CPF. O backend devolve o registro único ou 404;
/// CPF sem dono vira `Ok(None)`, não erro.
pub async fn buscar_por_cpf(token: &str, cpf: &str) -> Result<Option<Usuario>, String> {
    let url = format!("{}/usuario/find_by_cpf/{}", CONFIG.backend_url(), cpf.trim());
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
        .json::<Usuario>()
        .await
        .map(Some)
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}

/// Registra um novo usuário. O backend devolve 409 com a mensagem
/// específica quando e-mail ou CPF já existem.
pub async fn registrar(token: &str, usuario: &Usuario) -> Result<String, String> {
    let url = format!("{}/usuario/registrar", CONFIG.backend_url());
    log::info!("📝 Registrando usuário {}", usuario.email);
    enviar(
        Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(usuario),
    )
    .await
}

pub async fn editar(token: &str, id: &str, usuario: &Usuario) -> Result<String, String> {
    let url = format!("{}/usuarios/editar/{}", CONFIG.backend_url(), id);
    log::info!("✏️ Editando usuário {}", id);
    enviar(
        Request::put(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(usuario),
    )
    .await
}

pub async fn deletar(token: &str, id: &str) -> Result<String, String> {
    let url = format!("{}/usuario/deletar/{}", CONFIG.backend_url(), id);
    log::info!("🗑️ Deletando usuário {}", id);
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
        .unwrap_or_else(|| "Usuário deletado com sucesso".to_string()))
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
