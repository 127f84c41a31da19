use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{LoginRequest, LoginResponse, MensagemApi};

use super::extrair_erro;

/// Autentica com e-mail e senha. Devolve o bearer token cru; quem decide o
/// que fazer com ele (persistir, decodificar claims) é a sessão.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    let url = format!("{}/login", CONFIG.backend_url());
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Autenticando {}", email);

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Erro montando requisição: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        // O corpo do login traz a mensagem no campo `message`
        if let Ok(resp) = response.json::<LoginResponse>().await {
            if let Some(message) = resp.message {
                return Err(message);
            }
        }
        return Err("Credenciais inválidas".to_string());
    }

    let resp = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))?;

    resp.token
        .ok_or_else(|| "Resposta de login sem token".to_string())
}

/// Pede o e-mail de redefinição de senha de um usuário
pub async fn solicitar_redefinicao_senha(email: &str) -> Result<String, String> {
    let url = format!("{}/usuario/redefinir_senha", CONFIG.backend_url());
    enviar_mensagem(
        Request::post(&url).json(&serde_json::json!({ "email": email })),
    )
    .await
}

/// Confirma a redefinição com o token recebido por e-mail e a nova senha
pub async fn confirmar_redefinicao_senha(token: &str, password: &str) -> Result<String, String> {
    let url = format!("{}/usuario/confirmar_redefinicao", CONFIG.backend_url());
    enviar_mensagem(
        Request::post(&url).json(&serde_json::json!({ "token": token, "password": password })),
    )
    .await
}

/// Pede o e-mail de redefinição para uma conta de empresa
pub async fn solicitar_redefinicao_senha_empresa(email: &str) -> Result<String, String> {
    let url = format!("{}/empresa/redefinir_senha", CONFIG.backend_url());
    enviar_mensagem(
        Request::post(&url).json(&serde_json::json!({ "email": email })),
    )
    .await
}

/// Define a senha inicial de uma empresa a partir do token de confirmação
pub async fn definir_senha_empresa(token: &str, password: &str) -> Result<String, String> {
    let url = format!("{}/empresa/definir_senha", CONFIG.backend_url());
    enviar_mensagem(
        Request::put(&url).json(&serde_json::json!({ "token": token, "password": password })),
    )
    .await
}

async fn enviar_mensagem(
    request: Result<Request, gloo_net::Error>,
) -> Result<String, String> {
    let response = request
        .map_err(|e| format!("Erro montando requisição: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let msg = response
        .json::<MensagemApi>()
        .await
        .unwrap_or_default();
    Ok(msg
        .mensagem
        .unwrap_or_else(|| "Operação realizada com sucesso".to_string()))
}
