// ============================================================================
// SERVICES - comunicação HTTP com o backend (stateless)
// ============================================================================
// Cada serviço cobre um recurso da API. Nenhum guarda estado: token e
// parâmetros entram por argumento, erros saem como Result<T, String>.
// ============================================================================

pub mod auth_service;
pub mod dashboard_service;
pub mod empresa_service;
pub mod exame_service;
pub mod imagem_service;
pub mod perfil_service;
pub mod usuario_service;

use gloo_net::http::Response;

use crate::models::MensagemApi;

/// Extrai a mensagem de erro do corpo de uma resposta não-2xx.
/// O backend devolve `{"erro": ...}` ou `{"mensagem": ...}`; sem corpo
/// legível, cai no par status + status_text.
pub(crate) async fn extrair_erro(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    if let Ok(msg) = response.json::<MensagemApi>().await {
        if let Some(erro) = msg.erro.or(msg.mensagem) {
            return erro;
        }
    }
    format!("HTTP {}: {}", status, status_text)
}
