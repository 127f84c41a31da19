use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Empresa, Perfil, RegistroPerfil, Usuario};
use crate::session::TokenClaims;
use crate::utils::ROLE_EMPRESA;

use super::extrair_erro;

/// Busca o perfil do dono do token, roteando pelo role das claims:
/// role 4 consulta o endpoint de empresa, qualquer outro o de usuário.
/// O registro volta já normalizado no perfil unificado da sessão.
pub async fn buscar_perfil(token: &str, claims: &TokenClaims) -> Result<Perfil, String> {
    let registro = if claims.role == ROLE_EMPRESA {
        log::info!("👤 Buscando perfil de empresa: {}", claims.sub);
        let empresa = obter::<Empresa>(token, "empresa", &claims.sub).await?;
        RegistroPerfil::Companhia(empresa)
    } else {
        log::info!("👤 Buscando perfil de usuário: {}", claims.sub);
        let usuario = obter::<Usuario>(token, "usuario", &claims.sub).await?;
        RegistroPerfil::Individual(usuario)
    };
    Ok(registro.normalizar())
}

async fn obter<T: serde::de::DeserializeOwned>(
    token: &str,
    recurso: &str,
    id: &str,
) -> Result<T, String> {
    let url = format!("{}/{}/obter/{}", CONFIG.backend_url(), recurso, id);
    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Erro interpretando resposta: {}", e))
}
