use thiserror::Error;

/// Taxonomia de falhas da sessão. Nenhuma delas vaza para as telas como
/// exceção: todas são absorvidas pelo gerenciador e normalizadas para
/// "deslogado + redirecionar para o login" (política fail-closed).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("token malformado: {0}")]
    TokenMalformado(String),

    #[error("token expirado")]
    TokenExpirado,

    #[error("falha ao carregar o perfil: {0}")]
    BuscaPerfil(String),
}
