use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope de mensagens da API (`{"mensagem": ...}` em sucesso,
/// `{"erro": ...}` em falha)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MensagemApi {
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub erro: Option<String>,
}
