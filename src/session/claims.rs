use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use super::SessionError;

/// Claims consumidas do bearer token: identidade, role e expiração.
/// O payload é decodificado no cliente sem validar assinatura — a checagem
/// criptográfica é responsabilidade do backend; aqui só interessa saber
/// quem é o sujeito e até quando o token vale.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct TokenClaims {
    /// Id do usuário ou da empresa dona do token
    pub sub: String,
    /// Código de role: 0 admin, 1 editor, 2/3 trabalhador, 4 empresa.
    /// Obrigatório: um token sem role é tratado como malformado (fail-closed),
    /// nunca assumido como admin.
    pub role: i32,
    /// Expiração em segundos epoch
    pub exp: i64,
}

impl TokenClaims {
    pub fn expirado(&self, agora_epoch: i64) -> bool {
        self.exp <= agora_epoch
    }
}

/// Decodifica o payload de um JWT (`header.payload.assinatura`).
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| SessionError::TokenMalformado("formato JWT inválido".into()))?;

    // Alguns emissores incluem padding; o alfabeto base64url não o usa
    let payload = payload.trim_end_matches('=');

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| SessionError::TokenMalformado(format!("base64: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::TokenMalformado(format!("payload: {}", e)))
}

/// Monta um token de teste com payload controlado (assinatura fictícia).
#[cfg(test)]
pub(crate) fn token_de_teste(sub: &str, role: i32, exp: i64) -> String {
    let payload = serde_json::json!({ "sub": sub, "role": role, "exp": exp });
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{}.assinatura", payload_b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodifica_token_valido() {
        let token = token_de_teste("u1", 0, 1_900_000_000);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role, 0);
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn token_sem_tres_partes_e_malformado() {
        assert!(matches!(
            decode_claims("abc"),
            Err(SessionError::TokenMalformado(_))
        ));
    }

    #[test]
    fn payload_que_nao_e_json_e_malformado() {
        let lixo = URL_SAFE_NO_PAD.encode("nao é json");
        let token = format!("cab.{}.ass", lixo);
        assert!(matches!(
            decode_claims(&token),
            Err(SessionError::TokenMalformado(_))
        ));
    }

    #[test]
    fn aceita_payload_com_padding() {
        let payload = serde_json::json!({ "sub": "x", "role": 4, "exp": 10 });
        let com_padding = format!(
            "{}==",
            URL_SAFE_NO_PAD.encode(payload.to_string())
        );
        let token = format!("cab.{}.ass", com_padding);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, 4);
    }

    #[test]
    fn role_ausente_e_malformado() {
        let payload = serde_json::json!({ "sub": "y", "exp": 100 });
        let token = format!("cab.{}.ass", URL_SAFE_NO_PAD.encode(payload.to_string()));
        assert!(matches!(
            decode_claims(&token),
            Err(SessionError::TokenMalformado(_))
        ));
    }

    #[test]
    fn expirado_compara_inclusivo_com_agora() {
        let claims = TokenClaims { sub: "y".into(), role: 2, exp: 100 };
        assert!(claims.expirado(100));
        assert!(claims.expirado(101));
        assert!(!claims.expirado(99));
    }
}
