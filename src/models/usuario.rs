use serde::{Deserialize, Deserializer, Serialize};

use super::Endereco;

/// Registro de usuário como devolvido pela API.
///
/// O campo `address` chega em dois formatos conforme o endpoint: uma lista de
/// endereços ou uma string JSON contendo essa lista (formato legado da coluna
/// texto do banco). Os dois são normalizados para `Vec<Endereco>` na borda.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Usuario {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "de_enderecos")]
    pub address: Vec<Endereco>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub role: i32,
    #[serde(default)]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EnderecosWire {
    Lista(Vec<Endereco>),
    Texto(String),
}

pub(super) fn de_enderecos<'de, D>(deserializer: D) -> Result<Vec<Endereco>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<EnderecosWire> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(EnderecosWire::Lista(lista)) => lista,
        // String JSON legada; conteúdo inválido vira lista vazia em vez de
        // derrubar a desserialização do registro inteiro
        Some(EnderecosWire::Texto(texto)) => serde_json::from_str(&texto).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desserializa_address_como_lista() {
        let json = r#"{
            "id": "u1", "name": "Maria", "email": "m@x.com",
            "address": [{"id":"e1","cep":"59000000","logradouro":"Rua A","numero":"10","complemento":"","bairro":"B","cidade":"C","estado":"RN"}],
            "phone": null, "cpf": "111", "role": 2, "ativo": true,
            "created_at": null, "updated_at": null
        }"#;
        let u: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(u.address.len(), 1);
        assert_eq!(u.address[0].logradouro, "Rua A");
    }

    #[test]
    fn desserializa_address_como_string_json() {
        let json = r#"{
            "id": "u2", "name": "João", "email": "j@x.com",
            "address": "[{\"id\":\"e1\",\"cep\":\"1\",\"logradouro\":\"Rua B\",\"numero\":\"2\",\"complemento\":\"\",\"bairro\":\"b\",\"cidade\":\"c\",\"estado\":\"SP\"}]",
            "role": 0, "ativo": true
        }"#;
        let u: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(u.address.len(), 1);
        assert_eq!(u.address[0].estado, "SP");
    }

    #[test]
    fn address_nulo_ou_invalido_vira_lista_vazia() {
        let nulo: Usuario = serde_json::from_str(
            r#"{"id":"u3","name":"A","email":"a@x.com","address":null,"role":2,"ativo":false}"#,
        )
        .unwrap();
        assert!(nulo.address.is_empty());

        let invalido: Usuario = serde_json::from_str(
            r#"{"id":"u4","name":"B","email":"b@x.com","address":"nao é json","role":2,"ativo":false}"#,
        )
        .unwrap();
        assert!(invalido.address.is_empty());
    }
}
