use serde::{Deserialize, Serialize};

use super::usuario::de_enderecos;
use super::Endereco;

/// Registro de empresa (cliente) como devolvido pela API.
/// Mesma forma do usuário, com CNPJ no lugar do CPF e sem campo de role.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Empresa {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "de_enderecos")]
    pub address: Vec<Endereco>,
    #[serde(default)]
    pub phone: Option<String>,
    pub cnpj: String,
    #[serde(default)]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
