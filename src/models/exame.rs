use serde::{Deserialize, Serialize};

use super::Usuario;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Exame {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub image_uploaded: bool,
    /// Usuário embutido, presente na listagem por empresa e datas
    #[serde(default)]
    pub user: Option<Usuario>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EstatisticasEmpresa {
    pub total_exames: u32,
    pub exames_entregues: u32,
    pub exames_pendentes: u32,
}
