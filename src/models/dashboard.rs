use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Exame, Usuario};

/// Payload agregado da dashboard administrativa (`GET /dashboard/dados`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DadosDashboard {
    #[serde(default)]
    pub exames_hoje: Vec<Exame>,
    /// Data ISO -> quantidade; BTreeMap mantém os dias em ordem para o gráfico
    #[serde(default)]
    pub exames_por_dia: BTreeMap<String, u32>,
    #[serde(default)]
    pub empresas_com_mais_exames: Vec<EmpresaComExames>,
    #[serde(default)]
    pub exames_recentes: Vec<Exame>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EmpresaComExames {
    pub id: String,
    pub name: String,
    pub total: u32,
}

/// Payload da dashboard do trabalhador
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardTrabalhador {
    pub user: Usuario,
    #[serde(default)]
    pub exames_agendados: Vec<Exame>,
    #[serde(default)]
    pub exames_anteriores: Vec<Exame>,
    #[serde(default)]
    pub total_exames: u32,
    #[serde(default)]
    pub exames_com_imagem: u32,
}

impl DadosDashboard {
    /// Soma de exames nos próximos dias (card "Exames nos Próximos 5 dias")
    pub fn total_proximos_dias(&self) -> u32 {
        self.exames_por_dia.values().sum()
    }
}
