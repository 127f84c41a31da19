use yew::prelude::*;

use crate::components::TitleForm;
use crate::hooks::use_session_context;
use crate::models::{EstatisticasEmpresa, Exame};
use crate::services::exame_service;
use crate::utils::{data_em_dias_iso, data_hoje_iso, formatar_data};

/// Dashboard da conta de empresa: estatísticas dos exames e a agenda
/// dos próximos 30 dias. O id da empresa vem do próprio token.
#[function_component(DashboardEmpresaView)]
pub fn dashboard_empresa_view() -> Html {
    let session = use_session_context();
    let token = session.state.token().map(|t| t.to_string());
    let company_id = session.state.claims().map(|c| c.sub);

    let estatisticas = use_state(|| None::<EstatisticasEmpresa>);
    let exames = use_state(Vec::<Exame>::new);
    let erro = use_state(|| None::<String>);

    {
        let estatisticas = estatisticas.clone();
        let exames = exames.clone();
        let erro = erro.clone();
        let deps = (token.clone(), company_id.clone());
        use_effect_with(deps, move |(token, company_id)| {
            if let (Some(token), Some(company_id)) = (token.clone(), company_id.clone()) {
                wasm_bindgen_futures::spawn_local(async move {
                    match exame_service::estatisticas_por_empresa(&token, &company_id).await {
                        Ok(carregadas) => estatisticas.set(Some(carregadas)),
                        Err(e) => {
                            erro.set(Some(e));
                            return;
                        }
                    }
                    let inicial = data_hoje_iso();
                    let fim = data_em_dias_iso(30);
                    match exame_service::listar_por_empresa_e_datas(
                        &token, &company_id, &inicial, &fim,
                    )
                    .await
                    {
                        Ok(carregados) => exames.set(carregados),
                        Err(e) => erro.set(Some(e)),
                    }
                });
            }
            || ()
        });
    }

    let nome = session
        .state
        .perfil()
        .map(|p| p.name.clone())
        .unwrap_or_default();

    html! {
        <div class="dashboard-empresa-view">
            <TitleForm titulo="Minha Empresa" subtitulo={Some(nome)} />

            if let Some(e) = (*erro).clone() {
                <p class="form-erro">{ e }</p>
            }

            if let Some(est) = &*estatisticas {
                <div class="dashboard-cards">
                    <div class="dashboard-card">
                        <span class="dashboard-card-numero">{ est.total_exames }</span>
                        <span>{"Exames no total"}</span>
                    </div>
                    <div class="dashboard-card">
                        <span class="dashboard-card-numero">{ est.exames_entregues }</span>
                        <span>{"Resultados entregues"}</span>
                    </div>
                    <div class="dashboard-card">
                        <span class="dashboard-card-numero">{ est.exames_pendentes }</span>
                        <span>{"Aguardando resultado"}</span>
                    </div>
                </div>
            } else if erro.is_none() {
                <p class="carregando">{"Carregando..."}</p>
            }

            <section class="dashboard-proximos">
                <h3>{"Próximos exames"}</h3>
                if exames.is_empty() {
                    <p class="listagem-vazia">{"Nenhum exame agendado para os próximos 30 dias"}</p>
                } else {
                    <table class="listagem-tabela">
                        <thead>
                            <tr>
                                <th>{"Data"}</th>
                                <th>{"Trabalhador"}</th>
                                <th>{"Descrição"}</th>
                                <th>{"Resultado"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for exames.iter().map(|exame| html! {
                                <tr key={exame.id.clone()}>
                                    <td>{ exame.exam_date.as_deref().map(formatar_data).unwrap_or_default() }</td>
                                    <td>{ exame.user.as_ref().map(|u| u.name.clone()).unwrap_or_default() }</td>
                                    <td>{ exame.description.clone().unwrap_or_default() }</td>
                                    <td>{ if exame.image_uploaded { "✅ Entregue" } else { "⏳ Pendente" } }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }
            </section>
        </div>
    }
}
