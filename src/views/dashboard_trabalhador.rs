use yew::prelude::*;

use crate::components::TitleForm;
use crate::hooks::use_session_context;
use crate::models::DashboardTrabalhador;
use crate::services::exame_service;
use crate::utils::formatar_data;

/// Dashboard pessoal do trabalhador: exames agendados e histórico,
/// carregados pelo id do próprio token
#[function_component(DashboardTrabalhadorView)]
pub fn dashboard_trabalhador_view() -> Html {
    let session = use_session_context();
    let token = session.state.token().map(|t| t.to_string());
    let user_id = session.state.claims().map(|c| c.sub);

    let dados = use_state(|| None::<DashboardTrabalhador>);
    let erro = use_state(|| None::<String>);

    {
        let dados = dados.clone();
        let erro = erro.clone();
        let deps = (token.clone(), user_id.clone());
        use_effect_with(deps, move |(token, user_id)| {
            if let (Some(token), Some(user_id)) = (token.clone(), user_id.clone()) {
                wasm_bindgen_futures::spawn_local(async move {
                    match exame_service::dashboard_trabalhador(&token, &user_id).await {
                        Ok(carregados) => dados.set(Some(carregados)),
                        Err(e) => erro.set(Some(e)),
                    }
                });
            }
            || ()
        });
    }

    let conteudo = match (&*dados, &*erro) {
        (_, Some(e)) => html! { <p class="form-erro">{ e }</p> },
        (None, None) => html! { <p class="carregando">{"Carregando..."}</p> },
        (Some(dados), None) => html! {
            <>
                <div class="dashboard-cards">
                    <div class="dashboard-card">
                        <span class="dashboard-card-numero">{ dados.exames_agendados.len() }</span>
                        <span>{"Exames agendados"}</span>
                    </div>
                    <div class="dashboard-card">
                        <span class="dashboard-card-numero">{ dados.total_exames }</span>
                        <span>{"Exames no total"}</span>
                    </div>
                    <div class="dashboard-card">
                        <span class="dashboard-card-numero">{ dados.exames_com_imagem }</span>
                        <span>{"Resultados disponíveis"}</span>
                    </div>
                </div>

                <section class="dashboard-proximos">
                    <h3>{"Próximos exames"}</h3>
                    if dados.exames_agendados.is_empty() {
                        <p class="listagem-vazia">{"Nenhum exame agendado"}</p>
                    } else {
                        <ul class="exames-lista">
                            { for dados.exames_agendados.iter().map(|exame| html! {
                                <li key={exame.id.clone()}>
                                    <span class="exame-data">
                                        { exame.exam_date.as_deref().map(formatar_data).unwrap_or_default() }
                                    </span>
                                    <span>{ exame.description.clone().unwrap_or_default() }</span>
                                </li>
                            }) }
                        </ul>
                    }
                </section>

                <section class="dashboard-historico">
                    <h3>{"Histórico"}</h3>
                    if dados.exames_anteriores.is_empty() {
                        <p class="listagem-vazia">{"Nenhum exame anterior"}</p>
                    } else {
                        <table class="listagem-tabela">
                            <thead>
                                <tr>
                                    <th>{"Data"}</th>
                                    <th>{"Descrição"}</th>
                                    <th>{"Resultado"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for dados.exames_anteriores.iter().map(|exame| html! {
                                    <tr key={exame.id.clone()}>
                                        <td>{ exame.exam_date.as_deref().map(formatar_data).unwrap_or_default() }</td>
                                        <td>{ exame.description.clone().unwrap_or_default() }</td>
                                        <td>{ if exame.image_uploaded { "✅ Disponível" } else { "—" } }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }
                </section>
            </>
        },
    };

    html! {
        <div class="dashboard-trabalhador-view">
            <TitleForm titulo="Meus Exames" />
            { conteudo }
        </div>
    }
}
