use yew::prelude::*;

use crate::components::TitleForm;
use crate::hooks::use_session_context;
use crate::models::DadosDashboard;
use crate::services::dashboard_service;
use crate::utils::formatar_data;

/// Dashboard administrativa: números do dia, exames por dia nos próximos
/// dias (barras em CSS), empresas com mais exames e agendamentos recentes
#[function_component(MainDashboardView)]
pub fn main_dashboard_view() -> Html {
    let session = use_session_context();
    let dados = use_state(|| None::<DadosDashboard>);
    let erro = use_state(|| None::<String>);
    let token = session.state.token().map(|t| t.to_string());

    {
        let dados = dados.clone();
        let erro = erro.clone();
        use_effect_with(token, move |token| {
            if let Some(token) = token.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match dashboard_service::obter_dados(&token).await {
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
        (None, None) => html! { <p class="carregando">{"Carregando dashboard..."}</p> },
        (Some(dados), None) => {
            let maximo = dados.exames_por_dia.values().copied().max().unwrap_or(1).max(1);
            html! {
                <>
                    <div class="dashboard-cards">
                        <div class="dashboard-card">
                            <span class="dashboard-card-numero">{ dados.exames_hoje.len() }</span>
                            <span>{"Exames hoje"}</span>
                        </div>
                        <div class="dashboard-card">
                            <span class="dashboard-card-numero">{ dados.total_proximos_dias() }</span>
                            <span>{"Exames nos próximos dias"}</span>
                        </div>
                        <div class="dashboard-card">
                            <span class="dashboard-card-numero">{ dados.empresas_com_mais_exames.len() }</span>
                            <span>{"Empresas ativas"}</span>
                        </div>
                    </div>

                    <section class="dashboard-grafico">
                        <h3>{"Exames por dia"}</h3>
                        <div class="grafico-barras">
                            { for dados.exames_por_dia.iter().map(|(dia, total)| {
                                let altura = (*total as f64 / maximo as f64 * 100.0).round();
                                html! {
                                    <div class="grafico-coluna" title={format!("{}: {}", dia, total)}>
                                        <div class="grafico-barra"
                                            style={format!("height: {}%", altura)}></div>
                                        <span class="grafico-rotulo">{ formatar_data(dia) }</span>
                                        <span class="grafico-valor">{ total }</span>
                                    </div>
                                }
                            }) }
                        </div>
                    </section>

                    <section class="dashboard-empresas">
                        <h3>{"Empresas com mais exames"}</h3>
                        <ol>
                            { for dados.empresas_com_mais_exames.iter().map(|empresa| html! {
                                <li>
                                    <span>{ &empresa.name }</span>
                                    <span class="dashboard-total">{ empresa.total }</span>
                                </li>
                            }) }
                        </ol>
                    </section>

                    <section class="dashboard-recentes">
                        <h3>{"Agendamentos recentes"}</h3>
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Data"}</th>
                                    <th>{"Descrição"}</th>
                                    <th>{"Trabalhador"}</th>
                                    <th>{"Imagens"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for dados.exames_recentes.iter().map(|exame| html! {
                                    <tr>
                                        <td>{ exame.exam_date.as_deref().map(formatar_data).unwrap_or_default() }</td>
                                        <td>{ exame.description.clone().unwrap_or_default() }</td>
                                        <td>{ exame.user.as_ref().map(|u| u.name.clone()).unwrap_or_default() }</td>
                                        <td>{ if exame.image_uploaded { "✅" } else { "—" } }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </section>
                </>
            }
        }
    };

    html! {
        <div class="main-dashboard-view">
            <TitleForm titulo="Dashboard" />
            { conteudo }
        </div>
    }
}
