use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{TitleForm, UploadImagesModal};
use crate::hooks::use_session_context;
use crate::models::Exame;
use crate::routes::Route;
use crate::services::exame_service;
use crate::utils::{data_em_dias_iso, data_hoje_iso, formatar_data, truncar_texto};

#[derive(Properties, PartialEq)]
pub struct AgendamentosEmpresaProps {
    pub company_id: String,
    /// Nome da empresa para o título, quando veio da listagem
    #[prop_or_default]
    pub nome: Option<String>,
}

/// Agendamentos de uma empresa filtrados por intervalo de datas, com o
/// envio de imagens de resultado por exame
#[function_component(AgendamentosEmpresaView)]
pub fn agendamentos_empresa_view(props: &AgendamentosEmpresaProps) -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());

    let exames = use_state(Vec::<Exame>::new);
    let data_inicial = use_state(data_hoje_iso);
    let data_final = use_state(|| data_em_dias_iso(30));
    let carregando = use_state(|| false);
    let erro = use_state(|| None::<String>);
    let upload_exame = use_state(|| None::<String>);
    let versao = use_state(|| 0u32);

    {
        let exames = exames.clone();
        let carregando = carregando.clone();
        let erro = erro.clone();
        let deps = (
            props.company_id.clone(),
            token.clone(),
            (*data_inicial).clone(),
            (*data_final).clone(),
            *versao,
        );
        use_effect_with(deps, move |(company_id, token, inicial, fim, _)| {
            if let Some(token) = token.clone() {
                let company_id = company_id.clone();
                let inicial = inicial.clone();
                let fim = fim.clone();
                carregando.set(true);
                erro.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match exame_service::listar_por_empresa_e_datas(
                        &token, &company_id, &inicial, &fim,
                    )
                    .await
                    {
                        Ok(carregados) => {
                            exames.set(carregados);
                            carregando.set(false);
                        }
                        Err(e) => {
                            erro.set(Some(e));
                            carregando.set(false);
                        }
                    }
                });
            }
            || ()
        });
    }

    let oninput_inicial = {
        let data_inicial = data_inicial.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            data_inicial.set(input.value());
        })
    };

    let oninput_final = {
        let data_final = data_final.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            data_final.set(input.value());
        })
    };

    let abrir_upload = {
        let upload_exame = upload_exame.clone();
        Callback::from(move |exam_id: String| upload_exame.set(Some(exam_id)))
    };

    let recarregar = {
        let versao = versao.clone();
        Callback::from(move |_| versao.set(versao.wrapping_add(1)))
    };

    let agendar = {
        let navegar = navegar.clone();
        let company_id = props.company_id.clone();
        Callback::from(move |_| {
            navegar.emit(Route::AgendamentoEmpresa {
                company_id: company_id.clone(),
            })
        })
    };

    let titulo = match &props.nome {
        Some(nome) => format!("Agendamentos - {}", nome),
        None => "Agendamentos".to_string(),
    };

    html! {
        <div class="agendamentos-empresa-view">
            <TitleForm titulo={titulo} />

            <div class="filtro-datas">
                <label>
                    {"De"}
                    <input type="date" value={(*data_inicial).clone()} oninput={oninput_inicial} />
                </label>
                <label>
                    {"Até"}
                    <input type="date" value={(*data_final).clone()} oninput={oninput_final} />
                </label>
                <button class="primary" onclick={agendar}>{"➕ Agendar exames"}</button>
            </div>

            if let Some(e) = (*erro).clone() {
                <p class="form-erro">{ e }</p>
            }

            if *carregando {
                <p class="carregando">{"Carregando..."}</p>
            } else if exames.is_empty() {
                <p class="listagem-vazia">{"Nenhum exame no período"}</p>
            } else {
                <table class="listagem-tabela">
                    <thead>
                        <tr>
                            <th>{"Data"}</th>
                            <th>{"Trabalhador"}</th>
                            <th>{"CPF"}</th>
                            <th>{"Descrição"}</th>
                            <th>{"Imagens"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for exames.iter().map(|exame| {
                            let abrir = abrir_upload.clone();
                            let exam_id = exame.id.clone();
                            html! {
                                <tr key={exame.id.clone()}>
                                    <td>{ exame.exam_date.as_deref().map(formatar_data).unwrap_or_default() }</td>
                                    <td>{ exame.user.as_ref().map(|u| u.name.clone()).unwrap_or_default() }</td>
                                    <td>{ exame.user.as_ref().and_then(|u| u.cpf.clone()).unwrap_or_default() }</td>
                                    <td>{ truncar_texto(&exame.description.clone().unwrap_or_default(), 40) }</td>
                                    <td>
                                        if exame.image_uploaded {
                                            <span title="Imagens enviadas">{"✅"}</span>
                                        } else {
                                            <button title="Enviar imagens"
                                                onclick={move |_| abrir.emit(exam_id.clone())}>{"📤"}</button>
                                        }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }

            if let (Some(exam_id), Some(token)) = ((*upload_exame).clone(), token.clone()) {
                <UploadImagesModal
                    exam_id={exam_id}
                    token={token}
                    on_enviado={recarregar}
                    on_fechar={{
                        let upload_exame = upload_exame.clone();
                        Callback::from(move |_| upload_exame.set(None))
                    }} />
            }
        </div>
    }
}
