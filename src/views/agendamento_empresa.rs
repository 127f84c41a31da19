use std::collections::HashSet;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{Snackbar, TipoMensagem, TitleForm};
use crate::hooks::use_session_context;
use crate::models::Usuario;
use crate::routes::Route;
use crate::services::exame_service::{self, CriarExamesLote};
use crate::utils::data_hoje_iso;

#[derive(Properties, PartialEq)]
pub struct AgendamentoEmpresaProps {
    pub company_id: String,
}

/// Agendamento em lote: seleciona trabalhadores da empresa e cria um
/// exame por selecionado na data escolhida
#[function_component(AgendamentoEmpresaView)]
pub fn agendamento_empresa_view(props: &AgendamentoEmpresaProps) -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());

    let usuarios = use_state(Vec::<Usuario>::new);
    let selecionados = use_state(HashSet::<String>::new);
    let exam_date = use_state(data_hoje_iso);
    let description = use_state(String::new);
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let enviando = use_state(|| false);

    {
        let usuarios = usuarios.clone();
        let mensagem = mensagem.clone();
        let deps = (props.company_id.clone(), token.clone());
        use_effect_with(deps, move |(company_id, token)| {
            if let Some(token) = token.clone() {
                let company_id = company_id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match exame_service::usuarios_por_empresa(&token, &company_id).await {
                        Ok(carregados) => usuarios.set(carregados),
                        Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                    }
                });
            }
            || ()
        });
    }

    let alternar_usuario = {
        let selecionados = selecionados.clone();
        Callback::from(move |id: String| {
            let mut novos = (*selecionados).clone();
            if !novos.remove(&id) {
                novos.insert(id);
            }
            selecionados.set(novos);
        })
    };

    let alternar_todos = {
        let selecionados = selecionados.clone();
        let usuarios = usuarios.clone();
        Callback::from(move |_| {
            if selecionados.len() == usuarios.len() {
                selecionados.set(HashSet::new());
            } else {
                selecionados.set(usuarios.iter().map(|u| u.id.clone()).collect());
            }
        })
    };

    let oninput_data = {
        let exam_date = exam_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            exam_date.set(input.value());
        })
    };

    let oninput_descricao = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };

    let onsubmit = {
        let selecionados = selecionados.clone();
        let exam_date = exam_date.clone();
        let description = description.clone();
        let mensagem = mensagem.clone();
        let enviando = enviando.clone();
        let token = token.clone();
        let company_id = props.company_id.clone();
        let navegar = navegar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }
            if selecionados.is_empty() {
                mensagem.set(Some((
                    "Selecione pelo menos um trabalhador".to_string(),
                    TipoMensagem::Erro,
                )));
                return;
            }
            let Some(token) = token.clone() else { return };
            let lote = CriarExamesLote {
                company_id: company_id.clone(),
                users: selecionados.iter().cloned().collect(),
                exam_date: (*exam_date).clone(),
                description: if description.is_empty() {
                    None
                } else {
                    Some((*description).clone())
                },
            };
            let company_id = company_id.clone();
            let mensagem = mensagem.clone();
            let enviando = enviando.clone();
            let navegar = navegar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                enviando.set(true);
                match exame_service::criar_em_lote(&token, &lote).await {
                    Ok(resposta) => {
                        log::info!("✅ {} exames agendados", resposta.exams_created);
                        enviando.set(false);
                        navegar.emit(Route::AgendamentosEmpresa {
                            company_id,
                            nome: None,
                        });
                    }
                    Err(e) => {
                        enviando.set(false);
                        mensagem.set(Some((e, TipoMensagem::Erro)));
                    }
                }
            });
        })
    };

    let voltar = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::Empresas))
    };

    html! {
        <div class="agendamento-empresa-view">
            <TitleForm titulo="Agendar Exames"
                subtitulo={Some(format!("{} trabalhadores disponíveis", usuarios.len()))} />

            <form onsubmit={onsubmit}>
                <div class="form-row">
                    <label>{"Data dos exames"}</label>
                    <input type="date" value={(*exam_date).clone()} required=true
                        oninput={oninput_data} />
                </div>
                <div class="form-row">
                    <label>{"Descrição (opcional)"}</label>
                    <textarea value={(*description).clone()} oninput={oninput_descricao} />
                </div>

                <section class="selecao-trabalhadores">
                    <div class="selecao-cabecalho">
                        <h3>{ format!("Trabalhadores ({} selecionados)", selecionados.len()) }</h3>
                        <button type="button" onclick={alternar_todos}>
                            { if selecionados.len() == usuarios.len() && !usuarios.is_empty() {
                                "Desmarcar todos"
                            } else {
                                "Selecionar todos"
                            } }
                        </button>
                    </div>

                    if usuarios.is_empty() {
                        <p class="listagem-vazia">{"Nenhum trabalhador vinculado a esta empresa"}</p>
                    }

                    <ul class="selecao-lista">
                        { for usuarios.iter().map(|usuario| {
                            let alternar = alternar_usuario.clone();
                            let id = usuario.id.clone();
                            let marcado = selecionados.contains(&usuario.id);
                            html! {
                                <li key={usuario.id.clone()}>
                                    <label>
                                        <input type="checkbox" checked={marcado}
                                            onchange={move |_| alternar.emit(id.clone())} />
                                        <span>{ &usuario.name }</span>
                                        <span class="selecao-cpf">
                                            { usuario.cpf.clone().unwrap_or_default() }
                                        </span>
                                    </label>
                                </li>
                            }
                        }) }
                    </ul>
                </section>

                <div class="form-acoes">
                    <button type="button" onclick={voltar}>{"Cancelar"}</button>
                    <button type="submit" class="primary"
                        disabled={*enviando || selecionados.is_empty()}>
                        { if *enviando { "Agendando..." } else { "📅 Agendar" } }
                    </button>
                </div>
            </form>

            if let Some((texto, tipo)) = (*mensagem).clone() {
                <Snackbar mensagem={texto} tipo={tipo}
                    on_fechar={{
                        let mensagem = mensagem.clone();
                        Callback::from(move |_| mensagem.set(None))
                    }} />
            }
        </div>
    }
}
