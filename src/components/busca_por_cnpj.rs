use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{Snackbar, TipoMensagem, TitleForm};
use crate::hooks::use_session_context;
use crate::models::Empresa;
use crate::routes::Route;
use crate::services::empresa_service;

/// Busca exata de empresa por CNPJ, espelho da busca de usuário por CPF.
/// O atalho de agendamento fica sempre visível; editar e deletar são
/// restritos a administradores.
#[function_component(BuscaPorCnpj)]
pub fn busca_por_cnpj() -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());
    let is_admin = session.state.is_admin();

    let cnpj = use_state(String::new);
    let resultado = use_state(|| None::<Empresa>);
    let erro = use_state(|| None::<String>);
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let buscando = use_state(|| false);

    let oninput = {
        let cnpj = cnpj.clone();
        let resultado = resultado.clone();
        let erro = erro.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let valor = input.value();
            if valor.is_empty() {
                resultado.set(None);
                erro.set(None);
            }
            cnpj.set(valor);
        })
    };

    let onsubmit = {
        let cnpj = cnpj.clone();
        let resultado = resultado.clone();
        let erro = erro.clone();
        let buscando = buscando.clone();
        let token = token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *buscando {
                return;
            }
            let digitado = cnpj.trim().to_string();
            if digitado.is_empty() {
                erro.set(Some("Informe um CNPJ.".to_string()));
                return;
            }
            let Some(token) = token.clone() else { return };
            let resultado = resultado.clone();
            let erro = erro.clone();
            let buscando = buscando.clone();
            wasm_bindgen_futures::spawn_local(async move {
                buscando.set(true);
                erro.set(None);
                resultado.set(None);
                match empresa_service::buscar_por_cnpj(&token, &digitado).await {
                    Ok(Some(empresa)) => resultado.set(Some(empresa)),
                    Ok(None) => {
                        erro.set(Some("Nenhuma empresa encontrada com este CNPJ.".to_string()))
                    }
                    Err(e) => erro.set(Some(e)),
                }
                buscando.set(false);
            });
        })
    };

    let agendar = {
        let navegar = navegar.clone();
        Callback::from(move |company_id: String| {
            navegar.emit(Route::AgendamentoEmpresa { company_id })
        })
    };

    let editar = {
        let navegar = navegar.clone();
        Callback::from(move |id: String| navegar.emit(Route::CadastroEmpresa { id: Some(id) }))
    };

    let deletar = {
        let token = token.clone();
        let resultado = resultado.clone();
        let cnpj = cnpj.clone();
        let mensagem = mensagem.clone();
        Callback::from(move |id: String| {
            let confirmado = web_sys::window()
                .and_then(|w| w.confirm_with_message("Deletar esta empresa?").ok())
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let Some(token) = token.clone() else { return };
            let resultado = resultado.clone();
            let cnpj = cnpj.clone();
            let mensagem = mensagem.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match empresa_service::deletar(&token, &id).await {
                    Ok(m) => {
                        mensagem.set(Some((m, TipoMensagem::Sucesso)));
                        resultado.set(None);
                        cnpj.set(String::new());
                    }
                    Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                }
            });
        })
    };

    let resultado_html = (*resultado).clone().map(|empresa| {
        let agendar = agendar.clone();
        let editar = editar.clone();
        let deletar = deletar.clone();
        let id_agendar = empresa.id.clone();
        let id_editar = empresa.id.clone();
        let id_deletar = empresa.id.clone();
        html! {
            <div class="busca-documento-resultado">
                <h3>{ &empresa.name }</h3>
                <p>{"E-mail: "}{ &empresa.email }</p>
                <p>{"Telefone: "}{ empresa.phone.clone().unwrap_or_default() }</p>
                <p>{"CNPJ: "}{ &empresa.cnpj }</p>
                <p>{"Ativa: "}{ if empresa.ativo { "Sim" } else { "Não" } }</p>
                if !empresa.address.is_empty() {
                    <h4>{"Endereços"}</h4>
                    <ul>
                        { for empresa.address.iter().map(|endereco| html! {
                            <li key={endereco.id.clone()}>{ endereco.to_string() }</li>
                        }) }
                    </ul>
                }
                <div class="listagem-botoes">
                    <button title="Agendar exames"
                        onclick={move |_| agendar.emit(id_agendar.clone())}>{"📅"}</button>
                    if is_admin {
                        <button title="Editar"
                            onclick={move |_| editar.emit(id_editar.clone())}>{"✏️"}</button>
                        <button title="Deletar"
                            onclick={move |_| deletar.emit(id_deletar.clone())}>{"🗑️"}</button>
                    }
                </div>
            </div>
        }
    });

    html! {
        <div class="busca-documento">
            <TitleForm titulo="Buscar Empresa por CNPJ" />

            <form class="busca-documento-form" onsubmit={onsubmit}>
                <input value={(*cnpj).clone()} placeholder="CNPJ" oninput={oninput} />
                <button type="submit" class="primary" disabled={*buscando}>
                    { if *buscando { "Pesquisando..." } else { "Pesquisar" } }
                </button>
            </form>

            if let Some(e) = (*erro).clone() {
                <p class="form-erro">{ e }</p>
            }

            { resultado_html.unwrap_or_default() }

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
