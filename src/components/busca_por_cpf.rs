use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{Snackbar, TipoMensagem, TitleForm};
use crate::hooks::use_session_context;
use crate::models::Usuario;
use crate::routes::Route;
use crate::services::usuario_service;
use crate::utils::nome_papel;

/// Busca exata de usuário por CPF, alternativa à listagem por nome.
/// Editar e deletar só aparecem para administradores.
#[function_component(BuscaPorCpf)]
pub fn busca_por_cpf() -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());
    let is_admin = session.state.is_admin();

    let cpf = use_state(String::new);
    let resultado = use_state(|| None::<Usuario>);
    let erro = use_state(|| None::<String>);
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let buscando = use_state(|| false);

    let oninput = {
        let cpf = cpf.clone();
        let resultado = resultado.clone();
        let erro = erro.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let valor = input.value();
            // Limpar o campo descarta o resultado anterior
            if valor.is_empty() {
                resultado.set(None);
                erro.set(None);
            }
            cpf.set(valor);
        })
    };

    let onsubmit = {
        let cpf = cpf.clone();
        let resultado = resultado.clone();
        let erro = erro.clone();
        let buscando = buscando.clone();
        let token = token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *buscando {
                return;
            }
            let digitado = cpf.trim().to_string();
            if digitado.is_empty() {
                erro.set(Some("Informe um CPF.".to_string()));
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
                match usuario_service::buscar_por_cpf(&token, &digitado).await {
                    Ok(Some(usuario)) => resultado.set(Some(usuario)),
                    Ok(None) => {
                        erro.set(Some("Nenhum usuário encontrado com este CPF.".to_string()))
                    }
                    Err(e) => erro.set(Some(e)),
                }
                buscando.set(false);
            });
        })
    };

    let editar = {
        let navegar = navegar.clone();
        Callback::from(move |id: String| navegar.emit(Route::CadastroUsuario { id: Some(id) }))
    };

    let deletar = {
        let token = token.clone();
        let resultado = resultado.clone();
        let cpf = cpf.clone();
        let mensagem = mensagem.clone();
        Callback::from(move |id: String| {
            let confirmado = web_sys::window()
                .and_then(|w| w.confirm_with_message("Deletar este usuário?").ok())
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let Some(token) = token.clone() else { return };
            let resultado = resultado.clone();
            let cpf = cpf.clone();
            let mensagem = mensagem.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match usuario_service::deletar(&token, &id).await {
                    Ok(m) => {
                        mensagem.set(Some((m, TipoMensagem::Sucesso)));
                        resultado.set(None);
                        cpf.set(String::new());
                    }
                    Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                }
            });
        })
    };

    let resultado_html = (*resultado).clone().map(|usuario| {
        let editar = editar.clone();
        let deletar = deletar.clone();
        let id_editar = usuario.id.clone();
        let id_deletar = usuario.id.clone();
        html! {
            <div class="busca-documento-resultado">
                <h3>{ &usuario.name }</h3>
                <p>{"E-mail: "}{ &usuario.email }</p>
                <p>{"Telefone: "}{ usuario.phone.clone().unwrap_or_default() }</p>
                <p>{"CPF: "}{ usuario.cpf.clone().unwrap_or_default() }</p>
                <p>{"Papel: "}{ nome_papel(usuario.role) }</p>
                <p>{"Ativo: "}{ if usuario.ativo { "Sim" } else { "Não" } }</p>
                if !usuario.address.is_empty() {
                    <h4>{"Endereços"}</h4>
                    <ul>
                        { for usuario.address.iter().map(|endereco| html! {
                            <li key={endereco.id.clone()}>{ endereco.to_string() }</li>
                        }) }
                    </ul>
                }
                if is_admin {
                    <div class="listagem-botoes">
                        <button title="Editar"
                            onclick={move |_| editar.emit(id_editar.clone())}>{"✏️"}</button>
                        <button title="Deletar"
                            onclick={move |_| deletar.emit(id_deletar.clone())}>{"🗑️"}</button>
                    </div>
                }
            </div>
        }
    });

    html! {
        <div class="busca-documento">
            <TitleForm titulo="Buscar Usuário por CPF" />

            <form class="busca-documento-form" onsubmit={onsubmit}>
                <input value={(*cpf).clone()} placeholder="CPF" oninput={oninput} />
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
