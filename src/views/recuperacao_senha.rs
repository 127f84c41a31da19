use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::routes::Route;
use crate::services::auth_service;

/// Pedido do e-mail de redefinição de senha, para contas de usuário
/// e de empresa
#[function_component(RecuperacaoSenhaView)]
pub fn recuperacao_senha_view() -> Html {
    let navegar = use_navegacao();
    let email = use_state(String::new);
    let conta_empresa = use_state(|| false);
    let mensagem = use_state(|| None::<Result<String, String>>);
    let enviando = use_state(|| false);

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let alternar_empresa = {
        let conta_empresa = conta_empresa.clone();
        Callback::from(move |_| conta_empresa.set(!*conta_empresa))
    };

    let onsubmit = {
        let email = email.clone();
        let conta_empresa = conta_empresa.clone();
        let mensagem = mensagem.clone();
        let enviando = enviando.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }
            let email = (*email).clone();
            let empresa = *conta_empresa;
            let mensagem = mensagem.clone();
            let enviando = enviando.clone();
            wasm_bindgen_futures::spawn_local(async move {
                enviando.set(true);
                let resultado = if empresa {
                    auth_service::solicitar_redefinicao_senha_empresa(&email).await
                } else {
                    auth_service::solicitar_redefinicao_senha(&email).await
                };
                enviando.set(false);
                mensagem.set(Some(resultado));
            });
        })
    };

    let voltar = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::Login))
    };

    html! {
        <div class="recuperacao-senha-view">
            <h2>{"Recuperar Senha"}</h2>
            <p>{"Informe o e-mail cadastrado para receber o link de redefinição."}</p>

            <form onsubmit={onsubmit}>
                <div class="form-row">
                    <label>{"E-mail"}</label>
                    <input type="email" value={(*email).clone()}
                        oninput={oninput_email} required=true />
                </div>
                <label class="form-check">
                    <input type="checkbox" checked={*conta_empresa} onchange={alternar_empresa} />
                    {"Conta de empresa"}
                </label>

                { match &*mensagem {
                    Some(Ok(m)) => html! { <p class="form-sucesso">{ m }</p> },
                    Some(Err(e)) => html! { <p class="form-erro">{ e }</p> },
                    None => html! {},
                } }

                <button type="submit" class="primary" disabled={*enviando}>
                    { if *enviando { "Enviando..." } else { "Enviar link" } }
                </button>
            </form>

            <button class="link" onclick={voltar}>{"Voltar para o login"}</button>
        </div>
    }
}
