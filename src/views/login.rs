use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::hooks::use_session_context;
use crate::routes::Route;
use crate::services::auth_service;
use crate::session::decode_claims;
use crate::utils::{ROLE_ADMIN, ROLE_EDITOR, ROLE_EMPRESA};

/// Tela de login. Erro de credenciais fica aqui; o token aceito entra na
/// sessão e a navegação segue para a tela inicial do papel.
#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();

    let email = use_state(String::new);
    let senha = use_state(String::new);
    let erro = use_state(|| None::<String>);
    let enviando = use_state(|| false);

    // Sessão já ativa (ex.: voltar para /login pelo histórico): segue
    // direto para a tela inicial
    {
        let navegar = navegar.clone();
        let role = session.state.claims().map(|c| c.role);
        let autenticado = session.state.is_authenticated();
        use_effect_with(autenticado, move |autenticado| {
            if *autenticado {
                navegar.emit(rota_inicial(role));
            }
            || ()
        });
    }

    let oninput_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let oninput_senha = {
        let senha = senha.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            senha.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let senha = senha.clone();
        let erro = erro.clone();
        let enviando = enviando.clone();
        let definir_token = session.definir_token.clone();
        let navegar = navegar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }
            let email = (*email).clone();
            let senha = (*senha).clone();
            let erro = erro.clone();
            let enviando = enviando.clone();
            let definir_token = definir_token.clone();
            let navegar = navegar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                enviando.set(true);
                erro.set(None);
                match auth_service::login(&email, &senha).await {
                    Ok(token) => {
                        let role = decode_claims(&token).ok().map(|c| c.role);
                        definir_token.emit(Some(token));
                        enviando.set(false);
                        navegar.emit(rota_inicial(role));
                    }
                    Err(e) => {
                        log::warn!("⚠️ Login recusado: {}", e);
                        enviando.set(false);
                        erro.set(Some(e));
                    }
                }
            });
        })
    };

    let ir_recuperacao = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::RecuperacaoSenha))
    };

    html! {
        <div class="login-view">
            <h2>{"Entrar"}</h2>
            <form onsubmit={onsubmit}>
                <div class="form-row">
                    <label>{"E-mail"}</label>
                    <input type="email" value={(*email).clone()}
                        oninput={oninput_email} required=true />
                </div>
                <div class="form-row">
                    <label>{"Senha"}</label>
                    <input type="password" value={(*senha).clone()}
                        oninput={oninput_senha} required=true />
                </div>

                if let Some(mensagem) = (*erro).clone() {
                    <p class="form-erro">{ mensagem }</p>
                }

                <button type="submit" class="primary" disabled={*enviando}>
                    { if *enviando { "Entrando..." } else { "Entrar" } }
                </button>
            </form>

            <button class="link" onclick={ir_recuperacao}>{"Esqueci minha senha"}</button>
        </div>
    }
}

fn rota_inicial(role: Option<i32>) -> Route {
    match role {
        Some(r) if r == ROLE_EMPRESA => Route::DashboardEmpresa,
        Some(r) if r == ROLE_ADMIN || r == ROLE_EDITOR => Route::Dashboard,
        _ => Route::DashboardTrabalhador,
    }
}
