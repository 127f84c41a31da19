use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::routes::Route;
use crate::services::auth_service;

const TAMANHO_MINIMO_SENHA: usize = 8;

#[derive(Properties, PartialEq)]
pub struct RedefineSenhaProps {
    /// Token recebido por e-mail
    pub token: String,
    /// true no fluxo de primeira senha da conta de empresa
    pub empresa: bool,
}

/// Define a nova senha a partir do link de e-mail. Serve tanto à
/// redefinição de usuário quanto à primeira senha da empresa.
#[function_component(RedefineSenhaView)]
pub fn redefine_senha_view(props: &RedefineSenhaProps) -> Html {
    let navegar = use_navegacao();
    let senha = use_state(String::new);
    let confirmacao = use_state(String::new);
    let mensagem = use_state(|| None::<Result<String, String>>);
    let enviando = use_state(|| false);

    let oninput_senha = {
        let senha = senha.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            senha.set(input.value());
        })
    };

    let oninput_confirmacao = {
        let confirmacao = confirmacao.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            confirmacao.set(input.value());
        })
    };

    let onsubmit = {
        let senha = senha.clone();
        let confirmacao = confirmacao.clone();
        let mensagem = mensagem.clone();
        let enviando = enviando.clone();
        let token = props.token.clone();
        let empresa = props.empresa;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *enviando {
                return;
            }
            if senha.len() < TAMANHO_MINIMO_SENHA {
                mensagem.set(Some(Err(format!(
                    "A senha deve ter pelo menos {} caracteres",
                    TAMANHO_MINIMO_SENHA
                ))));
                return;
            }
            if *senha != *confirmacao {
                mensagem.set(Some(Err("As senhas não conferem".to_string())));
                return;
            }
            let senha = (*senha).clone();
            let token = token.clone();
            let mensagem = mensagem.clone();
            let enviando = enviando.clone();
            wasm_bindgen_futures::spawn_local(async move {
                enviando.set(true);
                let resultado = if empresa {
                    auth_service::definir_senha_empresa(&token, &senha).await
                } else {
                    auth_service::confirmar_redefinicao_senha(&token, &senha).await
                };
                enviando.set(false);
                mensagem.set(Some(resultado));
            });
        })
    };

    let ir_login = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::Login))
    };

    let concluido = matches!(&*mensagem, Some(Ok(_)));

    html! {
        <div class="redefine-senha-view">
            <h2>{ if props.empresa { "Definir Senha da Empresa" } else { "Redefinir Senha" } }</h2>

            if concluido {
                if let Some(Ok(m)) = &*mensagem {
                    <p class="form-sucesso">{ m }</p>
                }
                <button class="primary" onclick={ir_login.clone()}>{"Ir para o login"}</button>
            } else {
                <form onsubmit={onsubmit}>
                    <div class="form-row">
                        <label>{"Nova senha"}</label>
                        <input type="password" value={(*senha).clone()}
                            oninput={oninput_senha} required=true />
                    </div>
                    <div class="form-row">
                        <label>{"Confirmar senha"}</label>
                        <input type="password" value={(*confirmacao).clone()}
                            oninput={oninput_confirmacao} required=true />
                    </div>

                    if let Some(Err(e)) = &*mensagem {
                        <p class="form-erro">{ e }</p>
                    }

                    <button type="submit" class="primary" disabled={*enviando}>
                        { if *enviando { "Salvando..." } else { "Salvar senha" } }
                    </button>
                </form>
                <button class="link" onclick={ir_login}>{"Voltar para o login"}</button>
            }
        </div>
    }
}
