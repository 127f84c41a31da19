use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{AddressDialog, Snackbar, TipoMensagem, TitleForm, TwoColumnsForm};
use crate::hooks::use_session_context;
use crate::models::{Empresa, Endereco};
use crate::routes::Route;
use crate::services::empresa_service;

#[derive(Properties, PartialEq)]
pub struct CadastroEmpresaProps {
    #[prop_or_default]
    pub id: Option<String>,
}

/// Formulário de cadastro/edição de empresa. No cadastro a conta nasce
/// inativa e o backend envia o e-mail de definição de senha.
#[function_component(CadastroEmpresaView)]
pub fn cadastro_empresa_view(props: &CadastroEmpresaProps) -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());

    let empresa = use_state(Empresa::default);
    let dialogo_endereco = use_state(|| None::<Option<usize>>);
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let salvando = use_state(|| false);

    {
        let empresa = empresa.clone();
        let mensagem = mensagem.clone();
        let deps = (props.id.clone(), token.clone());
        use_effect_with(deps, move |(id, token)| {
            if let (Some(id), Some(token)) = (id.clone(), token.clone()) {
                wasm_bindgen_futures::spawn_local(async move {
                    match empresa_service::obter(&token, &id).await {
                        Ok(carregada) => empresa.set(carregada),
                        Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                    }
                });
            }
            || ()
        });
    }

    let editar_campo = |campo: fn(&mut Empresa, String)| {
        let empresa = empresa.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut nova = (*empresa).clone();
            campo(&mut nova, input.value());
            empresa.set(nova);
        })
    };

    let abrir_dialogo = {
        let dialogo_endereco = dialogo_endereco.clone();
        Callback::from(move |indice: Option<usize>| dialogo_endereco.set(Some(indice)))
    };

    let salvar_endereco = {
        let empresa = empresa.clone();
        let dialogo_endereco = dialogo_endereco.clone();
        Callback::from(move |endereco: Endereco| {
            let mut nova = (*empresa).clone();
            match *dialogo_endereco {
                Some(Some(indice)) if indice < nova.address.len() => {
                    nova.address[indice] = endereco
                }
                _ => nova.address.push(endereco),
            }
            empresa.set(nova);
            dialogo_endereco.set(None);
        })
    };

    let remover_endereco = {
        let empresa = empresa.clone();
        Callback::from(move |indice: usize| {
            let mut nova = (*empresa).clone();
            if indice < nova.address.len() {
                nova.address.remove(indice);
            }
            empresa.set(nova);
        })
    };

    let onsubmit = {
        let empresa = empresa.clone();
        let mensagem = mensagem.clone();
        let salvando = salvando.clone();
        let token = token.clone();
        let id = props.id.clone();
        let navegar = navegar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *salvando {
                return;
            }
            let Some(token) = token.clone() else { return };
            let dados = (*empresa).clone();
            let id = id.clone();
            let mensagem = mensagem.clone();
            let salvando = salvando.clone();
            let navegar = navegar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                salvando.set(true);
                let resultado = match &id {
                    Some(id) => empresa_service::editar(&token, id, &dados).await,
                    None => empresa_service::registrar(&token, &dados).await,
                };
                salvando.set(false);
                match resultado {
                    Ok(_) => navegar.emit(Route::Empresas),
                    Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                }
            });
        })
    };

    let voltar = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::Empresas))
    };

    let titulo = if props.id.is_some() { "Editar Empresa" } else { "Nova Empresa" };

    html! {
        <div class="cadastro-empresa-view">
            <TitleForm titulo={titulo} />

            <form onsubmit={onsubmit}>
                <TwoColumnsForm>
                    <div class="form-row">
                        <label>{"Nome"}</label>
                        <input value={empresa.name.clone()} required=true
                            oninput={editar_campo(|e, v| e.name = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"E-mail"}</label>
                        <input type="email" value={empresa.email.clone()} required=true
                            oninput={editar_campo(|e, v| e.email = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"CNPJ"}</label>
                        <input value={empresa.cnpj.clone()} required=true
                            oninput={editar_campo(|e, v| e.cnpj = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Telefone"}</label>
                        <input value={empresa.phone.clone().unwrap_or_default()}
                            oninput={editar_campo(|e, v| {
                                e.phone = if v.is_empty() { None } else { Some(v) }
                            })} />
                    </div>
                </TwoColumnsForm>

                <section class="enderecos">
                    <h3>{"Endereços"}</h3>
                    if empresa.address.is_empty() {
                        <p class="listagem-vazia">{"Nenhum endereço cadastrado"}</p>
                    }
                    <ul>
                        { for empresa.address.iter().enumerate().map(|(indice, endereco)| {
                            let abrir = abrir_dialogo.clone();
                            let remover = remover_endereco.clone();
                            html! {
                                <li key={endereco.id.clone()}>
                                    <span>{ endereco.to_string() }</span>
                                    <button type="button" onclick={move |_| abrir.emit(Some(indice))}>{"✏️"}</button>
                                    <button type="button" onclick={move |_| remover.emit(indice)}>{"🗑️"}</button>
                                </li>
                            }
                        }) }
                    </ul>
                    <button type="button" onclick={{
                        let abrir = abrir_dialogo.clone();
                        Callback::from(move |_| abrir.emit(None))
                    }}>{"➕ Adicionar endereço"}</button>
                </section>

                if props.id.is_none() {
                    <p class="form-observacao">
                        {"A empresa receberá um e-mail para definir a própria senha."}
                    </p>
                }

                <div class="form-acoes">
                    <button type="button" onclick={voltar}>{"Cancelar"}</button>
                    <button type="submit" class="primary" disabled={*salvando}>
                        { if *salvando { "Salvando..." } else { "Salvar" } }
                    </button>
                </div>
            </form>

            if let Some(indice) = *dialogo_endereco {
                <AddressDialog
                    endereco={indice.and_then(|i| empresa.address.get(i).cloned())}
                    on_salvar={salvar_endereco}
                    on_fechar={{
                        let dialogo_endereco = dialogo_endereco.clone();
                        Callback::from(move |_| dialogo_endereco.set(None))
                    }} />
            }

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
