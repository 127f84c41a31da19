use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{AddressDialog, Snackbar, TipoMensagem, TitleForm, TwoColumnsForm};
use crate::hooks::use_session_context;
use crate::models::{Endereco, Usuario};
use crate::routes::Route;
use crate::services::usuario_service;
use crate::utils::{ROLE_ADMIN, ROLE_EDITOR, ROLE_TRABALHADOR, ROLE_TRABALHADOR_EXTERNO};

#[derive(Properties, PartialEq)]
pub struct CadastroUsuarioProps {
    /// Com id edita um usuário existente; sem id cadastra um novo
    #[prop_or_default]
    pub id: Option<String>,
}

/// Formulário de cadastro/edição de usuário, com lista de endereços
/// editada em diálogo próprio
#[function_component(CadastroUsuarioView)]
pub fn cadastro_usuario_view(props: &CadastroUsuarioProps) -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());

    let usuario = use_state(Usuario::default);
    let dialogo_endereco = use_state(|| None::<Option<usize>>);
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let salvando = use_state(|| false);

    // Modo edição: carrega o registro uma vez
    {
        let usuario = usuario.clone();
        let mensagem = mensagem.clone();
        let deps = (props.id.clone(), token.clone());
        use_effect_with(deps, move |(id, token)| {
            if let (Some(id), Some(token)) = (id.clone(), token.clone()) {
                wasm_bindgen_futures::spawn_local(async move {
                    match usuario_service::obter(&token, &id).await {
                        Ok(carregado) => usuario.set(carregado),
                        Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                    }
                });
            }
            || ()
        });
    }

    let editar_campo = |campo: fn(&mut Usuario, String)| {
        let usuario = usuario.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut novo = (*usuario).clone();
            campo(&mut novo, input.value());
            usuario.set(novo);
        })
    };

    let onchange_role = {
        let usuario = usuario.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(role) = select.value().parse::<i32>() {
                let mut novo = (*usuario).clone();
                novo.role = role;
                usuario.set(novo);
            }
        })
    };

    let alternar_ativo = {
        let usuario = usuario.clone();
        Callback::from(move |_| {
            let mut novo = (*usuario).clone();
            novo.ativo = !novo.ativo;
            usuario.set(novo);
        })
    };

    let abrir_dialogo = {
        let dialogo_endereco = dialogo_endereco.clone();
        Callback::from(move |indice: Option<usize>| dialogo_endereco.set(Some(indice)))
    };

    let salvar_endereco = {
        let usuario = usuario.clone();
        let dialogo_endereco = dialogo_endereco.clone();
        Callback::from(move |endereco: Endereco| {
            let mut novo = (*usuario).clone();
            match *dialogo_endereco {
                Some(Some(indice)) if indice < novo.address.len() => {
                    novo.address[indice] = endereco
                }
                _ => novo.address.push(endereco),
            }
            usuario.set(novo);
            dialogo_endereco.set(None);
        })
    };

    let remover_endereco = {
        let usuario = usuario.clone();
        Callback::from(move |indice: usize| {
            let mut novo = (*usuario).clone();
            if indice < novo.address.len() {
                novo.address.remove(indice);
            }
            usuario.set(novo);
        })
    };

    let onsubmit = {
        let usuario = usuario.clone();
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
            let dados = (*usuario).clone();
            let id = id.clone();
            let mensagem = mensagem.clone();
            let salvando = salvando.clone();
            let navegar = navegar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                salvando.set(true);
                let resultado = match &id {
                    Some(id) => usuario_service::editar(&token, id, &dados).await,
                    None => usuario_service::registrar(&token, &dados).await,
                };
                salvando.set(false);
                match resultado {
                    Ok(_) => navegar.emit(Route::Usuarios { busca: None }),
                    // 409 de e-mail/CPF duplicado chega aqui com a
                    // mensagem do backend
                    Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                }
            });
        })
    };

    let voltar = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::Usuarios { busca: None }))
    };

    let titulo = if props.id.is_some() { "Editar Usuário" } else { "Novo Usuário" };

    html! {
        <div class="cadastro-usuario-view">
            <TitleForm titulo={titulo} />

            <form onsubmit={onsubmit}>
                <TwoColumnsForm>
                    <div class="form-row">
                        <label>{"Nome"}</label>
                        <input value={usuario.name.clone()} required=true
                            oninput={editar_campo(|u, v| u.name = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"E-mail"}</label>
                        <input type="email" value={usuario.email.clone()} required=true
                            oninput={editar_campo(|u, v| u.email = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Telefone"}</label>
                        <input value={usuario.phone.clone().unwrap_or_default()}
                            oninput={editar_campo(|u, v| {
                                u.phone = if v.is_empty() { None } else { Some(v) }
                            })} />
                    </div>
                    <div class="form-row">
                        <label>{"CPF"}</label>
                        <input value={usuario.cpf.clone().unwrap_or_default()}
                            oninput={editar_campo(|u, v| {
                                u.cpf = if v.is_empty() { None } else { Some(v) }
                            })} />
                    </div>
                    <div class="form-row">
                        <label>{"Papel"}</label>
                        <select onchange={onchange_role}>
                            <option value={ROLE_ADMIN.to_string()}
                                selected={usuario.role == ROLE_ADMIN}>{"Administrador"}</option>
                            <option value={ROLE_EDITOR.to_string()}
                                selected={usuario.role == ROLE_EDITOR}>{"Editor"}</option>
                            <option value={ROLE_TRABALHADOR.to_string()}
                                selected={usuario.role == ROLE_TRABALHADOR}>{"Trabalhador"}</option>
                            <option value={ROLE_TRABALHADOR_EXTERNO.to_string()}
                                selected={usuario.role == ROLE_TRABALHADOR_EXTERNO}>{"Trabalhador externo"}</option>
                        </select>
                    </div>
                    <label class="form-check">
                        <input type="checkbox" checked={usuario.ativo} onchange={alternar_ativo} />
                        {"Ativo"}
                    </label>
                </TwoColumnsForm>

                <section class="enderecos">
                    <h3>{"Endereços"}</h3>
                    if usuario.address.is_empty() {
                        <p class="listagem-vazia">{"Nenhum endereço cadastrado"}</p>
                    }
                    <ul>
                        { for usuario.address.iter().enumerate().map(|(indice, endereco)| {
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

                <div class="form-acoes">
                    <button type="button" onclick={voltar}>{"Cancelar"}</button>
                    <button type="submit" class="primary" disabled={*salvando}>
                        { if *salvando { "Salvando..." } else { "Salvar" } }
                    </button>
                </div>
            </form>

            if let Some(indice) = *dialogo_endereco {
                <AddressDialog
                    endereco={indice.and_then(|i| usuario.address.get(i).cloned())}
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
