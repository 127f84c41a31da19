use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{
    BuscaPorCpf, PaginationControls, SearchBar, Snackbar, TipoMensagem, TitleForm,
};
use crate::hooks::{use_busca_paginada, use_session_context};
use crate::routes::Route;
use crate::services::usuario_service;
use crate::utils::nome_papel;

#[derive(Properties, PartialEq)]
pub struct UsuariosProps {
    /// Critério inicial vindo da URL (deep-link de busca)
    #[prop_or_default]
    pub busca: Option<String>,
}

/// Listagem paginada de usuários com busca por nome, alternável para a
/// busca exata por CPF
#[function_component(UsuariosView)]
pub fn usuarios_view(props: &UsuariosProps) -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let busca_por_cpf = use_state(|| false);

    let listagem = use_busca_paginada(token.clone(), |token, critery, pagina, limite| async move {
        usuario_service::listar(&token, &critery, pagina, limite).await
    });

    // Busca vinda da URL aplicada uma única vez
    {
        let buscar = listagem.buscar.clone();
        let busca = props.busca.clone();
        use_effect_with(busca, move |busca| {
            if let Some(critery) = busca.clone() {
                buscar.emit(critery);
            }
            || ()
        });
    }

    let novo = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::CadastroUsuario { id: None }))
    };

    let editar = {
        let navegar = navegar.clone();
        Callback::from(move |id: String| navegar.emit(Route::CadastroUsuario { id: Some(id) }))
    };

    let deletar = {
        let token = token.clone();
        let apos_exclusao = listagem.apos_exclusao.clone();
        let itens = listagem.itens.clone();
        let mensagem = mensagem.clone();
        Callback::from(move |id: String| {
            let confirmado = web_sys::window()
                .and_then(|w| w.confirm_with_message("Deletar este usuário?").ok())
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let Some(token) = token.clone() else { return };
            let apos_exclusao = apos_exclusao.clone();
            let restantes = itens.iter().filter(|u| u.id != id).count();
            let mensagem = mensagem.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match usuario_service::deletar(&token, &id).await {
                    Ok(m) => {
                        mensagem.set(Some((m, TipoMensagem::Sucesso)));
                        apos_exclusao.emit(restantes);
                    }
                    Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                }
            });
        })
    };

    let alternar_busca = {
        let busca_por_cpf = busca_por_cpf.clone();
        Callback::from(move |_| busca_por_cpf.set(!*busca_por_cpf))
    };

    if *busca_por_cpf {
        return html! {
            <div class="usuarios-view">
                <label class="alternar-busca">
                    <input type="checkbox" checked=true onchange={alternar_busca} />
                    {"Pesquisar por: CPF"}
                </label>
                <BuscaPorCpf />
            </div>
        };
    }

    html! {
        <div class="usuarios-view">
            <label class="alternar-busca">
                <input type="checkbox" checked=false onchange={alternar_busca} />
                {"Pesquisar por: Nome"}
            </label>

            <TitleForm titulo="Usuários" />

            <div class="listagem-acoes">
                <SearchBar on_buscar={listagem.buscar.clone()}
                    valor_inicial={props.busca.clone().unwrap_or_default()} />
                <button class="primary" onclick={novo}>{"➕ Novo Usuário"}</button>
            </div>

            if let Some(e) = (*listagem.erro).clone() {
                <p class="form-erro">{ e }</p>
            }

            if *listagem.carregando {
                <p class="carregando">{"Carregando..."}</p>
            } else if listagem.itens.is_empty() {
                <p class="listagem-vazia">{"Nenhum usuário encontrado"}</p>
            } else {
                <table class="listagem-tabela">
                    <thead>
                        <tr>
                            <th>{"Nome"}</th>
                            <th>{"E-mail"}</th>
                            <th>{"CPF"}</th>
                            <th>{"Papel"}</th>
                            <th>{"Ativo"}</th>
                            <th>{"Ações"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for listagem.itens.iter().map(|usuario| {
                            let id = usuario.id.clone();
                            let editar = editar.clone();
                            let deletar = deletar.clone();
                            let id_deletar = id.clone();
                            html! {
                                <tr key={usuario.id.clone()}>
                                    <td>{ &usuario.name }</td>
                                    <td>{ &usuario.email }</td>
                                    <td>{ usuario.cpf.clone().unwrap_or_default() }</td>
                                    <td>{ nome_papel(usuario.role) }</td>
                                    <td>{ if usuario.ativo { "✅" } else { "—" } }</td>
                                    <td class="listagem-botoes">
                                        <button onclick={move |_| editar.emit(id.clone())}>{"✏️"}</button>
                                        <button onclick={move |_| deletar.emit(id_deletar.clone())}>{"🗑️"}</button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>

                <PaginationControls
                    paginacao={(*listagem.paginacao).clone()}
                    on_pagina={listagem.ir_para_pagina.clone()}
                    on_limite={listagem.mudar_limite.clone()} />
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
