use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::{
    BuscaPorCnpj, PaginationControls, SearchBar, Snackbar, TipoMensagem, TitleForm,
};
use crate::hooks::{use_busca_paginada, use_session_context};
use crate::routes::Route;
use crate::services::empresa_service;

/// Listagem paginada de empresas, com atalhos para agendar exames,
/// ver agendamentos e reenviar o e-mail de confirmação; alternável para
/// a busca exata por CNPJ
#[function_component(EmpresasView)]
pub fn empresas_view() -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();
    let token = session.state.token().map(|t| t.to_string());
    let mensagem = use_state(|| None::<(String, TipoMensagem)>);
    let busca_por_cnpj = use_state(|| false);

    let listagem = use_busca_paginada(token.clone(), |token, critery, pagina, limite| async move {
        empresa_service::listar(&token, &critery, pagina, limite).await
    });

    let nova = {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(Route::CadastroEmpresa { id: None }))
    };

    let editar = {
        let navegar = navegar.clone();
        Callback::from(move |id: String| navegar.emit(Route::CadastroEmpresa { id: Some(id) }))
    };

    let agendar = {
        let navegar = navegar.clone();
        Callback::from(move |company_id: String| {
            navegar.emit(Route::AgendamentoEmpresa { company_id })
        })
    };

    let ver_agendamentos = {
        let navegar = navegar.clone();
        Callback::from(move |(company_id, nome): (String, String)| {
            navegar.emit(Route::AgendamentosEmpresa {
                company_id,
                nome: Some(nome),
            })
        })
    };

    let reenviar_email = {
        let token = token.clone();
        let mensagem = mensagem.clone();
        Callback::from(move |id: String| {
            let Some(token) = token.clone() else { return };
            let mensagem = mensagem.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match empresa_service::reenviar_email(&token, &id).await {
                    Ok(m) => mensagem.set(Some((m, TipoMensagem::Sucesso))),
                    Err(e) => mensagem.set(Some((e, TipoMensagem::Erro))),
                }
            });
        })
    };

    let deletar = {
        let token = token.clone();
        let apos_exclusao = listagem.apos_exclusao.clone();
        let itens = listagem.itens.clone();
        let mensagem = mensagem.clone();
        Callback::from(move |id: String| {
            let confirmado = web_sys::window()
                .and_then(|w| w.confirm_with_message("Deletar esta empresa?").ok())
                .unwrap_or(false);
            if !confirmado {
                return;
            }
            let Some(token) = token.clone() else { return };
            let apos_exclusao = apos_exclusao.clone();
            let restantes = itens.iter().filter(|e| e.id != id).count();
            let mensagem = mensagem.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match empresa_service::deletar(&token, &id).await {
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
        let busca_por_cnpj = busca_por_cnpj.clone();
        Callback::from(move |_| busca_por_cnpj.set(!*busca_por_cnpj))
    };

    if *busca_por_cnpj {
        return html! {
            <div class="empresas-view">
                <label class="alternar-busca">
                    <input type="checkbox" checked=true onchange={alternar_busca} />
                    {"Pesquisar por: CNPJ"}
                </label>
                <BuscaPorCnpj />
            </div>
        };
    }

    html! {
        <div class="empresas-view">
            <label class="alternar-busca">
                <input type="checkbox" checked=false onchange={alternar_busca} />
                {"Pesquisar por: Nome"}
            </label>

            <TitleForm titulo="Empresas" />

            <div class="listagem-acoes">
                <SearchBar on_buscar={listagem.buscar.clone()} />
                <button class="primary" onclick={nova}>{"➕ Nova Empresa"}</button>
            </div>

            if let Some(e) = (*listagem.erro).clone() {
                <p class="form-erro">{ e }</p>
            }

            if *listagem.carregando {
                <p class="carregando">{"Carregando..."}</p>
            } else if listagem.itens.is_empty() {
                <p class="listagem-vazia">{"Nenhuma empresa encontrada"}</p>
            } else {
                <table class="listagem-tabela">
                    <thead>
                        <tr>
                            <th>{"Nome"}</th>
                            <th>{"E-mail"}</th>
                            <th>{"CNPJ"}</th>
                            <th>{"Ativa"}</th>
                            <th>{"Ações"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for listagem.itens.iter().map(|empresa| {
                            let editar = editar.clone();
                            let agendar = agendar.clone();
                            let ver = ver_agendamentos.clone();
                            let reenviar = reenviar_email.clone();
                            let deletar = deletar.clone();
                            let id_editar = empresa.id.clone();
                            let id_agendar = empresa.id.clone();
                            let par_ver = (empresa.id.clone(), empresa.name.clone());
                            let id_reenviar = empresa.id.clone();
                            let id_deletar = empresa.id.clone();
                            let ativa = empresa.ativo;
                            html! {
                                <tr key={empresa.id.clone()}>
                                    <td>{ &empresa.name }</td>
                                    <td>{ &empresa.email }</td>
                                    <td>{ &empresa.cnpj }</td>
                                    <td>{ if ativa { "✅" } else { "—" } }</td>
                                    <td class="listagem-botoes">
                                        <button title="Agendar exames"
                                            onclick={move |_| agendar.emit(id_agendar.clone())}>{"📅"}</button>
                                        <button title="Ver agendamentos"
                                            onclick={move |_| ver.emit(par_ver.clone())}>{"📋"}</button>
                                        if !ativa {
                                            <button title="Reenviar e-mail de confirmação"
                                                onclick={move |_| reenviar.emit(id_reenviar.clone())}>{"📧"}</button>
                                        }
                                        <button title="Editar"
                                            onclick={move |_| editar.emit(id_editar.clone())}>{"✏️"}</button>
                                        <button title="Deletar"
                                            onclick={move |_| deletar.emit(id_deletar.clone())}>{"🗑️"}</button>
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
