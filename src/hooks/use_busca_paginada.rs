// ============================================================================
// USE BUSCA PAGINADA - padrão busca + paginação das listagens
// ============================================================================
// As regras (reset de página, clamp, recuo após exclusão) vivem em
// models::Paginacao; o hook liga esse estado ao fetch e aos callbacks
// que as telas de listagem usam.
// ============================================================================

use std::future::Future;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Paginacao;

pub struct UseBuscaPaginadaHandle<T: Clone + 'static> {
    pub itens: UseStateHandle<Vec<T>>,
    pub paginacao: UseStateHandle<Paginacao>,
    pub carregando: UseStateHandle<bool>,
    pub erro: UseStateHandle<Option<String>>,
    /// Nova busca por critério (volta para a página 1)
    pub buscar: Callback<String>,
    pub ir_para_pagina: Callback<u32>,
    pub mudar_limite: Callback<u32>,
    /// Recarrega a página atual (após criar/editar)
    pub recarregar: Callback<()>,
    /// Após uma exclusão: recua uma página se a atual ficou vazia e recarrega
    pub apos_exclusao: Callback<usize>,
}

/// `fetcher` recebe (token, critério, página, limite) e devolve
/// (itens, total de páginas). A listagem refaz o fetch quando qualquer
/// um desses muda; sem token não há fetch.
#[hook]
pub fn use_busca_paginada<T, F, Fut>(
    token: Option<String>,
    fetcher: F,
) -> UseBuscaPaginadaHandle<T>
where
    T: Clone + 'static,
    F: Fn(String, String, u32, u32) -> Fut + 'static,
    Fut: Future<Output = Result<(Vec<T>, u32), String>> + 'static,
{
    let itens = use_state(Vec::<T>::new);
    let paginacao = use_state(|| Paginacao::nova(CONFIG.default_page_limit));
    let carregando = use_state(|| false);
    let erro = use_state(|| None::<String>);
    let versao = use_state(|| 0u32);
    let fetcher = use_mut_ref(move || fetcher);

    {
        let itens = itens.clone();
        let paginacao = paginacao.clone();
        let carregando = carregando.clone();
        let erro = erro.clone();
        let fetcher = fetcher.clone();
        let deps = (
            token,
            paginacao.critery.clone(),
            paginacao.pagina,
            paginacao.limite,
            *versao,
        );
        use_effect_with(deps, move |(token, critery, pagina, limite, _)| {
            if let Some(token) = token.clone() {
                let futuro = (&*fetcher.borrow())(token, critery.clone(), *pagina, *limite);
                carregando.set(true);
                erro.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match futuro.await {
                        Ok((lista, total_paginas)) => {
                            let mut p = (*paginacao).clone();
                            p.aplicar_total(total_paginas);
                            itens.set(lista);
                            paginacao.set(p);
                            carregando.set(false);
                        }
                        Err(e) => {
                            log::error!("❌ Erro na listagem: {}", e);
                            erro.set(Some(e));
                            carregando.set(false);
                        }
                    }
                });
            }
            || ()
        });
    }

    let buscar = {
        let paginacao = paginacao.clone();
        Callback::from(move |critery: String| {
            let mut p = (*paginacao).clone();
            p.nova_busca(critery);
            paginacao.set(p);
        })
    };

    let ir_para_pagina = {
        let paginacao = paginacao.clone();
        Callback::from(move |pagina: u32| {
            let mut p = (*paginacao).clone();
            p.ir_para_pagina(pagina);
            paginacao.set(p);
        })
    };

    let mudar_limite = {
        let paginacao = paginacao.clone();
        Callback::from(move |limite: u32| {
            let mut p = (*paginacao).clone();
            p.mudar_limite(limite);
            paginacao.set(p);
        })
    };

    let recarregar = {
        let versao = versao.clone();
        Callback::from(move |_| versao.set(versao.wrapping_add(1)))
    };

    let apos_exclusao = {
        let paginacao = paginacao.clone();
        let versao = versao.clone();
        Callback::from(move |itens_restantes: usize| {
            let mut p = (*paginacao).clone();
            p.recuar_se_vazia(itens_restantes);
            paginacao.set(p);
            versao.set(versao.wrapping_add(1));
        })
    };

    UseBuscaPaginadaHandle {
        itens,
        paginacao,
        carregando,
        erro,
        buscar,
        ir_para_pagina,
        mudar_limite,
        recarregar,
        apos_exclusao,
    }
}
