// ============================================================================
// USE SESSION HOOK - orquestração da sessão no navegador
// ============================================================================
// A lógica de transição vive em session::SessionState (pura); este hook
// liga a máquina de estados ao localStorage, ao relógio, à busca de perfil
// e ao timer de expiração.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::perfil_service;
use crate::session::{
    decode_claims, Bootstrap, BrowserClock, BrowserTokenStore, SessionError, SessionState,
};

#[derive(Clone)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionState>,
    /// Define (login) ou limpa o token; dispara a busca de perfil quando preciso
    pub definir_token: Callback<Option<String>>,
    pub logout: Callback<()>,
}

impl PartialEq for UseSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    // Fonte da verdade viva; o use_state é só o espelho que re-renderiza.
    // Handlers assíncronos (busca de perfil, timer) leem daqui para não
    // operarem sobre um snapshot antigo do render em que foram criados.
    let estado_ref = use_mut_ref(SessionState::new);
    let state = use_state(SessionState::new);
    let interval_ref = use_mut_ref(|| None::<Interval>);

    // Checagem inicial do token persistido, uma única vez
    {
        let estado_ref = estado_ref.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let resultado = estado_ref
                .borrow_mut()
                .bootstrap(&BrowserTokenStore, &BrowserClock);
            sincronizar(&estado_ref, &state);
            if let Bootstrap::BuscarPerfil(token) = resultado {
                disparar_busca_perfil(estado_ref, state, token);
            }
            // Deslogado/RedirecionarLogin: o layout observa a sessão vazia
            // e leva para o login
            || ()
        });
    }

    let definir_token = {
        let estado_ref = estado_ref.clone();
        let state = state.clone();
        Callback::from(move |token: Option<String>| {
            let buscar = estado_ref
                .borrow_mut()
                .definir_token(&BrowserTokenStore, token);
            sincronizar(&estado_ref, &state);
            if let Some(token) = buscar {
                disparar_busca_perfil(estado_ref.clone(), state.clone(), token);
            }
        })
    };

    let logout = {
        let estado_ref = estado_ref.clone();
        let state = state.clone();
        let interval_ref = interval_ref.clone();
        Callback::from(move |_| {
            // Cancela o timer de expiração junto com a sessão
            *interval_ref.borrow_mut() = None;
            estado_ref.borrow_mut().logout(&BrowserTokenStore);
            sincronizar(&estado_ref, &state);
            log::info!("👋 Sessão encerrada");
        })
    };

    // Timer de expiração: recriado sempre que o token muda, cancelado
    // quando não há token ou o hook é desmontado
    {
        let estado_ref = estado_ref.clone();
        let state_timer = state.clone();
        let interval_ref = interval_ref.clone();
        let token_atual = (*state).token().map(|t| t.to_string());
        use_effect_with(token_atual, move |token| {
            *interval_ref.borrow_mut() = None;
            if token.is_some() {
                let estado_ref = estado_ref.clone();
                let state_timer = state_timer.clone();
                *interval_ref.borrow_mut() =
                    Some(Interval::new(CONFIG.session_check_interval_ms, move || {
                        let expirou = estado_ref
                            .borrow_mut()
                            .verificar_expiracao(&BrowserTokenStore, &BrowserClock);
                        // Token ainda válido: nenhum set, nenhum re-render
                        if expirou {
                            sincronizar(&estado_ref, &state_timer);
                        }
                    }));
            }
            let interval_ref = interval_ref.clone();
            move || {
                *interval_ref.borrow_mut() = None;
            }
        });
    }

    UseSessionHandle {
        state,
        definir_token,
        logout,
    }
}

fn sincronizar(estado_ref: &Rc<RefCell<SessionState>>, state: &UseStateHandle<SessionState>) {
    state.set(estado_ref.borrow().clone());
}

/// Busca o perfil para o token dado e aplica o resultado na sessão.
/// Qualquer falha derruba a sessão (fail-closed); respostas que chegarem
/// depois de o token mudar são descartadas pela própria máquina de estados.
fn disparar_busca_perfil(
    estado_ref: Rc<RefCell<SessionState>>,
    state: UseStateHandle<SessionState>,
    token: String,
) {
    estado_ref.borrow_mut().iniciar_busca_perfil();
    sincronizar(&estado_ref, &state);

    wasm_bindgen_futures::spawn_local(async move {
        let claims = match decode_claims(&token) {
            Ok(claims) => claims,
            Err(e) => {
                log::error!("❌ Token inválido na busca de perfil: {}", e);
                estado_ref
                    .borrow_mut()
                    .falhar_busca_perfil(&BrowserTokenStore, &token);
                sincronizar(&estado_ref, &state);
                return;
            }
        };

        match perfil_service::buscar_perfil(&token, &claims).await {
            Ok(perfil) => {
                log::info!("✅ Perfil carregado: {}", perfil.name);
                estado_ref.borrow_mut().concluir_busca_perfil(&token, perfil);
                sincronizar(&estado_ref, &state);
            }
            Err(e) => {
                log::error!("❌ {}, encerrando sessão", SessionError::BuscaPerfil(e));
                estado_ref
                    .borrow_mut()
                    .falhar_busca_perfil(&BrowserTokenStore, &token);
                sincronizar(&estado_ref, &state);
            }
        }
    });
}
