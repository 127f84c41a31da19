use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::utils::{ROLE_ADMIN, ROLE_EDITOR, ROLE_EMPRESA};

/// Menu do usuário no cabeçalho: nome, papel e botão de sair.
/// Enquanto o perfil ainda carrega, mostra só a identidade do token.
#[function_component(UserPopover)]
pub fn user_popover() -> Html {
    let session = use_session_context();
    let aberto = use_state(|| false);

    let alternar = {
        let aberto = aberto.clone();
        Callback::from(move |_| aberto.set(!*aberto))
    };

    let sair = {
        let logout = session.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    let nome = session
        .state
        .perfil()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Carregando...".to_string());
    let email = session
        .state
        .perfil()
        .map(|p| p.email.clone())
        .unwrap_or_default();

    let papel = match session.state.claims().map(|c| c.role) {
        Some(r) if r == ROLE_ADMIN => "Administrador",
        Some(r) if r == ROLE_EDITOR => "Editor",
        Some(r) if r == ROLE_EMPRESA => "Empresa",
        Some(_) => "Trabalhador",
        None => "",
    };

    html! {
        <div class="user-popover">
            <button class="user-popover-trigger" onclick={alternar}>
                <span class="user-avatar">{"👤"}</span>
                <span>{ &nome }</span>
            </button>
            if *aberto {
                <div class="user-popover-menu">
                    <p class="user-popover-nome">{ &nome }</p>
                    if !email.is_empty() {
                        <p class="user-popover-email">{ &email }</p>
                    }
                    <p class="user-popover-papel">{ papel }</p>
                    <hr />
                    <button class="user-popover-sair" onclick={sair}>{"🚪 Sair"}</button>
                </div>
            }
        </div>
    }
}
