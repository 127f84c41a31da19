// ============================================================================
// SESSION CONTEXT - compartilha a sessão entre componentes
// ============================================================================
// Context API do Yew: o provider envolve a aplicação e qualquer tela
// alcança a sessão com use_session_context().
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Provider que cria a sessão uma única vez e a publica no contexto
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[hook]
pub fn use_session_context() -> UseSessionHandle {
    use_context::<UseSessionHandle>()
        .expect("use_session_context deve ser usado dentro de um SessionContextProvider")
}
