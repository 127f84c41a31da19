// ============================================================================
// APP - raiz da aplicação: sessão, rota atual e troca de telas
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::{use_session_context, SessionContextProvider};
use crate::layouts::{MainLayout, OfflineLayout};
use crate::routes::{caminho_atual, empurrar_historico, Route};
use crate::views::{
    AgendamentoEmpresaView, AgendamentosEmpresaView, CadastroEmpresaView, CadastroUsuarioView,
    DashboardEmpresaView, DashboardTrabalhadorView, EmpresasView, LoginView, MainDashboardView,
    RecuperacaoSenhaView, RedefineSenhaView, UsuariosView,
};

/// Contexto de navegação: emitir uma rota troca a tela e empilha o
/// caminho na History API
#[derive(Clone, PartialEq)]
pub struct Navegacao(pub Callback<Route>);

#[hook]
pub fn use_navegacao() -> Callback<Route> {
    use_context::<Navegacao>()
        .expect("use_navegacao deve ser usado dentro do App")
        .0
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <AppRouter />
        </SessionContextProvider>
    }
}

#[function_component(AppRouter)]
fn app_router() -> Html {
    let session = use_session_context();
    // Deep-link: a rota inicial vem do caminho atual do navegador
    let route = use_state(|| Route::parse(&caminho_atual()));

    let navegar = {
        let route = route.clone();
        Callback::from(move |nova: Route| {
            empurrar_historico(&nova);
            route.set(nova);
        })
    };

    // Botões voltar/avançar do navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::<dyn Fn()>::new(move || {
                route.set(Route::parse(&caminho_atual()));
            });
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.add_event_listener_with_callback(
                    "popstate",
                    closure.as_ref().unchecked_ref(),
                ) {
                    log::error!("❌ Erro registrando popstate: {:?}", e);
                }
            }
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Checagem inicial do token ainda em andamento: não renderiza nada
    // para a tela certa aparecer sem piscar a errada
    if session.state.carregando() {
        return html! {};
    }

    let conteudo = match (*route).clone() {
        Route::Login => html! { <LoginView /> },
        Route::RecuperacaoSenha => html! { <RecuperacaoSenhaView /> },
        Route::RedefineSenha { token, empresa } => html! {
            <RedefineSenhaView token={token} empresa={empresa} />
        },
        // Telas internas: o MainLayout redireciona para o login quando
        // não há sessão
        Route::Dashboard => html! { <MainDashboardView /> },
        Route::Usuarios { busca } => html! { <UsuariosView busca={busca} /> },
        Route::CadastroUsuario { id } => html! { <CadastroUsuarioView id={id} /> },
        Route::Empresas => html! { <EmpresasView /> },
        Route::CadastroEmpresa { id } => html! { <CadastroEmpresaView id={id} /> },
        Route::AgendamentoEmpresa { company_id } => html! {
            <AgendamentoEmpresaView company_id={company_id} />
        },
        Route::AgendamentosEmpresa { company_id, nome } => html! {
            <AgendamentosEmpresaView company_id={company_id} nome={nome} />
        },
        Route::DashboardEmpresa => html! { <DashboardEmpresaView /> },
        Route::DashboardTrabalhador => html! { <DashboardTrabalhadorView /> },
    };

    let externa = matches!(
        *route,
        Route::Login | Route::RecuperacaoSenha | Route::RedefineSenha { .. }
    );

    html! {
        <ContextProvider<Navegacao> context={Navegacao(navegar)}>
            if externa {
                <OfflineLayout>{ conteudo }</OfflineLayout>
            } else {
                <MainLayout>{ conteudo }</MainLayout>
            }
        </ContextProvider<Navegacao>>
    }
}
