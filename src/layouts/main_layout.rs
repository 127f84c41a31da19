use yew::prelude::*;

use crate::app::use_navegacao;
use crate::components::UserPopover;
use crate::hooks::use_session_context;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Casca das telas internas: cabeçalho com menu por papel e a guarda de
/// sessão. Sem sessão, redireciona para o login; com a checagem inicial
/// ainda em andamento, não renderiza nada.
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session_context();
    let navegar = use_navegacao();

    {
        let autenticado = session.state.is_authenticated();
        let carregando = session.state.carregando();
        let navegar = navegar.clone();
        use_effect_with((autenticado, carregando), move |(autenticado, carregando)| {
            if !carregando && !autenticado {
                navegar.emit(Route::Login);
            }
            || ()
        });
    }

    if session.state.carregando() || !session.state.is_authenticated() {
        return html! {};
    }

    let is_admin = session.state.is_admin();
    let is_empresa = session.state.is_empresa();
    let role = session.state.claims().map(|c| c.role);

    let ir = |rota: Route| {
        let navegar = navegar.clone();
        Callback::from(move |_| navegar.emit(rota.clone()))
    };

    html! {
        <div class="main-layout">
            <header class="main-header">
                <div class="main-header-brand" onclick={ir(rota_inicial(is_empresa, role))}>
                    <span>{"🩺"}</span>
                    <h1>{"Agenda de Exames"}</h1>
                </div>

                <nav class="main-nav">
                    if is_admin {
                        <button onclick={ir(Route::Dashboard)}>{"📊 Dashboard"}</button>
                        <button onclick={ir(Route::Usuarios { busca: None })}>{"👥 Usuários"}</button>
                        <button onclick={ir(Route::Empresas)}>{"🏢 Empresas"}</button>
                    } else if is_empresa {
                        <button onclick={ir(Route::DashboardEmpresa)}>{"📊 Minha Empresa"}</button>
                    } else {
                        <button onclick={ir(Route::DashboardTrabalhador)}>{"📋 Meus Exames"}</button>
                    }
                </nav>

                <UserPopover />
            </header>

            <main class="main-content">
                { props.children.clone() }
            </main>
        </div>
    }
}

fn rota_inicial(is_empresa: bool, role: Option<i32>) -> Route {
    if is_empresa {
        Route::DashboardEmpresa
    } else {
        match role {
            Some(0) | Some(1) => Route::Dashboard,
            _ => Route::DashboardTrabalhador,
        }
    }
}
