use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OfflineLayoutProps {
    pub children: Children,
}

/// Casca das telas sem sessão (login e fluxos de senha): cartão centrado
#[function_component(OfflineLayout)]
pub fn offline_layout(props: &OfflineLayoutProps) -> Html {
    html! {
        <div class="offline-layout">
            <div class="offline-card">
                <div class="offline-brand">
                    <span class="offline-logo">{"🩺"}</span>
                    <h1>{"Agenda de Exames"}</h1>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}
