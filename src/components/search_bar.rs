use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    /// Emitido com o critério digitado ao buscar (Enter ou botão)
    pub on_buscar: Callback<String>,
    #[prop_or("Buscar por nome...".to_string())]
    pub placeholder: String,
    #[prop_or_default]
    pub valor_inicial: String,
}

/// Barra de busca das listagens. A busca só dispara na ação explícita,
/// não a cada tecla.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let critery = use_state(|| props.valor_inicial.clone());

    let oninput = {
        let critery = critery.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            critery.set(input.value());
        })
    };

    let onsubmit = {
        let critery = critery.clone();
        let on_buscar = props.on_buscar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_buscar.emit((*critery).clone());
        })
    };

    let limpar = {
        let critery = critery.clone();
        let on_buscar = props.on_buscar.clone();
        Callback::from(move |_| {
            critery.set(String::new());
            on_buscar.emit(String::new());
        })
    };

    html! {
        <form class="search-bar" onsubmit={onsubmit}>
            <input
                type="text"
                value={(*critery).clone()}
                oninput={oninput}
                placeholder={props.placeholder.clone()}
            />
            if !critery.is_empty() {
                <button type="button" class="search-bar-clear" onclick={limpar}>{"✕"}</button>
            }
            <button type="submit" class="search-bar-button">{"🔍 Buscar"}</button>
        </form>
    }
}
