use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::Paginacao;

const LIMITES: [u32; 5] = [5, 10, 25, 50, 100];

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub paginacao: Paginacao,
    pub on_pagina: Callback<u32>,
    pub on_limite: Callback<u32>,
}

/// Controles de página + itens por página usados nas listagens
#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let p = &props.paginacao;

    let anterior = {
        let on_pagina = props.on_pagina.clone();
        let pagina = p.pagina;
        Callback::from(move |_| on_pagina.emit(pagina.saturating_sub(1)))
    };

    let proxima = {
        let on_pagina = props.on_pagina.clone();
        let pagina = p.pagina;
        Callback::from(move |_| on_pagina.emit(pagina + 1))
    };

    let onchange_limite = {
        let on_limite = props.on_limite.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(limite) = select.value().parse::<u32>() {
                on_limite.emit(limite);
            }
        })
    };

    html! {
        <div class="pagination-controls">
            <button onclick={anterior} disabled={p.pagina <= 1}>{"‹ Anterior"}</button>
            <span class="pagination-info">
                { format!("Página {} de {}", p.pagina, p.total_paginas) }
            </span>
            <button onclick={proxima} disabled={p.pagina >= p.total_paginas}>{"Próxima ›"}</button>

            <label class="pagination-limit">
                {"Itens por página:"}
                <select onchange={onchange_limite}>
                    { for LIMITES.iter().map(|limite| html! {
                        <option value={limite.to_string()} selected={*limite == p.limite}>
                            { limite }
                        </option>
                    }) }
                </select>
            </label>
        </div>
    }
}
