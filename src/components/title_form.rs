use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TitleFormProps {
    pub titulo: String,
    #[prop_or_default]
    pub subtitulo: Option<String>,
}

/// Cabeçalho padrão das telas de formulário e listagem
#[function_component(TitleForm)]
pub fn title_form(props: &TitleFormProps) -> Html {
    html! {
        <div class="title-form">
            <h2>{ &props.titulo }</h2>
            if let Some(subtitulo) = &props.subtitulo {
                <p class="title-form-subtitle">{ subtitulo }</p>
            }
        </div>
    }
}
