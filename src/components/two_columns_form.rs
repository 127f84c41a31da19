use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TwoColumnsFormProps {
    pub children: Children,
}

/// Grade de duas colunas dos formulários de cadastro
#[function_component(TwoColumnsForm)]
pub fn two_columns_form(props: &TwoColumnsFormProps) -> Html {
    html! {
        <div class="two-columns-form">
            { props.children.clone() }
        </div>
    }
}
