use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum TipoMensagem {
    Sucesso,
    Erro,
}

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub mensagem: String,
    pub tipo: TipoMensagem,
    pub on_fechar: Callback<()>,
}

/// Aviso flutuante de sucesso/erro no rodapé da tela
#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    let (icone, classe) = match props.tipo {
        TipoMensagem::Sucesso => ("✅", "snackbar snackbar-sucesso"),
        TipoMensagem::Erro => ("❌", "snackbar snackbar-erro"),
    };

    let onclick = {
        let on_fechar = props.on_fechar.clone();
        Callback::from(move |_| on_fechar.emit(()))
    };

    html! {
        <div class={classe}>
            <span>{ icone }</span>
            <span class="snackbar-texto">{ &props.mensagem }</span>
            <button class="snackbar-fechar" onclick={onclick}>{"✕"}</button>
        </div>
    }
}
