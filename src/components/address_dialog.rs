use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Endereco;

#[derive(Properties, PartialEq)]
pub struct AddressDialogProps {
    /// Endereço em edição; None abre o diálogo vazio para um novo
    #[prop_or_default]
    pub endereco: Option<Endereco>,
    pub on_salvar: Callback<Endereco>,
    pub on_fechar: Callback<()>,
}

/// Diálogo de cadastro/edição de endereço dos formulários de usuário
/// e empresa. Valida os campos obrigatórios antes de emitir.
#[function_component(AddressDialog)]
pub fn address_dialog(props: &AddressDialogProps) -> Html {
    let endereco = use_state(|| props.endereco.clone().unwrap_or_else(Endereco::novo));
    let erro = use_state(|| None::<String>);

    let editar_campo = |campo: fn(&mut Endereco, String)| {
        let endereco = endereco.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut novo = (*endereco).clone();
            campo(&mut novo, input.value());
            endereco.set(novo);
        })
    };

    let salvar = {
        let endereco = endereco.clone();
        let erro = erro.clone();
        let on_salvar = props.on_salvar.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let atual = (*endereco).clone();
            if atual.logradouro.trim().is_empty()
                || atual.cidade.trim().is_empty()
                || atual.estado.trim().is_empty()
            {
                erro.set(Some("Logradouro, cidade e estado são obrigatórios".to_string()));
                return;
            }
            on_salvar.emit(atual);
        })
    };

    let fechar = {
        let on_fechar = props.on_fechar.clone();
        Callback::from(move |_: MouseEvent| on_fechar.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal address-dialog">
                <h3>{ if props.endereco.is_some() { "Editar Endereço" } else { "Novo Endereço" } }</h3>
                <form onsubmit={salvar}>
                    <div class="form-row">
                        <label>{"CEP"}</label>
                        <input value={endereco.cep.clone()}
                            oninput={editar_campo(|e, v| e.cep = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Logradouro"}</label>
                        <input value={endereco.logradouro.clone()}
                            oninput={editar_campo(|e, v| e.logradouro = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Número"}</label>
                        <input value={endereco.numero.clone()}
                            oninput={editar_campo(|e, v| e.numero = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Complemento"}</label>
                        <input value={endereco.complemento.clone()}
                            oninput={editar_campo(|e, v| e.complemento = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Bairro"}</label>
                        <input value={endereco.bairro.clone()}
                            oninput={editar_campo(|e, v| e.bairro = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Cidade"}</label>
                        <input value={endereco.cidade.clone()}
                            oninput={editar_campo(|e, v| e.cidade = v)} />
                    </div>
                    <div class="form-row">
                        <label>{"Estado"}</label>
                        <input value={endereco.estado.clone()} maxlength="2"
                            oninput={editar_campo(|e, v| e.estado = v.to_uppercase())} />
                    </div>

                    if let Some(mensagem) = (*erro).clone() {
                        <p class="form-erro">{ mensagem }</p>
                    }

                    <div class="modal-actions">
                        <button type="button" onclick={fechar}>{"Cancelar"}</button>
                        <button type="submit" class="primary">{"Salvar"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
