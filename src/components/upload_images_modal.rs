use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::services::imagem_service;

#[derive(Properties, PartialEq)]
pub struct UploadImagesModalProps {
    pub exam_id: String,
    pub token: String,
    pub on_fechar: Callback<()>,
    /// Emitido após envio bem-sucedido para a listagem recarregar
    pub on_enviado: Callback<()>,
}

/// Modal de envio das imagens de resultado de um exame
#[function_component(UploadImagesModal)]
pub fn upload_images_modal(props: &UploadImagesModalProps) -> Html {
    let arquivos = use_state(Vec::<File>::new);
    let enviando = use_state(|| false);
    let erro = use_state(|| None::<String>);

    let onchange = {
        let arquivos = arquivos.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut selecionados = Vec::new();
            if let Some(lista) = input.files() {
                for i in 0..lista.length() {
                    if let Some(arquivo) = lista.get(i) {
                        selecionados.push(arquivo);
                    }
                }
            }
            arquivos.set(selecionados);
        })
    };

    let enviar = {
        let arquivos = arquivos.clone();
        let enviando = enviando.clone();
        let erro = erro.clone();
        let exam_id = props.exam_id.clone();
        let token = props.token.clone();
        let on_enviado = props.on_enviado.clone();
        let on_fechar = props.on_fechar.clone();
        Callback::from(move |_| {
            if arquivos.is_empty() || *enviando {
                return;
            }
            let selecionados = (*arquivos).clone();
            let enviando = enviando.clone();
            let erro = erro.clone();
            let exam_id = exam_id.clone();
            let token = token.clone();
            let on_enviado = on_enviado.clone();
            let on_fechar = on_fechar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                enviando.set(true);
                erro.set(None);
                match imagem_service::upload_imagens(&token, &exam_id, &selecionados).await {
                    Ok(mensagem) => {
                        log::info!("✅ {}", mensagem);
                        enviando.set(false);
                        on_enviado.emit(());
                        on_fechar.emit(());
                    }
                    Err(e) => {
                        enviando.set(false);
                        erro.set(Some(e));
                    }
                }
            });
        })
    };

    let fechar = {
        let on_fechar = props.on_fechar.clone();
        Callback::from(move |_| on_fechar.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal upload-images-modal">
                <h3>{"Enviar Imagens do Exame"}</h3>

                <input type="file" multiple=true accept="image/*" onchange={onchange} />

                if !arquivos.is_empty() {
                    <ul class="upload-lista">
                        { for arquivos.iter().map(|arquivo| html! {
                            <li>{ arquivo.name() }</li>
                        }) }
                    </ul>
                }

                if let Some(mensagem) = (*erro).clone() {
                    <p class="form-erro">{ mensagem }</p>
                }

                <div class="modal-actions">
                    <button onclick={fechar} disabled={*enviando}>{"Cancelar"}</button>
                    <button class="primary" onclick={enviar}
                        disabled={arquivos.is_empty() || *enviando}>
                        { if *enviando { "Enviando..." } else { "📤 Enviar" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
