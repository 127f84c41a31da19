use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::models::MensagemApi;

use super::extrair_erro;

/// Nome padronizado que cada imagem recebe antes do envio:
/// `{exam_id}_{índice com três dígitos}.{extensão original}`.
/// Sem extensão reconhecível no nome original, assume `jpg`.
pub fn nome_arquivo_imagem(exam_id: &str, indice: usize, nome_original: &str) -> String {
    let extensao = nome_original
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 5)
        .unwrap_or_else(|| "jpg".to_string());
    format!("{}_{:03}.{}", exam_id, indice, extensao)
}

/// Envia as imagens de resultado de um exame como multipart.
/// Cada arquivo vai renomeado no próprio FormData; o backend marca o exame
/// como `image_uploaded` ao receber.
pub async fn upload_imagens(
    token: &str,
    exam_id: &str,
    arquivos: &[File],
) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "Erro criando FormData".to_string())?;
    form.append_with_str("exam_id", exam_id)
        .map_err(|_| "Erro montando FormData".to_string())?;

    for (indice, arquivo) in arquivos.iter().enumerate() {
        let nome = nome_arquivo_imagem(exam_id, indice, &arquivo.name());
        form.append_with_blob_and_filename("imagens", arquivo, &nome)
            .map_err(|_| "Erro anexando imagem".to_string())?;
        form.append_with_str("image_names", &nome)
            .map_err(|_| "Erro montando FormData".to_string())?;
    }

    log::info!("🖼️ Enviando {} imagens do exame {}", arquivos.len(), exam_id);

    let url = format!("{}/images/upload_images", CONFIG.backend_url());
    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .body(form)
        .map_err(|e| format!("Erro montando requisição: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Erro de rede: {}", e))?;

    if !response.ok() {
        return Err(extrair_erro(response).await);
    }

    let msg = response.json::<MensagemApi>().await.unwrap_or_default();
    Ok(msg
        .mensagem
        .unwrap_or_else(|| "Imagens enviadas com sucesso".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renomeia_com_indice_de_tres_digitos_e_extensao_original() {
        assert_eq!(nome_arquivo_imagem("ex1", 0, "foto.PNG"), "ex1_000.png");
        assert_eq!(nome_arquivo_imagem("ex1", 12, "raio-x.jpeg"), "ex1_012.jpeg");
    }

    #[test]
    fn sem_extensao_assume_jpg() {
        assert_eq!(nome_arquivo_imagem("ex2", 1, "scan"), "ex2_001.jpg");
        assert_eq!(nome_arquivo_imagem("ex2", 2, "scan."), "ex2_002.jpg");
    }
}
