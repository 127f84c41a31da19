use chrono::NaiveDate;

use super::constants::{
    ROLE_ADMIN, ROLE_EDITOR, ROLE_EMPRESA, ROLE_TRABALHADOR, ROLE_TRABALHADOR_EXTERNO,
};

/// Formata uma data ISO (YYYY-MM-DD, com ou sem hora) para exibição pt-BR
pub fn formatar_data(data: &str) -> String {
    let so_data = data.split('T').next().unwrap_or(data);
    match NaiveDate::parse_from_str(so_data, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => data.to_string(),
    }
}

/// Data local de hoje em ISO (YYYY-MM-DD), para inputs de data
pub fn data_hoje_iso() -> String {
    data_local_iso(&js_sys::Date::new_0())
}

/// Data local de hoje mais `dias`, em ISO
pub fn data_em_dias_iso(dias: i32) -> String {
    let data = js_sys::Date::new_0();
    data.set_date((data.get_date() as i32 + dias) as u32);
    data_local_iso(&data)
}

fn data_local_iso(data: &js_sys::Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        data.get_full_year(),
        data.get_month() + 1,
        data.get_date()
    )
}

/// Nome de exibição de um código de role
pub fn nome_papel(role: i32) -> &'static str {
    match role {
        ROLE_ADMIN => "Administrador",
        ROLE_EDITOR => "Editor",
        ROLE_TRABALHADOR => "Trabalhador",
        ROLE_TRABALHADOR_EXTERNO => "Trabalhador externo",
        ROLE_EMPRESA => "Empresa",
        _ => "Desconhecido",
    }
}

/// Trunca texto longo para caber nas células de tabela
pub fn truncar_texto(texto: &str, tamanho: usize) -> String {
    if texto.chars().count() > tamanho {
        let cortado: String = texto.chars().take(tamanho).collect();
        format!("{}...", cortado)
    } else {
        texto.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formata_data_iso_simples() {
        assert_eq!(formatar_data("2025-03-09"), "09/03/2025");
    }

    #[test]
    fn formata_data_com_hora() {
        assert_eq!(formatar_data("2025-12-01T14:30:00"), "01/12/2025");
    }

    #[test]
    fn data_invalida_passa_intacta() {
        assert_eq!(formatar_data("hoje"), "hoje");
    }

    #[test]
    fn nome_papel_cobre_todos_os_codigos() {
        assert_eq!(nome_papel(ROLE_ADMIN), "Administrador");
        assert_eq!(nome_papel(ROLE_TRABALHADOR_EXTERNO), "Trabalhador externo");
        assert_eq!(nome_papel(ROLE_EMPRESA), "Empresa");
        assert_eq!(nome_papel(99), "Desconhecido");
    }

    #[test]
    fn trunca_somente_quando_excede() {
        assert_eq!(truncar_texto("abcdef", 4), "abcd...");
        assert_eq!(truncar_texto("abc", 4), "abc");
    }
}
