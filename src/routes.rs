// ============================================================================
// ROTAS - mapeamento caminho <-> tela, navegação via History API
// ============================================================================
// Sem crate de roteamento: o App guarda a rota atual em estado e troca a
// view renderizada. parse/to_path são puros para rodarem nos testes.
// ============================================================================

/// Telas navegáveis da aplicação
#[derive(Clone, PartialEq, Debug)]
pub enum Route {
    /// Dashboard administrativa (tela inicial)
    Dashboard,
    Login,
    Usuarios { busca: Option<String> },
    CadastroUsuario { id: Option<String> },
    Empresas,
    CadastroEmpresa { id: Option<String> },
    /// Agendamento em lote de exames para uma empresa
    AgendamentoEmpresa { company_id: String },
    /// Listagem de agendamentos de uma empresa com filtro por datas
    AgendamentosEmpresa { company_id: String, nome: Option<String> },
    DashboardEmpresa,
    DashboardTrabalhador,
    RecuperacaoSenha,
    /// Redefinição/definição de senha via token de e-mail.
    /// `empresa` distingue o fluxo de primeira senha da conta de empresa.
    RedefineSenha { token: String, empresa: bool },
}

impl Route {
    /// Interpreta `pathname?search`. Caminho desconhecido cai na dashboard,
    /// que por sua vez redireciona para o login se não houver sessão.
    pub fn parse(caminho: &str) -> Route {
        let (path, query) = match caminho.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (caminho, None),
        };
        let segmentos: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segmentos.as_slice() {
            [] => Route::Dashboard,
            ["login"] => Route::Login,
            ["usuarios"] => Route::Usuarios {
                busca: parametro_query(query, "busca"),
            },
            ["usuarios", "cadastro"] => Route::CadastroUsuario { id: None },
            ["usuarios", "cadastro", id] => Route::CadastroUsuario {
                id: Some(decodificar_componente(id)),
            },
            ["empresas"] => Route::Empresas,
            ["empresas", "cadastro"] => Route::CadastroEmpresa { id: None },
            ["empresas", "cadastro", id] => Route::CadastroEmpresa {
                id: Some(decodificar_componente(id)),
            },
            ["empresas", company_id, "agendar"] => Route::AgendamentoEmpresa {
                company_id: decodificar_componente(company_id),
            },
            ["empresas", company_id, "agendamentos"] => Route::AgendamentosEmpresa {
                company_id: decodificar_componente(company_id),
                nome: parametro_query(query, "nome"),
            },
            ["empresa", "dashboard"] => Route::DashboardEmpresa,
            ["trabalhador", "dashboard"] => Route::DashboardTrabalhador,
            ["recuperacao_senha"] => Route::RecuperacaoSenha,
            ["redefine_senha", token] => Route::RedefineSenha {
                token: decodificar_componente(token),
                empresa: false,
            },
            ["redefine_senha_empresa", token] => Route::RedefineSenha {
                token: decodificar_componente(token),
                empresa: true,
            },
            _ => Route::Dashboard,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Usuarios { busca: None } => "/usuarios".to_string(),
            Route::Usuarios { busca: Some(b) } => {
                format!("/usuarios?busca={}", codificar_componente(b))
            }
            Route::CadastroUsuario { id: None } => "/usuarios/cadastro".to_string(),
            Route::CadastroUsuario { id: Some(id) } => {
                format!("/usuarios/cadastro/{}", codificar_componente(id))
            }
            Route::Empresas => "/empresas".to_string(),
            Route::CadastroEmpresa { id: None } => "/empresas/cadastro".to_string(),
            Route::CadastroEmpresa { id: Some(id) } => {
                format!("/empresas/cadastro/{}", codificar_componente(id))
            }
            Route::AgendamentoEmpresa { company_id } => {
                format!("/empresas/{}/agendar", codificar_componente(company_id))
            }
            Route::AgendamentosEmpresa { company_id, nome } => {
                let base = format!("/empresas/{}/agendamentos", codificar_componente(company_id));
                match nome {
                    Some(n) => format!("{}?nome={}", base, codificar_componente(n)),
                    None => base,
                }
            }
            Route::DashboardEmpresa => "/empresa/dashboard".to_string(),
            Route::DashboardTrabalhador => "/trabalhador/dashboard".to_string(),
            Route::RecuperacaoSenha => "/recuperacao_senha".to_string(),
            Route::RedefineSenha { token, empresa: false } => {
                format!("/redefine_senha/{}", codificar_componente(token))
            }
            Route::RedefineSenha { token, empresa: true } => {
                format!("/redefine_senha_empresa/{}", codificar_componente(token))
            }
        }
    }
}

fn parametro_query(query: Option<&str>, chave: &str) -> Option<String> {
    let query = query?;
    query.split('&').find_map(|par| {
        let (k, v) = par.split_once('=')?;
        if k == chave && !v.is_empty() {
            Some(decodificar_componente(v))
        } else {
            None
        }
    })
}

/// Percent-encoding do conjunto não-reservado (RFC 3986)
pub fn codificar_componente(texto: &str) -> String {
    let mut saida = String::with_capacity(texto.len());
    for byte in texto.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                saida.push(byte as char)
            }
            _ => saida.push_str(&format!("%{:02X}", byte)),
        }
    }
    saida
}

pub fn decodificar_componente(texto: &str) -> String {
    let bytes = texto.as_bytes();
    let mut saida = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(par) = bytes.get(i + 1..i + 3) {
                if let Ok(valor) = u8::from_str_radix(std::str::from_utf8(par).unwrap_or(""), 16) {
                    saida.push(valor);
                    i += 3;
                    continue;
                }
            }
        }
        if bytes[i] == b'+' {
            saida.push(b' ');
        } else {
            saida.push(bytes[i]);
        }
        i += 1;
    }
    String::from_utf8_lossy(&saida).into_owned()
}

// ---- lado do navegador ----

/// Caminho atual do navegador (`pathname?search`)
pub fn caminho_atual() -> String {
    let location = match web_sys::window().map(|w| w.location()) {
        Some(l) => l,
        None => return "/".to_string(),
    };
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    if search.is_empty() {
        pathname
    } else {
        // `search` já vem com o '?' na frente
        format!("{}{}", pathname, search)
    }
}

/// Empilha a rota na History API sem recarregar a página
pub fn empurrar_historico(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let path = route.to_path();
            if let Err(e) =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
            {
                log::error!("❌ Erro navegando para {}: {:?}", path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raiz_e_dashboard_e_desconhecido_cai_na_dashboard() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/nao/existe"), Route::Dashboard);
    }

    #[test]
    fn rotas_simples_fazem_ida_e_volta() {
        for route in [
            Route::Login,
            Route::Empresas,
            Route::DashboardEmpresa,
            Route::DashboardTrabalhador,
            Route::RecuperacaoSenha,
        ] {
            assert_eq!(Route::parse(&route.to_path()), route);
        }
    }

    #[test]
    fn cadastro_com_e_sem_id() {
        assert_eq!(
            Route::parse("/usuarios/cadastro"),
            Route::CadastroUsuario { id: None }
        );
        assert_eq!(
            Route::parse("/usuarios/cadastro/u-123"),
            Route::CadastroUsuario { id: Some("u-123".into()) }
        );
        assert_eq!(
            Route::CadastroEmpresa { id: Some("c9".into()) }.to_path(),
            "/empresas/cadastro/c9"
        );
    }

    #[test]
    fn busca_vai_na_query_e_volta_decodificada() {
        let route = Route::Usuarios { busca: Some("maria silva".into()) };
        let path = route.to_path();
        assert_eq!(path, "/usuarios?busca=maria%20silva");
        assert_eq!(Route::parse(&path), route);
        // busca vazia é tratada como ausente
        assert_eq!(
            Route::parse("/usuarios?busca="),
            Route::Usuarios { busca: None }
        );
    }

    #[test]
    fn agendamentos_carregam_empresa_e_nome() {
        let route = Route::AgendamentosEmpresa {
            company_id: "c1".into(),
            nome: Some("Oficina Três Irmãos".into()),
        };
        assert_eq!(Route::parse(&route.to_path()), route);

        assert_eq!(
            Route::parse("/empresas/c1/agendar"),
            Route::AgendamentoEmpresa { company_id: "c1".into() }
        );
    }

    #[test]
    fn redefinicao_distingue_fluxo_de_empresa() {
        assert_eq!(
            Route::parse("/redefine_senha/tok123"),
            Route::RedefineSenha { token: "tok123".into(), empresa: false }
        );
        assert_eq!(
            Route::parse("/redefine_senha_empresa/tok456"),
            Route::RedefineSenha { token: "tok456".into(), empresa: true }
        );
    }

    #[test]
    fn percent_encoding_cobre_utf8() {
        let original = "ação & reação";
        let codificado = codificar_componente(original);
        assert!(!codificado.contains(' '));
        assert!(!codificado.contains('&'));
        assert_eq!(decodificar_componente(&codificado), original);
        // '+' legado vira espaço
        assert_eq!(decodificar_componente("a+b"), "a b");
        // '%' truncado não derruba o parse
        assert_eq!(decodificar_componente("abc%2"), "abc%2");
    }
}
