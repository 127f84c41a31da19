use crate::models::Perfil;

use super::claims::{decode_claims, TokenClaims};
use super::error::SessionError;
use super::store::{Clock, TokenStore};

/// Resultado do bootstrap: o que o chamador deve fazer em seguida.
#[derive(Clone, PartialEq, Debug)]
pub enum Bootstrap {
    /// Nenhum token persistido; fica deslogado sem redirecionar
    Deslogado,
    /// Token malformado ou expirado; já foi limpo, leva para o login
    RedirecionarLogin,
    /// Token válido; disparar a busca de perfil para este token
    BuscarPerfil(String),
}

/// Decodifica e checa a validade temporal em um passo. Usado no bootstrap
/// e na checagem periódica, que tratam as duas falhas do mesmo jeito mas
/// registram qual foi.
fn validar_token(token: &str, clock: &dyn Clock) -> Result<TokenClaims, SessionError> {
    let claims = decode_claims(token)?;
    if claims.expirado(clock.agora_epoch()) {
        return Err(SessionError::TokenExpirado);
    }
    Ok(claims)
}

/// Fonte única de verdade de "quem está logado, com que role, e se isso
/// ainda vale". Estado puro: toda E/S (localStorage, relógio, rede) entra
/// por parâmetro, o que deixa a máquina de estados testável fora do browser.
///
/// Estados grossos: sem token (deslogado) e com token (autenticado, perfil
/// possivelmente ainda carregando). Expiração e falha de busca de perfil
/// colapsam de volta para deslogado — nunca sobra sessão parcial.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionState {
    token: Option<String>,
    perfil: Option<Perfil>,
    /// Guarda de no-máximo-uma-busca: token para o qual uma busca de perfil
    /// já foi DISPARADA (não necessariamente concluída). Marcar no disparo
    /// impede que repetir o mesmo token com a resposta ainda em voo gere
    /// uma segunda requisição.
    buscado_para: Option<String>,
    /// Checagem inicial do token persistido ainda não terminou.
    /// Intencionalmente NÃO espera a busca de perfil: o shell pode renderizar
    /// antes do perfil chegar (sinal separado: `perfil_carregando`).
    carregando: bool,
    /// Há uma busca de perfil em andamento
    perfil_carregando: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: None,
            perfil: None,
            buscado_para: None,
            carregando: true,
            perfil_carregando: false,
        }
    }

    // ---- leituras derivadas ----

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn carregando(&self) -> bool {
        self.carregando
    }

    pub fn perfil_carregando(&self) -> bool {
        self.perfil_carregando
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn perfil(&self) -> Option<&Perfil> {
        self.perfil.as_ref()
    }

    /// Claims derivadas sob demanda do token atual; nunca armazenadas
    pub fn claims(&self) -> Option<TokenClaims> {
        decode_claims(self.token.as_deref()?).ok()
    }

    /// Autorização por claims do token, independente do perfil buscado:
    /// válida imediatamente após o login, sem esperar a rede.
    /// Erros de decodificação viram `false`.
    pub fn is_admin(&self) -> bool {
        self.claims().map(|c| c.role == crate::utils::ROLE_ADMIN).unwrap_or(false)
    }

    pub fn is_empresa(&self) -> bool {
        self.claims().map(|c| c.role == crate::utils::ROLE_EMPRESA).unwrap_or(false)
    }

    // ---- transições ----

    /// Checagem inicial do token persistido, executada uma vez no start.
    pub fn bootstrap(&mut self, store: &dyn TokenStore, clock: &dyn Clock) -> Bootstrap {
        self.carregando = false;

        let Some(token) = store.load() else {
            return Bootstrap::Deslogado;
        };

        match validar_token(&token, clock) {
            Err(e) => {
                log::warn!("⚠️ Token persistido rejeitado ({}), limpando sessão", e);
                store.clear();
                Bootstrap::RedirecionarLogin
            }
            Ok(_) => {
                self.token = Some(token.clone());
                self.buscado_para = Some(token.clone());
                Bootstrap::BuscarPerfil(token)
            }
        }
    }

    /// Define ou limpa o token. Transição pura: nunca falha.
    /// Devolve o token para o qual uma busca de perfil deve ser disparada,
    /// respeitando a semântica de no-máximo-uma-busca-por-token.
    pub fn definir_token(&mut self, store: &dyn TokenStore, token: Option<String>) -> Option<String> {
        match token {
            Some(t) => {
                store.save(&t);
                self.token = Some(t.clone());
                if self.buscado_para.as_deref() == Some(t.as_str()) {
                    // Busca já disparada para este token exato (mesmo que a
                    // resposta ainda não tenha chegado); não refaz
                    None
                } else {
                    self.buscado_para = Some(t.clone());
                    Some(t)
                }
            }
            None => {
                self.limpar(store);
                None
            }
        }
    }

    pub fn iniciar_busca_perfil(&mut self) {
        self.perfil_carregando = true;
    }

    /// Completa a busca. Ignorada se o token mudou enquanto a requisição
    /// estava em voo (logout sem cancelamento de rede).
    pub fn concluir_busca_perfil(&mut self, token: &str, perfil: Perfil) {
        if self.token.as_deref() != Some(token) {
            log::info!("ℹ️ Perfil chegou para token antigo, ignorando");
            return;
        }
        self.perfil = Some(perfil);
        self.perfil_carregando = false;
    }

    /// Falha de rede ou status não-2xx na busca de perfil: fail-closed.
    /// Devolve true se a sessão foi derrubada (redirecionar para o login).
    pub fn falhar_busca_perfil(&mut self, store: &dyn TokenStore, token: &str) -> bool {
        if self.token.as_deref() != Some(token) {
            // Falha de uma busca antiga; o estado atual não é afetado
            self.perfil_carregando = false;
            return false;
        }
        self.limpar(store);
        true
    }

    /// Logout explícito. Idempotente: deslogar já deslogado é no-op seguro.
    pub fn logout(&mut self, store: &dyn TokenStore) {
        self.limpar(store);
    }

    /// Checagem periódica de expiração. Devolve true se o token expirou
    /// (a sessão já foi derrubada); false significa nenhuma mudança de estado.
    pub fn verificar_expiracao(&mut self, store: &dyn TokenStore, clock: &dyn Clock) -> bool {
        let Some(token) = self.token.as_deref() else {
            return false;
        };
        match validar_token(token, clock) {
            Ok(_) => false,
            Err(e) => {
                log::info!("⏰ Sessão derrubada na checagem periódica: {}", e);
                self.limpar(store);
                true
            }
        }
    }

    fn limpar(&mut self, store: &dyn TokenStore) {
        store.clear();
        self.token = None;
        self.perfil = None;
        self.buscado_para = None;
        self.perfil_carregando = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::super::claims::token_de_teste;
    use super::*;
    use crate::models::{Empresa, RegistroPerfil, Usuario};

    struct MemoriaStore(RefCell<Option<String>>);

    impl MemoriaStore {
        fn vazio() -> Self {
            Self(RefCell::new(None))
        }
        fn com(token: &str) -> Self {
            Self(RefCell::new(Some(token.to_string())))
        }
        fn persistido(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl TokenStore for MemoriaStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }
        fn save(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }
        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    struct RelogioFixo(i64);

    impl Clock for RelogioFixo {
        fn agora_epoch(&self) -> i64 {
            self.0
        }
    }

    const AGORA: i64 = 1_700_000_000;

    fn perfil_simples(id: &str) -> Perfil {
        RegistroPerfil::Individual(Usuario {
            id: id.into(),
            name: "Teste".into(),
            email: "t@x.com".into(),
            ..Default::default()
        })
        .normalizar()
    }

    #[test]
    fn bootstrap_sem_token_fica_deslogado_sem_redirecionar() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        assert!(s.carregando());
        let r = s.bootstrap(&store, &RelogioFixo(AGORA));
        assert_eq!(r, Bootstrap::Deslogado);
        assert!(!s.carregando());
        assert!(!s.is_authenticated());
    }

    #[test]
    fn bootstrap_com_token_valido_dispara_busca_de_perfil() {
        let token = token_de_teste("u1", 0, AGORA + 3600);
        let store = MemoriaStore::com(&token);
        let mut s = SessionState::new();
        let r = s.bootstrap(&store, &RelogioFixo(AGORA));
        assert_eq!(r, Bootstrap::BuscarPerfil(token.clone()));
        assert!(s.is_authenticated());
        // carregando cai no fim da checagem, antes do perfil chegar
        assert!(!s.carregando());
        assert!(s.perfil().is_none());
        // a guarda vale desde o disparo: repetir o token não busca de novo
        assert_eq!(s.definir_token(&store, Some(token)), None);
    }

    // Cenário C: token persistido expirado é removido no bootstrap
    #[test]
    fn bootstrap_com_token_expirado_limpa_e_redireciona() {
        let token = token_de_teste("u1", 0, AGORA - 10);
        let store = MemoriaStore::com(&token);
        let mut s = SessionState::new();
        let r = s.bootstrap(&store, &RelogioFixo(AGORA));
        assert_eq!(r, Bootstrap::RedirecionarLogin);
        assert!(!s.is_authenticated());
        assert_eq!(store.persistido(), None);
    }

    #[test]
    fn bootstrap_com_token_malformado_limpa_e_redireciona() {
        let store = MemoriaStore::com("lixo-sem-formato");
        let mut s = SessionState::new();
        let r = s.bootstrap(&store, &RelogioFixo(AGORA));
        assert_eq!(r, Bootstrap::RedirecionarLogin);
        assert_eq!(store.persistido(), None);
    }

    // P5 + Cenário A: autorização depende só das claims, não do perfil
    #[test]
    fn is_admin_vale_antes_do_perfil_chegar() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let token = token_de_teste("u1", 0, AGORA + 3600);
        let buscar = s.definir_token(&store, Some(token.clone()));
        assert_eq!(buscar, Some(token));
        assert!(s.is_authenticated());
        assert!(s.is_admin());
        assert!(!s.is_empresa());
        assert!(s.perfil().is_none());
        assert_eq!(store.persistido().is_some(), true);
    }

    #[test]
    fn is_empresa_para_role_4_e_false_sem_token() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        assert!(!s.is_admin());
        assert!(!s.is_empresa());
        s.definir_token(&store, Some(token_de_teste("c1", 4, AGORA + 3600)));
        assert!(s.is_empresa());
        assert!(!s.is_admin());
    }

    // P2: no máximo uma busca por token
    #[test]
    fn definir_o_mesmo_token_nao_rebusca_depois_do_perfil_carregado() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let token = token_de_teste("u1", 2, AGORA + 3600);

        assert_eq!(s.definir_token(&store, Some(token.clone())), Some(token.clone()));
        s.iniciar_busca_perfil();
        s.concluir_busca_perfil(&token, perfil_simples("u1"));

        // mesma string de token: a guarda suprime a segunda busca
        assert_eq!(s.definir_token(&store, Some(token.clone())), None);

        // token diferente volta a buscar
        let outro = token_de_teste("u2", 2, AGORA + 7200);
        assert_eq!(s.definir_token(&store, Some(outro.clone())), Some(outro));
    }

    // P2: repetir o token com a resposta ainda em voo também não rebusca
    #[test]
    fn definir_o_mesmo_token_com_busca_em_voo_nao_dispara_outra() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let token = token_de_teste("u1", 2, AGORA + 3600);

        assert_eq!(s.definir_token(&store, Some(token.clone())), Some(token.clone()));
        s.iniciar_busca_perfil();

        // o perfil ainda não chegou, mas a guarda já foi marcada no disparo
        assert_eq!(s.definir_token(&store, Some(token.clone())), None);
        assert!(s.perfil_carregando());

        s.concluir_busca_perfil(&token, perfil_simples("u1"));
        assert_eq!(s.definir_token(&store, Some(token)), None);
    }

    #[test]
    fn validacao_distingue_expirado_de_malformado() {
        let clock = RelogioFixo(AGORA);
        assert_eq!(
            validar_token(&token_de_teste("u1", 0, AGORA), &clock),
            Err(SessionError::TokenExpirado)
        );
        assert!(matches!(
            validar_token("lixo-sem-formato", &clock),
            Err(SessionError::TokenMalformado(_))
        ));
        assert!(validar_token(&token_de_teste("u1", 0, AGORA + 1), &clock).is_ok());
    }

    // P3: logout idempotente
    #[test]
    fn logout_ja_deslogado_e_no_op_seguro() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        s.bootstrap(&store, &RelogioFixo(AGORA));
        s.logout(&store);
        let antes = s.clone();
        s.logout(&store);
        assert_eq!(s, antes);
        assert!(!s.is_authenticated());
        assert!(s.perfil().is_none());
    }

    #[test]
    fn logout_limpa_token_perfil_e_guarda() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let token = token_de_teste("u1", 0, AGORA + 3600);
        s.definir_token(&store, Some(token.clone()));
        s.concluir_busca_perfil(&token, perfil_simples("u1"));
        s.logout(&store);
        assert!(!s.is_authenticated());
        assert!(s.perfil().is_none());
        assert_eq!(store.persistido(), None);
        // após logout, o mesmo token volta a disparar busca (guarda zerada)
        assert_eq!(s.definir_token(&store, Some(token.clone())), Some(token));
    }

    // Cenário D: falha na busca de perfil derruba a sessão
    #[test]
    fn falha_de_busca_forca_logout() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let token = token_de_teste("u1", 2, AGORA + 3600);
        s.definir_token(&store, Some(token.clone()));
        s.iniciar_busca_perfil();
        assert!(s.falhar_busca_perfil(&store, &token));
        assert!(!s.is_authenticated());
        assert_eq!(store.persistido(), None);
    }

    // Conclusão de busca obsoleta não ressuscita sessão antiga
    #[test]
    fn conclusao_obsoleta_e_ignorada() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let antigo = token_de_teste("u1", 2, AGORA + 3600);
        s.definir_token(&store, Some(antigo.clone()));
        s.iniciar_busca_perfil();

        // logout antes da resposta chegar
        s.logout(&store);
        s.concluir_busca_perfil(&antigo, perfil_simples("u1"));
        assert!(s.perfil().is_none());
        assert!(!s.is_authenticated());

        // falha obsoleta também não derruba uma sessão nova
        let novo = token_de_teste("u2", 2, AGORA + 3600);
        s.definir_token(&store, Some(novo.clone()));
        assert!(!s.falhar_busca_perfil(&store, &antigo));
        assert!(s.is_authenticated());
    }

    // P1 + Cenário E: checagem periódica
    #[test]
    fn verificacao_periodica_nao_mexe_em_token_valido() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        s.definir_token(&store, Some(token_de_teste("u1", 0, AGORA + 3600)));
        let antes = s.clone();
        assert!(!s.verificar_expiracao(&store, &RelogioFixo(AGORA)));
        assert_eq!(s, antes);
        assert!(store.persistido().is_some());
    }

    #[test]
    fn verificacao_periodica_derruba_token_expirado() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        s.definir_token(&store, Some(token_de_teste("u1", 0, AGORA + 30)));
        assert!(s.verificar_expiracao(&store, &RelogioFixo(AGORA + 60)));
        assert!(!s.is_authenticated());
        assert_eq!(store.persistido(), None);
    }

    #[test]
    fn verificacao_sem_token_e_no_op() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        assert!(!s.verificar_expiracao(&store, &RelogioFixo(AGORA)));
    }

    // P4 (lado do mapeamento): ver models::perfil; aqui garantimos que o
    // perfil normalizado de empresa entra inteiro na sessão
    #[test]
    fn perfil_de_empresa_normalizado_fica_disponivel() {
        let store = MemoriaStore::vazio();
        let mut s = SessionState::new();
        let token = token_de_teste("c1", 4, AGORA + 3600);
        s.definir_token(&store, Some(token.clone()));
        let perfil = RegistroPerfil::Companhia(Empresa {
            id: "c1".into(),
            name: "Oficina".into(),
            email: "o@x.com".into(),
            cnpj: "123".into(),
            ..Default::default()
        })
        .normalizar();
        s.concluir_busca_perfil(&token, perfil);
        let p = s.perfil().unwrap();
        assert_eq!(p.role, 4);
        assert_eq!(p.cpf.as_deref(), Some("123"));
    }
}
