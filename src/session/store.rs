use crate::utils::{load_raw, remove_from_storage, save_raw, STORAGE_KEY_TOKEN};

/// Persistência do token. O gerenciador de sessão só conhece este trait;
/// o navegador injeta a implementação de localStorage e os testes uma
/// implementação em memória.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Fonte de tempo em segundos epoch, injetável para testar expiração.
pub trait Clock {
    fn agora_epoch(&self) -> i64;
}

/// Token persistido no localStorage sob uma única chave fixa
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        load_raw(STORAGE_KEY_TOKEN)
    }

    fn save(&self, token: &str) {
        if let Err(e) = save_raw(STORAGE_KEY_TOKEN, token) {
            log::error!("❌ Erro persistindo token: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = remove_from_storage(STORAGE_KEY_TOKEN) {
            log::error!("❌ Erro removendo token persistido: {}", e);
        }
    }
}

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn agora_epoch(&self) -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }
}
