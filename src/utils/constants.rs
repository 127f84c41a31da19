/// Chave única do localStorage com o bearer token bruto.
/// A ausência da chave significa "deslogado"; nenhum outro dado de sessão é persistido.
pub const STORAGE_KEY_TOKEN: &str = "examAdmin_token";

// Códigos de role vindos do token / cadastro
pub const ROLE_ADMIN: i32 = 0;
pub const ROLE_EDITOR: i32 = 1;
pub const ROLE_TRABALHADOR: i32 = 2;
pub const ROLE_TRABALHADOR_EXTERNO: i32 = 3;
pub const ROLE_EMPRESA: i32 = 4;
