// ============================================================================
// SESSÃO - ciclo de vida do token, autorização por claims e perfil
// ============================================================================
// Máquina de estados pura (testável no host) + traits de E/S injetáveis.
// A orquestração com rede e timers fica no hook use_session.
// ============================================================================

pub mod claims;
pub mod error;
pub mod manager;
pub mod store;

pub use claims::{decode_claims, TokenClaims};
pub use error::SessionError;
pub use manager::{Bootstrap, SessionState};
pub use store::{BrowserClock, BrowserTokenStore, Clock, TokenStore};
