pub mod session_context;
pub mod use_busca_paginada;
pub mod use_session;

pub use session_context::{use_session_context, SessionContextProvider};
pub use use_busca_paginada::{use_busca_paginada, UseBuscaPaginadaHandle};
pub use use_session::{use_session, UseSessionHandle};
