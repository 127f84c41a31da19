pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::{data_em_dias_iso, data_hoje_iso, formatar_data, nome_papel, truncar_texto};
pub use storage::{load_raw, remove_from_storage, save_raw};
