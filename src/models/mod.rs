pub mod auth;
pub mod dashboard;
pub mod empresa;
pub mod endereco;
pub mod exame;
pub mod paginacao;
pub mod perfil;
pub mod usuario;

pub use auth::{LoginRequest, LoginResponse, MensagemApi};
pub use dashboard::{DadosDashboard, DashboardTrabalhador, EmpresaComExames};
pub use empresa::Empresa;
pub use endereco::Endereco;
pub use exame::{EstatisticasEmpresa, Exame};
pub use paginacao::{Paginacao, RespostaLista};
pub use perfil::{Perfil, RegistroPerfil};
pub use usuario::Usuario;
