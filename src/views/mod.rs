pub mod agendamento_empresa;
pub mod agendamentos_empresa;
pub mod cadastro_empresa;
pub mod cadastro_usuario;
pub mod dashboard_empresa;
pub mod dashboard_trabalhador;
pub mod empresas;
pub mod login;
pub mod main_dashboard;
pub mod recuperacao_senha;
pub mod redefine_senha;
pub mod usuarios;

pub use agendamento_empresa::AgendamentoEmpresaView;
pub use agendamentos_empresa::AgendamentosEmpresaView;
pub use cadastro_empresa::CadastroEmpresaView;
pub use cadastro_usuario::CadastroUsuarioView;
pub use dashboard_empresa::DashboardEmpresaView;
pub use dashboard_trabalhador::DashboardTrabalhadorView;
pub use empresas::EmpresasView;
pub use login::LoginView;
pub use main_dashboard::MainDashboardView;
pub use recuperacao_senha::RecuperacaoSenhaView;
pub use redefine_senha::RedefineSenhaView;
pub use usuarios::UsuariosView;
