use serde::{Deserialize, Serialize};

use crate::utils::ROLE_EMPRESA;

use super::{Empresa, Endereco, Usuario};

/// Perfil unificado da sessão: a forma única que o resto da UI consome,
/// independente do registro ter vindo do endpoint de usuário ou de empresa.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Perfil {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Documento fiscal: CPF para pessoas, CNPJ para empresas
    pub cpf: Option<String>,
    pub role: i32,
    pub ativo: bool,
    pub address: Vec<Endereco>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// União discriminada dos dois formatos de resposta do backend.
/// A normalização acontece aqui, uma única vez, em vez de cada tela
/// decidir qual campo ler.
#[derive(Clone, PartialEq, Debug)]
pub enum RegistroPerfil {
    Individual(Usuario),
    Companhia(Empresa),
}

impl RegistroPerfil {
    /// Achata o registro no perfil unificado.
    ///
    /// Para empresas o CNPJ ocupa o slot de documento e o role é forçado
    /// para 4: a escolha do endpoint já provou o tipo da conta, então o
    /// que o backend devolver nesse campo é ignorado.
    pub fn normalizar(self) -> Perfil {
        match self {
            RegistroPerfil::Individual(u) => Perfil {
                id: u.id,
                name: u.name,
                email: u.email,
                phone: u.phone,
                cpf: u.cpf,
                role: u.role,
                ativo: u.ativo,
                address: u.address,
                created_at: u.created_at,
                updated_at: u.updated_at,
            },
            RegistroPerfil::Companhia(e) => Perfil {
                id: e.id,
                name: e.name,
                email: e.email,
                phone: e.phone,
                cpf: Some(e.cnpj),
                role: ROLE_EMPRESA,
                ativo: e.ativo,
                address: e.address,
                created_at: e.created_at,
                updated_at: e.updated_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empresa_mapeia_cnpj_para_o_slot_de_documento_e_forca_role_4() {
        let empresa = Empresa {
            id: "c1".into(),
            name: "Oficina Central".into(),
            email: "contato@oficina.com".into(),
            cnpj: "123".into(),
            ativo: true,
            ..Default::default()
        };
        let perfil = RegistroPerfil::Companhia(empresa).normalizar();
        assert_eq!(perfil.cpf.as_deref(), Some("123"));
        assert_eq!(perfil.role, 4);
        assert_eq!(perfil.id, "c1");
    }

    #[test]
    fn usuario_preserva_o_role_devolvido() {
        let usuario = Usuario {
            id: "u1".into(),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            role: 1,
            ..Default::default()
        };
        let perfil = RegistroPerfil::Individual(usuario).normalizar();
        assert_eq!(perfil.role, 1);
        assert_eq!(perfil.cpf, None);
    }
}
