use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Endereco {
    #[serde(default)]
    pub id: String,
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

impl Endereco {
    /// Cria um endereço vazio com id gerado no cliente
    pub fn novo() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }
}

impl std::fmt::Display for Endereco {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} {} - {}, {} - {}",
            self.logradouro, self.numero, self.complemento, self.bairro, self.cidade, self.estado
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_segue_o_formato_das_telas() {
        let e = Endereco {
            id: "1".into(),
            cep: "12345678".into(),
            logradouro: "Rua das Flores".into(),
            numero: "123".into(),
            complemento: "Casa".into(),
            bairro: "Centro".into(),
            cidade: "Natal".into(),
            estado: "RN".into(),
        };
        assert_eq!(e.to_string(), "Rua das Flores, 123 Casa - Centro, Natal - RN");
    }

    #[test]
    fn novo_gera_id_unico() {
        let a = Endereco::novo();
        let b = Endereco::novo();
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }
}
