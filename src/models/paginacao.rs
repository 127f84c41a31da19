use serde::Deserialize;

/// Resposta das listagens. Os endpoints paginados devolvem
/// `{ "pages": n, "list": [...] }`; os legados devolvem o array puro.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(untagged)]
pub enum RespostaLista<T> {
    Paginada { pages: u32, list: Vec<T> },
    Lista(Vec<T>),
}

impl<T> RespostaLista<T> {
    /// Normaliza as duas formas em (itens, total de páginas)
    pub fn normalizar(self) -> (Vec<T>, u32) {
        match self {
            RespostaLista::Paginada { pages, list } => (list, pages.max(1)),
            RespostaLista::Lista(list) => (list, 1),
        }
    }
}

/// Estado puro do padrão busca-paginada repetido nas listagens.
/// Regras: nova busca e mudança de limite voltam para a página 1;
/// remover o último item de uma página recua uma página.
#[derive(Clone, PartialEq, Debug)]
pub struct Paginacao {
    pub critery: String,
    pub pagina: u32,
    pub total_paginas: u32,
    pub limite: u32,
}

impl Paginacao {
    pub fn nova(limite: u32) -> Self {
        Self {
            critery: String::new(),
            pagina: 1,
            total_paginas: 1,
            limite,
        }
    }

    pub fn nova_busca(&mut self, critery: String) {
        self.critery = critery;
        self.pagina = 1;
    }

    pub fn ir_para_pagina(&mut self, pagina: u32) {
        self.pagina = pagina.clamp(1, self.total_paginas.max(1));
    }

    pub fn mudar_limite(&mut self, limite: u32) {
        self.limite = limite.max(1);
        self.pagina = 1;
    }

    pub fn aplicar_total(&mut self, total_paginas: u32) {
        self.total_paginas = total_paginas.max(1);
        if self.pagina > self.total_paginas {
            self.pagina = self.total_paginas;
        }
    }

    /// Chamada após uma exclusão; devolve true se a página atual ficou vazia
    /// e a listagem deve ser recarregada uma página atrás.
    pub fn recuar_se_vazia(&mut self, itens_restantes: usize) -> bool {
        if itens_restantes == 0 && self.pagina > 1 {
            self.pagina -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resposta_paginada_normaliza_pages_e_list() {
        let r: RespostaLista<u32> = serde_json::from_str(r#"{"pages": 3, "list": [1, 2]}"#).unwrap();
        assert_eq!(r.normalizar(), (vec![1, 2], 3));
    }

    #[test]
    fn resposta_array_puro_vira_pagina_unica() {
        let r: RespostaLista<u32> = serde_json::from_str(r#"[5, 6, 7]"#).unwrap();
        assert_eq!(r.normalizar(), (vec![5, 6, 7], 1));
    }

    #[test]
    fn nova_busca_reseta_para_primeira_pagina() {
        let mut p = Paginacao::nova(10);
        p.total_paginas = 5;
        p.ir_para_pagina(4);
        p.nova_busca("maria".into());
        assert_eq!(p.pagina, 1);
        assert_eq!(p.critery, "maria");
    }

    #[test]
    fn mudar_limite_reseta_pagina() {
        let mut p = Paginacao::nova(10);
        p.total_paginas = 3;
        p.ir_para_pagina(3);
        p.mudar_limite(25);
        assert_eq!(p.pagina, 1);
        assert_eq!(p.limite, 25);
    }

    #[test]
    fn pagina_e_limitada_ao_total() {
        let mut p = Paginacao::nova(10);
        p.total_paginas = 2;
        p.ir_para_pagina(9);
        assert_eq!(p.pagina, 2);
        p.aplicar_total(1);
        assert_eq!(p.pagina, 1);
    }

    #[test]
    fn exclusao_do_ultimo_item_recua_uma_pagina() {
        let mut p = Paginacao::nova(10);
        p.total_paginas = 3;
        p.ir_para_pagina(3);
        assert!(p.recuar_se_vazia(0));
        assert_eq!(p.pagina, 2);
        // na primeira página não há para onde recuar
        let mut p1 = Paginacao::nova(10);
        assert!(!p1.recuar_se_vazia(0));
    }
}
