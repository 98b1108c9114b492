// src/filtros.rs
//! Construtor de filtros para os endpoints de listagem.
//!
//! Traduz os parâmetros de query reconhecidos numa lista ordenada de triplas
//! (coluna, operador, valor) e na lista de valores correspondente. As colunas
//! e operadores são sempre constantes do código; os valores entram na query
//! exclusivamente como placeholders `?`, nunca concatenados no SQL.

/// Valor de um filtro, já coagido para o tipo nativo.
#[derive(Debug, Clone, PartialEq)]
pub enum Valor {
    Texto(String),
    Booleano(bool),
}

/// Uma condição `coluna operador ?`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtro {
    pub coluna: &'static str,
    pub operador: &'static str,
    pub valor: Valor,
}

/// Conjunto ordenado de filtros, combinados com AND na ordem de inserção.
#[derive(Debug, Default)]
pub struct Filtros {
    filtros: Vec<Filtro>,
}

impl Filtros {
    pub fn novo() -> Self {
        Self::default()
    }

    /// Igualdade simples (`coluna = ?`). `None` não adiciona condição.
    pub fn igual(mut self, coluna: &'static str, valor: Option<String>) -> Self {
        if let Some(v) = valor {
            self.filtros.push(Filtro {
                coluna,
                operador: "=",
                valor: Valor::Texto(v),
            });
        }
        self
    }

    /// Igualdade booleana: aceita "true"/"false" sem distinção de maiúsculas;
    /// qualquer outro texto coage para false.
    pub fn igual_booleano(mut self, coluna: &'static str, valor: Option<String>) -> Self {
        if let Some(v) = valor {
            self.filtros.push(Filtro {
                coluna,
                operador: "=",
                valor: Valor::Booleano(v.eq_ignore_ascii_case("true")),
            });
        }
        self
    }

    /// Limite inferior de intervalo (`coluna >= ?`).
    pub fn a_partir_de(mut self, coluna: &'static str, valor: Option<String>) -> Self {
        if let Some(v) = valor {
            self.filtros.push(Filtro {
                coluna,
                operador: ">=",
                valor: Valor::Texto(v),
            });
        }
        self
    }

    /// Limite superior de intervalo (`coluna <= ?`).
    pub fn ate(mut self, coluna: &'static str, valor: Option<String>) -> Self {
        if let Some(v) = valor {
            self.filtros.push(Filtro {
                coluna,
                operador: "<=",
                valor: Valor::Texto(v),
            });
        }
        self
    }

    /// Cláusula WHERE com placeholders, na ordem de inserção.
    /// Sem filtros, retorna a string vazia (lista tudo).
    pub fn clausula_where(&self) -> String {
        if self.filtros.is_empty() {
            return String::new();
        }
        let condicoes: Vec<String> = self
            .filtros
            .iter()
            .map(|f| format!("{} {} ?", f.coluna, f.operador))
            .collect();
        format!(" WHERE {}", condicoes.join(" AND "))
    }

    /// Valores a vincular, na mesma ordem das condições da cláusula.
    pub fn valores(&self) -> impl Iterator<Item = &Valor> {
        self.filtros.iter().map(|f| &f.valor)
    }

    pub fn triplas(&self) -> &[Filtro] {
        &self.filtros
    }
}
