//! Tipos de Erro do Stack Monitor
//!
//! Nenhum erro aqui é fatal: toda falha degrada para uma mensagem de log e um
//! estado seguro (monitor parado).

use crate::sys::Errno;

/// Erros do Stack Monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMonError {
    /// A primitiva de criação de thread falhou; o monitor continua parado
    SpawnFailed(Errno),
}

impl StackMonError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpawnFailed(_) => "Failed to start the stack monitor",
        }
    }

    /// Código de erro da primitiva subjacente
    pub fn errno(&self) -> Errno {
        match self {
            Self::SpawnFailed(errno) => *errno,
        }
    }
}

impl core::fmt::Display for StackMonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.as_str(), self.errno())
    }
}

/// Tipo Result específico do Stack Monitor
pub type StackMonResult<T> = Result<T, StackMonError>;
