//! Visão de uma Task (TCB)
//!
//! O Stack Monitor nunca é dono de uma task: ele só lê o TCB durante a
//! iteração do scheduler ou durante o hook de saída. `TaskControl` é o
//! contrato mínimo dessa leitura.

use super::config::TASK_NAME_SIZE;
use crate::sys::types::Tid;

/// Acesso somente-leitura aos campos do TCB que o monitor usa.
pub trait TaskControl {
    /// ID único
    fn tid(&self) -> Tid;

    /// Tamanho ajustado da stack (após alinhamento), em bytes
    fn adj_stack_size(&self) -> usize;

    /// Pico de heap alocado pela task, em bytes (0 se não rastreado)
    fn peak_alloc_size(&self) -> usize {
        0
    }

    /// Nome (debug)
    fn name(&self) -> &str {
        ""
    }
}

/// Nome de task com largura fixa, copiado do TCB.
///
/// Não aloca: o hook de saída precisa guardar o nome depois que o TCB
/// for descartado.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TaskName {
    bytes: [u8; TASK_NAME_SIZE],
    len: u8,
}

impl TaskName {
    /// Nome vazio
    pub const EMPTY: TaskName = TaskName {
        bytes: [0; TASK_NAME_SIZE],
        len: 0,
    };

    /// Copia `name`, truncando em `TASK_NAME_SIZE` bytes numa fronteira de char.
    pub fn new(name: &str) -> Self {
        let mut len = name.len().min(TASK_NAME_SIZE);
        while !name.is_char_boundary(len) {
            len -= 1;
        }

        let mut bytes = [0u8; TASK_NAME_SIZE];
        bytes[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    pub fn as_str(&self) -> &str {
        // Truncamento sempre em fronteira de char
        core::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for TaskName {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Debug for TaskName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl core::fmt::Display for TaskName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}
