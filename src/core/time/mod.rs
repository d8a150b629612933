//! Tempo Monotônico
//!
//! O Stack Monitor só precisa de um relógio monotônico para carimbar os
//! registros (`timestamp`) e de uma unidade para o intervalo do relatório.

pub mod jiffies;

pub use jiffies::JiffiesClock;

/// Fonte de tempo monotônico (ticks do sistema).
///
/// Chamada tanto pelo daemon quanto pelo hook de saída de task, que roda
/// em contexto arbitrário: a implementação não pode bloquear.
pub trait MonotonicClock: Send + Sync {
    /// Valor atual do relógio. Nunca decresce.
    fn now(&self) -> u64;
}
