//! Arquivo: core/time/jiffies.rs
//!
//! Propósito: Jiffies (Contador de ticks do sistema).
//! "Jiffies" é o termo histórico (do Linux) para ticks de relógio.
//! É a fonte padrão de timestamp dos registros do Stack Monitor.
//!
//! Detalhes de Implementação:
//! - Usa AtomicU64 para ser thread-safe e lock-free.
//! - Incrementado pelo timer interrupt handler da plataforma.

use core::sync::atomic::{AtomicU64, Ordering};

use super::MonotonicClock;

/// Ticks desde o boot.
static JIFFIES: AtomicU64 = AtomicU64::new(0);

/// Retorna o número atual de jiffies.
#[inline]
pub fn get_jiffies() -> u64 {
    JIFFIES.load(Ordering::Relaxed)
}

/// Incrementa o contador de jiffies.
/// Deve ser chamado APENAS pelo handler de interrupção do timer.
#[inline]
pub fn inc_jiffies() {
    JIFFIES.fetch_add(1, Ordering::Relaxed);
}

/// Relógio monotônico baseado no contador global de jiffies.
#[derive(Debug, Default, Clone, Copy)]
pub struct JiffiesClock;

impl MonotonicClock for JiffiesClock {
    #[inline]
    fn now(&self) -> u64 {
        get_jiffies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = JiffiesClock;
        let before = clock.now();
        inc_jiffies();
        assert!(clock.now() > before);
    }
}
