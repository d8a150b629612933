//! # Configuração do Stack Monitor
//!
//! Constantes de build e a estrutura `StackMonConfig` que as carrega até o
//! monitor. Uma placa (ou um teste) pode sobrescrever qualquer valor na
//! construção; o padrão vem sempre das constantes abaixo.

use bitflags::bitflags;

use crate::sched::config::{IDLE_THREAD_STACK_SIZE, MAX_TASKS};

// =============================================================================
// CONSTANTES
// =============================================================================

/// Tamanho da stack da thread do daemon (bytes)
pub const STACKMONITOR_STACKSIZE: usize = 1024;

/// Prioridade da thread do daemon
pub const STACKMONITOR_PRIORITY: u8 = 100;

/// Intervalo entre relatórios (segundos)
pub const STACKMONITOR_INTERVAL: u32 = 5;

/// Capacidade do histórico: o dobro de tasks simultâneas, para absorver
/// rajadas de término entre dois relatórios
pub const HISTORY_CAPACITY: usize = MAX_TASKS * 2;

/// Nome da thread do daemon
pub const STACKMONITOR_THREAD_NAME: &str = "StackMonitor";

// =============================================================================
// COLUNAS OPCIONAIS
// =============================================================================

bitflags! {
    /// Colunas opcionais do relatório
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReportColumns: u8 {
        /// Pico de heap da task (PEAK_HEAP)
        const PEAK_HEAP = 1 << 0;
        /// Nome da task (THREAD NAME)
        const TASK_NAME = 1 << 1;
    }
}

impl ReportColumns {
    /// Colunas habilitadas pelas features `heapinfo` / `task_name`
    pub const fn from_features() -> Self {
        let mut bits = 0;
        if cfg!(feature = "heapinfo") {
            bits |= Self::PEAK_HEAP.bits();
        }
        if cfg!(feature = "task_name") {
            bits |= Self::TASK_NAME.bits();
        }
        Self::from_bits_truncate(bits)
    }
}

// =============================================================================
// CONFIGURAÇÃO
// =============================================================================

/// Parâmetros do monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackMonConfig {
    /// Stack da thread do daemon
    pub stack_size: usize,
    /// Prioridade da thread do daemon
    pub priority: u8,
    /// Intervalo entre ciclos (segundos)
    pub interval_secs: u32,
    /// Slots no histórico de tasks terminadas (mínimo 1)
    pub history_capacity: usize,
    /// Tamanho reportado para a task Idle
    pub idle_stack_size: usize,
    /// Colunas opcionais
    pub columns: ReportColumns,
}

impl StackMonConfig {
    pub const fn new() -> Self {
        Self {
            stack_size: STACKMONITOR_STACKSIZE,
            priority: STACKMONITOR_PRIORITY,
            interval_secs: STACKMONITOR_INTERVAL,
            history_capacity: HISTORY_CAPACITY,
            idle_stack_size: IDLE_THREAD_STACK_SIZE,
            columns: ReportColumns::from_features(),
        }
    }

    pub const fn with_interval(mut self, secs: u32) -> Self {
        self.interval_secs = secs;
        self
    }

    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    pub const fn with_idle_stack_size(mut self, size: usize) -> Self {
        self.idle_stack_size = size;
        self
    }

    pub const fn with_columns(mut self, columns: ReportColumns) -> Self {
        self.columns = columns;
        self
    }

    pub const fn with_thread(mut self, stack_size: usize, priority: u8) -> Self {
        self.stack_size = stack_size;
        self.priority = priority;
        self
    }
}

impl Default for StackMonConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::config::{PRIORITY_MAX, PRIORITY_MIN};

    #[test]
    fn test_defaults_follow_build_constants() {
        let config = StackMonConfig::default();
        assert_eq!(config.stack_size, 1024);
        assert_eq!(config.priority, 100);
        assert_eq!(config.interval_secs, 5);
        assert_eq!(config.history_capacity, MAX_TASKS * 2);
        assert_eq!(config.idle_stack_size, IDLE_THREAD_STACK_SIZE);
        assert_eq!(config.columns, ReportColumns::from_features());
        assert!((PRIORITY_MIN..=PRIORITY_MAX).contains(&config.priority));
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = StackMonConfig::new()
            .with_interval(1)
            .with_idle_stack_size(4096)
            .with_thread(2048, 50)
            .with_columns(ReportColumns::PEAK_HEAP);
        assert_eq!(config.interval_secs, 1);
        assert_eq!(config.idle_stack_size, 4096);
        assert_eq!((config.stack_size, config.priority), (2048, 50));
        assert!(!config.columns.contains(ReportColumns::TASK_NAME));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let config = StackMonConfig::new().with_history_capacity(0);
        assert_eq!(config.history_capacity, 1);
    }
}
