//! Registro de uma task terminada (um slot do histórico)

use super::config::ReportColumns;
use super::platform::{MonotonicClock, StackGauge};
use crate::sched::task::{TaskControl, TaskName};
use crate::sys::types::Tid;

/// Últimas estatísticas conhecidas de uma task que terminou.
///
/// `timestamp != 0` significa "terminou com estes valores e ainda não foi
/// reportada". Depois de impresso, o slot volta a `timestamp == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackRecord {
    /// Momento da captura (ticks monotônicos). 0 = slot vazio
    pub timestamp: u64,
    pub tid: Tid,
    /// Tamanho da stack (bytes)
    pub stack_size: usize,
    /// Pico de uso de stack (bytes)
    pub peak_stack: usize,
    /// Pico de heap, se a coluna estiver habilitada
    pub peak_heap: Option<usize>,
    /// Nome, se a coluna estiver habilitada
    pub name: Option<TaskName>,
}

impl StackRecord {
    /// Slot vazio
    pub const EMPTY: StackRecord = StackRecord {
        timestamp: 0,
        tid: Tid::IDLE,
        stack_size: 0,
        peak_stack: 0,
        peak_heap: None,
        name: None,
    };

    /// Verifica se o slot tem um registro ainda não reportado
    #[inline]
    pub const fn is_pending(&self) -> bool {
        self.timestamp != 0
    }

    /// Captura as estatísticas finais de `task`.
    ///
    /// Lê o gauge e o relógio FORA de qualquer lock do histórico.
    pub fn capture(
        task: &dyn TaskControl,
        gauge: &dyn StackGauge,
        clock: &dyn MonotonicClock,
        columns: ReportColumns,
        idle_stack_size: usize,
    ) -> Self {
        Self {
            timestamp: clock.now(),
            tid: task.tid(),
            stack_size: reported_stack_size(task, idle_stack_size),
            peak_stack: gauge.peak_stack_usage(task),
            peak_heap: columns
                .contains(ReportColumns::PEAK_HEAP)
                .then(|| task.peak_alloc_size()),
            name: columns
                .contains(ReportColumns::TASK_NAME)
                .then(|| TaskName::new(task.name())),
        }
    }
}

impl Default for StackRecord {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Tamanho de stack a reportar para `task`.
///
/// A Idle (tid 0) não reporta o próprio tamanho no TCB: usa-se o valor de
/// configuração. O TCB nunca é modificado.
#[inline]
pub fn reported_stack_size(task: &dyn TaskControl, idle_stack_size: usize) -> usize {
    if task.tid().is_idle() {
        idle_stack_size
    } else {
        task.adj_stack_size()
    }
}
