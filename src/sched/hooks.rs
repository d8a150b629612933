//! Hooks de saída de task
//!
//! O scheduler chama `notify` durante o teardown de uma task, ANTES de
//! descartar o TCB: os campos de stack/heap ainda são válidos.
//!
//! Os hooks rodam no contexto da task que está morrendo (contexto arbitrário).
//! Um hook não pode dormir nem fazer I/O.

use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::Mutex;

use super::task::TaskControl;

/// Observador de término de task.
pub trait ExitHook: Send + Sync {
    fn on_task_exit(&self, task: &dyn TaskControl);
}

/// Cadeia de hooks de saída.
pub struct ExitHookChain {
    hooks: Mutex<Vec<Arc<dyn ExitHook>>>,
}

impl ExitHookChain {
    pub const fn new() -> Self {
        Self {
            hooks: Mutex::new(Vec::new()),
        }
    }

    /// Registra um hook. Ele será chamado em toda saída de task a partir daqui.
    pub fn register(&self, hook: Arc<dyn ExitHook>) {
        self.hooks.lock().push(hook);
        crate::ktrace!("(Sched) Exit hook registrado");
    }

    /// Notifica todos os hooks do término de `task`.
    pub fn notify(&self, task: &dyn TaskControl) {
        // Copiar a lista para não segurar o lock enquanto os hooks rodam
        let hooks: Vec<Arc<dyn ExitHook>> = self.hooks.lock().clone();
        for hook in hooks.iter() {
            hook.on_task_exit(task);
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ExitHookChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Cadeia global, chamada pelo scheduler do kernel
pub static EXIT_HOOKS: ExitHookChain = ExitHookChain::new();

/// Registra um hook na cadeia global
pub fn register_exit_hook(hook: Arc<dyn ExitHook>) {
    EXIT_HOOKS.register(hook);
}

/// Ponto de chamada do scheduler no teardown de uma task
pub fn notify_task_exit(task: &dyn TaskControl) {
    EXIT_HOOKS.notify(task);
}
