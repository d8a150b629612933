//! # Colaboradores Externos
//!
//! O monitor não sabe iterar tasks, medir stack, contar tempo ou criar
//! threads sozinho. Cada uma dessas capacidades é um trait implementado pela
//! plataforma (kernel real, ou mocks nos testes).
//!
//! | Trait           | Origem no kernel                                  |
//! |-----------------|---------------------------------------------------|
//! | `TaskIterator`  | `sched_foreach` - visita cada task escalonável    |
//! | `StackGauge`    | high-water mark da stack (específico de arch)     |
//! | `MonotonicClock`| ticks do sistema                                  |
//! | `ThreadOps`     | criar / nomear / detach / cancelar / dormir       |
//! | `ConsoleDevice` | saída de texto do relatório                       |

use alloc::boxed::Box;
use alloc::sync::Arc;

pub use crate::core::time::MonotonicClock;
use crate::core::time::JiffiesClock;
pub use crate::drivers::console::ConsoleDevice;
use crate::drivers::console::KernelConsole;
use crate::sched::task::TaskControl;
use crate::sys::Errno;

/// Iteração do scheduler sobre as tasks vivas.
pub trait TaskIterator: Send + Sync {
    /// Chama `visitor` uma vez por task escalonável. O TCB é só leitura.
    fn for_each_task(&self, visitor: &mut dyn FnMut(&dyn TaskControl));
}

/// Primitiva de high-water mark da stack.
pub trait StackGauge: Send + Sync {
    /// Pico de uso da stack de `task`, em bytes.
    fn peak_stack_usage(&self, task: &dyn TaskControl) -> usize;
}

/// Handle opaco de uma thread do kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadHandle(pub u64);

/// Atributos de criação de thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAttr {
    pub stack_size: usize,
    pub priority: u8,
    /// Usar a prioridade acima em vez de herdar do criador
    pub explicit_sched: bool,
}

/// Corpo de uma thread
pub type ThreadEntry = Box<dyn FnOnce() + Send + 'static>;

/// Primitivas de thread do kernel.
pub trait ThreadOps: Send + Sync {
    fn spawn(&self, attr: &ThreadAttr, entry: ThreadEntry) -> Result<ThreadHandle, Errno>;

    fn set_name(&self, _thread: ThreadHandle, _name: &str) -> Result<(), Errno> {
        Ok(())
    }

    fn detach(&self, thread: ThreadHandle) -> Result<(), Errno>;

    /// Cancelamento forçado (best effort)
    fn cancel(&self, thread: ThreadHandle) -> Result<(), Errno>;

    /// Dorme a thread atual por `seconds`
    fn sleep(&self, seconds: u32);
}

/// Conjunto de colaboradores entregue ao monitor
#[derive(Clone)]
pub struct Platform {
    pub scheduler: Arc<dyn TaskIterator>,
    pub gauge: Arc<dyn StackGauge>,
    pub clock: Arc<dyn MonotonicClock>,
    pub threads: Arc<dyn ThreadOps>,
    pub console: Arc<dyn ConsoleDevice>,
}

impl Platform {
    /// Plataforma com relógio de jiffies e console do kernel
    pub fn new(
        scheduler: Arc<dyn TaskIterator>,
        gauge: Arc<dyn StackGauge>,
        threads: Arc<dyn ThreadOps>,
    ) -> Self {
        Self {
            scheduler,
            gauge,
            clock: Arc::new(JiffiesClock),
            threads,
            console: Arc::new(KernelConsole),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn MonotonicClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_console(mut self, console: Arc<dyn ConsoleDevice>) -> Self {
        self.console = console;
        self
    }
}
