//! # Scheduler Interface
//!
//! O Stack Monitor não implementa um scheduler: ele consome o scheduler do
//! kernel por três pontos de contato.
//!
//! - **Configuração:** `config` traz os limites de build (MAX_TASKS, stack da Idle).
//! - **Visão de TCB:** `task::TaskControl` é a leitura de uma task viva ou morrendo.
//! - **Teardown:** `hooks` é a cadeia chamada quando uma task termina.
//!
//! A iteração sobre tasks vivas é feita por `stackmon::platform::TaskIterator`.

pub mod config;
pub mod hooks;
pub mod task;

pub use hooks::{ExitHook, ExitHookChain, EXIT_HOOKS};
pub use task::{TaskControl, TaskName};
