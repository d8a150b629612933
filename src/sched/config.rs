//! Constantes de configuração do Scheduler
//!
//! Valores de build que o Stack Monitor herda do scheduler alvo.

/// Número máximo de tasks escalonáveis simultaneamente
pub const MAX_TASKS: usize = 32;

/// Tamanho da stack da task Idle (em bytes).
///
/// A Idle não reporta o próprio tamanho de stack no TCB; este valor é usado
/// no lugar do campo vivo.
pub const IDLE_THREAD_STACK_SIZE: usize = 1024;

/// Tamanho máximo do nome de uma task (sem o terminador)
pub const TASK_NAME_SIZE: usize = 31;

/// Prioridade mínima
pub const PRIORITY_MIN: u8 = 1;

/// Prioridade máxima
pub const PRIORITY_MAX: u8 = 255;
