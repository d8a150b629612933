//! # Synchronization Primitives
//!
//! Primitivas usadas pelo Stack Monitor.
//!
//! ```text
//! spin::Mutex    → Histórico de saídas (seção crítica curta, não dorme)
//! spin::Once     → Console do kernel / monitor global
//! AtomicFlag     → Flag de execução do daemon
//! AtomicCounter  → Geração do daemon / cursor de escrita
//! ```
//!
//! ## Regras
//!
//! - O hook de saída roda em contexto arbitrário: só spin locks, nada que durma.
//! - Nunca fazer I/O de console com o lock do histórico adquirido.

pub mod atomic;

pub use atomic::{AtomicCounter, AtomicFlag};
