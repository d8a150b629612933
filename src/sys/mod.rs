//! System Definitions.
//!
//! Tipos e códigos de erro compartilhados com o restante do kernel.

pub mod error;
pub mod types;

pub use error::Errno;
pub use types::Tid;
