//! Stack Monitor Library.
//!
//! Monitor de uso de pilha residente no kernel. Periodicamente reporta o pico
//! de pilha (e opcionalmente o pico de heap) de cada task viva, além das
//! estatísticas finais das tasks que terminaram desde o último relatório.
//!
//! No host (`cargo test`) a crate compila com `std` para que os testes possam
//! criar threads reais; no kernel ela é `no_std` + `alloc`.

#![cfg_attr(not(test), no_std)]

// Habilitar alocação dinâmica (necessário para Vec/Box/Arc)
extern crate alloc;

// --- Infraestrutura (logs, console, tempo) ---
pub mod core; // Logging, Tempo
pub mod drivers; // Console do kernel

// --- Utilitários e Definições ---
pub mod klib; // Framework de self-test
pub mod sync; // Flags e contadores atômicos
pub mod sys; // Tid, Errno

// --- Subsistemas ---
pub mod sched; // Configuração do scheduler, visão de TCB, hooks de saída
pub mod stackmon; // Monitor de pilha (histórico + daemon)

pub use crate::stackmon::{StackMonConfig, StackMonitor};
