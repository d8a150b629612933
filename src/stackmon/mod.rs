//! # Stack Monitor
//!
//! Monitor de uso de pilha residente no kernel. A cada intervalo imprime uma
//! tabela com o pico de stack (e opcionalmente de heap) de cada task viva e
//! as estatísticas finais das tasks que terminaram desde o último relatório.
//!
//! ## 🎯 Propósito e Responsabilidade
//! - **Histórico:** Guarda as últimas estatísticas de tasks que terminaram
//!   (`HistoryBuffer`), escrito pelo hook de saída do scheduler.
//! - **Daemon:** Thread de baixa prioridade que drena o histórico (INACTIVE)
//!   e depois percorre as tasks vivas (ACTIVE).
//! - **Controle:** `start`/`stop` idempotentes, comando de shell.
//!
//! ## 🏗️ Arquitetura
//! ```text
//!  scheduler (teardown) ──▶ EXIT_HOOKS ──▶ record_exit ──▶ HistoryBuffer
//!                                                              │
//!  ThreadOps::spawn ──▶ daemon_main ──▶ drain_and_report ◀─────┘
//!                            │
//!                            └──▶ TaskIterator::for_each_task ──▶ TableWriter ──▶ console
//! ```
//!
//! Todo acesso ao kernel passa pelos traits de [`platform`]; nos testes de
//! host eles são mocks (`tests/mock.rs`).
//!
//! ## ⚠️ Limitações
//! - Se mais de `history_capacity` tasks terminarem entre dois relatórios, as
//!   mais antigas se perdem sem aviso.
//! - A parada é cooperativa: pode levar até um intervalo inteiro.

pub mod command;
pub mod config;
pub mod daemon;
pub mod error;
pub mod history;
pub mod platform;
pub mod record;
pub mod report;


#[cfg(test)]
mod tests;

pub use command::{install, kdbg_stackmonitor, stackmonitor_main};
pub use config::{ReportColumns, StackMonConfig};
pub use daemon::{CycleSummary, MonitorState, StackMonitor, StartOutcome, StopOutcome};
pub use error::{StackMonError, StackMonResult};
pub use history::HistoryBuffer;
pub use platform::{Platform, StackGauge, TaskIterator, ThreadOps};
pub use record::StackRecord;
pub use report::{ReportRow, ReportSink, TableWriter, TaskStatus};
