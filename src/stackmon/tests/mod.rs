//! Testes do Stack Monitor
//!
//! Testes unitários no host, sobre uma plataforma simulada (`mock.rs`):
//! scheduler falso, relógio manual, threads `std` com falhas injetáveis e
//! console que captura a saída.
//!
//! # Como Executar
//! ```bash
//! cargo test --package stackmon --lib stackmon::tests
//! cargo test --package stackmon --lib stackmon::tests::daemon
//! ```
//!
//! # Estrutura dos Testes
//!
//! - `history.rs` - Histórico circular (wrap, dreno, escritores concorrentes)
//! - `report.rs` - Formatação da tabela
//! - `daemon.rs` - Ciclo de relatório, start/stop, falhas de thread
//! - `command.rs` - Comando de shell e instância global

#![cfg(test)]


pub mod history;
