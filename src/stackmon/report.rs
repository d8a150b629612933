//! # Relatório
//!
//! Cada ciclo do daemon produz um bloco auto-descritivo:
//!
//! ```text
//! ===============================================================
//! PID   STATUS       SIZE PEAK_STACK  PEAK_HEAP       TIME THREAD NAME
//! ---------------------------------------------------------------
//!    12 INACTIVE     2048        612        128        340 worker
//! ---------------------------------------------------------------
//!     0 ACTIVE       1024        380          0        512 Idle Task
//! ```
//!
//! Linhas INACTIVE (histórico) sempre antes das ACTIVE (tasks vivas).

use core::fmt::{self, Write};

use super::config::ReportColumns;
use super::record::StackRecord;
use crate::sched::task::TaskName;
use crate::sys::types::Tid;

/// Linha dupla que abre cada ciclo
pub const BANNER: &str = "===============================================================";

/// Separador entre cabeçalho, seção INACTIVE e seção ACTIVE
pub const SEPARATOR: &str = "---------------------------------------------------------------";

/// Origem de uma linha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task viva, lida do scheduler
    Active,
    /// Task terminada, lida do histórico
    Inactive,
}

impl TaskStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Uma linha do relatório
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    pub tid: Tid,
    pub status: TaskStatus,
    pub stack_size: usize,
    pub peak_stack: usize,
    pub peak_heap: Option<usize>,
    pub timestamp: u64,
    pub name: Option<TaskName>,
}

impl ReportRow {
    /// Linha INACTIVE a partir de um registro do histórico
    pub fn inactive(record: &StackRecord) -> Self {
        Self {
            tid: record.tid,
            status: TaskStatus::Inactive,
            stack_size: record.stack_size,
            peak_stack: record.peak_stack,
            peak_heap: record.peak_heap,
            timestamp: record.timestamp,
            name: record.name,
        }
    }

    /// Linha ACTIVE a partir de uma captura viva
    pub fn active(snapshot: &StackRecord) -> Self {
        Self {
            status: TaskStatus::Active,
            ..Self::inactive(snapshot)
        }
    }
}

/// Destino das linhas de um ciclo.
pub trait ReportSink {
    /// Início de um ciclo (banner + cabeçalho)
    fn begin_cycle(&mut self) {}

    /// Fim da seção INACTIVE
    fn section_break(&mut self) {}

    fn row(&mut self, row: &ReportRow);
}

/// Coletor simples, usado por diagnósticos e testes
impl ReportSink for alloc::vec::Vec<ReportRow> {
    fn row(&mut self, row: &ReportRow) {
        self.push(*row);
    }
}

/// Formata o relatório como tabela de texto.
pub struct TableWriter<W: Write> {
    out: W,
    columns: ReportColumns,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, columns: ReportColumns) -> Self {
        Self { out, columns }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> fmt::Result {
        write!(
            self.out,
            "{:<5} {:<8} {:>8} {:>10}",
            "PID", "STATUS", "SIZE", "PEAK_STACK"
        )?;
        if self.columns.contains(ReportColumns::PEAK_HEAP) {
            write!(self.out, " {:>10}", "PEAK_HEAP")?;
        }
        write!(self.out, " {:>10}", "TIME")?;
        if self.columns.contains(ReportColumns::TASK_NAME) {
            write!(self.out, " THREAD NAME")?;
        }
        writeln!(self.out)
    }

    fn write_row(&mut self, row: &ReportRow) -> fmt::Result {
        write!(
            self.out,
            "{:>5} {:<8} {:>8} {:>10}",
            row.tid,
            row.status.as_str(),
            row.stack_size,
            row.peak_stack
        )?;
        if self.columns.contains(ReportColumns::PEAK_HEAP) {
            write!(self.out, " {:>10}", row.peak_heap.unwrap_or(0))?;
        }
        write!(self.out, " {:>10}", row.timestamp)?;
        if self.columns.contains(ReportColumns::TASK_NAME) {
            write!(self.out, " {}", row.name.unwrap_or_default())?;
        }
        writeln!(self.out)
    }
}

// Erros de escrita são ignorados: o console não tem como reportá-los.
impl<W: Write> ReportSink for TableWriter<W> {
    fn begin_cycle(&mut self) {
        let _ = writeln!(self.out, "{}", BANNER);
        let _ = self.write_header();
        let _ = writeln!(self.out, "{}", SEPARATOR);
    }

    fn section_break(&mut self) {
        let _ = writeln!(self.out, "{}", SEPARATOR);
    }

    fn row(&mut self, row: &ReportRow) {
        let _ = self.write_row(row);
    }
}
