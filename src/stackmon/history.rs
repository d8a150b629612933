//! # Histórico de Tasks Terminadas
//!
//! Array circular de capacidade fixa com as últimas estatísticas de cada task
//! que terminou. Escrito pelo hook de saída (contexto arbitrário), drenado
//! apenas pela thread do daemon.
//!
//! ## Política de overflow
//!
//! O cursor de escrita cresce monotonicamente e o slot é `cursor % C`. Se
//! mais de `C` tasks terminarem entre dois relatórios, os registros mais
//! antigos são sobrescritos sem aviso. Não existe contador de descartes.
//!
//! ## Concorrência
//!
//! Um `spin::Mutex` cobre slots e cursor. A seção crítica é só atribuição de
//! campos: sem log, sem I/O. O dreno retira um slot por vez com o lock e
//! imprime depois de soltá-lo.

use alloc::vec;
use alloc::vec::Vec;
use spin::Mutex;

use super::record::StackRecord;
use super::report::{ReportRow, ReportSink};

struct Slots {
    records: Vec<StackRecord>,
    cursor: u64,
}

/// Histórico circular de `StackRecord`
pub struct HistoryBuffer {
    slots: Mutex<Slots>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Cria histórico zerado com `capacity` slots (mínimo 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Mutex::new(Slots {
                records: vec![StackRecord::EMPTY; capacity],
                cursor: 0,
            }),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total de escritas desde a criação
    pub fn cursor(&self) -> u64 {
        self.slots.lock().cursor
    }

    /// Número de slots com registro ainda não reportado
    pub fn pending(&self) -> usize {
        self.slots
            .lock()
            .records
            .iter()
            .filter(|r| r.is_pending())
            .count()
    }

    /// Registra o término de uma task.
    ///
    /// Nunca falha. Se o buffer deu a volta, o slot mais antigo é sobrescrito.
    /// Um timestamp 0 (tick 0 do boot) vira 1 para não ser confundido com slot
    /// vazio.
    pub fn record_exit(&self, mut record: StackRecord) {
        if record.timestamp == 0 {
            record.timestamp = 1;
        }

        let mut slots = self.slots.lock();
        let slot = (slots.cursor % self.capacity as u64) as usize;
        slots.records[slot] = record;
        slots.cursor = slots.cursor.wrapping_add(1);
    }

    /// Retira o registro pendente de `slot`, marcando-o como reportado.
    fn take(&self, slot: usize) -> Option<StackRecord> {
        let mut slots = self.slots.lock();
        let entry = &mut slots.records[slot];
        if !entry.is_pending() {
            return None;
        }
        let record = *entry;
        entry.timestamp = 0;
        Some(record)
    }

    /// Emite uma linha INACTIVE por registro pendente, em ordem de slot.
    ///
    /// Cada registro escrito antes do início da varredura é reportado
    /// exatamente uma vez (salvo se sobrescrito antes). Retorna o número de
    /// linhas emitidas.
    pub fn drain_and_report(&self, sink: &mut dyn ReportSink) -> usize {
        let mut reported = 0;
        for slot in 0..self.capacity {
            if let Some(record) = self.take(slot) {
                sink.row(&ReportRow::inactive(&record));
                reported += 1;
            }
        }
        reported
    }
}
