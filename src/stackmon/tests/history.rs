//! Testes do histórico circular

#![cfg(test)]

use std::collections::HashSet;
use std::sync::Arc;

use crate::stackmon::history::HistoryBuffer;
use crate::stackmon::record::StackRecord;
use crate::stackmon::report::{ReportRow, TaskStatus};
use crate::sys::types::Tid;

/// Registro coerente: stack e pico derivam do tid, para detectar leitura rasgada
fn exited(tid: u32, timestamp: u64) -> StackRecord {
    StackRecord {
        timestamp,
        tid: Tid::new(tid),
        stack_size: tid as usize * 100,
        peak_stack: tid as usize * 10,
        ..StackRecord::EMPTY
    }
}

fn drain(history: &HistoryBuffer) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    let reported = history.drain_and_report(&mut rows);
    assert_eq!(reported, rows.len());
    rows
}

fn sorted_tids(rows: &[ReportRow]) -> Vec<u32> {
    let mut tids: Vec<u32> = rows.iter().map(|r| r.tid.as_u32()).collect();
    tids.sort_unstable();
    tids
}

#[test]
fn test_new_buffer_is_empty() {
    let history = HistoryBuffer::new(8);
    assert_eq!(history.capacity(), 8);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.pending(), 0);
    assert!(drain(&history).is_empty());
}

#[test]
fn test_zero_capacity_becomes_one() {
    let history = HistoryBuffer::new(0);
    assert_eq!(history.capacity(), 1);
    history.record_exit(exited(3, 10));
    history.record_exit(exited(4, 11));
    assert_eq!(sorted_tids(&drain(&history)), vec![4]);
}

#[test]
fn test_fewer_exits_than_capacity_all_reported() {
    let history = HistoryBuffer::new(8);
    for tid in 1..=5 {
        history.record_exit(exited(tid, 100 + tid as u64));
    }
    assert_eq!(history.pending(), 5);

    let rows = drain(&history);
    assert_eq!(sorted_tids(&rows), vec![1, 2, 3, 4, 5]);
    for row in &rows {
        assert_eq!(row.status, TaskStatus::Inactive);
        assert_eq!(row.stack_size, row.tid.as_u32() as usize * 100);
        assert_eq!(row.peak_stack, row.tid.as_u32() as usize * 10);
        assert_eq!(row.timestamp, 100 + row.tid.as_u32() as u64);
    }

    // Segundo dreno sem novas saídas: nada
    assert!(drain(&history).is_empty());
    assert_eq!(history.pending(), 0);
}

#[test]
fn test_overflow_keeps_most_recent() {
    let history = HistoryBuffer::new(8);
    for tid in 100..120 {
        history.record_exit(exited(tid, tid as u64));
    }
    assert_eq!(history.cursor(), 20);

    let rows = drain(&history);
    assert_eq!(rows.len(), 8);
    assert_eq!(sorted_tids(&rows), (112..120).collect::<Vec<u32>>());
}

#[test]
fn test_wrap_scenario_capacity_four() {
    let history = HistoryBuffer::new(4);
    for tid in 10..=14 {
        history.record_exit(exited(tid, tid as u64));
    }

    assert_eq!(sorted_tids(&drain(&history)), vec![11, 12, 13, 14]);
    assert!(drain(&history).is_empty());
}

#[test]
fn test_rows_follow_slot_order() {
    let history = HistoryBuffer::new(4);
    for tid in 10..=14 {
        history.record_exit(exited(tid, tid as u64));
    }
    // 14 sobrescreveu o slot 0
    let order: Vec<u32> = drain(&history).iter().map(|r| r.tid.as_u32()).collect();
    assert_eq!(order, vec![14, 11, 12, 13]);
}

#[test]
fn test_zero_timestamp_still_reported() {
    let history = HistoryBuffer::new(4);
    history.record_exit(exited(7, 0));
    assert_eq!(history.pending(), 1);

    let rows = drain(&history);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tid, Tid::new(7));
    assert_eq!(rows[0].timestamp, 1);
}

#[test]
fn test_exits_after_drain_are_reported_next_cycle() {
    let history = HistoryBuffer::new(4);
    history.record_exit(exited(1, 5));
    assert_eq!(drain(&history).len(), 1);

    history.record_exit(exited(2, 6));
    assert_eq!(sorted_tids(&drain(&history)), vec![2]);
}

#[test]
fn test_concurrent_writers_no_torn_records() {
    const WRITERS: u32 = 8;
    const PER_WRITER: u32 = 100;

    let history = Arc::new(HistoryBuffer::new((WRITERS * PER_WRITER) as usize));

    let workers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let history = history.clone();
            std::thread::spawn(move || {
                for i in 0..PER_WRITER {
                    let tid = 1 + w * PER_WRITER + i;
                    history.record_exit(exited(tid, tid as u64));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let rows = drain(&history);
    assert_eq!(rows.len(), (WRITERS * PER_WRITER) as usize);

    let unique: HashSet<u32> = rows.iter().map(|r| r.tid.as_u32()).collect();
    assert_eq!(unique.len(), rows.len());
    for row in &rows {
        let tid = row.tid.as_u32() as usize;
        assert_eq!(row.stack_size, tid * 100);
        assert_eq!(row.peak_stack, tid * 10);
    }
}

#[test]
fn test_drain_concurrent_with_writers_reports_each_once() {
    const TOTAL: u32 = 2000;

    // Capacidade cobre todas as escritas: nenhum registro é sobrescrito
    let history = Arc::new(HistoryBuffer::new(TOTAL as usize));

    let writer = {
        let history = history.clone();
        std::thread::spawn(move || {
            for tid in 1..=TOTAL {
                history.record_exit(exited(tid, tid as u64));
            }
        })
    };

    let mut seen = Vec::new();
    while !writer.is_finished() {
        seen.extend(drain(&history));
    }
    writer.join().unwrap();
    seen.extend(drain(&history));

    assert_eq!(seen.len(), TOTAL as usize);
    let unique: HashSet<u32> = seen.iter().map(|r| r.tid.as_u32()).collect();
    assert_eq!(unique.len(), TOTAL as usize);
    for row in &seen {
        assert_eq!(row.peak_stack, row.tid.as_u32() as usize * 10);
    }
}
