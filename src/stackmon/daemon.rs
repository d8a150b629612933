//! # Daemon do Stack Monitor
//!
//! Thread de fundo que, a cada ciclo:
//! 1. imprime banner + cabeçalho;
//! 2. drena o histórico (linhas INACTIVE);
//! 3. visita todas as tasks vivas (linhas ACTIVE);
//! 4. dorme `interval_secs` e confere a flag de execução.
//!
//! ## Estados
//!
//! ```text
//! Stopped ──start──▶ Running ──stop──▶ StopRequested ──(thread vê a flag)──▶ Stopped
//! ```
//!
//! A parada é cooperativa: a latência é no máximo um intervalo mais uma
//! passada pelo scheduler. O cancelamento forçado só é usado se o detach
//! da thread falhar.
//!
//! Cada `start` abre uma nova geração. Uma thread de geração antiga que
//! acorde depois de um stop→start rápido sai no próximo teste da flag, então
//! nunca há dois laços de relatório ativos depois desse ponto.

use alloc::boxed::Box;
use alloc::sync::Arc;

use super::config::{StackMonConfig, STACKMONITOR_THREAD_NAME};
use super::error::{StackMonError, StackMonResult};
use super::history::HistoryBuffer;
use super::platform::{Platform, ThreadAttr};
use super::record::StackRecord;
use super::report::{ReportRow, ReportSink, TableWriter};
use crate::drivers::console::ConsoleWriter;
use crate::sched::hooks::ExitHook;
use crate::sched::task::TaskControl;
use crate::sync::{AtomicCounter, AtomicFlag};
use crate::sys::Errno;

/// Estado observável do monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Stopped,
    Running,
    /// Flag limpa, thread ainda terminando o ciclo atual
    StopRequested,
}

/// Resultado de um pedido de start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// Já estava rodando: nada foi feito
    AlreadyRunning,
    /// Thread criada mas o detach falhou; cancelamento forçado tentado
    DetachFailed(Errno),
}

/// Resultado de um pedido de stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// Flag limpa; a thread sai no próximo ciclo
    StopRequested,
    /// Não havia monitor ativo
    NotRunning,
}

/// Contagem de linhas de um ciclo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub inactive: usize,
    pub active: usize,
}

/// Estado compartilhado entre o handle, a thread do daemon e o hook de saída
struct MonitorShared {
    config: StackMonConfig,
    platform: Platform,
    history: HistoryBuffer,
    /// Flag de execução (polled pelo daemon)
    running: AtomicFlag,
    /// Última geração criada por `start`
    generation: AtomicCounter,
    /// Geração da thread viva (0 = nenhuma)
    daemon_generation: AtomicCounter,
    /// Ciclos completos desde a criação
    cycles: AtomicCounter,
}

impl MonitorShared {
    fn should_run(&self, generation: u64) -> bool {
        self.running.get() && self.generation.get() == generation
    }

    fn capture(&self, task: &dyn TaskControl) -> StackRecord {
        StackRecord::capture(
            task,
            &*self.platform.gauge,
            &*self.platform.clock,
            self.config.columns,
            self.config.idle_stack_size,
        )
    }

    /// Um ciclo completo de relatório
    fn report_into(&self, sink: &mut dyn ReportSink) -> CycleSummary {
        sink.begin_cycle();
        let inactive = self.history.drain_and_report(sink);
        sink.section_break();

        let mut active = 0;
        self.platform.scheduler.for_each_task(&mut |task| {
            sink.row(&ReportRow::active(&self.capture(task)));
            active += 1;
        });

        self.cycles.inc();
        CycleSummary { inactive, active }
    }

    fn report_to_console(&self) -> CycleSummary {
        let console = &*self.platform.console;
        let mut table = TableWriter::new(ConsoleWriter::new(console), self.config.columns);
        self.report_into(&mut table)
    }
}

impl ExitHook for MonitorShared {
    fn on_task_exit(&self, task: &dyn TaskControl) {
        let record = self.capture(task);
        self.history.record_exit(record);
    }
}

/// Corpo da thread do daemon
fn daemon_main(shared: Arc<MonitorShared>, generation: u64) {
    crate::kinfo!("(StackMon) Running");

    // Loop até detectar pedido de parada
    while shared.should_run(generation) {
        shared.report_to_console();
        crate::ktrace!("(StackMon) Cycle done: ", shared.cycles.get());
        shared.platform.threads.sleep(shared.config.interval_secs);
    }

    shared.daemon_generation.compare_exchange(generation, 0);
    crate::kinfo!("(StackMon) Stopped well");
}

/// Handle do Stack Monitor.
///
/// Existe no máximo um daemon por monitor: uma flag, uma thread.
pub struct StackMonitor {
    shared: Arc<MonitorShared>,
}

impl StackMonitor {
    pub fn new(platform: Platform, config: StackMonConfig) -> Self {
        Self {
            shared: Arc::new(MonitorShared {
                history: HistoryBuffer::new(config.history_capacity),
                config,
                platform,
                running: AtomicFlag::new(false),
                generation: AtomicCounter::new(0),
                daemon_generation: AtomicCounter::new(0),
                cycles: AtomicCounter::new(0),
            }),
        }
    }

    pub fn config(&self) -> &StackMonConfig {
        &self.shared.config
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.shared.history
    }

    /// Hook a registrar na cadeia de saída do scheduler
    pub fn exit_hook(&self) -> Arc<dyn ExitHook> {
        self.shared.clone()
    }

    /// Registra diretamente o término de `task` no histórico
    pub fn record_exit(&self, task: &dyn TaskControl) {
        self.shared.on_task_exit(task);
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    pub fn state(&self) -> MonitorState {
        if self.shared.running.get() {
            MonitorState::Running
        } else if self.shared.daemon_generation.get() != 0 {
            MonitorState::StopRequested
        } else {
            MonitorState::Stopped
        }
    }

    /// Ciclos completos desde a criação
    pub fn cycles(&self) -> u64 {
        self.shared.cycles.get()
    }

    /// Executa um ciclo de relatório agora, na thread atual, para `sink`
    pub fn report_into(&self, sink: &mut dyn ReportSink) -> CycleSummary {
        self.shared.report_into(sink)
    }

    /// Executa um ciclo de relatório agora, no console da plataforma
    pub fn report_once(&self) -> CycleSummary {
        self.shared.report_to_console()
    }

    /// Inicia o daemon.
    ///
    /// - Já rodando: no-op, `AlreadyRunning`.
    /// - Falha ao criar a thread: volta a `Stopped` e retorna o errno.
    /// - Falha no detach: cancela a thread (best effort) e retorna
    ///   `DetachFailed`, que não é erro para quem chamou.
    pub fn start(&self) -> StackMonResult<StartOutcome> {
        let shared = &self.shared;

        if shared.running.test_and_set() {
            crate::kwarn!("(StackMon) already started");
            return Ok(StartOutcome::AlreadyRunning);
        }

        let generation = shared.generation.inc() + 1;
        shared.daemon_generation.set(generation);

        let attr = ThreadAttr {
            stack_size: shared.config.stack_size,
            priority: shared.config.priority,
            explicit_sched: true,
        };
        let body = Arc::clone(shared);
        let threads = &shared.platform.threads;

        let handle = match threads.spawn(&attr, Box::new(move || daemon_main(body, generation))) {
            Ok(handle) => handle,
            Err(errno) => {
                crate::kerror!(
                    "(StackMon) ERROR: Failed to start the stack monitor: errno=",
                    dec errno.as_i32()
                );
                shared.daemon_generation.compare_exchange(generation, 0);
                shared.running.clear();
                return Err(StackMonError::SpawnFailed(errno));
            }
        };

        if threads.set_name(handle, STACKMONITOR_THREAD_NAME).is_err() {
            crate::kwarn!("(StackMon) Failed to name the stack monitor thread");
        }

        if let Err(errno) = threads.detach(handle) {
            crate::kerror!(
                "(StackMon) ERROR: Failed to detach the stack monitor: errno=",
                dec errno.as_i32()
            );
            // Se o cancelamento falhar, a flag limpa ainda faz a thread sair
            shared.running.clear();
            match threads.cancel(handle) {
                Ok(()) => {
                    shared.daemon_generation.compare_exchange(generation, 0);
                }
                Err(_cancel_errno) => {
                    crate::kwarn!(
                        "(StackMon) Failed to cancel the stack monitor: errno=",
                        dec _cancel_errno.as_i32()
                    );
                }
            }
            return Ok(StartOutcome::DetachFailed(errno));
        }

        crate::kdebug!("(StackMon) Started, generation ", generation);
        Ok(StartOutcome::Started)
    }

    /// Pede a parada do daemon.
    ///
    /// A thread sai quando acordar e ver a flag limpa.
    pub fn stop(&self) -> StopOutcome {
        if self.shared.running.test_and_clear() {
            crate::kinfo!("(StackMon) Stopping, not stopped yet");
            StopOutcome::StopRequested
        } else {
            crate::kinfo!("(StackMon) There is no active StackMonitor");
            StopOutcome::NotRunning
        }
    }
}
