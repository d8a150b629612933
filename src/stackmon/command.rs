//! # Comando de Shell `stackmonitor`
//!
//! ```text
//! stackmonitor        # inicia (no-op se já rodando)
//! stackmonitor stop   # pede a parada
//! ```
//!
//! O kernel instala UMA instância global com [`install`] no boot; o
//! comando de shell opera sobre ela.

use spin::Once;

use super::config::StackMonConfig;
use super::daemon::{StackMonitor, StartOutcome};
use super::platform::Platform;
use crate::sched::hooks::register_exit_hook;

/// Retorno de sucesso do comando
pub const CMD_OK: i32 = 0;

/// Retorno de erro do comando
pub const CMD_ERROR: i32 = -1;

/// Instância única do monitor
static STACK_MONITOR: Once<StackMonitor> = Once::new();

/// Instala o monitor global e registra seu hook de saída.
///
/// Só a primeira chamada tem efeito; as seguintes retornam a instância
/// existente e ignoram os argumentos.
pub fn install(platform: Platform, config: StackMonConfig) -> &'static StackMonitor {
    STACK_MONITOR.call_once(|| {
        let monitor = StackMonitor::new(platform, config);
        register_exit_hook(monitor.exit_hook());
        crate::kok!("(StackMon) Installed");
        monitor
    })
}

/// Monitor global, se instalado
pub fn get() -> Option<&'static StackMonitor> {
    STACK_MONITOR.get()
}

/// Entrada do comando sobre um monitor explícito.
///
/// `args[0]` é o nome do comando. Só `stop` em `args[1]` é reconhecido;
/// qualquer outra coisa inicia o monitor.
pub fn stackmonitor_main(monitor: &StackMonitor, args: &[&str]) -> i32 {
    if args.get(1).copied() == Some("stop") {
        monitor.stop();
        return CMD_OK;
    }

    match monitor.start() {
        Ok(StartOutcome::Started)
        | Ok(StartOutcome::AlreadyRunning)
        | Ok(StartOutcome::DetachFailed(_)) => CMD_OK,
        Err(_) => CMD_ERROR,
    }
}

/// Entrada do comando sobre o monitor global
pub fn kdbg_stackmonitor(args: &[&str]) -> i32 {
    match get() {
        Some(monitor) => stackmonitor_main(monitor, args),
        None => {
            crate::kerror!("(StackMon) There is no installed StackMonitor");
            CMD_ERROR
        }
    }
}
