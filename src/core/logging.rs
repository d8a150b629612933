// =============================================================================
// KERNEL LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Logs do Stack Monitor com custo ZERO quando desligados.
//
// ARQUITETURA:
// - Filtragem em tempo de compilação via features do Cargo
// - Com "no_logs", TODOS os macros viram blocos vazios
// - SEM core::fmt e SEM alocação: só strings e um valor numérico (hex ou decimal)
// - Saída pelo console registrado em `drivers::console`
//
// NÍVEIS (do mais crítico ao menos):
// - ERROR: falha de uma primitiva do kernel (spawn/detach)
// - WARN:  situação suspeita mas recuperável
// - INFO:  transições do daemon (Running, Stopped well...)
// - DEBUG: detalhes de start/stop
// - TRACE: cada ciclo, cada hook registrado
//
// USO:
//   kinfo!("(StackMon) Running");
//   ktrace!("(StackMon) Geração=", generation);      // valor em hex
//   kerror!("(StackMon) errno=", dec errno.as_i32()); // valor em decimal
//
// O texto do relatório periódico NÃO passa por aqui: ele é escrito direto
// no `ConsoleDevice` da plataforma, sem prefixo.
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================
//
//   1;31 = Bold Red    1;33 = Bold Yellow    32 = Green
//   36   = Cyan        35   = Magenta         0 = Reset
//

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";
pub const P_OK: &str = "\x1b[32m[OK]\x1b[0m ";
pub const P_FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m ";

/// Emite uma linha: prefixo + mensagem [+ valor] + newline.
///
/// O valor sai em hex, ou em decimal com o marcador `dec` (códigos errno).
/// Uso interno dos macros de nível.
#[doc(hidden)]
#[macro_export]
macro_rules! __kemit {
    ($prefix:expr, $msg:expr) => {{
        $crate::drivers::console::emit_str($prefix);
        $crate::drivers::console::emit_str($msg);
        $crate::drivers::console::emit_nl();
    }};
    ($prefix:expr, $msg:expr, dec $val:expr) => {{
        $crate::drivers::console::emit_str($prefix);
        $crate::drivers::console::emit_str($msg);
        $crate::drivers::console::emit_dec($val as u64);
        $crate::drivers::console::emit_nl();
    }};
    ($prefix:expr, $msg:expr, $val:expr) => {{
        $crate::drivers::console::emit_str($prefix);
        $crate::drivers::console::emit_str($msg);
        $crate::drivers::console::emit_hex($val as u64);
        $crate::drivers::console::emit_nl();
    }};
}

// =============================================================================
// ERROR / WARN - ativos salvo com no_logs
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($($arg:tt)+) => {
        $crate::__kemit!($crate::core::logging::P_ERROR, $($arg)+)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)+) => {
        $crate::__kemit!($crate::core::logging::P_WARN, $($arg)+)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// INFO - desligado com no_logs ou log_error
// =============================================================================

#[cfg(not(any(feature = "no_logs", feature = "log_error")))]
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)+) => {
        $crate::__kemit!($crate::core::logging::P_INFO, $($arg)+)
    };
}

#[cfg(any(feature = "no_logs", feature = "log_error"))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// DEBUG - só com log_debug ou log_trace
// =============================================================================

#[cfg(any(feature = "log_trace", feature = "log_debug"))]
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)+) => {
        $crate::__kemit!($crate::core::logging::P_DEBUG, $($arg)+)
    };
}

#[cfg(not(any(feature = "log_trace", feature = "log_debug")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// TRACE - só com log_trace
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)+) => {
        $crate::__kemit!($crate::core::logging::P_TRACE, $($arg)+)
    };
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// STATUS (OK/FAIL) - self-tests e instalação
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {
        $crate::__kemit!($crate::core::logging::P_OK, $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {
        $crate::__kemit!($crate::core::logging::P_FAIL, $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
