// =============================================================================
// CONSOLE DO KERNEL
// =============================================================================
//
// Ponto único de saída de texto do Stack Monitor.
//
// ARQUITETURA:
// - A plataforma registra UM `ConsoleDevice` estático durante o boot.
// - Macros de log (kinfo!, kerror!...) escrevem via `emit_*`.
// - O relatório periódico escreve via `ConsoleWriter` (core::fmt::Write).
// - Sem console registrado, toda saída é descartada silenciosamente.
//
// FUNÇÕES DISPONÍVEIS:
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal (0x + 16 dígitos)
// - emit_dec(v)      : Envia u64 em decimal
// - emit_nl()        : Envia newline
//
// NOTA IMPORTANTE:
// Não há exclusão mútua entre CPUs aqui. Em SMP, linhas podem se intercalar
// se o dispositivo não serializar internamente. Aceitável para diagnóstico.
//
// =============================================================================

use core::fmt;
use spin::Once;

/// Dispositivo de saída de texto (UART, framebuffer, buffer de teste).
///
/// Implementações devem ser seguras para chamada de qualquer contexto:
/// a escrita não pode dormir.
pub trait ConsoleDevice: Send + Sync {
    /// Escreve a string inteira. Conversão `\n` -> `\r\n` fica a cargo do device.
    fn write_str(&self, s: &str);
}

/// Console registrado pela plataforma.
static KERNEL_CONSOLE: Once<&'static dyn ConsoleDevice> = Once::new();

/// Registra o console do kernel.
///
/// Só o primeiro registro vale. Retorna `false` se já havia um console.
pub fn register(device: &'static dyn ConsoleDevice) -> bool {
    if KERNEL_CONSOLE.is_completed() {
        return false;
    }
    let mut installed = false;
    KERNEL_CONSOLE.call_once(|| {
        installed = true;
        device
    });
    installed
}

/// Retorna o console registrado, se houver.
#[inline]
pub fn device() -> Option<&'static dyn ConsoleDevice> {
    KERNEL_CONSOLE.get().copied()
}

// =============================================================================
// FUNÇÕES DE ESCRITA - CORE
// =============================================================================

/// Envia uma string para o console.
#[inline]
pub fn emit_str(s: &str) {
    if let Some(dev) = device() {
        dev.write_str(s);
    }
}

/// Envia uma nova linha.
#[inline]
pub fn emit_nl() {
    emit_str("\n");
}

// =============================================================================
// FUNÇÕES DE ESCRITA - FORMATAÇÃO NUMÉRICA
// =============================================================================

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Formata `value` como `0x0123456789ABCDEF` (sempre 18 caracteres).
pub fn format_hex(value: u64, buf: &mut [u8; 18]) -> &str {
    buf[0] = b'0';
    buf[1] = b'x';
    for i in 0..16 {
        let shift = 60 - i * 4;
        buf[2 + i] = HEX_DIGITS[((value >> shift) & 0xF) as usize];
    }
    // Apenas ASCII foi escrito
    core::str::from_utf8(&buf[..]).unwrap_or("0x????????????????")
}

/// Formata `value` em decimal, sem padding.
pub fn format_dec(mut value: u64, buf: &mut [u8; 20]) -> &str {
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    core::str::from_utf8(&buf[pos..]).unwrap_or("?")
}

/// Envia um valor u64 em formato hexadecimal.
pub fn emit_hex(value: u64) {
    let mut buf = [0u8; 18];
    emit_str(format_hex(value, &mut buf));
}

/// Envia um valor u64 em formato decimal.
pub fn emit_dec(value: u64) {
    let mut buf = [0u8; 20];
    emit_str(format_dec(value, &mut buf));
}

// =============================================================================
// ADAPTADORES
// =============================================================================

/// Console que encaminha para o device registrado no kernel.
///
/// É o destino padrão do relatório do Stack Monitor.
#[derive(Debug, Default, Clone, Copy)]
pub struct KernelConsole;

impl ConsoleDevice for KernelConsole {
    fn write_str(&self, s: &str) {
        emit_str(s);
    }
}

/// Adaptador `core::fmt::Write` sobre um `ConsoleDevice`.
pub struct ConsoleWriter<'a> {
    device: &'a dyn ConsoleDevice,
}

impl<'a> ConsoleWriter<'a> {
    pub fn new(device: &'a dyn ConsoleDevice) -> Self {
        Self { device }
    }
}

impl fmt::Write for ConsoleWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.device.write_str(s);
        Ok(())
    }
}
