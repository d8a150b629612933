//! # Kernel Driver Layer
//!
//! O Stack Monitor não fala com hardware diretamente. A única "saída" é o
//! console do kernel, que a plataforma registra no boot (serial, framebuffer
//! ou buffer de teste).
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  kinfo!/kerror!  +  relatório do StackMon    │
//! └─────────────────────────────────────────────┘
//!                      ↓
//! ┌─────────────────────────────────────────────┐
//! │  drivers::console (ConsoleDevice)           │
//! └─────────────────────────────────────────────┘
//!                      ↓
//!            UART / Framebuffer / Teste
//! ```

pub mod console;
