//! Core Module
//!
//! Infraestrutura central, independente de arquitetura: sistema de logs e
//! fonte de tempo monotônico.

pub mod logging;
pub mod time;
