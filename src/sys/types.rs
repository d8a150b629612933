//! Tipos fundamentais do sistema

/// Task ID
///
/// O kernel alvo não distingue processo de thread no TCB: cada task
/// escalonável tem um único id, e o id 0 é sempre a task Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Tid(pub u32);

impl Tid {
    /// Task Idle (sempre presente, roda quando nada mais está pronto)
    pub const IDLE: Tid = Tid(0);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Verifica se é a task Idle
    pub const fn is_idle(self) -> bool {
        self.0 == Self::IDLE.0
    }
}

impl core::fmt::Display for Tid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
