//! # Standard Error Codes (Errno)
//!
//! Códigos de erro retornados pelas primitivas do kernel que o Stack Monitor
//! consome (criação, detach e cancelamento de threads).
//!
//! Segue a numeração POSIX/Linux; só os códigos que essas primitivas
//! retornam estão aqui.

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    EPERM = 1,   // Operation not permitted
    ESRCH = 3,   // No such process
    EAGAIN = 11, // Try again
    ENOMEM = 12, // Out of memory
    EINVAL = 22, // Invalid argument
}

impl Errno {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EPERM => "Operation not permitted",
            Self::ESRCH => "No such process",
            Self::EAGAIN => "Try again",
            Self::ENOMEM => "Out of memory",
            Self::EINVAL => "Invalid argument",
        }
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (errno {})", self.as_str(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_display_is_decimal() {
        assert_eq!(Errno::EAGAIN.as_i32(), 11);
        assert_eq!(format!("{}", Errno::EINVAL), "Invalid argument (errno 22)");
    }
}
