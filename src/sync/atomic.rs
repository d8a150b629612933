//! Operações atômicas

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Wrapper para AtomicBool com API mais limpa
#[derive(Debug, Default)]
pub struct AtomicFlag(AtomicBool);

impl AtomicFlag {
    pub const fn new(value: bool) -> Self {
        Self(AtomicBool::new(value))
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Test-and-set: retorna valor anterior
    pub fn test_and_set(&self) -> bool {
        self.0.swap(true, Ordering::AcqRel)
    }

    /// Test-and-clear: retorna valor anterior
    pub fn test_and_clear(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Contador atômico
#[derive(Debug, Default)]
pub struct AtomicCounter(AtomicU64);

impl AtomicCounter {
    pub const fn new(value: u64) -> Self {
        Self(AtomicU64::new(value))
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, value: u64) {
        self.0.store(value, Ordering::Release);
    }

    /// Incrementa e retorna o valor ANTERIOR
    pub fn inc(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel)
    }

    /// Troca `current` por `new` se o valor ainda for `current`
    pub fn compare_exchange(&self, current: u64, new: u64) -> bool {
        self.0
            .compare_exchange(current, new, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_test_and_set() {
        let flag = AtomicFlag::new(false);
        assert!(!flag.test_and_set());
        assert!(flag.test_and_set());
        assert!(flag.test_and_clear());
        assert!(!flag.get());
    }

    #[test]
    fn test_counter_returns_previous() {
        let counter = AtomicCounter::new(1);
        assert_eq!(counter.inc(), 1);
        assert_eq!(counter.get(), 2);
        counter.set(9);
        assert_eq!(counter.inc(), 9);
    }

    #[test]
    fn test_counter_compare_exchange() {
        let counter = AtomicCounter::new(7);
        assert!(!counter.compare_exchange(3, 0));
        assert!(counter.compare_exchange(7, 0));
        assert_eq!(counter.get(), 0);
    }
}
