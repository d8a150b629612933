//! Framework de testes do kernel
//!
//! Suites executadas dentro do kernel (feature `self_test`), no boot.
//! Testes de host usam `#[test]` normalmente.

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestCase {
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

/// Contagem final de uma suite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SuiteSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Executa suite de testes
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> SuiteSummary {
    crate::kinfo!("=== Executando suite:");
    crate::kinfo!(name);

    let mut summary = SuiteSummary::default();

    for test in tests {
        match (test.func)() {
            TestResult::Pass => {
                crate::kok!(test.name);
                summary.passed += 1;
            }
            TestResult::Fail => {
                crate::kfail!(test.name);
                summary.failed += 1;
            }
            TestResult::Skip => {
                crate::kwarn!("[SKIP]");
                crate::kwarn!(test.name);
                summary.skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", summary.passed as u64);
    if summary.failed > 0 {
        crate::kerror!("Resultados: failed=", summary.failed as u64);
    }
    summary
}
