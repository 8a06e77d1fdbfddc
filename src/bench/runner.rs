//! Benchmark runner.
//!
//! Executes the fixed operation sequence against each container variant
//! and collects timing samples. Variant order is Vec first, then
//! LinkedList; step order per variant is Add, Get, Remove.

use tracing::{debug, info};

use super::measure::measure;
use crate::container::{LinkedContainer, SequentialContainer, VecContainer};
use crate::report::{BenchReport, Operation, Sample};

/// Fill a container with the integers `0..n` via tail appends, untimed.
pub fn fill<C: SequentialContainer>(container: &mut C, n: usize) {
    for i in 0..n {
        container.push_back(i as i64);
    }
}

/// Runs the benchmark sequence over both container variants.
#[derive(Debug, Clone)]
pub struct BenchRunner {
    operations: usize,
}

impl BenchRunner {
    /// Create a runner performing `operations` operations per step.
    #[must_use]
    pub fn new(operations: usize) -> Self {
        Self { operations }
    }

    /// Number of operations per step.
    #[must_use]
    pub fn operations(&self) -> usize {
        self.operations
    }

    /// Time the fill-forward step: append `0..N` at the tail.
    pub fn measure_add<C: SequentialContainer>(&self, container: &mut C) -> Sample {
        let n = self.operations;
        let (_, elapsed) = measure(|| fill(container, n));
        let sample = Sample::new(Operation::Add, container.label(), n, elapsed);
        debug!(variant = sample.variant, elapsed_ms = sample.elapsed_ms(), "fill-forward done");
        sample
    }

    /// Time the read-forward step: read every index `0..N`, discarding
    /// the values.
    pub fn measure_get<C: SequentialContainer>(&self, container: &C) -> Sample {
        let n = self.operations;
        let (_, elapsed) = measure(|| {
            for i in 0..n {
                let _ = container.get(i);
            }
        });
        let sample = Sample::new(Operation::Get, container.label(), n, elapsed);
        debug!(variant = sample.variant, elapsed_ms = sample.elapsed_ms(), "read-forward done");
        sample
    }

    /// Time the drain-backward step: remove index `N-1` down to `0`.
    ///
    /// The loop is written over `(0..N).rev()` so `N == 0` performs
    /// zero iterations rather than underflowing.
    pub fn measure_remove<C: SequentialContainer>(&self, container: &mut C) -> Sample {
        let n = self.operations;
        let (_, elapsed) = measure(|| {
            for i in (0..n).rev() {
                let _ = container.remove_at(i);
            }
        });
        let sample = Sample::new(Operation::Remove, container.label(), n, elapsed);
        debug!(variant = sample.variant, elapsed_ms = sample.elapsed_ms(), "drain-backward done");
        sample
    }

    /// Run all three steps, in order, on a single container instance.
    pub fn run_variant<C: SequentialContainer>(&self, mut container: C) -> [Sample; 3] {
        let add = self.measure_add(&mut container);
        let get = self.measure_get(&container);
        let remove = self.measure_remove(&mut container);
        [add, get, remove]
    }

    /// Run the full suite over both variants and collect the report.
    #[must_use]
    pub fn run(&self) -> BenchReport {
        info!(operations = self.operations, "starting container benchmark suite");
        let mut report = BenchReport::new("container-ops");
        for sample in self.run_variant(VecContainer::new()) {
            report.add(sample);
        }
        for sample in self.run_variant(LinkedContainer::new()) {
            report.add(sample);
        }
        info!(samples = report.samples.len(), "benchmark suite finished");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_produces_increasing_sequence() {
        let mut container = VecContainer::new();
        fill(&mut container, 4);
        assert_eq!(container.len(), 4);
        for i in 0..4 {
            assert_eq!(container.get(i), Some(i as i64));
        }
    }

    #[test]
    fn test_measure_add_sample_shape() {
        let runner = BenchRunner::new(100);
        let mut container = VecContainer::new();
        let sample = runner.measure_add(&mut container);

        assert_eq!(sample.operation, Operation::Add);
        assert_eq!(sample.variant, "Vec");
        assert_eq!(sample.operations, 100);
        assert_eq!(container.len(), 100);
    }

    #[test]
    fn test_measure_remove_drains_container() {
        let runner = BenchRunner::new(50);
        let mut container = LinkedContainer::new();
        fill(&mut container, 50);

        let sample = runner.measure_remove(&mut container);
        assert_eq!(sample.operation, Operation::Remove);
        assert_eq!(sample.variant, "LinkedList");
        assert!(container.is_empty());
    }

    #[test]
    fn test_run_variant_step_order() {
        let runner = BenchRunner::new(10);
        let samples = runner.run_variant(VecContainer::new());
        let ops: Vec<Operation> = samples.iter().map(|s| s.operation).collect();
        assert_eq!(ops, vec![Operation::Add, Operation::Get, Operation::Remove]);
    }

    #[test]
    fn test_run_variant_order_in_report() {
        let report = BenchRunner::new(10).run();
        let variants: Vec<&str> = report.samples.iter().map(|s| s.variant).collect();
        assert_eq!(
            variants,
            vec!["Vec", "Vec", "Vec", "LinkedList", "LinkedList", "LinkedList"]
        );
    }

    #[test]
    fn test_zero_operations_is_noop() {
        let report = BenchRunner::new(0).run();
        assert_eq!(report.samples.len(), 6);
        for sample in &report.samples {
            assert_eq!(sample.operations, 0);
        }
    }
}
