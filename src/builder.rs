use crate::utils::default_parallel_threshold;
use crate::TrellisEngine;

/// Fluent configuration for [`TrellisEngine`].
#[derive(Debug, Clone, Default)]
pub struct TrellisEngineBuilder {
    parallel_threshold: Option<usize>,
}

impl TrellisEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }
    /// Compute every column sequentially regardless of state count.
    pub fn sequential(mut self) -> Self {
        self.parallel_threshold = Some(usize::MAX);
        self
    }
    pub fn build(self) -> TrellisEngine {
        match self.parallel_threshold {
            Some(t) => TrellisEngine::with_parallel_threshold(t),
            None => TrellisEngine::with_parallel_threshold(default_parallel_threshold()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrellisEngineBuilder;
    use crate::utils::default_parallel_threshold;

    #[test]
    fn defaults_match_engine_new() {
        let engine = TrellisEngineBuilder::new().build();
        assert_eq!(engine.parallel_threshold(), default_parallel_threshold());
    }

    #[test]
    fn explicit_threshold_wins() {
        let engine = TrellisEngineBuilder::new().with_parallel_threshold(8).build();
        assert_eq!(engine.parallel_threshold(), 8);
        let engine = TrellisEngineBuilder::new()
            .with_parallel_threshold(8)
            .sequential()
            .build();
        assert_eq!(engine.parallel_threshold(), usize::MAX);
    }
}
