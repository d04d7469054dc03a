use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Lines kept for display; older ones are dropped.
pub const TRAINING_LOG_CAPACITY: usize = 100;

/// Training report lines shared between the input handler that produces
/// them and the surface that shows them.
#[derive(Debug, Clone, Default)]
pub struct TrainingLog {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl TrainingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: impl Into<String>) {
        let mut lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        if lines.len() == TRAINING_LOG_CAPACITY {
            lines.pop_front();
        }
        lines.push_back(line.into());
    }

    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_lines() {
        let log = TrainingLog::new();
        for n in 0..TRAINING_LOG_CAPACITY + 5 {
            log.push(format!("gene={n}"));
        }

        let lines = log.lines();
        assert_eq!(lines.len(), TRAINING_LOG_CAPACITY);
        assert_eq!(lines[0], "gene=5");
        assert_eq!(
            lines.last().map(String::as_str),
            Some(format!("gene={}", TRAINING_LOG_CAPACITY + 4).as_str())
        );
    }

    #[test]
    fn clones_share_lines() {
        let log = TrainingLog::new();
        log.clone().push("loss=0.3, gene=1");
        assert_eq!(log.lines(), vec!["loss=0.3, gene=1".to_string()]);
    }
}
