use crate::priority_queue::IndexedMinHeap;
use crate::trace::SwitchTrace;

/// Default capacity when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// Settings for building a heap whose tracing is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    pub capacity: usize,
    pub trace: bool,
}

impl Default for HeapConfig {
    fn default() -> Self {
        HeapConfig {
            capacity: DEFAULT_CAPACITY,
            trace: false,
        }
    }
}

impl HeapConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        HeapConfig {
            capacity,
            ..HeapConfig::default()
        }
    }

    pub fn trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    pub fn build(&self) -> IndexedMinHeap<SwitchTrace> {
        IndexedMinHeap::with_observer(self.capacity, SwitchTrace::from_flag(self.trace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let heap = HeapConfig::default().build();
        assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
        assert_eq!(*heap.observer(), SwitchTrace::Off);
    }

    #[test]
    fn test_builder() {
        let config = HeapConfig::with_capacity(3).trace(true);
        assert_eq!(
            config,
            HeapConfig {
                capacity: 3,
                trace: true
            }
        );

        let mut heap = config.build();
        assert_eq!(*heap.observer(), SwitchTrace::Log);
        heap.insert(2, 1).unwrap();
        heap.insert(1, 2).unwrap();
        assert_eq!(heap.remove_min(), Ok(2));
    }
}
