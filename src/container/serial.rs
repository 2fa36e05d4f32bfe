// ABOUTME: Serial number allocation with per-kind monotonic counters.
// ABOUTME: Owned by the construction context instead of hidden global state.

use crate::types::{KindCode, SerialNumber};
use std::sync::atomic::{AtomicU64, Ordering};

/// Allocates kind-scoped serial numbers.
///
/// Counters are per kind, start at 1, and never reset or reuse a value, even
/// after a container is dropped. Callers own the allocator and thread it
/// through every container creation, so tests get deterministic serials by
/// constructing their own.
#[derive(Debug, Default)]
pub struct SerialAllocator {
    liquid: AtomicU64,
    gas: AtomicU64,
    refrigerated: AtomicU64,
}

impl SerialAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next serial for the given kind code.
    pub fn next(&self, code: KindCode) -> SerialNumber {
        let counter = match code {
            KindCode::Liquid => &self.liquid,
            KindCode::Gas => &self.gas,
            KindCode::Refrigerated => &self.refrigerated,
        };
        let seq = counter.fetch_add(1, Ordering::Relaxed) + 1;
        SerialNumber::new(code, seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serials_start_at_one_and_increase() {
        let serials = SerialAllocator::new();
        assert_eq!(serials.next(KindCode::Liquid).to_string(), "KON-L-1");
        assert_eq!(serials.next(KindCode::Liquid).to_string(), "KON-L-2");
        assert_eq!(serials.next(KindCode::Liquid).to_string(), "KON-L-3");
    }

    #[test]
    fn counters_are_independent_per_kind() {
        let serials = SerialAllocator::new();
        serials.next(KindCode::Liquid);
        serials.next(KindCode::Liquid);

        assert_eq!(serials.next(KindCode::Gas).to_string(), "KON-G-1");
        assert_eq!(serials.next(KindCode::Refrigerated).to_string(), "KON-C-1");
    }

    #[test]
    fn dropped_serials_are_never_reused() {
        let serials = SerialAllocator::new();
        let first = serials.next(KindCode::Gas);
        drop(first);

        assert_eq!(serials.next(KindCode::Gas).seq(), 2);
    }
}
