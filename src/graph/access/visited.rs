//! Dense visited sets for single algorithm runs.
//!
//! Vertices are addressed by their dense graph index, so a word-packed bitset
//! replaces the per-run `HashSet<V>` a keyed implementation would need.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set sized for one graph.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
    count: usize,
}

impl VisitedSet {
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            len: bits,
            count: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of marked nodes.
    #[inline(always)]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.len);
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.count += 1;
        true
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        debug_assert!(node < self.len);
        self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }
}
