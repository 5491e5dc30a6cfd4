use crate::error::{Result, TallyError};
use crate::{COUNTER_WIDTH, MAX_OPTIONS};

/// Counters persisted in a vote cell, one `u32` per option.
///
/// Storage is a fixed inline array of `MAX_OPTIONS` counters; `option_count`
/// marks how many of them are live. Slots past `option_count` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCellState {
    counts: [u32; MAX_OPTIONS],
    option_count: u8,
}

/// The option a transaction votes for, as declared in its extension field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Selection(pub u8);

impl Selection {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl VoteCellState {
    /// All-zero storage with `option_count` live slots, filled in by the decoders.
    fn zeroed(option_count: usize) -> Result<Self> {
        if option_count > MAX_OPTIONS {
            return Err(TallyError::TooManyOptions {
                len: option_count * COUNTER_WIDTH,
            });
        }
        Ok(Self {
            counts: [0; MAX_OPTIONS],
            option_count: option_count as u8,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_counts(counts: &[u32]) -> Result<Self> {
        let mut state = Self::zeroed(counts.len())?;
        state.counts[..counts.len()].copy_from_slice(counts);
        Ok(state)
    }

    /// Decodes cell data: packed little-endian `u32` counters.
    ///
    /// An empty payload is a valid zero-option state; it simply cannot accept
    /// any vote.
    pub fn from_le_bytes(data: &[u8]) -> Result<Self> {
        if data.len() % COUNTER_WIDTH != 0 {
            return Err(TallyError::Misaligned { len: data.len() });
        }
        let mut state = Self::zeroed(data.len() / COUNTER_WIDTH)?;
        for (slot, chunk) in state
            .counts
            .iter_mut()
            .zip(data.chunks_exact(COUNTER_WIDTH))
        {
            let mut word = [0u8; COUNTER_WIDTH];
            word.copy_from_slice(chunk);
            *slot = u32::from_le_bytes(word);
        }
        Ok(state)
    }

    pub fn option_count(&self) -> usize {
        self.option_count as usize
    }

    /// The live counters, indexed by option.
    pub fn counts(&self) -> &[u32] {
        &self.counts[..self.option_count()]
    }

    pub fn get(&self, selection: Selection) -> Option<u32> {
        self.counts().get(selection.index()).copied()
    }

    /// Returns the state after counting one vote for `selection`.
    ///
    /// The selection is range-checked before any indexing and the increment
    /// uses checked arithmetic, so a counter at `u32::MAX` is rejected rather
    /// than wrapped.
    pub fn with_vote(&self, selection: Selection) -> Result<Self> {
        let current = self
            .get(selection)
            .ok_or(TallyError::SelectionOutOfRange {
                selection: selection.0,
                option_count: self.option_count(),
            })?;
        let incremented = current.checked_add(1).ok_or(TallyError::Overflow {
            index: selection.index(),
        })?;

        let mut next = *self;
        next.counts[selection.index()] = incremented;
        Ok(next)
    }

    /// Index of the first option whose counter differs from `other`.
    ///
    /// Only the options of `self` are compared; callers reject differing
    /// option counts before asking.
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.counts()
            .iter()
            .zip(other.counts.iter())
            .position(|(expected, actual)| expected != actual)
    }
}
