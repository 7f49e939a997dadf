//! Growable word storage with amortized O(1) growth at either end.
//!
//! `WordBuffer` keeps its live words in `buf[head..]`. The slots in `buf[..head]` are
//! front slack left over from earlier front growth or front truncation, so that
//! prepending words usually does not move the live words. Slack contents are
//! unspecified: every growth path zero-fills the words it exposes.
//!
//! Slack never outgrows the live words for long: once front truncation leaves more
//! slack than live words, the live words move back to `buf[0..]`. A set whose window
//! slides in either direction therefore keeps a heap footprint proportional to its
//! live words.

/// Growth steps of at least this many words are reported through `log::debug!`.
pub(crate) const LARGE_GROWTH_WORDS: usize = 4096;

pub(crate) struct WordBuffer {
    buf: Vec<u64>,
    head: usize,
}

impl WordBuffer {
    pub fn new() -> WordBuffer {
        WordBuffer {
            buf: Vec::new(),
            head: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> WordBuffer {
        WordBuffer {
            buf: Vec::with_capacity(capacity),
            head: 0,
        }
    }

    /// Creates a buffer holding a copy of `words`.
    pub fn from_words(words: &[u64]) -> WordBuffer {
        WordBuffer {
            buf: words.to_vec(),
            head: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len() - self.head
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.buf[self.head..]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u64] {
        &mut self.buf[self.head..]
    }

    /// Ensures room for at least `additional` more words at the back.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Appends `count` zero words.
    pub fn grow_back(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        Self::note_growth("back", count);
        self.buf.resize(self.buf.len() + count, 0);
    }

    /// Prepends `count` zero words.
    ///
    /// When the front slack is too small, the live words are moved once into a new
    /// allocation with `max(count, len)` slots of slack in front of them. Spare
    /// capacity at the back is not carried over.
    pub fn grow_front(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        Self::note_growth("front", count);
        if self.head < count {
            let len = self.len();
            let slack = count.max(len);
            let mut buf = Vec::with_capacity(slack + len);
            buf.resize(slack, 0);
            buf.extend_from_slice(self.as_slice());
            self.buf = buf;
            self.head = slack;
        }
        self.head -= count;
        self.buf[self.head..self.head + count].fill(0);
    }

    /// Removes `count` words from the back.
    pub fn truncate_back(&mut self, count: usize) {
        let count = count.min(self.len());
        let new_len = self.buf.len() - count;
        self.buf.truncate(new_len);
        if self.is_empty() {
            self.clear();
        }
    }

    /// Removes `count` words from the front.
    pub fn truncate_front(&mut self, count: usize) {
        let count = count.min(self.len());
        self.head += count;
        if self.is_empty() {
            self.clear();
        } else if self.head > self.len() {
            self.reclaim_front();
        }
    }

    /// Moves the live words to the start of the allocation, dropping the front slack.
    fn reclaim_front(&mut self) {
        let len = self.len();
        self.buf.copy_within(self.head.., 0);
        self.buf.truncate(len);
        self.head = 0;
    }

    /// Removes all words, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.head = 0;
    }

    /// Replaces the contents with a copy of `words`.
    pub fn assign(&mut self, words: &[u64]) {
        self.buf.clear();
        self.head = 0;
        self.buf.extend_from_slice(words);
    }

    /// Number of heap bytes held by the buffer, including slack and spare capacity.
    pub fn heap_size_bytes(&self) -> usize {
        self.buf.capacity() * std::mem::size_of::<u64>()
    }

    #[inline]
    fn note_growth(end: &str, count: usize) {
        if count >= LARGE_GROWTH_WORDS {
            log::debug!(
                "bit set grows by {count} words at the {end} ({} bytes); \
                 widely scattered values are better kept in a hashed set",
                count * std::mem::size_of::<u64>()
            );
        }
    }
}

impl Clone for WordBuffer {
    fn clone(&self) -> Self {
        WordBuffer::from_words(self.as_slice())
    }
}
