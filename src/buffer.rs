//! The gap buffer core: a fixed-capacity byte store with a movable gap.
//!
//! Key design decisions:
//!
//! 1. **Arena + indices**: the store is one `Vec<u8>` allocated at
//!    construction and never resized. The gap is described by two indices
//!    into it, `gap_start` and `gap_end`, so there is no pointer arithmetic
//!    and no sentinel for the gap-at-start case (`gap_start == 0`).
//!
//! 2. **One scalar per move**: a move shifts single bytes across the gap in
//!    a loop until the boundary lands on an ASCII or lead byte. A 4-byte
//!    emoji crosses the gap as one logical move even though it is relocated
//!    byte by byte internally.
//!
//! 3. **Fixed gap**: this core only relocates the gap. Nothing inserts into
//!    it or consumes it, so `gap_end - gap_start` is constant for the life
//!    of the buffer and the store never reallocates.
//!
//! Content is assumed to be well-formed UTF-8. Behavior on malformed input
//! (for example an isolated continuation byte) is unspecified: moves stay
//! in bounds but may stop mid-sequence, and `to_string` falls back to the
//! empty string.

use crate::utf8;

/// The byte written into the gap interior. Carries no meaning; it only
/// makes the gap visible in diagnostics.
pub const PLACEHOLDER: u8 = b'_';

/// Which way to move the gap through the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the text: one character crosses from the right
    /// side of the gap to the left.
    Forward,
    /// Toward the start of the text: one character crosses from the left
    /// side of the gap to the right.
    Backward,
}

/// Error returned when construction preconditions are violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// The cursor does not point inside the initial content.
    CursorOutOfBounds {
        /// The requested cursor position.
        cursor: usize,
        /// The length of the initial content.
        len: usize,
    },
    /// The requested gap size was zero.
    ZeroGap,
}

impl std::fmt::Display for ConstructError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstructError::CursorOutOfBounds { cursor, len } => {
                return write!(f, "cursor {} out of bounds for content of {} bytes", cursor, len);
            }
            ConstructError::ZeroGap => {
                return write!(f, "gap size must be at least 1");
            }
        }
    }
}

impl std::error::Error for ConstructError {}

/// A fixed-capacity byte buffer with a movable gap at the edit cursor.
///
/// The store holds the text in two committed runs separated by the gap:
///
/// ```text
/// [ left text | gap (placeholder) | right text ]
///             ^ gap_start         ^ gap_end
/// ```
///
/// The logical text is the concatenation of the two committed runs. Moves
/// slide the gap one character at a time in either direction; the boundary
/// always rests between complete UTF-8 scalars.
pub struct GapBuffer {
    /// The backing store. Length is fixed at content length + gap size.
    store: Vec<u8>,
    /// Index of the first gap byte. Zero when the gap sits at the start.
    gap_start: usize,
    /// Index of the first committed byte after the gap. Equal to the store
    /// length when the gap sits at the end.
    gap_end: usize,
    /// When set, every shift rewrites the vacated slot with the
    /// placeholder, so the gap interior always reads as fill.
    scrub: bool,
}

impl GapBuffer {
    /// Construct a buffer around `content` with the gap opened at `cursor`.
    ///
    /// Panics if `cursor` does not point inside `content` or if `gap_size`
    /// is zero. Misuse here is a programming error, not a runtime
    /// condition; use [`GapBuffer::try_new`] for the recoverable form.
    pub fn new(content: &[u8], cursor: usize, gap_size: usize) -> GapBuffer {
        match GapBuffer::try_new(content, cursor, gap_size) {
            Ok(buffer) => return buffer,
            Err(error) => panic!("gap buffer construction: {}", error),
        }
    }

    /// Construct a buffer around `content`, or report why the arguments
    /// are unusable.
    ///
    /// The cursor must satisfy `cursor < content.len()` and the gap must
    /// hold at least one byte.
    pub fn try_new(
        content: &[u8],
        cursor: usize,
        gap_size: usize,
    ) -> Result<GapBuffer, ConstructError> {
        if cursor >= content.len() {
            return Err(ConstructError::CursorOutOfBounds {
                cursor,
                len: content.len(),
            });
        }
        if gap_size == 0 {
            return Err(ConstructError::ZeroGap);
        }

        let mut store = Vec::with_capacity(content.len() + gap_size);
        store.extend_from_slice(&content[..cursor]);
        store.resize(cursor + gap_size, PLACEHOLDER);
        store.extend_from_slice(&content[cursor..]);

        return Ok(GapBuffer {
            store,
            gap_start: cursor,
            gap_end: cursor + gap_size,
            scrub: false,
        });
    }

    /// Construct a buffer from a string slice. `cursor` is a byte offset
    /// into the encoded text.
    ///
    /// Panics under the same conditions as [`GapBuffer::new`].
    pub fn from_str(text: &str, cursor: usize, gap_size: usize) -> GapBuffer {
        return GapBuffer::new(text.as_bytes(), cursor, gap_size);
    }

    /// The logical length in bytes: the text with the gap removed.
    pub fn len(&self) -> usize {
        return self.store.len() - self.gap_size();
    }

    /// Return true if the buffer holds no text. Construction requires
    /// non-empty content, so this only goes true if that precondition is
    /// ever relaxed.
    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// The gap size in bytes. Constant for the buffer's lifetime.
    pub fn gap_size(&self) -> usize {
        return self.gap_end - self.gap_start;
    }

    /// The total store size: logical length plus gap size.
    pub fn capacity(&self) -> usize {
        return self.store.len();
    }

    /// The cursor position: the byte offset of the gap within the logical
    /// text. Everything before it sits left of the gap.
    pub fn cursor(&self) -> usize {
        return self.gap_start;
    }

    /// Enable or disable placeholder scrubbing. When enabled, each shift
    /// rewrites the slot it vacates, keeping the gap interior readable in
    /// diagnostics at the cost of one extra write per byte moved.
    pub fn set_scrub(&mut self, scrub: bool) {
        self.scrub = scrub;
    }

    /// Return true if placeholder scrubbing is enabled.
    pub fn scrub_enabled(&self) -> bool {
        return self.scrub;
    }

    /// Move the gap one character in the given direction.
    ///
    /// Exactly one scalar (1-4 bytes) crosses the gap. If the gap already
    /// sits at the buffer extremity in that direction, this is a silent
    /// no-op: repeated calls at the edge change nothing.
    pub fn move_gap(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => {
                // Blocked: nothing remains in front of the gap.
                if self.gap_end == self.store.len() {
                    return;
                }
                // The byte at gap_end starts a scalar. Shift it, then keep
                // shifting while continuation bytes of the same scalar are
                // exposed at the new gap_end.
                self.shift_forward();
                while self.gap_end < self.store.len()
                    && utf8::is_continuation(self.store[self.gap_end])
                {
                    self.shift_forward();
                }
            }
            Direction::Backward => {
                // Blocked: nothing remains behind the gap.
                if self.gap_start == 0 {
                    return;
                }
                // The byte at gap_start - 1 is the last byte of a scalar.
                // Shift bytes rightward until the scalar's lead byte (or an
                // ASCII byte) has crossed.
                loop {
                    let moved = self.store[self.gap_start - 1];
                    self.shift_backward();
                    if utf8::is_boundary(moved) {
                        break;
                    }
                    // Malformed input could run continuations to the very
                    // start; stop rather than index past it.
                    if self.gap_start == 0 {
                        break;
                    }
                }
            }
        }
    }

    /// Shift a single code unit from the front of the gap to the back.
    fn shift_forward(&mut self) {
        self.store[self.gap_start] = self.store[self.gap_end];
        if self.scrub {
            self.store[self.gap_end] = PLACEHOLDER;
        }
        self.gap_start += 1;
        self.gap_end += 1;
    }

    /// Shift a single code unit from the back of the gap to the front.
    fn shift_backward(&mut self) {
        self.store[self.gap_end - 1] = self.store[self.gap_start - 1];
        if self.scrub {
            self.store[self.gap_start - 1] = PLACEHOLDER;
        }
        self.gap_start -= 1;
        self.gap_end -= 1;
    }

    /// Materialize the logical text: the two committed runs joined, gap
    /// excluded. Does not mutate the buffer.
    pub fn to_string(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.store[..self.gap_start]);
        bytes.extend_from_slice(&self.store[self.gap_end..]);
        return String::from_utf8(bytes).unwrap_or_default();
    }

    /// Render the buffer with a `|` marker at the gap, for debugging and
    /// tests: left text, marker, right text.
    pub fn debug_render(&self) -> String {
        let left = String::from_utf8_lossy(&self.store[..self.gap_start]);
        let right = String::from_utf8_lossy(&self.store[self.gap_end..]);
        return format!("{}|{}", left, right);
    }
}

impl std::fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "GapBuffer({})", self.debug_render());
    }
}
