//! Lacuna - the cursor-movement core of a UTF-8 gap buffer.
//!
//! A gap buffer keeps a run of unused capacity (the gap) at the edit cursor
//! so that cursor-local edits never shift the whole document. This crate
//! implements the movement half of that bargain: the gap slides through the
//! text one character at a time, and the boundary never splits a multi-byte
//! UTF-8 sequence.
//!
//! # Quick Start
//!
//! ```
//! use lacuna::buffer::Direction;
//! use lacuna::buffer::GapBuffer;
//!
//! // Gap of 3 bytes, cursor between 'b' and 'c'
//! let mut buffer = GapBuffer::from_str("abcd", 2, 3);
//! assert_eq!(buffer.to_string(), "abcd");
//!
//! // Slide the gap one character forward
//! buffer.move_gap(Direction::Forward);
//! assert_eq!(buffer.cursor(), 3);
//! assert_eq!(buffer.to_string(), "abcd");
//! ```

pub mod buffer;
pub mod utf8;
