//! Core data structures for the Thousand Character Classic study tools.
//!
//! This crate holds the character dataset model shared by board generation,
//! the game engine, and the application front-end.
//!
//! # Overview
//!
//! 1. **Records** - The immutable character dataset
//!    - [`char_id`]: 1-based character identifiers
//!    - [`record`]: [`CharacterRecord`] (glyph, sound, meaning)
//!
//! 2. **Blocks** - The 8-character unit of selection
//!    - [`block`]: [`BlockIndex`], [`Block`], and the block-validity rule
//!
//! 3. **Pools** - Ordered, validated record collections
//!    - [`pool`]: [`CharacterPool`] with dataset parsing and range selection
//!    - [`range`]: [`IdRange`] and preset buckets
//!
//! 4. **Layout** - Read-only presentation helpers
//!    - [`viewer`]: block-by-block rows for the viewer grid
//!
//! # Examples
//!
//! ```
//! use cheonja_core::{CharacterPool, IdRange};
//!
//! let json = r#"[
//!     {"id": 1, "character": "天", "sound": "천", "meaning": "하늘"},
//!     {"id": 2, "character": "地", "sound": "지", "meaning": "따"}
//! ]"#;
//! let pool = CharacterPool::from_json_str(json).unwrap();
//! assert_eq!(pool.len(), 2);
//!
//! let first = pool.select(IdRange::new(1, 1).unwrap());
//! assert_eq!(first.records()[0].glyph, "天");
//! ```

pub mod block;
pub mod char_id;
pub mod pool;
pub mod range;
pub mod record;
pub mod viewer;

pub use self::{
    block::{BLOCK_LEN, Block, BlockIndex},
    char_id::{CharId, ZeroIdError},
    pool::{CharacterPool, DatasetError},
    range::{IdRange, RangeError},
    record::CharacterRecord,
    viewer::{ViewerRow, viewer_rows},
};
