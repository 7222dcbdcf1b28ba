//! Speed-reading text pipeline
//!
//! This crate turns book text into display-ready words for rapid serial
//! visual presentation: every word gets a display delay and a focal
//! character to align on.
//!
//! # Architecture
//!
//! - **Pipeline**: [`normalize`] cleans whitespace and punctuation and
//!   splits overlong tokens, [`timing`] assigns delays, [`emphasis`] picks
//!   focal characters. [`TextParser`] runs them in order over a
//!   [`ReadableUnit`].
//! - **Reading**: [`reader`] pulls bounded chunks of text from a book's
//!   resource list and maps text offsets back to resource positions.
//! - **Sessions**: [`SessionSnapshot`] captures a paused session as JSON.
//!
//! # Example
//!
//! ```rust
//! use readit_core::{Config, TextParser, TimingCoefficients};
//!
//! let config = Config::builder()
//!     .coefficients(TimingCoefficients::new([10, 14, 20, 16, 25]))
//!     .build()
//!     .unwrap();
//! let parser = TextParser::new(config).unwrap();
//!
//! let unit = parser.parse_text("Hello!!! World??").unwrap();
//! assert_eq!(unit.words(), ["Hello!", "World?"]);
//! assert_eq!(unit.delays(), [20, 20]);
//! ```

pub mod alphabet;
pub mod api;
pub mod emphasis;
pub mod normalize;
pub mod parser;
pub mod readable;
pub mod reader;
pub mod snapshot;
pub mod timing;

pub use alphabet::PriorityTable;
pub use api::{Config, ConfigBuilder, Error, Result};
pub use parser::TextParser;
pub use readable::{ReadableUnit, Word};
pub use reader::{
    ChunkCursor, CursorState, InMemoryBook, ReadingPosition, ResourceDescriptor, ResourceProvider,
};
pub use snapshot::SessionSnapshot;
pub use timing::{DelaySlot, TimingCoefficients};
