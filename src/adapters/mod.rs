// Adapters layer: concrete title sources (file system, streams, in-memory lists).

pub mod title_source;

pub use title_source::{FileTitleSource, ReaderTitleSource, StaticTitles};
