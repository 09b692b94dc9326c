pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileTitleSource, ReaderTitleSource, StaticTitles};
pub use app::StoreReport;
pub use config::StoreConfig;
pub use crate::core::{load_titles, LoadStatus, MatchPolicy, TitleCatalog};
pub use domain::{model::Bookstore, ports::TitleSource};
pub use utils::error::{BookstoreError, Result};
