pub mod catalog;

pub use crate::domain::model::Bookstore;
pub use crate::domain::ports::{StoreProfile, TitleSource};
pub use crate::utils::error::Result;
pub use catalog::{load_titles, LoadStatus, MatchPolicy, TitleCatalog};
