use crate::core::catalog::{MatchPolicy, TitleCatalog};
use crate::domain::ports::{StoreProfile, TitleSource};

/// A bookstore and the titles it carries.
#[derive(Debug, Clone)]
pub struct Bookstore {
    store_name: String,
    address: Option<String>,
    square_feet: u32,
    used_books: Option<bool>,
    open: bool,
    close_time: Option<String>,
    catalog: TitleCatalog,
}

impl Bookstore {
    /// Builds a store with only its name and open flag set, loading the
    /// catalog from `source`.
    pub fn new<S: TitleSource>(store_name: impl Into<String>, open: bool, mut source: S) -> Self {
        Self::with_catalog(store_name, open, TitleCatalog::load(&mut source))
    }

    pub fn with_policy<S: TitleSource>(
        store_name: impl Into<String>,
        open: bool,
        mut source: S,
        policy: MatchPolicy,
    ) -> Self {
        Self::with_catalog(
            store_name,
            open,
            TitleCatalog::load_with_policy(&mut source, policy),
        )
    }

    pub fn with_catalog(store_name: impl Into<String>, open: bool, catalog: TitleCatalog) -> Self {
        Self {
            store_name: store_name.into(),
            address: None,
            square_feet: 0,
            used_books: None,
            open,
            close_time: None,
            catalog,
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn set_store_name(&mut self, store_name: impl Into<String>) {
        self.store_name = store_name.into();
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    pub fn square_feet(&self) -> u32 {
        self.square_feet
    }

    pub fn set_square_feet(&mut self, square_feet: u32) {
        self.square_feet = square_feet;
    }

    pub fn used_books(&self) -> Option<bool> {
        self.used_books
    }

    pub fn set_used_books(&mut self, used_books: bool) {
        self.used_books = Some(used_books);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn close_time(&self) -> Option<&str> {
        self.close_time.as_deref()
    }

    pub fn set_close_time(&mut self, close_time: impl Into<String>) {
        self.close_time = Some(close_time.into());
    }

    pub fn catalog(&self) -> &TitleCatalog {
        &self.catalog
    }

    pub fn carries(&self, title: &str) -> bool {
        self.catalog.contains(title)
    }

    pub fn title_count(&self) -> usize {
        self.catalog.count()
    }

    pub fn has_title_containing(&self, word: &str) -> bool {
        self.catalog.contains_substring(word)
    }
}

impl StoreProfile for Bookstore {
    fn store_name(&self) -> &str {
        Bookstore::store_name(self)
    }

    fn address(&self) -> Option<&str> {
        Bookstore::address(self)
    }

    fn square_feet(&self) -> u32 {
        Bookstore::square_feet(self)
    }

    fn used_books(&self) -> Option<bool> {
        Bookstore::used_books(self)
    }

    fn is_open(&self) -> bool {
        Bookstore::is_open(self)
    }

    fn close_time(&self) -> Option<&str> {
        Bookstore::close_time(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticTitles;

    #[test]
    fn test_new_store_has_only_name_and_open_flag() {
        let store = Bookstore::new("Tor Books", true, StaticTitles::new(["Emma"]));

        assert_eq!(store.store_name(), "Tor Books");
        assert!(store.is_open());
        assert_eq!(store.address(), None);
        assert_eq!(store.square_feet(), 0);
        assert_eq!(store.used_books(), None);
        assert_eq!(store.close_time(), None);
        assert_eq!(store.title_count(), 1);
    }

    #[test]
    fn test_setters_update_fields() {
        let mut store = Bookstore::new("Tor Books", false, StaticTitles::default());
        store.set_store_name("Tor Books Downtown");
        store.set_address("222 S. Elm St., Greensboro, NC 27401");
        store.set_square_feet(1000);
        store.set_used_books(true);
        store.set_open(true);
        store.set_close_time("Never. We're open 24 hours!");

        assert_eq!(store.store_name(), "Tor Books Downtown");
        assert_eq!(store.address(), Some("222 S. Elm St., Greensboro, NC 27401"));
        assert_eq!(store.square_feet(), 1000);
        assert_eq!(store.used_books(), Some(true));
        assert!(store.is_open());
        assert_eq!(store.close_time(), Some("Never. We're open 24 hours!"));
    }

    #[test]
    fn test_store_queries_delegate_to_catalog() {
        let store = Bookstore::with_policy(
            "Tor Books",
            true,
            StaticTitles::new(["Learning Rust", "Dune"]),
            MatchPolicy::CaseInsensitive,
        );

        assert!(store.carries("Dune"));
        assert!(!store.carries("Programming in Java"));
        assert!(store.has_title_containing("learning"));
        assert!(!store.has_title_containing("Java"));
        assert_eq!(store.catalog().match_policy(), MatchPolicy::CaseInsensitive);
    }
}
