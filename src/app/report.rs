//! Human-readable answers about a store, returned as strings so the caller
//! decides where they go.

use crate::core::catalog::TitleCatalog;
use crate::domain::model::Bookstore;
use crate::domain::ports::StoreProfile;

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("unknown")
}

pub fn store_name_line<P: StoreProfile + ?Sized>(store: &P) -> String {
    format!("Store name: {}", store.store_name())
}

pub fn address_line<P: StoreProfile + ?Sized>(store: &P) -> String {
    format!("Address: {}", or_unknown(store.address()))
}

pub fn size_line<P: StoreProfile + ?Sized>(store: &P) -> String {
    format!("Store size (sqft): {}", store.square_feet())
}

pub fn used_books_line<P: StoreProfile + ?Sized>(store: &P) -> String {
    let used = store
        .used_books()
        .map(|used| used.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!("This store offers used books: {}", used)
}

pub fn open_line<P: StoreProfile + ?Sized>(store: &P) -> String {
    format!("This store is currently open: {}", store.is_open())
}

pub fn close_time_line<P: StoreProfile + ?Sized>(store: &P) -> String {
    format!("Store close time: {}", or_unknown(store.close_time()))
}

pub fn find_title_line(catalog: &TitleCatalog, title: &str) -> String {
    if catalog.contains(title) {
        format!("Yes, we carry '{}'.", title)
    } else {
        format!("No, we do not carry '{}'.", title)
    }
}

pub fn count_line(store_name: &str, catalog: &TitleCatalog) -> String {
    format!(
        "{} offers a selection of {} books.",
        store_name,
        catalog.count()
    )
}

pub fn find_word_line(catalog: &TitleCatalog, word: &str) -> String {
    if catalog.contains_substring(word) {
        format!("Yes, we have a title that contains '{}'.", word)
    } else {
        format!("No, we do not have a title that contains '{}'.", word)
    }
}

/// Full report for one store: profile lines, then one line per lookup.
pub struct StoreReport<'a> {
    store: &'a Bookstore,
}

impl<'a> StoreReport<'a> {
    pub fn new(store: &'a Bookstore) -> Self {
        Self { store }
    }

    pub fn profile_lines(&self) -> Vec<String> {
        vec![
            store_name_line(self.store),
            address_line(self.store),
            used_books_line(self.store),
            size_line(self.store),
            open_line(self.store),
            close_time_line(self.store),
        ]
    }

    pub fn render(&self, titles: &[String], words: &[String]) -> Vec<String> {
        let catalog = self.store.catalog();
        let mut lines = self.profile_lines();

        lines.extend(titles.iter().map(|title| find_title_line(catalog, title)));
        lines.push(count_line(self.store.store_name(), catalog));
        lines.extend(words.iter().map(|word| find_word_line(catalog, word)));

        lines
    }
}
