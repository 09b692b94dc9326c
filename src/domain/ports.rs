use crate::utils::error::Result;

/// Line-delimited source of book titles, one title per line.
///
/// Implementations only locate and read the resource; turning a read failure
/// into an empty catalog is the catalog's job.
pub trait TitleSource {
    /// Human-readable name used in logs and `LoadFailure` messages.
    fn describe(&self) -> String;

    fn read_titles(&mut self) -> Result<Vec<String>>;
}

impl<T: TitleSource + ?Sized> TitleSource for &mut T {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read_titles(&mut self) -> Result<Vec<String>> {
        (**self).read_titles()
    }
}

impl<T: TitleSource + ?Sized> TitleSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read_titles(&mut self) -> Result<Vec<String>> {
        (**self).read_titles()
    }
}

/// Read-only view of the store fields the report and CLI need.
pub trait StoreProfile {
    fn store_name(&self) -> &str;
    fn address(&self) -> Option<&str>;
    fn square_feet(&self) -> u32;
    fn used_books(&self) -> Option<bool>;
    fn is_open(&self) -> bool;
    fn close_time(&self) -> Option<&str>;
}
