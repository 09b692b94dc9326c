use crate::domain::ports::TitleSource;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// 逐行讀取書名，保留原始順序與重複項目
pub fn read_title_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

#[derive(Debug, Clone)]
pub struct FileTitleSource {
    path: PathBuf,
}

impl FileTitleSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TitleSource for FileTitleSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_titles(&mut self) -> Result<Vec<String>> {
        let file = File::open(&self.path)?;
        let titles = read_title_lines(BufReader::new(file))?;
        Ok(titles)
    }
}

/// Wraps an already-opened stream such as stdin or an embedded resource.
pub struct ReaderTitleSource<R> {
    name: String,
    reader: R,
}

impl<R: BufRead> ReaderTitleSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: BufRead> TitleSource for ReaderTitleSource<R> {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read_titles(&mut self) -> Result<Vec<String>> {
        let titles = read_title_lines(&mut self.reader)?;
        Ok(titles)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticTitles {
    titles: Vec<String>,
}

impl StaticTitles {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }
}

impl TitleSource for StaticTitles {
    fn describe(&self) -> String {
        "in-memory title list".to_string()
    }

    fn read_titles(&mut self) -> Result<Vec<String>> {
        Ok(self.titles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_title_lines_keeps_order_and_duplicates() {
        let input = Cursor::new("Dune\nEmma\nDune\n");
        let titles = read_title_lines(input).unwrap();
        assert_eq!(titles, vec!["Dune", "Emma", "Dune"]);
    }

    #[test]
    fn test_read_title_lines_strips_crlf() {
        let input = Cursor::new("Dune\r\nEmma\r\n");
        let titles = read_title_lines(input).unwrap();
        assert_eq!(titles, vec!["Dune", "Emma"]);
    }

    #[test]
    fn test_read_title_lines_rejects_invalid_utf8() {
        let input = Cursor::new(vec![b'D', b'u', 0xff, b'\n']);
        let err = read_title_lines(input).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_file_source_reads_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"Emma\nPersuasion\n").unwrap();

        let mut source = FileTitleSource::new(temp_file.path());
        assert_eq!(source.read_titles().unwrap(), vec!["Emma", "Persuasion"]);
        assert_eq!(source.path(), temp_file.path());
    }

    #[test]
    fn test_file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileTitleSource::new(dir.path().join("missing.txt"));
        assert!(source.read_titles().is_err());
    }

    #[test]
    fn test_reader_source_uses_given_name() {
        let mut source = ReaderTitleSource::new("stdin", Cursor::new("Emma\n"));
        assert_eq!(source.describe(), "stdin");
        assert_eq!(source.read_titles().unwrap(), vec!["Emma"]);
    }
}
