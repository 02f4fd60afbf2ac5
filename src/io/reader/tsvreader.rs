/*! TSV sentence pair reader

Reads `source\ttarget` lines, yielding `(source, target)` couples.
Malformed lines are reported with their 1-based line number.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use crate::error::Error;

/// Line-oriented reader over a sentence pair file.
#[derive(Debug)]
pub struct TsvReader<T>
where
    T: Read,
{
    path: PathBuf,
    br: BufReader<T>,
    line: usize,
}

impl TsvReader<File> {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let handler = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            line: None,
            source,
        })?;
        Ok(Self::new(handler, path))
    }
}

impl<T> TsvReader<T>
where
    T: Read,
{
    /// Wrap an existing [Read]. `path` is only used for error reporting.
    pub fn new(inner: T, path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            br: BufReader::new(inner),
            line: 0,
        }
    }

    /// Split a line into a sentence pair.
    fn parse_line(&self, line: &str) -> Result<(String, String), Error> {
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [source, target] => Ok((source.to_string(), target.to_string())),
            _ => Err(Error::MalformedLine {
                path: self.path.clone(),
                line: self.line,
                fields: fields.len(),
            }),
        }
    }
}

impl<T> Iterator for TsvReader<T>
where
    T: Read,
{
    type Item = Result<(String, String), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut s = String::new();
        match self.br.read_line(&mut s) {
            Ok(0) => None,
            Err(source) => {
                self.line += 1;
                Some(Err(Error::Read {
                    path: self.path.clone(),
                    line: Some(self.line),
                    source,
                }))
            }
            Ok(_) => {
                self.line += 1;
                let line = s
                    .strip_suffix('\n')
                    .map(|l| l.strip_suffix('\r').unwrap_or(l))
                    .unwrap_or(&s);
                Some(self.parse_line(line))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::TsvReader;
    use crate::error::Error;

    fn reader(content: &'static str) -> TsvReader<&'static [u8]> {
        TsvReader::new(content.as_bytes(), Path::new("test.tsv"))
    }

    #[test]
    fn read_pairs() {
        let r = reader("hello\tbonjour\ncat\tchat\n");
        let pairs: Vec<(String, String)> = r.map(|p| p.unwrap()).collect();
        assert_eq!(
            pairs,
            vec![
                ("hello".to_string(), "bonjour".to_string()),
                ("cat".to_string(), "chat".to_string())
            ]
        );
    }

    #[test]
    fn read_crlf_and_no_trailing_newline() {
        let r = reader("hello\tbonjour\r\ncat\tchat");
        let pairs: Vec<(String, String)> = r.map(|p| p.unwrap()).collect();
        assert_eq!(pairs[0].1, "bonjour");
        assert_eq!(pairs[1].1, "chat");
    }

    #[test]
    fn keeps_inner_spaces() {
        let mut r = reader("  hello there \t bonjour \n");
        let (src, tgt) = r.next().unwrap().unwrap();
        assert_eq!(src, "  hello there ");
        assert_eq!(tgt, " bonjour ");
    }

    #[test]
    fn missing_tab() {
        let mut r = reader("hello\tbonjour\nno tab here\n");
        assert!(r.next().unwrap().is_ok());
        match r.next().unwrap() {
            Err(Error::MalformedLine { line, fields, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn too_many_tabs() {
        let mut r = reader("a\tb\tc\n");
        assert!(matches!(
            r.next().unwrap(),
            Err(Error::MalformedLine {
                line: 1,
                fields: 3,
                ..
            })
        ));
    }

    #[test]
    fn invalid_utf8() {
        let content: &'static [u8] = b"hello\tbonjour\nbad\t\xff\xfe\n";
        let mut r = TsvReader::new(content, Path::new("d-en-fr-train.tsv"));
        assert!(r.next().unwrap().is_ok());
        match r.next().unwrap() {
            Err(Error::Read { path, line, source }) => {
                assert_eq!(path, Path::new("d-en-fr-train.tsv"));
                assert_eq!(line, Some(2));
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn open_missing_file() {
        let r = TsvReader::from_path(Path::new("fzjoijzoecijzoiej-en-fr-train.tsv"));
        assert!(matches!(r, Err(Error::Read { line: None, .. })));
    }

    #[test]
    fn empty_input() {
        let mut r = reader("");
        assert!(r.next().is_none());
    }
}
