//! Line readers shared by the puzzle binaries.
//!
//! Every puzzle input is a small text file whose useful lines match one fixed
//! shape. Lines that don't match are dropped instead of rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::{Error, Result};

fn open(path: &Path) -> Result<BufReader<File>> {
    let f = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(f))
}

/// All lines of `path` matching `pattern`, in file order.
pub fn read_matching(path: impl AsRef<Path>, pattern: &str) -> Result<Vec<String>> {
    let re = Regex::new(pattern)?;
    matching_lines(open(path.as_ref())?, &re)
}

/// Runs of consecutive lines of `path` matching `pattern`. Any other line ends a run.
pub fn read_blocks(path: impl AsRef<Path>, pattern: &str) -> Result<Vec<Vec<String>>> {
    let re = Regex::new(pattern)?;
    blocks(open(path.as_ref())?, &re)
}

/// Non-blank `separator`-delimited fields of every line of `path`.
pub fn read_fields(path: impl AsRef<Path>, separator: char) -> Result<Vec<String>> {
    fields(open(path.as_ref())?, separator)
}

pub fn matching_lines<R: BufRead>(reader: R, re: &Regex) -> Result<Vec<String>> {
    let mut lines = vec![];
    for line in reader.lines() {
        let line = line?;
        if re.is_match(&line) {
            lines.push(line);
        }
    }
    Ok(lines)
}

pub fn blocks<R: BufRead>(reader: R, re: &Regex) -> Result<Vec<Vec<String>>> {
    let mut blocks = vec![];
    let mut current = vec![];
    for line in reader.lines() {
        let line = line?;
        if re.is_match(&line) {
            current.push(line);
        } else if !current.is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    Ok(blocks)
}

pub fn fields<R: BufRead>(reader: R, separator: char) -> Result<Vec<String>> {
    let mut fields = vec![];
    for line in reader.lines() {
        let line = line?;
        fields.extend(
            line.split(separator)
                .filter(|f| !f.trim().is_empty())
                .map(str::to_string),
        );
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_drops_other_lines() {
        let re = Regex::new(r"^[.#]+$").unwrap();
        let text = "..#\n\nnot a row\n#..\r\n..\n";
        let lines = matching_lines(text.as_bytes(), &re).unwrap();
        assert_eq!(lines, ["..#", "#..", ".."]);
    }

    #[test]
    fn test_blocks_split_on_non_matching() {
        let re = Regex::new(r"^[.#]+$").unwrap();
        let text = "\n\n#.\n.#\n\n\n##\nxx\n..\n";
        let blocks = blocks(text.as_bytes(), &re).unwrap();
        assert_eq!(blocks, vec![vec!["#.", ".#"], vec!["##"], vec![".."]]);
    }

    #[test]
    fn test_blocks_empty_input() {
        let re = Regex::new(r"^[.#]+$").unwrap();
        assert!(blocks("".as_bytes(), &re).unwrap().is_empty());
    }

    #[test]
    fn test_fields_skip_blank() {
        let text = "rn=1,cm-,, ,qp=3\nab=5,\n";
        let fields = fields(text.as_bytes(), ',').unwrap();
        assert_eq!(fields, ["rn=1", "cm-", "qp=3", "ab=5"]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_matching(&path, ".*") {
            Err(Error::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected open error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "abc\n").unwrap();
        assert!(matches!(read_matching(&path, "("), Err(Error::Pattern(_))));
    }
}
