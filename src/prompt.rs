//! Prompt loading and query derivation.

use std::path::Path;

use crate::{DigestError, Result};

/// Reads the full prompt text from `path`.
pub fn load_prompt(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Derives a search query from prompt text.
///
/// Each line is trimmed, blank lines are dropped and the remainder is
/// joined with single spaces.
pub fn derive_query(prompt: &str) -> String {
    prompt
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_derive_query_two_lines() {
        let prompt = "climate policy\n  2024 updates  \n";
        assert_eq!(derive_query(prompt), "climate policy 2024 updates");
    }

    #[test]
    fn test_derive_query_drops_blank_lines() {
        let prompt = "\n\nfirst\n   \n\tsecond\t\n\n";
        assert_eq!(derive_query(prompt), "first second");
    }

    #[test]
    fn test_derive_query_crlf() {
        let prompt = "rust async\r\n  tokio runtime \r\n";
        assert_eq!(derive_query(prompt), "rust async tokio runtime");
    }

    #[test]
    fn test_derive_query_keeps_inner_whitespace() {
        // Only the ends of each line are trimmed.
        let prompt = "a  b\nc";
        assert_eq!(derive_query(prompt), "a  b c");
    }

    #[test]
    fn test_derive_query_keeps_duplicates() {
        let prompt = "rust\nrust\n";
        assert_eq!(derive_query(prompt), "rust rust");
    }

    #[test]
    fn test_derive_query_empty() {
        assert_eq!(derive_query(""), "");
        assert_eq!(derive_query("   \n\t\n"), "");
    }

    #[test]
    fn test_derive_query_idempotent() {
        let prompts = [
            "climate policy\n  2024 updates  ",
            "  single line  ",
            "x\n\n\ny\n z ",
            "",
        ];
        for prompt in prompts {
            let once = derive_query(prompt);
            assert_eq!(derive_query(&once), once);
        }
    }

    #[test]
    fn test_load_prompt_reads_full_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line one\n\nline two\n").unwrap();
        let text = load_prompt(file.path()).unwrap();
        assert_eq!(text, "line one\n\nline two\n");
    }

    #[test]
    fn test_load_prompt_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        match load_prompt(&path) {
            Err(DigestError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_prompt_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        assert!(matches!(load_prompt(file.path()), Err(DigestError::Io { .. })));
    }
}
