pub mod rusage;

use crate::error::CountError;
use std::path::Path;
use std::time::{Duration, Instant};

/// A value together with the wall-clock time it took to produce
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T, E> Timed<Result<T, E>> {
    /// Move the error out so `?` can be applied to a timed fallible call
    pub fn transpose(self) -> Result<Timed<T>, E> {
        let elapsed = self.elapsed;
        self.value.map(|value| Timed { value, elapsed })
    }
}

/// Run `f` and record how long it took
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Read a whole input file into memory
pub fn read_input(path: &Path) -> Result<Vec<u8>, CountError> {
    std::fs::read(path).map_err(|source| CountError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole input file, treating an unreadable file as empty
pub fn read_input_or_empty(path: &Path) -> Vec<u8> {
    match read_input(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("{e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_timed_records_value() {
        let result = timed(|| 21 * 2);
        assert_eq!(result.value, 42);
    }

    #[test]
    fn test_transpose() {
        let ok: Timed<Result<u8, &str>> = Timed {
            value: Ok(1),
            elapsed: Duration::from_millis(3),
        };
        let ok = ok.transpose().unwrap();
        assert_eq!(ok.value, 1);
        assert_eq!(ok.elapsed, Duration::from_millis(3));

        let err: Timed<Result<u8, &str>> = Timed {
            value: Err("boom"),
            elapsed: Duration::ZERO,
        };
        assert_eq!(err.transpose().unwrap_err(), "boom");
    }

    #[test]
    fn test_read_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");
        fs::write(&path, b"hello").unwrap();

        assert_eq!(read_input(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_read_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing");

        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, CountError::FileOpen { .. }));
        assert!(!err.is_fatal());
        assert!(read_input_or_empty(&path).is_empty());
    }
}
