//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;

    use cs_classics::ClassicsError;
    use cs_classics::io::error::{invalid_parameter, maze_parse_error};

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("step", &0, &"must be between 1 and 5");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'step' = '0': must be between 1 and 5"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_maze_parse_display() {
        let err = maze_parse_error(3, 7, &"unexpected character '?'");
        assert_eq!(
            err.to_string(),
            "Invalid maze at line 3, column 7: unexpected character '?'"
        );
        assert!(matches!(
            err,
            ClassicsError::MazeParse {
                line: 3,
                column: 7,
                ..
            }
        ));
    }

    // I/O failures keep the underlying error reachable through source()
    #[test]
    fn test_file_system_error_chains_source() {
        let err = ClassicsError::FileSystem {
            path: PathBuf::from("mazes/missing.txt"),
            operation: "read maze",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let message = err.to_string();
        assert!(message.contains("read maze"));
        assert!(message.contains("mazes/missing.txt"));
        assert_eq!(err.source().map(ToString::to_string), Some("gone".into()));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::other("disk full");
        let err = ClassicsError::from(io_err);
        match err {
            ClassicsError::FileSystem {
                operation, source, ..
            } => {
                assert_eq!(operation, "unknown");
                assert_eq!(source.to_string(), "disk full");
            }
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}
