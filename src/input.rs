use std::fs;
use std::io::{self, Read};

/// Read the whole input source: a file path, or standard input when the
/// argument is absent or the literal `-`.
pub fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) if path != "-" => fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"modules\": []}}").unwrap();

        let contents = read_source(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(contents, "{\"modules\": []}");
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Some("/nonexistent/terraform.tfstate"));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
