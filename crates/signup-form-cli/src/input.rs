// File: src/input.rs
// Purpose: Collect a raw submission from flags, a JSON file, or stdin

use anyhow::{Context, Result};
use signup_form_validation::RawFormInput;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the submission comes from
pub enum Source {
    Flags {
        name: String,
        email: String,
        password: String,
    },
    /// JSON document at a path; `-` reads stdin
    Json(PathBuf),
}

impl Source {
    pub fn read(self) -> Result<RawFormInput> {
        match self {
            Source::Flags {
                name,
                email,
                password,
            } => Ok(RawFormInput::new(name, email, password)),
            Source::Json(path) => {
                let content = read_document(&path)?;
                parse_json(&content)
                    .with_context(|| format!("Failed to parse submission from {:?}", path))
            }
        }
    }
}

fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read submission from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read submission file: {:?}", path))
}

fn parse_json(content: &str) -> Result<RawFormInput> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_flags() {
        let input = Source::Flags {
            name: "ana".to_string(),
            email: "ana@gmail.com".to_string(),
            password: "secret1".to_string(),
        }
        .read()
        .unwrap();
        assert_eq!(input, RawFormInput::new("ana", "ana@gmail.com", "secret1"));
    }

    #[test]
    fn test_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"ana","email":"ana@gmail.com","password":"secret1"}}"#).unwrap();

        let input = Source::Json(file.path().to_path_buf()).read().unwrap();
        assert_eq!(input, RawFormInput::new("ana", "ana@gmail.com", "secret1"));
    }

    #[test]
    fn test_partial_json() {
        let input = parse_json(r#"{"password":"secret1"}"#).unwrap();
        assert_eq!(input, RawFormInput::new("", "", "secret1"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_json("name=ana").is_err());
    }
}
