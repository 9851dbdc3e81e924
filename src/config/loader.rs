//! Alias configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AliasesConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::resolver::path::PathResolver;

/// Error type for alias file loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate an alias file. `.json` files are parsed as JSON,
/// everything else as TOML.
pub fn load_config(path: &Path) -> Result<AliasesConfig, ConfigError> {
    let content = fs::read_to_string(path)?;

    let config: AliasesConfig = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load an alias file straight into a ready-to-use resolver.
pub fn load_resolver(path: &Path) -> Result<PathResolver, ConfigError> {
    let config = load_config(path)?;
    let table = config.build_table();

    Ok(match config.default_language {
        Some(lang) => PathResolver::with_default_language(table, lang),
        None => PathResolver::new(table),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ALIASES_TOML: &str = r#"
        default_language = "eng"

        [[segments]]
        canonical = "articles"

        [[segments.aliases]]
        lang = "spa"
        spellings = ["artículos", "articulos"]

        [[segments.children]]
        canonical = "the-block"

        [[segments.children.aliases]]
        lang = "fra"
        spellings = ["le-bloc"]
    "#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_toml_alias_file() {
        let file = write_temp(".toml", ALIASES_TOML);
        let resolver = load_resolver(file.path()).unwrap();

        assert_eq!(resolver.default_language(), Some("eng"));
        assert_eq!(
            resolver.normalize("/articulos/le-bloc"),
            "/articles/the-block"
        );
    }

    #[test]
    fn loads_a_json_alias_file() {
        let file = write_temp(
            ".json",
            r#"{
                "segments": [
                    {
                        "canonical": "paintings",
                        "aliases": [{"lang": "spa", "spellings": ["pinturas"]}]
                    }
                ]
            }"#,
        );
        let resolver = load_resolver(file.path()).unwrap();

        assert_eq!(resolver.normalize("/pinturas"), "/paintings");
    }

    #[test]
    fn rejects_an_invalid_alias_file() {
        let file = write_temp(
            ".toml",
            r#"
            [[segments]]
            canonical = "journal"
            [[segments.aliases]]
            lang = "eng"
            spellings = ["blog"]

            [[segments]]
            canonical = "weblog"
            [[segments.aliases]]
            lang = "eng"
            spellings = ["blog"]
            "#,
        );

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("blog"));
    }

    #[test]
    fn reports_parse_errors() {
        let file = write_temp(".toml", "segments = 3");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::Toml(_)
        ));
    }

    #[test]
    fn reports_missing_files() {
        let err = load_config(Path::new("/nonexistent/aliases.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
