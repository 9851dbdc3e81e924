//! Alias configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty canonical names and language tags
//! - Reject duplicate canonical names within one table level
//! - Reject aliases claimed by more than one sibling entry
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Overlap is checked per level only; the same spelling under different
//!   parents is legitimate
//! - An alias may repeat the entry's own canonical name (common for the
//!   default language); only cross-entry overlap is ambiguous

use thiserror::Error;

use crate::config::schema::{AliasesConfig, SegmentConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty canonical name under `{parent}`")]
    EmptyCanonical { parent: String },

    #[error("duplicate canonical name `{name}` under `{parent}`")]
    DuplicateCanonical { parent: String, name: String },

    #[error("empty language tag on `{parent}/{name}`")]
    EmptyLanguageTag { parent: String, name: String },

    #[error(
        "alias `{alias}` of `{parent}/{second}` is already claimed by `{parent}/{first}`"
    )]
    OverlappingAlias {
        parent: String,
        alias: String,
        first: String,
        second: String,
    },

    #[error("alias `{alias}` of `{parent}/{name}` shadows a sibling canonical name")]
    AliasShadowsCanonical {
        parent: String,
        name: String,
        alias: String,
    },
}

/// Check an alias configuration for semantic problems.
pub fn validate_config(config: &AliasesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    validate_level(&config.segments, "", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_level(segments: &[SegmentConfig], parent: &str, errors: &mut Vec<ValidationError>) {
    // spelling → canonical name of the entry that claimed it first
    let mut claimed: Vec<(&str, &str)> = Vec::new();

    for segment in segments {
        if segment.canonical.is_empty() {
            errors.push(ValidationError::EmptyCanonical {
                parent: level_name(parent),
            });
            continue;
        }

        if segments
            .iter()
            .take_while(|s| !std::ptr::eq(*s, segment))
            .any(|s| s.canonical == segment.canonical)
        {
            errors.push(ValidationError::DuplicateCanonical {
                parent: level_name(parent),
                name: segment.canonical.clone(),
            });
        }

        for language in &segment.aliases {
            if language.lang.is_empty() {
                errors.push(ValidationError::EmptyLanguageTag {
                    parent: level_name(parent),
                    name: segment.canonical.clone(),
                });
            }

            for spelling in &language.spellings {
                if *spelling != segment.canonical
                    && segments.iter().any(|s| s.canonical == *spelling)
                {
                    errors.push(ValidationError::AliasShadowsCanonical {
                        parent: level_name(parent),
                        name: segment.canonical.clone(),
                        alias: spelling.clone(),
                    });
                }

                match claimed.iter().find(|(s, _)| *s == spelling.as_str()) {
                    Some((_, first)) if *first != segment.canonical => {
                        errors.push(ValidationError::OverlappingAlias {
                            parent: level_name(parent),
                            alias: spelling.clone(),
                            first: (*first).to_string(),
                            second: segment.canonical.clone(),
                        });
                    }
                    Some(_) => {}
                    None => claimed.push((spelling.as_str(), segment.canonical.as_str())),
                }
            }
        }

        let child_parent = format!("{parent}/{}", segment.canonical);
        validate_level(&segment.children, &child_parent, errors);
    }
}

fn level_name(parent: &str) -> String {
    if parent.is_empty() {
        "/".to_string()
    } else {
        parent.to_string()
    }
}
