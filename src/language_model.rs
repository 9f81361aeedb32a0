//! Language model loading with a preferred/fallback pair.
//!
//! Models are installed as one directory per model under the models
//! directory, each carrying a `meta.json` package descriptor. Loading reads
//! and validates that descriptor; the model is owned by the application run
//! and handed to whoever needs it. Vitals extraction itself is pattern based
//! and does not consult the model.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File describing an installed model package.
pub const META_FILE: &str = "meta.json";

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid model name: {0}")]
    InvalidName(String),

    #[error("Language model not found at: {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid model metadata in {path}: {source}")]
    InvalidMeta {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Package descriptor read from `meta.json`. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelMeta {
    pub lang: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A loaded, read-only language model.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageModel {
    /// Name the model was requested by (its directory name).
    pub name: String,
    pub meta: ModelMeta,
    pub path: PathBuf,
}

/// Load the model installed as `models_dir/<name>/`.
pub fn load_model(models_dir: &Path, name: &str) -> Result<LanguageModel, ModelError> {
    validate_name(name)?;

    let path = models_dir.join(name);
    let meta_path = path.join(META_FILE);
    if !meta_path.is_file() {
        return Err(ModelError::NotFound(path));
    }

    let raw = std::fs::read_to_string(&meta_path)?;
    let meta: ModelMeta = serde_json::from_str(&raw).map_err(|source| ModelError::InvalidMeta {
        path: meta_path.clone(),
        source,
    })?;

    tracing::info!(
        model = name,
        lang = %meta.lang,
        version = %meta.version,
        "Language model loaded"
    );

    Ok(LanguageModel {
        name: name.to_string(),
        meta,
        path,
    })
}

/// Load `preferred`, falling back to `fallback` when it cannot be loaded.
///
/// The fallback is announced on `out` so an interactive user sees it. A
/// failure to load the fallback is returned unchanged.
pub fn load_with_fallback<W: Write>(
    models_dir: &Path,
    preferred: &str,
    fallback: &str,
    out: &mut W,
) -> Result<LanguageModel, ModelError> {
    match load_model(models_dir, preferred) {
        Ok(model) => Ok(model),
        Err(e) => {
            tracing::warn!(model = preferred, "Preferred language model unavailable: {e}");
            writeln!(
                out,
                "Warning: Large language model '{preferred}' not found. Using '{fallback}' instead."
            )?;
            out.flush()?;
            load_model(models_dir, fallback)
        }
    }
}

fn validate_name(name: &str) -> Result<(), ModelError> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(char::is_whitespace);
    if valid {
        Ok(())
    } else {
        Err(ModelError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install(dir: &Path, name: &str, meta: &str) {
        let model_dir = dir.join(name);
        std::fs::create_dir_all(&model_dir).unwrap();
        std::fs::write(model_dir.join(META_FILE), meta).unwrap();
    }

    fn meta_json(name: &str) -> String {
        format!(r#"{{"lang":"en","name":"{name}","version":"3.7.1","pipeline":["ner"]}}"#)
    }

    #[test]
    fn loads_installed_model() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "en_core_web_lg", &meta_json("core_web_lg"));

        let model = load_model(dir.path(), "en_core_web_lg").unwrap();
        assert_eq!(model.name, "en_core_web_lg");
        assert_eq!(model.meta.lang, "en");
        assert_eq!(model.meta.version, "3.7.1");
        assert_eq!(model.meta.description, None);
        assert_eq!(model.path, dir.path().join("en_core_web_lg"));
    }

    #[test]
    fn missing_model_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_model(dir.path(), "en_core_web_lg").unwrap_err();
        assert!(matches!(err, ModelError::NotFound(p) if p.ends_with("en_core_web_lg")));
    }

    #[test]
    fn directory_without_meta_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("en_core_web_md")).unwrap();
        let err = load_model(dir.path(), "en_core_web_md").unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn malformed_meta_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "en_core_web_md", r#"{"lang":"en"}"#);
        let err = load_model(dir.path(), "en_core_web_md").unwrap_err();
        assert!(matches!(err, ModelError::InvalidMeta { .. }));
    }

    #[test]
    fn path_like_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["", "..", "../etc", "a/b", "en core"] {
            let err = load_model(dir.path(), name).unwrap_err();
            assert!(matches!(err, ModelError::InvalidName(_)), "{name:?}");
        }
    }

    #[test]
    fn preferred_model_needs_no_warning() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "en_core_web_lg", &meta_json("core_web_lg"));
        install(dir.path(), "en_core_web_md", &meta_json("core_web_md"));

        let mut out = Vec::new();
        let model =
            load_with_fallback(dir.path(), "en_core_web_lg", "en_core_web_md", &mut out).unwrap();
        assert_eq!(model.name, "en_core_web_lg");
        assert!(out.is_empty());
    }

    #[test]
    fn falls_back_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "en_core_web_md", &meta_json("core_web_md"));

        let mut out = Vec::new();
        let model =
            load_with_fallback(dir.path(), "en_core_web_lg", "en_core_web_md", &mut out).unwrap();
        assert_eq!(model.name, "en_core_web_md");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Warning: Large language model 'en_core_web_lg' not found. Using 'en_core_web_md' instead.\n"
        );
    }

    #[test]
    fn missing_fallback_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = load_with_fallback(dir.path(), "en_core_web_lg", "en_core_web_md", &mut out)
            .unwrap_err();
        assert!(matches!(err, ModelError::NotFound(p) if p.ends_with("en_core_web_md")));
        assert!(!out.is_empty());
    }
}
