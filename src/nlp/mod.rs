//! Query normalization, lemmatization and spell correction.
//!
//! The lemmatizer and the speller are external collaborators consumed as
//! black boxes behind traits, so tests and deployments can substitute them.

mod speller;

pub use speller::YandexSpeller;

use crate::error::Result;
use async_trait::async_trait;

/// Lowercase and collapse all whitespace runs to single spaces.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trait for lemmatization of query text.
#[async_trait]
pub trait Lemmatizer: Send + Sync {
    /// Reduce each token of `text` to its lemma.
    async fn lemmatize(&self, text: &str) -> Result<String>;
}

/// Pass-through lemmatizer for deployments without a lemmatization backend.
pub struct NoopLemmatizer;

#[async_trait]
impl Lemmatizer for NoopLemmatizer {
    async fn lemmatize(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Trait for remote spell correction of query text.
#[async_trait]
pub trait SpellChecker: Send + Sync {
    /// Return the corrected text. Callers treat failures as recoverable and
    /// fall back to the uncorrected input.
    async fn correct(&self, text: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Бинарный   Поиск \n в дереве "), "бинарный поиск в дереве");
        assert_eq!(clean_text(""), "");
    }

    #[tokio::test]
    async fn test_noop_lemmatizer() {
        let lemmatizer = NoopLemmatizer;
        assert_eq!(lemmatizer.lemmatize("пределы").await.unwrap(), "пределы");
    }
}
