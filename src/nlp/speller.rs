//! Remote spell correction via the Yandex speller service.

use super::SpellChecker;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// One correction suggested by the speller.
#[derive(Debug, Clone, Deserialize)]
struct Correction {
    /// Character position of the misspelled span.
    pos: usize,
    /// Character length of the misspelled span.
    len: usize,
    /// Suggested replacements, best first.
    #[serde(default)]
    s: Vec<String>,
}

/// Spell checker backed by the Yandex speller HTTP service.
pub struct YandexSpeller {
    client: reqwest::Client,
    endpoint: String,
    lang: String,
}

impl YandexSpeller {
    /// Create a speller against a specific endpoint and language.
    pub fn new(endpoint: &str, lang: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            lang: lang.to_string(),
        }
    }
}

#[async_trait]
impl SpellChecker for YandexSpeller {
    async fn correct(&self, text: &str) -> Result<String> {
        let corrections: Vec<Correction> = self
            .client
            .get(&self.endpoint)
            .query(&[("text", text), ("lang", self.lang.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Speller returned {} corrections", corrections.len());
        Ok(apply_corrections(text, corrections))
    }
}

/// Apply suggested replacements right to left so earlier positions stay
/// valid while later spans are rewritten.
fn apply_corrections(text: &str, mut corrections: Vec<Correction>) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    corrections.sort_by(|a, b| b.pos.cmp(&a.pos));

    for correction in corrections {
        let Some(replacement) = correction.s.first() else {
            continue;
        };
        let end = correction.pos + correction.len;
        if end > chars.len() {
            continue;
        }
        chars.splice(correction.pos..end, replacement.chars());
    }

    chars.into_iter().collect()
}
