//! Internationalization: localized reply strings for bot commands.
//!
//! Translation tables are one JSON file per language under the configured
//! locales directory, arbitrarily nested; leaves are strings that may
//! carry `{placeholder}` tokens. Lookup walks a dotted key path, then
//! retries the default language, then yields the key itself, so a reply
//! is always produced. Tables load lazily and stay cached for the
//! lifetime of the process; on-disk edits are picked up on restart.

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tarefa_core::error::TarefaError;
use tarefa_core::lang::LanguageCode;
use tarefa_store::LanguagePrefs;
use tracing::warn;

/// Resolves user language preferences and translation keys.
pub struct Translator {
    locales_dir: PathBuf,
    default_lang: LanguageCode,
    prefs: LanguagePrefs,
    tables: RwLock<HashMap<LanguageCode, Arc<Value>>>,
}

impl Translator {
    pub fn new(
        locales_dir: impl Into<PathBuf>,
        default_lang: LanguageCode,
        prefs: LanguagePrefs,
    ) -> Self {
        Self {
            locales_dir: locales_dir.into(),
            default_lang,
            prefs,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// The user's preferred language, falling back to the default when no
    /// preference is recorded. Never fails: an unreadable preference
    /// document reads as "no preference recorded".
    pub fn resolve_language(&self, user_id: &str) -> LanguageCode {
        self.prefs.get(user_id).unwrap_or(self.default_lang)
    }

    /// Record a user's language preference.
    pub async fn set_language(
        &self,
        user_id: &str,
        code: LanguageCode,
    ) -> Result<(), TarefaError> {
        self.prefs.set(user_id, code).await
    }

    /// Look up `key` in the user's language, falling back to the default
    /// language and finally to the key itself, then substitute
    /// `{placeholder}` tokens. Never fails.
    pub fn translate(&self, key: &str, user_id: &str, replacements: &[(&str, &str)]) -> String {
        let lang = self.resolve_language(user_id);
        let resolved = self
            .lookup(lang, key)
            .or_else(|| {
                if lang == self.default_lang {
                    None
                } else {
                    self.lookup(self.default_lang, key)
                }
            })
            .unwrap_or_else(|| key.to_string());
        apply_replacements(&resolved, replacements)
    }

    fn lookup(&self, lang: LanguageCode, key: &str) -> Option<String> {
        resolve_path(&self.table(lang), key)
    }

    /// The cached table for `lang`, loading it on first use. Once loaded,
    /// a table is never reloaded within the process.
    fn table(&self, lang: LanguageCode) -> Arc<Value> {
        {
            let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
            if let Some(table) = tables.get(&lang) {
                return Arc::clone(table);
            }
        }
        let loaded = Arc::new(self.load_table(lang));
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(tables.entry(lang).or_insert(loaded))
    }

    /// Load a translation table from disk. A missing or malformed file
    /// yields an empty table, which the caller caches so the failure is
    /// only hit once per language.
    fn load_table(&self, lang: LanguageCode) -> Value {
        let path = self.locales_dir.join(format!("{lang}.json"));
        if !path.exists() {
            warn!("translation table {} not found", path.display());
            return Value::Object(Default::default());
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(table) => table,
                Err(e) => {
                    warn!("malformed translation table {}: {e}", path.display());
                    Value::Object(Default::default())
                }
            },
            Err(e) => {
                warn!("failed to read translation table {}: {e}", path.display());
                Value::Object(Default::default())
            }
        }
    }
}

/// Walk a dotted key path through a nested table. Returns `None` when a
/// segment is missing or the final value is not a leaf string.
fn resolve_path(root: &Value, key: &str) -> Option<String> {
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    current.as_str().map(str::to_string)
}

/// Substitute `{name}` tokens in a single pass. Matched names are
/// replaced with their value as literal text (braces inside a value are
/// never re-interpreted); unmatched tokens are left verbatim. Names are
/// compared literally, so pattern-special characters need no escaping.
fn apply_replacements(text: &str, replacements: &[(&str, &str)]) -> String {
    if replacements.is_empty() || !text.contains('{') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(i) if after.as_bytes()[i] == b'}' => {
                let name = &after[..i];
                match replacements.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[i + 1..];
            }
            // A nested `{` before any `}`: the first brace opens no token.
            Some(i) => {
                out.push('{');
                out.push_str(&after[..i]);
                rest = &after[i..];
            }
            // No closing brace: the remainder is literal text.
            None => {
                out.push('{');
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
