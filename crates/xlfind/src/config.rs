use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use xlfind_search::OUTPUT_FILE_NAME;

use crate::cli::App;

const DEFAULT_CONFIG_FILE: &str = "xlfind.toml";
const ENV_PREFIX: &str = "XLFIND_";

/// Settings resolved from defaults, `xlfind.toml`, `XLFIND_*` variables and
/// finally the command line, later layers winning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub root:         Option<String>,
    #[serde(deserialize_with = "keywords_list_or_str")]
    pub keywords:     Vec<String>,
    pub output:       PathBuf,
    pub parallel:     bool,
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root:         None,
            keywords:     Vec::new(),
            output:       PathBuf::from(OUTPUT_FILE_NAME),
            parallel:     false,
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let file = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        Self::figment(file).extract()
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Apply command-line flags. Keywords given on the command line, inline
    /// or from a file, replace configured ones instead of adding to them.
    pub fn with_overrides(mut self, app: &App) -> Result<Self> {
        if let Some(root) = &app.root {
            self.root = Some(root.clone());
        }
        if let Some(output) = &app.output {
            self.output = output.clone();
        }
        if app.parallel {
            self.parallel = true;
        }
        if app.timeout_secs.is_some() {
            self.timeout_secs = app.timeout_secs;
        }

        let mut keywords = app.keywords.clone();
        if let Some(path) = &app.keywords_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read keywords from '{}'", path.display()))?;
            keywords.push(text);
        }
        if !keywords.is_empty() {
            self.keywords = keywords;
        }
        Ok(self)
    }
}

/// `keywords` is a list in `xlfind.toml`, but `XLFIND_KEYWORDS=sales,po123`
/// arrives as a scalar. Scalars are split on commas.
fn keywords_list_or_str<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct KeywordsVisitor;

    impl<'de> Visitor<'de> for KeywordsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a list of keywords or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect())
        }

        // env values that look like numbers or booleans are typed by figment
        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> { Ok(vec![v.to_string()]) }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> { Ok(vec![v.to_string()]) }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> { Ok(vec![v.to_string()]) }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut keywords = Vec::new();
            while let Some(keyword) = seq.next_element::<String>()? {
                keywords.push(keyword);
            }
            Ok(keywords)
        }
    }

    deserializer.deserialize_any(KeywordsVisitor)
}
