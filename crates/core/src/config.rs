use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::WarmError;

/// Prefix of environment variables read by [`WarmCfg::from_env`].
const ENV_PREFIX: &str = "WARM_";

/// All warm-session parameters. Read from a key/value map or the environment;
/// missing or unparseable values fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmCfg {
    // session
    pub default_warm_mode: bool,
    pub auto_enhance: bool,

    // emotion memory
    pub history_cap: usize,
    pub recent_window: usize,

    // lexicon
    pub lexicon_dir: Option<PathBuf>,
}

impl Default for WarmCfg {
    fn default() -> Self {
        Self {
            default_warm_mode: false,
            auto_enhance: true,
            history_cap: 50,
            recent_window: 10,
            lexicon_dir: None,
        }
    }
}

impl WarmCfg {
    /// Load config from `WARM_*` environment variables
    /// (`WARM_HISTORY_CAP`, `WARM_LEXICON_DIR`, ...).
    pub fn from_env() -> Result<Self, WarmError> {
        Self::from_vars_os(std::env::vars_os())
    }

    /// Like [`WarmCfg::from_vars`] over raw OS strings. Unrelated variables
    /// that are not valid Unicode are skipped; a `WARM_*` one is an error.
    pub fn from_vars_os(
        vars: impl IntoIterator<Item = (OsString, OsString)>,
    ) -> Result<Self, WarmError> {
        let mut pairs = Vec::new();
        for (k, v) in vars {
            if !k.to_string_lossy().starts_with(ENV_PREFIX) {
                continue;
            }
            match (k.into_string(), v.into_string()) {
                (Ok(k), Ok(v)) => pairs.push((k, v)),
                (Ok(k), Err(_)) => return Err(WarmError::NonUnicodeEnv { name: k }),
                (Err(k), _) => {
                    return Err(WarmError::NonUnicodeEnv {
                        name: k.to_string_lossy().into_owned(),
                    });
                }
            }
        }
        Self::from_vars(pairs)
    }

    /// Build from `(name, value)` pairs: `WARM_HISTORY_CAP` maps to
    /// `history_cap`, names without the prefix are ignored.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self, WarmError> {
        let map: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_ascii_lowercase(), v))
            })
            .collect();
        Self::from_map(&map)
    }

    pub fn from_map(m: &HashMap<String, String>) -> Result<Self, WarmError> {
        let d = Self::default();
        let cfg = Self {
            default_warm_mode: get_or(m, "default_warm_mode", d.default_warm_mode),
            auto_enhance: get_or(m, "auto_enhance", d.auto_enhance),
            history_cap: get_or(m, "history_cap", d.history_cap),
            recent_window: get_or(m, "recent_window", d.recent_window),
            lexicon_dir: m
                .get("lexicon_dir")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), WarmError> {
        if self.history_cap == 0 {
            return Err(WarmError::InvalidConfig {
                key: "history_cap",
                value: self.history_cap.to_string(),
            });
        }
        Ok(())
    }

    /// Key, current value and description of every parameter.
    pub fn to_entries(&self) -> Vec<(&str, String, &str)> {
        vec![
            ("default_warm_mode", self.default_warm_mode.to_string(), "Warm mode of a new session"),
            ("auto_enhance", self.auto_enhance.to_string(), "Keyword triggers switch warm mode on"),
            ("history_cap", self.history_cap.to_string(), "Emotion memory entries kept per user"),
            ("recent_window", self.recent_window.to_string(), "Recent emotions shown in a summary"),
            (
                "lexicon_dir",
                self.lexicon_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                "Directory of <category>.txt lexicon overrides",
            ),
        ]
    }
}

fn get_or<T: std::str::FromStr>(map: &HashMap<String, String>, key: &str, default: T) -> T {
    map.get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(WarmCfg::from_map(&HashMap::new()).unwrap(), WarmCfg::default());
    }

    #[test]
    fn values_override_defaults() {
        let cfg = WarmCfg::from_map(&map(&[
            ("default_warm_mode", "true"),
            ("history_cap", " 5 "),
            ("lexicon_dir", "/etc/warm"),
        ]))
        .unwrap();
        assert!(cfg.default_warm_mode);
        assert_eq!(cfg.history_cap, 5);
        assert_eq!(cfg.lexicon_dir, Some(PathBuf::from("/etc/warm")));
        assert!(cfg.auto_enhance);
    }

    #[test]
    fn unparseable_value_falls_back() {
        let cfg = WarmCfg::from_map(&map(&[("recent_window", "lots")])).unwrap();
        assert_eq!(cfg.recent_window, 10);
    }

    #[test]
    fn zero_history_cap_is_rejected() {
        let err = WarmCfg::from_map(&map(&[("history_cap", "0")])).unwrap_err();
        assert!(matches!(err, WarmError::InvalidConfig { key: "history_cap", .. }));
    }

    #[test]
    fn entries_cover_every_field() {
        let cfg = WarmCfg::default();
        let entries = cfg.to_entries();
        let keys: Vec<&str> = entries.iter().map(|e| e.0).collect();
        assert_eq!(
            keys,
            ["default_warm_mode", "auto_enhance", "history_cap", "recent_window", "lexicon_dir"]
        );
    }

    #[test]
    fn env_names_map_to_keys() {
        let cfg = WarmCfg::from_vars([
            ("WARM_HISTORY_CAP".to_string(), "7".to_string()),
            ("WARM_AUTO_ENHANCE".to_string(), "false".to_string()),
            ("HISTORY_CAP".to_string(), "99".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ])
        .unwrap();
        assert_eq!(cfg.history_cap, 7);
        assert!(!cfg.auto_enhance);
        assert_eq!(cfg.recent_window, 10);
    }

    #[test]
    fn env_zero_history_cap_is_rejected() {
        let err = WarmCfg::from_vars([("WARM_HISTORY_CAP".to_string(), "0".to_string())])
            .unwrap_err();
        assert!(matches!(err, WarmError::InvalidConfig { key: "history_cap", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn unrelated_non_unicode_var_is_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let cfg = WarmCfg::from_vars_os([
            (OsString::from("UNRELATED_BYTES"), OsString::from_vec(vec![0xff, 0xfe])),
            (OsString::from("WARM_RECENT_WINDOW"), OsString::from("3")),
        ])
        .unwrap();
        assert_eq!(cfg.recent_window, 3);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_warm_var_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let err = WarmCfg::from_vars_os([(
            OsString::from("WARM_LEXICON_DIR"),
            OsString::from_vec(vec![0xff, 0xfe]),
        )])
        .unwrap_err();
        assert!(matches!(err, WarmError::NonUnicodeEnv { ref name } if name == "WARM_LEXICON_DIR"));
    }

    #[test]
    fn from_env_does_not_fail_on_current_environment() {
        // Test runners do not set WARM_HISTORY_CAP=0.
        if std::env::var_os("WARM_HISTORY_CAP").is_none() {
            assert!(WarmCfg::from_env().is_ok());
        }
    }
}
