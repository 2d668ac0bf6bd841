use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE_NAME: &str = "amend.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmendConfig {
    pub api_base: String,
    /// Credential (`OC`) issued by the law information service.
    pub oc: String,
    pub page_size: usize,
    pub timeout_secs: u64,
    pub bind_addr: String,
}

impl Default for AmendConfig {
    fn default() -> Self {
        Self {
            api_base: "http://www.law.go.kr".to_string(),
            oc: "chetera".to_string(),
            page_size: 100,
            timeout_secs: 10,
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl AmendConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {CONFIG_FILE_NAME}: {e}"))?;
        let config: AmendConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
        Ok(config)
    }

    /// Reads `$CONFIGS_PATH/amend.json` when present, otherwise starts from the
    /// defaults; `OC` and `LAW_API_BASE` from the environment win either way.
    pub fn load_default() -> Result<Self, String> {
        let mut config = match std::env::var("CONFIGS_PATH") {
            Ok(dir) => {
                let path = Path::new(&dir).join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::load_from_file(path)?
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(oc) = std::env::var("OC") {
            if !oc.trim().is_empty() {
                self.oc = oc.trim().to_string();
            }
        }
        if let Ok(base) = std::env::var("LAW_API_BASE") {
            if !base.trim().is_empty() {
                self.api_base = base.trim().trim_end_matches('/').to_string();
            }
        }
    }
}
