use crate::domain::model::{DebugSettings, HelloSettings};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_strings, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest n whose factorial fits in u64.
pub const MAX_FACTORIAL_INPUT: u32 = 20;
pub const MAX_COUNT: u32 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub debug: DebugSettings,
    pub hello: HelloSettings,
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DemoError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FACTORIAL_OF})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "debug.factorial_of",
            self.debug.factorial_of,
            0,
            MAX_FACTORIAL_INPUT,
        )?;
        validate_range("debug.count_to", self.debug.count_to, 0, MAX_COUNT)?;
        validate_non_empty_strings("hello.fruits", &self.hello.fruits)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = DemoConfig::from_toml_str(
            r#"
[debug]
values = [1, 2, 3]

[hello]
num2 = 3
"#,
        )
        .unwrap();

        assert_eq!(config.debug.values, vec![1, 2, 3]);
        assert_eq!(config.debug.factorial_of, 5);
        assert_eq!(config.hello.num1, 10);
        assert_eq!(config.hello.num2, 3);
        assert_eq!(config.hello.fruits.len(), 4);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("DEMO_PROGRAMS_TEST_COUNT", "3");
        let config = DemoConfig::from_toml_str(
            "[debug]\ncount_to = ${DEMO_PROGRAMS_TEST_COUNT}\n",
        )
        .unwrap();
        assert_eq!(config.debug.count_to, 3);
    }

    #[test]
    fn test_unset_env_var_is_a_parse_error() {
        let err = DemoConfig::from_toml_str("[debug]\ncount_to = ${DEMO_PROGRAMS_UNSET_VAR}\n")
            .unwrap_err();
        assert!(matches!(err, DemoError::ConfigError { .. }));
    }

    #[test]
    fn test_validation_rejects_large_factorial() {
        let config = DemoConfig::from_toml_str("[debug]\nfactorial_of = 21\n").unwrap();
        match config.validate() {
            Err(DemoError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "debug.factorial_of");
                assert_eq!(value, "21");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_negative_factorial_is_rejected_at_parse_time() {
        assert!(DemoConfig::from_toml_str("[debug]\nfactorial_of = -1\n").is_err());
    }
}
