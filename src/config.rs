use std::collections::HashMap;
use std::env;
use std::fs;

/// KEY=VALUE configuration with environment fallback.
///
/// The file named by `CONFIG_FILE` is parsed line by line; blank lines and
/// `#` comments are skipped, an `export ` prefix and simple quoting are
/// tolerated so a shell env file can be reused as-is. Lookups fall back to
/// the process environment when a key is absent from the file.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn load() -> Self {
        match env::var("CONFIG_FILE") {
            Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
            Err(_) => AppConfig::default(),
        }
    }

    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(Some((key, value))) => {
                    values.insert(key, value);
                }
                Ok(None) => {}
                Err(err) => return Err(format!("Invalid config line {}: {}", idx + 1, err)),
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Millisecond lookup. A value that does not parse is rejected with a
    /// warning rather than silently swallowed.
    pub fn get_millis(&self, key: &str, default: u64) -> u64 {
        match self.get(key) {
            None => default,
            Some(value) => match value.parse::<u64>() {
                Ok(ms) => ms,
                Err(_) => {
                    log::warn!(
                        "Ignoring invalid {} value {:?}, using {} ms",
                        key,
                        value,
                        default
                    );
                    default
                }
            },
        }
    }
}

fn parse_line(line: &str) -> Result<Option<(String, String)>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let Some((key, value)) = trimmed.split_once('=') else {
        return Err(line.to_string());
    };
    let mut value = value.trim().to_string();
    if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
    {
        value = value[1..value.len() - 1].to_string();
    }
    Ok(Some((key.trim().to_string(), value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_handles_comments_quotes_and_exports() {
        assert_eq!(parse_line("# comment").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(
            parse_line("export BASE_URL=\"http://localhost:8080\"").unwrap(),
            Some(("BASE_URL".to_string(), "http://localhost:8080".to_string()))
        );
        assert_eq!(
            parse_line("POLL_INTERVAL_MS = 5000").unwrap(),
            Some(("POLL_INTERVAL_MS".to_string(), "5000".to_string()))
        );
        assert!(parse_line("not a config line").is_err());
    }

    #[test]
    fn get_or_returns_default_for_missing_key() {
        let config = AppConfig::default();
        assert_eq!(config.get_or("NO_SUCH_KEY_12345", "fallback"), "fallback");
    }

    #[test]
    fn get_millis_rejects_unparsable_values() {
        let path = std::env::temp_dir()
            .join(format!("eventboard_config_{}.env", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "POLL_INTERVAL_MS=2500\nBAD_INTERVAL_MS=five seconds\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path.to_string_lossy()).unwrap();
        assert_eq!(config.get_millis("POLL_INTERVAL_MS", 5000), 2500);
        assert_eq!(config.get_millis("BAD_INTERVAL_MS", 5000), 5000);
        assert_eq!(config.get_millis("NO_SUCH_INTERVAL_12345", 5000), 5000);
    }
}
