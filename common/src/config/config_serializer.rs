use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML on disk. An optional header is written as a leading comment block so
/// hand-edited files say what they belong to.
#[derive(Default)]
pub struct YamlConfigSerializer {
    header: Option<String>,
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self { header: None }
    }

    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
        }
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        let body = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        match &self.header {
            Some(header) => {
                let comment: String = header.lines().map(|line| format!("# {}\n", line)).collect();
                Ok(format!("{}{}", comment, body))
            }
            None => Ok(body),
        }
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        width: u32,
        enabled: bool,
    }

    #[test]
    fn test_header_is_written_as_comment_and_ignored_on_read() {
        let serializer = YamlConfigSerializer::with_header("Snake Chase\nedit with care");
        let text = serializer.serialize(&Sample { width: 20, enabled: true }).unwrap();
        assert!(text.starts_with("# Snake Chase\n# edit with care\n"));

        let back: Sample = serializer.deserialize(&text).unwrap();
        assert_eq!(back, Sample { width: 20, enabled: true });
    }

    #[test]
    fn test_deserialize_error_mentions_config() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("width: [not a number");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }
}
