//! Output formatting

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Format `data`; `table` renders the human view
    pub fn format<T: Serialize>(&self, data: &T, table: impl FnOnce(&T) -> String) -> String {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(data).unwrap_or_default(),
            OutputFormat::Yaml => serde_yaml::to_string(data).unwrap_or_default(),
            OutputFormat::Table => table(data),
        }
    }

    pub fn print<T: Serialize>(&self, data: &T, table: impl FnOnce(&T) -> String) {
        println!("{}", self.format(data, table));
    }

    /// Parse the `default_format` config value
    pub fn from_config(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::from_str(v, true).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_formats_ignore_table_renderer() {
        let data = serde_json::json!({ "id": 1 });
        let json = OutputFormat::Json.format(&data, |_| unreachable!());
        assert!(json.contains("\"id\": 1"));
        let yaml = OutputFormat::Yaml.format(&data, |_| unreachable!());
        assert_eq!(yaml.trim(), "id: 1");
        assert_eq!(OutputFormat::Table.format(&data, |_| "table".into()), "table");
    }

    #[test]
    fn test_from_config() {
        assert_eq!(OutputFormat::from_config(Some("json")), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config(Some("YAML")), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_config(Some("csv")), None);
        assert_eq!(OutputFormat::from_config(None), None);
    }
}
