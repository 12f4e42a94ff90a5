//! 主题偏好（持久化在 `theme` 键下）

use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;

/// 主题偏好
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// 存储用的字符串值
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }

    /// 另一个主题
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// 从存储值解析，无法识别时回退到 Light
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for ThemePreference {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(TodoError::invalid_data(format!("unknown theme '{}'", other))),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("Dark".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_from_stored_falls_back_to_light() {
        assert_eq!(ThemePreference::from_stored("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored("solarized"), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(""), ThemePreference::Light);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_display_matches_storage_value() {
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::default().to_string(), "light");
    }
}
