use crate::core::options::validate_options;
use crate::core::{MeetOptions, OptionsInput};
use crate::utils::error::{MeetsError, Result};
use regex::Regex;

/// `[bikermeets radius=35 limit=5]` 的屬性，沒給的沿用已儲存設定
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShortcodeAttributes {
    pub radius: Option<f64>,
    pub limit: Option<i64>,
}

impl ShortcodeAttributes {
    pub fn parse(text: &str) -> Result<Self> {
        let re = Regex::new(r#"(\w+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s\]]+))"#).map_err(
            |e| MeetsError::ConfigError {
                message: format!("Invalid shortcode pattern: {}", e),
            },
        )?;

        let mut attributes = Self::default();
        for caps in re.captures_iter(text) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().trim())
                .unwrap_or_default();

            match &caps[1] {
                "radius" => match value.parse::<f64>() {
                    Ok(radius) if radius.is_finite() => attributes.radius = Some(radius),
                    _ => tracing::warn!("Ignoring invalid shortcode radius '{}'", value),
                },
                "limit" => match value.parse::<i64>() {
                    Ok(limit) => attributes.limit = Some(limit),
                    Err(_) => tracing::warn!("Ignoring invalid shortcode limit '{}'", value),
                },
                other => tracing::debug!("Ignoring unknown shortcode attribute '{}'", other),
            }
        }

        Ok(attributes)
    }

    /// 套用到已儲存設定上，負數同樣改成 0
    pub fn resolve(&self, options: &MeetOptions) -> MeetOptions {
        validate_options(OptionsInput {
            radius: self.radius.unwrap_or(options.radius),
            limit: self.limit.unwrap_or(options.limit as i64),
        })
    }
}
