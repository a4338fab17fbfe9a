//! The `User-Agent` string sent with every request.

use std::fmt;

use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A single `key/name_version (options)` component of the user agent.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Field {
    key: String,
    name: String,
    version: String,
    options: Vec<String>,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}_{}", self.key, self.name, self.version)?;
        if !self.options.is_empty() {
            write!(f, " ({})", self.options.join(" ; "))?;
        }
        Ok(())
    }
}

/// Builds the `User-Agent` header value.
///
/// A fresh user agent carries the `Library`, `OS` and `Language` fields.
/// Integrations can append their own fields; keys must be unique.
///
/// # Example
///
/// ```rust
/// use klarna_checkout::clients::UserAgent;
///
/// let mut user_agent = UserAgent::new();
/// user_agent
///     .add_field("Module", "Magento", "1.9", &["Checkout"])
///     .unwrap();
///
/// let header = user_agent.to_string();
/// assert!(header.starts_with("Library/Klarna.ApiWrapper_"));
/// assert!(header.ends_with("Module/Magento_1.9 (Checkout)"));
///
/// // Keys are unique
/// assert!(user_agent.add_field("Module", "Other", "2.0", &[]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAgent {
    prefix: Option<String>,
    fields: Vec<Field>,
}

impl UserAgent {
    /// Creates a user agent with the default library, OS and language fields.
    #[must_use]
    pub fn new() -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let fields = vec![
            Field {
                key: "Library".to_string(),
                name: "Klarna.ApiWrapper".to_string(),
                version: SDK_VERSION.to_string(),
                options: Vec::new(),
            },
            Field {
                key: "OS".to_string(),
                name: std::env::consts::OS.to_string(),
                version: std::env::consts::ARCH.to_string(),
                options: Vec::new(),
            },
            Field {
                key: "Language".to_string(),
                name: "Rust".to_string(),
                version: rust_version.to_string(),
                options: vec!["Vendor/rust-lang".to_string()],
            },
        ];
        Self {
            prefix: None,
            fields,
        }
    }

    /// Sets a prefix rendered as `<prefix> | ` in front of the fields.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateUserAgentField`] if a field with the
    /// same key already exists.
    pub fn add_field(
        &mut self,
        key: &str,
        name: &str,
        version: &str,
        options: &[&str],
    ) -> Result<(), ConfigError> {
        if self.fields.iter().any(|field| field.key == key) {
            return Err(ConfigError::DuplicateUserAgentField {
                key: key.to_string(),
            });
        }
        self.fields.push(Field {
            key: key.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
        });
        Ok(())
    }
}

impl Default for UserAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix} | ")?;
        }
        let mut first = true;
        for field in &self.fields {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields() {
        let header = UserAgent::new().to_string();
        assert!(header.starts_with(&format!("Library/Klarna.ApiWrapper_{SDK_VERSION} ")));
        assert!(header.contains(&format!(
            "OS/{}_{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        )));
        assert!(header.ends_with(" (Vendor/rust-lang)"));
        assert!(header.contains("Language/Rust_"));
    }

    #[test]
    fn test_field_with_multiple_options() {
        let mut user_agent = UserAgent::new();
        user_agent
            .add_field("Module", "Shop", "4.2", &["Checkout", "Recurring"])
            .unwrap();
        assert!(user_agent
            .to_string()
            .ends_with("Module/Shop_4.2 (Checkout ; Recurring)"));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut user_agent = UserAgent::new();
        let result = user_agent.add_field("Library", "Other", "1.0", &[]);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateUserAgentField { key }) if key == "Library"
        ));
        assert!(!user_agent.to_string().contains("Other"));
    }

    #[test]
    fn test_prefix() {
        let header = UserAgent::new().with_prefix("MyShop/1.0").to_string();
        assert!(header.starts_with("MyShop/1.0 | Library/Klarna.ApiWrapper_"));
    }
}
