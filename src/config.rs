use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure for task_lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation endpoint configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// SMTP delivery configuration
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// API key; normally supplied via GEMINI_API_KEY
    pub api_key: Option<String>,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Generation length cap
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay host; normally supplied via EMAIL_SMTP_SERVER
    pub smtp_server: Option<String>,

    /// SMTP submission port
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Login username, also used as the From address
    pub username: Option<String>,

    /// Login password
    pub password: Option<String>,
}

// Default value functions
fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_max_output_tokens() -> u32 {
    1500
}
fn default_temperature() -> f32 {
    0.3
}
fn default_smtp_port() -> u16 {
    587
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            smtp_server: None,
            port: default_smtp_port(),
            username: None,
            password: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Load configuration from command line argument or default locations,
    /// then overlay the environment variables on top.
    pub fn load(config_path: &Option<String>) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            Self::from_file(path)?
        } else {
            Self::from_default_locations()
        };
        config.overlay(|key| env::var(key).ok());
        Ok(config)
    }

    fn from_default_locations() -> Self {
        let default_paths = [
            "task_lexicon.toml",
            ".task_lexicon.toml",
            "~/.config/task_lexicon/config.toml",
        ];

        for path in default_paths {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                match Self::from_file(expanded_path.as_ref()) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Warning: Failed to load config from {}: {}", path, e),
                }
            }
        }

        Self::default()
    }

    /// Overlay values from a key lookup (the process environment in
    /// production). Set variables win over file values.
    fn overlay(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(key) = get("GEMINI_API_KEY") {
            self.generation.api_key = Some(key);
        }
        if let Some(server) = get("EMAIL_SMTP_SERVER") {
            self.email.smtp_server = Some(server);
        }
        if let Some(port) = get("EMAIL_PORT") {
            match port.parse() {
                Ok(port) => self.email.port = port,
                Err(_) => eprintln!("Warning: ignoring non-numeric EMAIL_PORT: {}", port),
            }
        }
        if let Some(username) = get("EMAIL_USERNAME") {
            self.email.username = Some(username);
        }
        if let Some(password) = get("EMAIL_PASSWORD") {
            self.email.password = Some(password);
        }
    }
}
