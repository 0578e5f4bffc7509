use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../synergysphere.toml");
const ENV_PREFIX: &str = "SYNERGYSPHERE";

/// Application configuration: the embedded `synergysphere.toml` overridden by
/// `SYNERGYSPHERE__<SECTION>__<KEY>` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub toasts: ToastConfig,
    pub projects: ProjectsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppSection {
    pub brand: String,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToastConfig {
    /// How long a toast stays on screen.
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProjectsConfig {
    /// Days until a newly created project is due.
    pub due_in_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app: AppSection {
                brand: "SynergySphere".to_string(),
                log_level: "info".to_string(),
            },
            toasts: ToastConfig { duration_ms: 4000 },
            projects: ProjectsConfig {
                due_in_days: synergysphere_core::project::DEFAULT_DUE_IN_DAYS,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                EMBEDDED_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Configured log level, defaulting to INFO when the value is not recognised.
    pub fn log_level(&self) -> tracing::Level {
        self.app
            .log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
