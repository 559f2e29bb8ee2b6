use serde::{Deserialize, Serialize};

/// Top-level site configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub personal: PersonalInfo,
    pub app: AppInfo,
    pub animations: AnimationSettings,
    pub speech: SpeechSettings,
    pub content: ContentSettings,
    pub logging: LoggingSettings,
}

/// Owner details shown in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: "Tu Nombre".to_string(),
            role: "Desarrollador Web".to_string(),
            email: "tu-email@ejemplo.com".to_string(),
            github: "https://github.com/Cangregito".to_string(),
            linkedin: "https://linkedin.com/in/tu-perfil".to_string(),
            twitter: "https://twitter.com/tu-usuario".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            title: "ThinkUp - Portafolio Personal".to_string(),
            description: "Portafolio de programación personal".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub scroll_offset: u32,
    pub transition_duration_ms: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            scroll_offset: 100,
            transition_duration_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// BCP 47 tag passed with every utterance.
    pub lang: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            lang: "es-ES".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Person shown when nothing was selected before or the saved id is unknown.
    pub default_person: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            default_person: "jassiel".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `THINKUP_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
