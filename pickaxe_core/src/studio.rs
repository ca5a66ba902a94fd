//! Studio credential store.
//!
//! Studios are discovered once at startup from `PICKAXE_STUDIO_<NAME>`
//! environment variables and held read-only for the life of the process.

use std::env;
use std::fmt;

use log::debug;

/// Environment variable prefix for studio API keys.
pub const STUDIO_ENV_PREFIX: &str = "PICKAXE_STUDIO_";

/// Environment variable naming the default studio.
pub const DEFAULT_STUDIO_ENV: &str = "PICKAXE_DEFAULT_STUDIO";

/// One configured studio: a name and its API key.
#[derive(Debug, Clone, PartialEq)]
pub struct Studio {
    pub name: String,
    pub api_key: String,
}

/// Error raised when no studio can be discovered at startup.
///
/// This is the only fatal error class: the server refuses to start without
/// at least one configured studio.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NoStudios,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoStudios => write!(
                f,
                "No Pickaxe studios configured. \
                 Set environment variables like {}RRHUB=your-api-key",
                STUDIO_ENV_PREFIX
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur while resolving a studio to an API key.
#[derive(Debug, Clone, PartialEq)]
pub enum StudioError {
    /// An explicit studio name was given but is not configured.
    UnknownStudio { name: String, known: Vec<String> },
    /// No studio was given and none can be inferred unambiguously.
    AmbiguousStudio { known: Vec<String> },
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::UnknownStudio { name, known } => write!(
                f,
                "Studio \"{}\" not found. Available studios: {}. \
                 Configure with {}{} environment variable.",
                name,
                known.join(", "),
                STUDIO_ENV_PREFIX,
                name.to_uppercase()
            ),
            StudioError::AmbiguousStudio { known } => write!(
                f,
                "No studio specified and no default set. Available studios: {}. \
                 Set {} or pass 'studio' parameter.",
                known.join(", "),
                DEFAULT_STUDIO_ENV
            ),
        }
    }
}

impl std::error::Error for StudioError {}

/// Immutable mapping from studio names to API keys, plus an optional
/// default studio.
///
/// Constructed once at startup and never mutated afterwards; resolution is
/// case-insensitive on studio names.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    studios: Vec<Studio>,
    default_studio: Option<String>,
}

impl StudioConfig {
    /// Discover studios from the process environment.
    ///
    /// Scans for `PICKAXE_STUDIO_<NAME>` variables and reads
    /// `PICKAXE_DEFAULT_STUDIO` for the default. This is the single point
    /// where ambient state is read; the returned config is self-contained.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars(), env::var(DEFAULT_STUDIO_ENV).ok())
    }

    /// Build a config from an explicit variable snapshot.
    ///
    /// Discovery order is the iteration order of `vars`. Returns
    /// [`ConfigError::NoStudios`] when no `PICKAXE_STUDIO_` key is present.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
        default_studio: Option<String>,
    ) -> Result<Self, ConfigError> {
        let studios: Vec<Studio> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(STUDIO_ENV_PREFIX).map(|name| Studio {
                    name: name.to_string(),
                    api_key: value,
                })
            })
            .collect();

        if studios.is_empty() {
            return Err(ConfigError::NoStudios);
        }

        debug!(
            "Discovered {} studio(s): {}",
            studios.len(),
            studios
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            studios,
            default_studio,
        })
    }

    /// Names of all configured studios, in discovery order.
    pub fn studio_names(&self) -> Vec<&str> {
        self.studios.iter().map(|s| s.name.as_str()).collect()
    }

    /// The effective default studio name, if one exists.
    ///
    /// Either the configured default, or the sole studio's name when exactly
    /// one studio is known. The configured default is reported even when it
    /// does not name a known studio; the mismatch surfaces at resolve time.
    pub fn default_studio(&self) -> Option<&str> {
        match &self.default_studio {
            Some(name) => Some(name.as_str()),
            None if self.studios.len() == 1 => Some(self.studios[0].name.as_str()),
            None => None,
        }
    }

    /// Resolve a studio selection to an API key.
    ///
    /// With an explicit name, the lookup is case-insensitive. Without one,
    /// the configured default is used if set (looked up lazily, so a default
    /// naming an unknown studio fails here, not at startup); otherwise a
    /// sole configured studio is used; otherwise the caller must
    /// disambiguate.
    pub fn resolve(&self, studio: Option<&str>) -> Result<&str, StudioError> {
        let name = match studio {
            Some(name) => name,
            None => match &self.default_studio {
                Some(default) => default.as_str(),
                None if self.studios.len() == 1 => return Ok(&self.studios[0].api_key),
                None => {
                    return Err(StudioError::AmbiguousStudio {
                        known: self.owned_names(),
                    });
                }
            },
        };

        self.studios
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.api_key.as_str())
            .ok_or_else(|| StudioError::UnknownStudio {
                name: name.to_string(),
                known: self.owned_names(),
            })
    }

    fn owned_names(&self) -> Vec<String> {
        self.studios.iter().map(|s| s.name.clone()).collect()
    }
}
