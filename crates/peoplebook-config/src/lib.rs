use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use peoplebook_core::DEFAULT_COUNTRY;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "peoplebook";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub page_size: usize,
    pub default_country: String,
    pub countries: CountriesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesConfig {
    Builtin,
    File { path: PathBuf },
    Remote { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountriesSourceKind {
    Builtin,
    File,
    Remote,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_country: DEFAULT_COUNTRY.to_string(),
            countries: CountriesConfig::default(),
        }
    }
}

impl Default for CountriesConfig {
    /// The public REST Countries catalog when remote fetching is compiled in,
    /// the built-in list otherwise.
    fn default() -> Self {
        if cfg!(feature = "remote-catalog") {
            CountriesConfig::Remote {
                url: DEFAULT_COUNTRIES_URL.to_string(),
            }
        } else {
            CountriesConfig::Builtin
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid page_size value: {0} (expected 1-{max})", max = MAX_PAGE_SIZE)]
    InvalidPageSize(i64),
    #[error("default_country cannot be empty")]
    InvalidDefaultCountry,
    #[error("invalid countries.{field}: {message}")]
    InvalidCountriesField {
        field: &'static str,
        message: String,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    page_size: Option<i64>,
    default_country: Option<String>,
    countries: Option<CountriesFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountriesFile {
    source: Option<CountriesSourceKind>,
    path: Option<PathBuf>,
    url: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(page_size) = parsed.page_size {
        config.page_size = validate_page_size(page_size)?;
    }

    if let Some(country) = parsed.default_country {
        let trimmed = country.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidDefaultCountry);
        }
        config.default_country = trimmed.to_string();
    }

    if let Some(countries) = parsed.countries {
        config.countries = merge_countries(countries)?;
    }

    Ok(config)
}

pub fn validate_page_size(value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ConfigError::InvalidPageSize(value)),
    }
}

fn merge_countries(file: CountriesFile) -> Result<CountriesConfig> {
    let kind = file.source.unwrap_or(match (&file.path, &file.url) {
        (Some(_), _) => CountriesSourceKind::File,
        (None, Some(_)) => CountriesSourceKind::Remote,
        (None, None) => CountriesSourceKind::Builtin,
    });

    match kind {
        CountriesSourceKind::Builtin => {
            if file.path.is_some() || file.url.is_some() {
                return Err(ConfigError::InvalidCountriesField {
                    field: "source",
                    message: "builtin source takes no path or url".to_string(),
                });
            }
            Ok(CountriesConfig::Builtin)
        }
        CountriesSourceKind::File => {
            let path = file.path.ok_or_else(|| ConfigError::InvalidCountriesField {
                field: "path",
                message: "required for file source".to_string(),
            })?;
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidCountriesField {
                    field: "path",
                    message: "cannot be empty".to_string(),
                });
            }
            Ok(CountriesConfig::File { path })
        }
        CountriesSourceKind::Remote => {
            let url = file
                .url
                .map(|url| url.trim().to_string())
                .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string());
            if !url.starts_with("https://") {
                return Err(ConfigError::InvalidCountriesField {
                    field: "url",
                    message: "must use https".to_string(),
                });
            }
            Ok(CountriesConfig::Remote { url })
        }
    }
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
