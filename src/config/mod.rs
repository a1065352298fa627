use crate::errors::{AppError, AppResult};
use crate::models::City;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only city → file table. File names are relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityFiles {
    pub chicago: String,
    pub new_york_city: String,
    pub washington: String,
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: "chicago.csv".to_string(),
            new_york_city: "new_york_city.csv".to_string(),
            washington: "washington.csv".to_string(),
        }
    }
}

impl CityFiles {
    pub fn file_for(&self, city: City) -> &str {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub page_size: usize,
    pub separator_char: String,
    pub separator_width: usize,
    pub cities: CityFiles,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: 5,
            separator_char: default_separator_char(),
            separator_width: 40,
            cities: CityFiles::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return defaults when no file is given
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| {
                    AppError::Config(format!("cannot read {}: {e}", p.display()))
                })?;
                tracing::debug!(path = %p.display(), "configuration loaded");
                Self::from_yaml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        for city in City::ALL {
            if self.cities.file_for(city).trim().is_empty() {
                return Err(AppError::Config(format!(
                    "no data file configured for {}",
                    city.as_str()
                )));
            }
        }
        Ok(())
    }

    /// Full path of the file holding `city` trips
    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(self.cities.file_for(city))
    }

    /// Section separator line, e.g. 40 dashes
    pub fn separator(&self) -> String {
        let ch = if self.separator_char.is_empty() {
            default_separator_char()
        } else {
            self.separator_char.clone()
        };
        ch.repeat(self.separator_width)
    }
}
