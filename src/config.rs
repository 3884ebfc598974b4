use crate::model::{Faculty, Semester};
use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub run: RunConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Faculties to report on. All of them when absent.
    pub faculties: Option<Vec<Faculty>>,
    /// Semester to list available courses for. Both when absent.
    pub semester: Option<Semester>,
    pub distribution: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            faculties: None,
            semester: None,
            distribution: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub keep_going: bool,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let content =
            std::fs::read_to_string(file_name).wrap_err("cannot load configuration file")?;
        content.parse()
    }

    pub fn faculties(&self) -> Vec<Faculty> {
        self.report
            .faculties
            .clone()
            .unwrap_or_else(|| Faculty::ALL.to_vec())
    }

    pub fn semesters(&self) -> Vec<Semester> {
        self.report
            .semester
            .map_or_else(|| Semester::ALL.to_vec(), |s| vec![s])
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).wrap_err("cannot parse configuration file")
    }
}
