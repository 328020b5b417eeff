//! Continent country lists
//!
//! Each continent pool is a text file with one country name per line,
//! named `<Stem><PL|EN>.txt` inside the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::SourceError;
use crate::menu::Language;

/// A selectable country pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Africa,
    Asia,
    Australia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    AllCountries,
    UnrecognizedCountries,
}

impl Continent {
    pub const ALL: [Continent; 8] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Australia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::AllCountries,
        Continent::UnrecognizedCountries,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Australia => "Australia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::AllCountries => "All countries",
            Continent::UnrecognizedCountries => "Unrecognized countries",
        }
    }

    /// File name stem shared by both languages
    pub fn file_stem(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Australia => "Australia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "NorthAmerica",
            Continent::SouthAmerica => "SouthAmerica",
            Continent::AllCountries => "AllCountries",
            Continent::UnrecognizedCountries => "UnrecognizedCountries",
        }
    }

    pub fn file_name(&self, language: Language) -> String {
        format!("{}{}.txt", self.file_stem(), language.file_suffix())
    }
}

/// Anything that can supply the country names of a continent
pub trait CountrySource {
    fn load(&self, continent: Continent, language: Language) -> Result<Vec<String>, SourceError>;
}

/// Parse a country list: one name per line, blank lines skipped
pub fn parse_country_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().trim_start_matches('\u{feff}'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads country lists from a data directory
#[derive(Debug, Clone)]
pub struct FileCountrySource {
    data_dir: PathBuf,
}

impl FileCountrySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, continent: Continent, language: Language) -> PathBuf {
        self.data_dir.join(continent.file_name(language))
    }
}

impl CountrySource for FileCountrySource {
    fn load(&self, continent: Continent, language: Language) -> Result<Vec<String>, SourceError> {
        let path = self.path_for(continent, language);
        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound { path: path.clone() },
            _ => SourceError::Read {
                path: path.clone(),
                source,
            },
        })?;

        let names = parse_country_list(&content);
        debug!("Read {} names from {}", names.len(), path.display());
        Ok(names)
    }
}
