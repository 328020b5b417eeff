//! Country lists held in memory

use std::collections::HashMap;
use std::path::PathBuf;

use crate::countries::{Continent, CountrySource};
use crate::error::SourceError;
use crate::menu::Language;

/// Country lists keyed by continent and language
#[derive(Debug, Clone, Default)]
pub struct MemoryCountrySource {
    lists: HashMap<(Continent, Language), Vec<String>>,
}

impl MemoryCountrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list<S: AsRef<str>>(
        mut self,
        continent: Continent,
        language: Language,
        names: &[S],
    ) -> Self {
        self.lists.insert(
            (continent, language),
            names.iter().map(|n| n.as_ref().to_string()).collect(),
        );
        self
    }
}

impl CountrySource for MemoryCountrySource {
    fn load(&self, continent: Continent, language: Language) -> Result<Vec<String>, SourceError> {
        self.lists
            .get(&(continent, language))
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                path: PathBuf::from(continent.file_name(language)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let source = MemoryCountrySource::new().with_list(
            Continent::Europe,
            Language::English,
            &["France", "Spain"],
        );
        assert_eq!(
            source.load(Continent::Europe, Language::English).unwrap(),
            vec!["France", "Spain"]
        );
        assert!(matches!(
            source.load(Continent::Asia, Language::English),
            Err(SourceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_lists_are_kept_per_language() {
        let source = MemoryCountrySource::new()
            .with_list(Continent::Europe, Language::English, &["France"])
            .with_list(Continent::Europe, Language::Polish, &["Francja"]);
        assert_eq!(
            source.load(Continent::Europe, Language::Polish).unwrap(),
            vec!["Francja"]
        );
        assert_eq!(
            source.load(Continent::Europe, Language::English).unwrap(),
            vec!["France"]
        );
    }
}
