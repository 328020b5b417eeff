//! Pool of selected countries with per-country guessed flags

use indexmap::IndexMap;

/// Outcome of checking one guess against the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// In the pool and not guessed before this round
    NewlyGuessed,
    /// In the pool but already guessed this round
    AlreadyGuessed,
    /// Not in the pool
    Unknown,
}

/// Normalize a country name: trimmed, uppercase
pub fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Selected countries, keyed by normalized name, in load order
#[derive(Debug, Clone, Default)]
pub struct CountrySet {
    countries: IndexMap<String, bool>,
    guessed: usize,
}

impl CountrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a continent pool. Existing entries keep their flags.
    /// Returns how many names were new.
    pub fn add_continent<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let before = self.countries.len();
        for name in names {
            let name = normalize(name.as_ref());
            if name.is_empty() {
                continue;
            }
            self.countries.entry(name).or_insert(false);
        }
        self.countries.len() - before
    }

    /// Remove every listed name, even if another continent also added it.
    /// Absent names are ignored. Returns how many names were removed.
    pub fn remove_continent<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let before = self.countries.len();
        for name in names {
            if let Some(true) = self.countries.shift_remove(&normalize(name.as_ref())) {
                self.guessed -= 1;
            }
        }
        before - self.countries.len()
    }

    /// Clear every guessed flag before a new round
    pub fn reset_guesses(&mut self) {
        for flag in self.countries.values_mut() {
            *flag = false;
        }
        self.guessed = 0;
    }

    /// Check a guess and mark it. Only `NewlyGuessed` raises the guessed count.
    pub fn guess(&mut self, name: &str) -> GuessResult {
        match self.countries.get_mut(&normalize(name)) {
            Some(flag) if *flag => GuessResult::AlreadyGuessed,
            Some(flag) => {
                *flag = true;
                self.guessed += 1;
                GuessResult::NewlyGuessed
            }
            None => GuessResult::Unknown,
        }
    }

    /// True if the name is in the pool (now guessed). Repeating a correct
    /// guess returns true again without counting twice.
    pub fn mark_guessed(&mut self, name: &str) -> bool {
        self.guess(name) != GuessResult::Unknown
    }

    pub fn contains(&self, name: &str) -> bool {
        self.countries.contains_key(&normalize(name))
    }

    pub fn is_guessed(&self, name: &str) -> bool {
        self.countries.get(&normalize(name)).copied().unwrap_or(false)
    }

    pub fn size(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn guessed_count(&self) -> usize {
        self.guessed
    }

    /// All names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Guessed names in load order
    pub fn guessed(&self) -> Vec<&str> {
        self.filtered(true)
    }

    /// Names not guessed yet, in load order
    pub fn remaining(&self) -> Vec<&str> {
        self.filtered(false)
    }

    fn filtered(&self, guessed: bool) -> Vec<&str> {
        self.countries
            .iter()
            .filter(|(_, flag)| **flag == guessed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_guess() {
        let mut set = CountrySet::new();
        set.add_continent(&["FRANCE", "SPAIN"]);
        assert_eq!(set.size(), 2);

        assert!(set.mark_guessed("france"));
        assert_eq!(set.guessed_count(), 1);

        assert!(!set.mark_guessed("italy"));
        assert_eq!(set.guessed_count(), 1);
        assert_eq!(set.size(), 2);
    }

    #[test]
    fn test_repeat_guess_counts_once() {
        let mut set = CountrySet::new();
        set.add_continent(&["Chile", "Peru"]);

        assert_eq!(set.guess("chile"), GuessResult::NewlyGuessed);
        assert_eq!(set.guess("CHILE"), GuessResult::AlreadyGuessed);
        assert!(set.mark_guessed(" Chile "));
        assert_eq!(set.guessed_count(), 1);
    }

    #[test]
    fn test_add_keeps_existing_flags() {
        let mut set = CountrySet::new();
        set.add_continent(&["Egypt", "Turkey"]);
        set.mark_guessed("Turkey");

        // Turkey also appears in the Asia pool
        let added = set.add_continent(&["turkey", "Japan"]);
        assert_eq!(added, 1);
        assert_eq!(set.size(), 3);
        assert!(set.is_guessed("TURKEY"));
        assert_eq!(set.guessed_count(), 1);
    }

    #[test]
    fn test_remove_without_reference_counting() {
        let mut set = CountrySet::new();
        set.add_continent(&["Russia", "Germany"]);
        set.add_continent(&["Russia", "China"]);

        let removed = set.remove_continent(&["Russia", "China", "Atlantis"]);
        assert_eq!(removed, 2);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["GERMANY"]);
    }

    #[test]
    fn test_remove_guessed_entry_updates_count() {
        let mut set = CountrySet::new();
        set.add_continent(&["Kenya", "Ghana"]);
        set.mark_guessed("kenya");
        set.remove_continent(&["Kenya"]);
        assert_eq!(set.guessed_count(), 0);
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_reset_guesses() {
        let mut set = CountrySet::new();
        set.add_continent(&["Mali", "Chad", "Niger"]);
        set.mark_guessed("mali");
        set.mark_guessed("niger");

        set.reset_guesses();
        assert_eq!(set.guessed_count(), 0);
        assert!(set.guessed().is_empty());
        assert_eq!(set.remaining().len(), 3);
    }

    #[test]
    fn test_listings_follow_load_order() {
        let mut set = CountrySet::new();
        set.add_continent(&["Brazil", "Argentina", "Uruguay", "Chile"]);
        set.mark_guessed("uruguay");
        set.mark_guessed("brazil");
        set.remove_continent(&["Argentina"]);

        assert_eq!(set.guessed(), vec!["BRAZIL", "URUGUAY"]);
        assert_eq!(set.remaining(), vec!["CHILE"]);
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let mut set = CountrySet::new();
        set.add_continent(&["", "  ", "Fiji"]);
        assert_eq!(set.size(), 1);
        assert!(!set.mark_guessed(""));
    }

    #[test]
    fn test_size_matches_unique_names_after_mixed_operations() {
        let mut set = CountrySet::new();
        let europe = ["France", "Spain", "Portugal"];
        let iberia = ["spain", "portugal", "Andorra"];

        set.add_continent(&europe);
        set.add_continent(&iberia);
        assert_eq!(set.size(), 4);
        set.remove_continent(&iberia);
        assert_eq!(set.size(), 1);
        set.remove_continent(&iberia);
        assert_eq!(set.size(), 1);
        set.add_continent(&iberia);
        assert_eq!(set.size(), 4);
    }
}
