//! Numbered menu options
//!
//! Every menu is a closed enum; the variant order is the number the player
//! types, rendered as "<index> - <label>".

use std::fmt;

use crate::countries::Continent;
use crate::error::InputError;

/// Shared behaviour of the numbered menus
pub trait MenuOption: Sized + Copy + 'static {
    /// All options in display order; position equals the option number
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn index(&self) -> usize;

    /// Look up an option by the number the player typed
    fn from_index(index: i64) -> Result<Self, InputError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InputError::NoSuchOption(index))
    }
}

/// Main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    Exit,
    Play,
    AddCountries,
    DeleteCountries,
    SeeCountries,
    PrintScoreboard,
}

impl MenuOption for MainMenuOption {
    const ALL: &'static [Self] = &[
        MainMenuOption::Exit,
        MainMenuOption::Play,
        MainMenuOption::AddCountries,
        MainMenuOption::DeleteCountries,
        MainMenuOption::SeeCountries,
        MainMenuOption::PrintScoreboard,
    ];

    fn label(&self) -> &'static str {
        match self {
            MainMenuOption::Exit => "Exit",
            MainMenuOption::Play => "Play",
            MainMenuOption::AddCountries => "Add more countries",
            MainMenuOption::DeleteCountries => "Delete countries",
            MainMenuOption::SeeCountries => "See added countries",
            MainMenuOption::PrintScoreboard => "Print scoreboard",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Continent submenu used by both add and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinentOption {
    Back,
    Pick(Continent),
}

impl MenuOption for ContinentOption {
    const ALL: &'static [Self] = &[
        ContinentOption::Back,
        ContinentOption::Pick(Continent::Africa),
        ContinentOption::Pick(Continent::Asia),
        ContinentOption::Pick(Continent::Australia),
        ContinentOption::Pick(Continent::Europe),
        ContinentOption::Pick(Continent::NorthAmerica),
        ContinentOption::Pick(Continent::SouthAmerica),
        ContinentOption::Pick(Continent::AllCountries),
        ContinentOption::Pick(Continent::UnrecognizedCountries),
    ];

    fn label(&self) -> &'static str {
        match self {
            ContinentOption::Back => "Back",
            ContinentOption::Pick(continent) => continent.display_name(),
        }
    }

    fn index(&self) -> usize {
        match self {
            ContinentOption::Back => 0,
            ContinentOption::Pick(continent) => *continent as usize + 1,
        }
    }
}

/// Language the country names are typed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Polish,
    English,
}

impl Language {
    /// Suffix of the country list file names for this language
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Language::Polish => "PL",
            Language::English => "EN",
        }
    }
}

impl MenuOption for Language {
    const ALL: &'static [Self] = &[Language::Polish, Language::English];

    fn label(&self) -> &'static str {
        match self {
            Language::Polish => "polski",
            Language::English => "english",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// "<index> - <label>" line for any menu option
pub struct MenuLine<T>(pub T);

impl<T: MenuOption> fmt::Display for MenuLine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0.index(), self.0.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_match_positions<T: MenuOption>() {
        for (i, option) in T::ALL.iter().enumerate() {
            assert_eq!(option.index(), i);
            assert_eq!(T::from_index(i as i64).unwrap().index(), i);
        }
    }

    #[test]
    fn test_indices_match_positions() {
        assert_indices_match_positions::<MainMenuOption>();
        assert_indices_match_positions::<ContinentOption>();
        assert_indices_match_positions::<Language>();
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            MainMenuOption::from_index(6),
            Err(InputError::NoSuchOption(6))
        ));
        assert!(matches!(
            ContinentOption::from_index(-1),
            Err(InputError::NoSuchOption(-1))
        ));
        assert!(Language::from_index(2).is_err());
    }

    #[test]
    fn test_menu_lines() {
        assert_eq!(MenuLine(MainMenuOption::Play).to_string(), "1 - Play");
        assert_eq!(
            MenuLine(ContinentOption::Pick(Continent::NorthAmerica)).to_string(),
            "5 - North America"
        );
        assert_eq!(
            MenuLine(ContinentOption::Pick(Continent::UnrecognizedCountries)).to_string(),
            "8 - Unrecognized countries"
        );
        assert_eq!(MenuLine(Language::English).to_string(), "1 - english");
    }
}
