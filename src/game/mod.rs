//! Game controller - menus, rounds and the scoreboard lifecycle
//!
//! Owns the country pool and the leaderboard for the whole run and threads
//! them through every menu action. All failures end in a message and a
//! recovery path; only closed input leaves the main loop early, and even
//! then the scoreboard is saved.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::console::Console;
use crate::constants::*;
use crate::countries::{Continent, CountrySet, CountrySource};
use crate::error::InputError;
use crate::leaderboard::{Leaderboard, LeaderboardStore, Score};
use crate::menu::{ContinentOption, Language, MainMenuOption, MenuLine, MenuOption};
use crate::scoring::ScoreRules;
use crate::session::{GuessOutcome, GuessSession};

/// What a continent pick does to the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolChange {
    Add,
    Remove,
}

/// Whole-game state plus its collaborators
pub struct GameController<R, W, E, S, L> {
    console: Console<R, W, E>,
    source: S,
    store: L,
    rules: ScoreRules,
    language: Language,
    countries: CountrySet,
    leaderboard: Leaderboard,
}

impl<R, W, E, S, L> GameController<R, W, E, S, L>
where
    R: BufRead,
    W: Write,
    E: Write,
    S: CountrySource,
    L: LeaderboardStore,
{
    /// Print the banner, ask for the guessing language and load the
    /// scoreboard (empty if missing or unreadable)
    pub fn new(
        mut console: Console<R, W, E>,
        source: S,
        store: L,
        rules: ScoreRules,
    ) -> Result<Self, InputError> {
        console.print_line(APP_NAME)?;
        let language = Self::choose_language(&mut console)?;
        info!("Guessing language: {}", language.label());

        let leaderboard = match store.load() {
            Ok(leaderboard) => leaderboard,
            Err(e) => {
                warn!("{}", e);
                console.print_error_line(&format!("{} Initializing new scoreboard", e))?;
                Leaderboard::new()
            }
        };

        Ok(Self {
            console,
            source,
            store,
            rules,
            language,
            countries: CountrySet::new(),
            leaderboard,
        })
    }

    fn choose_language(console: &mut Console<R, W, E>) -> Result<Language, InputError> {
        console.print_line("Choose guessing language : ")?;
        for language in Language::ALL {
            console.print_line(&MenuLine(*language).to_string())?;
        }
        console.choose()
    }

    /// Main menu loop until Exit (or end of input). Always ends by saving
    /// the scoreboard.
    pub fn run(&mut self) -> Result<(), InputError> {
        match self.menu_loop() {
            Ok(()) => {}
            Err(InputError::Closed) => info!("Input closed, exiting"),
            Err(e) => {
                // Console is broken; still try to keep the scores
                if let Err(save_error) = self.store.save(&self.leaderboard) {
                    warn!("{}", save_error);
                }
                return Err(e);
            }
        }
        self.save_scoreboard()
    }

    fn menu_loop(&mut self) -> Result<(), InputError> {
        loop {
            self.print_main_menu()?;
            match self.console.choose::<MainMenuOption>()? {
                MainMenuOption::Exit => return Ok(()),
                MainMenuOption::Play => self.play()?,
                MainMenuOption::AddCountries => self.change_pool(PoolChange::Add)?,
                MainMenuOption::DeleteCountries => self.change_pool(PoolChange::Remove)?,
                MainMenuOption::SeeCountries => self.print_countries()?,
                MainMenuOption::PrintScoreboard => self.print_scoreboard()?,
            }
        }
    }

    fn print_main_menu(&mut self) -> Result<(), InputError> {
        self.console.print_line("Choose option: ")?;
        for option in MainMenuOption::ALL {
            self.console.print_line(&MenuLine(*option).to_string())?;
        }
        self.console.print_line(&format!(
            "Already {} countries selected.",
            self.countries.size()
        ))?;
        Ok(())
    }

    fn change_pool(&mut self, change: PoolChange) -> Result<(), InputError> {
        loop {
            self.console.print_line("Choose continent: ")?;
            for option in ContinentOption::ALL {
                self.console.print_line(&MenuLine(*option).to_string())?;
            }
            match self.console.choose::<ContinentOption>()? {
                ContinentOption::Back => return Ok(()),
                ContinentOption::Pick(continent) => self.apply_continent(continent, change)?,
            }
        }
    }

    fn apply_continent(
        &mut self,
        continent: Continent,
        change: PoolChange,
    ) -> Result<(), InputError> {
        let names = match self.source.load(continent, self.language) {
            Ok(names) => names,
            Err(e) => {
                warn!("{}", e);
                self.console.print_error_line(&e.to_string())?;
                return Ok(());
            }
        };

        match change {
            PoolChange::Add => {
                let added = self.countries.add_continent(&names);
                info!("Added {} ({} new countries)", continent.display_name(), added);
                self.console
                    .print_line("Added countries from selected continent.")?;
            }
            PoolChange::Remove => {
                let removed = self.countries.remove_continent(&names);
                info!("Removed {} ({} countries)", continent.display_name(), removed);
                self.console
                    .print_line(&format!("Removed {} countries.", removed))?;
            }
        }
        Ok(())
    }

    fn print_countries(&mut self) -> Result<(), InputError> {
        for name in self.countries.names() {
            self.console.print_line(name)?;
        }
        self.console.print_line(&format!(
            "{} countries loaded",
            self.countries.size()
        ))?;
        Ok(())
    }

    fn print_scoreboard(&mut self) -> Result<(), InputError> {
        if self.leaderboard.is_empty() {
            self.console.print_line("Scoreboard is empty.")?;
        } else {
            self.console.print_text(&self.leaderboard.format_table())?;
        }
        Ok(())
    }

    /// One timed round, then scoring and the top 10 check
    fn play(&mut self) -> Result<(), InputError> {
        let mut session = GuessSession::new(&mut self.countries);
        if let Err(e) = session.start() {
            self.console.print_line(&e.to_string())?;
            return Ok(());
        }

        self.console.print_line("Good luck!")?;
        self.console.print_line(&format!(
            "({} - give up, {} - print guessed countries)",
            GIVE_UP, PRINT_GUESSED
        ))?;

        while !session.is_finished() {
            self.console.print_text("Your guess: ")?;
            let line = match self.console.read_line() {
                Ok(line) => line,
                // Treat a closed console as giving up so the round still scores
                Err(InputError::Closed) => GIVE_UP.to_string(),
                Err(e) => return Err(e),
            };

            match session.submit(&line) {
                GuessOutcome::ListGuessed(names) => {
                    self.console.print_line(&names.join(" "))?;
                }
                GuessOutcome::GaveUp => {
                    let remaining = session.remaining_names();
                    if !remaining.is_empty() {
                        self.console.print_error_line(&format!(
                            "Missing countries: {}",
                            remaining.join(", ")
                        ))?;
                    }
                }
                GuessOutcome::AlreadyGuessed => {
                    self.console.print_line("Already guessed.")?;
                    print_progress(&mut self.console, &session)?;
                }
                GuessOutcome::Correct | GuessOutcome::Miss => {
                    print_progress(&mut self.console, &session)?;
                }
                GuessOutcome::Ignored => {}
            }
        }

        let Some(result) = session.result() else {
            return Ok(());
        };
        let points = self.rules.score(result.elapsed_ms, result.guessed);
        self.console.print_line(&format!(
            "Your time: {} ms, gives you {} score.",
            result.elapsed_ms, points
        ))?;

        self.record_score(Score::from_round(&result, points))
    }

    /// Ask for a name and insert the score if it makes the top 10
    fn record_score(&mut self, score: Score) -> Result<(), InputError> {
        if !self.leaderboard.qualifies(&score) {
            info!("Score {} did not make the scoreboard", score.score());
            return Ok(());
        }

        self.console
            .print_text("Congratulations you're in TOP 10! Insert your name: ")?;
        let name = match self.console.read_line() {
            Ok(name) => name,
            Err(InputError::Closed) => String::new(),
            Err(e) => return Err(e),
        };
        let name = match name.trim() {
            "" => ANONYMOUS_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };

        let points = score.score();
        if let Some(rank) = self.leaderboard.insert(score.named(name.clone())) {
            info!("{} placed #{} with {} points", name, rank, points);
            self.console
                .print_line(&format!("{} is now #{} on the scoreboard.", name, rank))?;
        }
        Ok(())
    }

    /// Save, offering retry or discard until one succeeds
    fn save_scoreboard(&mut self) -> Result<(), InputError> {
        loop {
            let error = match self.store.save(&self.leaderboard) {
                Ok(()) => return Ok(()),
                Err(e) => e,
            };

            warn!("{}", error);
            self.console.print_error_line(&format!(
                "{}. Press Y/y to close without saving, or anything else to try again.",
                error
            ))?;
            let discard = match self.console.read_line() {
                Ok(choice) => choice.trim().eq_ignore_ascii_case("y"),
                Err(InputError::Closed) => true,
                Err(e) => return Err(e),
            };
            if discard {
                warn!("Scoreboard discarded without saving");
                return Ok(());
            }
        }
    }

    pub fn countries(&self) -> &CountrySet {
        &self.countries
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn console(&self) -> &Console<R, W, E> {
        &self.console
    }

    pub fn store(&self) -> &L {
        &self.store
    }
}

fn print_progress<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    session: &GuessSession<'_>,
) -> Result<(), InputError> {
    console.print_line(&format!(
        "You guessed {} countries. {} left.",
        session.guessed(),
        session.remaining()
    ))?;
    Ok(())
}
