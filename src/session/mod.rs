//! Guess session - one timed guessing round over the country pool
//!
//! Ready -> Running -> {Completed, GaveUp}. The session borrows the pool for
//! the whole round and only flips guessed flags; it never adds or removes
//! countries. Both terminal phases yield a result, so giving up keeps the
//! countries already guessed.

use std::time::Instant;

use tracing::{debug, info};

use crate::constants::{GIVE_UP, PRINT_GUESSED};
use crate::countries::{CountrySet, GuessResult, normalize};
use crate::error::SessionError;

/// Round phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Created, timer not started
    #[default]
    Ready,
    /// Accepting guesses
    Running,
    /// Every country was guessed
    Completed,
    /// Player entered the give-up sentinel
    GaveUp,
}

impl SessionPhase {
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::GaveUp)
    }
}

/// How one line of input was classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New country guessed
    Correct,
    /// Country was already guessed this round; not counted again
    AlreadyGuessed,
    /// Not in the pool
    Miss,
    /// Print-guessed sentinel: names guessed so far, in load order
    ListGuessed(Vec<String>),
    /// Give-up sentinel: round over
    GaveUp,
    /// Input arrived while the session was not running
    Ignored,
}

/// Final numbers of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub elapsed_ms: u64,
    pub guessed: usize,
    pub total: usize,
    pub gave_up: bool,
}

/// One guessing round
#[derive(Debug)]
pub struct GuessSession<'a> {
    countries: &'a mut CountrySet,
    phase: SessionPhase,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    guessed: usize,
}

impl<'a> GuessSession<'a> {
    /// Create a session over the pool. Guess flags are cleared so every
    /// round starts from zero.
    pub fn new(countries: &'a mut CountrySet) -> Self {
        countries.reset_guesses();
        Self {
            countries,
            phase: SessionPhase::Ready,
            started_at: None,
            ended_at: None,
            guessed: 0,
        }
    }

    /// Start the round timer now
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.start_at(Instant::now())
    }

    /// Start the round timer at a given instant
    pub fn start_at(&mut self, now: Instant) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Ready {
            return Err(SessionError::AlreadyStarted);
        }
        if self.countries.is_empty() {
            return Err(SessionError::EmptyPool);
        }
        self.started_at = Some(now);
        self.phase = SessionPhase::Running;
        info!("Round started with {} countries", self.countries.size());
        Ok(())
    }

    /// Classify one guess, timestamped now
    pub fn submit(&mut self, input: &str) -> GuessOutcome {
        self.submit_at(input, Instant::now())
    }

    /// Classify one guess, timestamped at `now`
    pub fn submit_at(&mut self, input: &str, now: Instant) -> GuessOutcome {
        if self.phase != SessionPhase::Running {
            return GuessOutcome::Ignored;
        }

        let guess = normalize(input);
        let outcome = if guess == GIVE_UP {
            self.finish(SessionPhase::GaveUp, now);
            GuessOutcome::GaveUp
        } else if guess == PRINT_GUESSED {
            GuessOutcome::ListGuessed(
                self.countries
                    .guessed()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            match self.countries.guess(&guess) {
                GuessResult::NewlyGuessed => {
                    self.guessed += 1;
                    if self.guessed == self.countries.size() {
                        self.finish(SessionPhase::Completed, now);
                    }
                    GuessOutcome::Correct
                }
                GuessResult::AlreadyGuessed => GuessOutcome::AlreadyGuessed,
                GuessResult::Unknown => GuessOutcome::Miss,
            }
        };

        debug!("Guess {:?} -> {:?}", guess, outcome);
        outcome
    }

    fn finish(&mut self, phase: SessionPhase, now: Instant) {
        self.phase = phase;
        self.ended_at = Some(now);
        if let Some(result) = self.result() {
            info!(
                "Round ended ({:?}): {}/{} in {} ms",
                phase, result.guessed, result.total, result.elapsed_ms
            );
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn guessed(&self) -> usize {
        self.guessed
    }

    pub fn remaining(&self) -> usize {
        self.countries.size() - self.guessed
    }

    /// Countries still unguessed, in load order
    pub fn remaining_names(&self) -> Vec<&str> {
        self.countries.remaining()
    }

    /// Elapsed time and guess count; only available once finished
    pub fn result(&self) -> Option<RoundResult> {
        if !self.phase.is_finished() {
            return None;
        }
        let (start, end) = (self.started_at?, self.ended_at?);
        Some(RoundResult {
            elapsed_ms: end.saturating_duration_since(start).as_millis() as u64,
            guessed: self.guessed,
            total: self.countries.size(),
            gave_up: self.phase == SessionPhase::GaveUp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn pool(names: &[&str]) -> CountrySet {
        let mut set = CountrySet::new();
        set.add_continent(names);
        set
    }

    #[test]
    fn test_give_up_keeps_partial_credit() {
        let mut set = pool(&["France", "Spain"]);
        let mut session = GuessSession::new(&mut set);
        let t0 = Instant::now();
        session.start_at(t0).unwrap();

        assert_eq!(
            session.submit_at("FRANCE", t0 + Duration::from_millis(800)),
            GuessOutcome::Correct
        );
        assert_eq!(
            session.submit_at("Q", t0 + Duration::from_millis(1500)),
            GuessOutcome::GaveUp
        );

        assert_eq!(session.phase(), SessionPhase::GaveUp);
        let result = session.result().unwrap();
        assert_eq!(result.guessed, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.elapsed_ms, 1500);
        assert!(result.gave_up);
        assert_eq!(session.remaining_names(), vec!["SPAIN"]);
    }

    #[test]
    fn test_completes_when_all_guessed() {
        let mut set = pool(&["Chile", "Peru"]);
        let mut session = GuessSession::new(&mut set);
        let t0 = Instant::now();
        session.start_at(t0).unwrap();

        session.submit_at("peru", t0 + Duration::from_millis(100));
        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(session.result().is_none());

        session.submit_at("chile", t0 + Duration::from_millis(2_000));
        assert_eq!(session.phase(), SessionPhase::Completed);

        let result = session.result().unwrap();
        assert_eq!(result.guessed, 2);
        assert_eq!(result.elapsed_ms, 2_000);
        assert!(!result.gave_up);
    }

    #[test]
    fn test_repeat_guess_does_not_complete_round() {
        let mut set = pool(&["Chile", "Peru"]);
        let mut session = GuessSession::new(&mut set);
        session.start().unwrap();

        assert_eq!(session.submit("Chile"), GuessOutcome::Correct);
        assert_eq!(session.submit("CHILE"), GuessOutcome::AlreadyGuessed);
        assert_eq!(session.guessed(), 1);
        assert_eq!(session.remaining(), 1);
        assert_eq!(session.phase(), SessionPhase::Running);
    }

    #[test]
    fn test_print_guessed_is_not_a_guess() {
        let mut set = pool(&["Mali", "Chad"]);
        let mut session = GuessSession::new(&mut set);
        session.start().unwrap();

        session.submit("chad");
        assert_eq!(
            session.submit("p"),
            GuessOutcome::ListGuessed(vec!["CHAD".to_string()])
        );
        assert_eq!(session.submit("Atlantis"), GuessOutcome::Miss);
        assert_eq!(session.guessed(), 1);
        assert_eq!(session.phase(), SessionPhase::Running);
    }

    #[test]
    fn test_input_ignored_outside_running() {
        let mut set = pool(&["Mali"]);
        let mut session = GuessSession::new(&mut set);
        assert_eq!(session.submit("Mali"), GuessOutcome::Ignored);

        session.start().unwrap();
        assert_eq!(session.submit("q"), GuessOutcome::GaveUp);
        assert_eq!(session.submit("Mali"), GuessOutcome::Ignored);
        assert_eq!(session.result().unwrap().guessed, 0);
    }

    #[test]
    fn test_start_preconditions() {
        let mut empty = CountrySet::new();
        let mut session = GuessSession::new(&mut empty);
        assert_eq!(session.start(), Err(SessionError::EmptyPool));

        let mut set = pool(&["Mali"]);
        let mut session = GuessSession::new(&mut set);
        session.start().unwrap();
        assert_eq!(session.start(), Err(SessionError::AlreadyStarted));
    }

    #[test]
    fn test_new_session_resets_previous_round() {
        let mut set = pool(&["Mali", "Chad"]);
        set.mark_guessed("mali");

        let session = GuessSession::new(&mut set);
        assert_eq!(session.guessed(), 0);
        drop(session);
        assert_eq!(set.guessed_count(), 0);
    }
}
