use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info, warn};

use super::game::{random_target, Difficulty, Outcome, Session};
use super::parser::{self, ParseError};
use crate::config::Messages;
use crate::core::input::{InputError, InputSource};
use crate::core::terminal::{Console, TerminalColor};
use crate::core::timer::{Clock, Stopwatch};
use crate::store::{format_duration, ScoreEntry, ScoreStore};

/// What happened over a whole sitting, until the player quit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds: u32,
    pub wins: u32,
}

#[derive(Debug, Clone, Copy)]
enum Prompt {
    Player,
    Difficulty,
    Guess,
    PlayAgain,
}

impl Prompt {
    fn text(self, messages: &Messages) -> &str {
        match self {
            Prompt::Player => &messages.player_prompt,
            Prompt::Difficulty => &messages.difficulty_prompt,
            Prompt::Guess => &messages.guess_prompt,
            Prompt::PlayAgain => &messages.play_again_prompt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Won { attempts: u32, time: Duration },
    Lost,
    /// Input ran out mid-round.
    Abandoned,
}

/// Drives the prompt / guess / feedback loop against the session engine and
/// hands finished rounds to the score store.
pub struct GameRunner<I, W: Write, S, C, R> {
    input: I,
    console: Console<W>,
    messages: Messages,
    store: S,
    stopwatch: Stopwatch<C>,
    rng: R,
}

impl<I, W, S, C, R> GameRunner<I, W, S, C, R>
where
    I: InputSource,
    W: Write,
    S: ScoreStore,
    C: Clock,
    R: Rng,
{
    pub fn new(input: I, console: Console<W>, messages: Messages, store: S, clock: C, rng: R) -> Self {
        Self {
            input,
            console,
            messages,
            store,
            stopwatch: Stopwatch::new(clock),
            rng,
        }
    }

    /// Play rounds until the player declines to continue or input runs out.
    ///
    /// A lost round replays the same secret number, a won round draws a new one.
    pub fn play(&mut self) -> Result<RunSummary> {
        self.console.print_line(&self.messages.greeting)?;
        self.console.print_line(&self.messages.spacer)?;

        let mut summary = RunSummary::default();
        let mut target = random_target(&mut self.rng);

        loop {
            let Some(player) = self.prompt(Prompt::Player, I::next_player_input, parser::parse_player)? else {
                break;
            };
            let Some(difficulty) =
                self.prompt(Prompt::Difficulty, I::next_difficulty_input, parser::parse_difficulty)?
            else {
                break;
            };
            let chosen = self.messages.level_chosen.fill(&[("level", difficulty)]);
            self.console.print_line(&chosen)?;
            self.console.print_line(&self.messages.spacer)?;

            info!(%player, %difficulty, "round started");
            let end = self.play_round(difficulty, target)?;
            summary.rounds += 1;
            info!(%player, ?end, "round finished");

            let won = match end {
                RoundEnd::Won { attempts, time } => {
                    summary.wins += 1;
                    self.show_scores(ScoreEntry::new(player, difficulty, attempts, time))?;
                    true
                }
                RoundEnd::Lost => false,
                RoundEnd::Abandoned => break,
            };

            let again = self.prompt(Prompt::PlayAgain, I::next_play_again_input, parser::parse_play_again)?;
            if again != Some(true) {
                break;
            }
            if won {
                target = random_target(&mut self.rng);
            }
        }

        self.console.print_line(&self.messages.farewell)?;
        Ok(summary)
    }

    fn play_round(&mut self, difficulty: Difficulty, target: u32) -> Result<RoundEnd> {
        let mut session = Session::for_difficulty(difficulty, target).context("failed to start round")?;
        self.stopwatch.start();

        loop {
            if session.exhausted() {
                self.stopwatch.stop();
                self.console.print_colored_line(&self.messages.exhausted, TerminalColor::Red)?;
                self.console.print_line(&self.messages.spacer)?;
                return Ok(RoundEnd::Lost);
            }

            let Some(guess) = self.prompt(Prompt::Guess, I::next_guess_input, parser::parse_guess)? else {
                return Ok(RoundEnd::Abandoned);
            };

            if let Err(e) = session.record_guess(guess) {
                warn!(error = %e, "guess rejected by session");
                self.console.print_colored_line(&e.to_string(), TerminalColor::Red)?;
                continue;
            }

            let turn = *session.last_turn()?;
            let feedback = match turn.outcome() {
                Outcome::TooLow => self.messages.too_low.fill(&[("guess", guess)]),
                Outcome::TooHigh => self.messages.too_high.fill(&[("guess", guess)]),
                Outcome::Found => {
                    let time = self.stopwatch.stop();
                    let attempts = session.attempts_used();
                    let found = self.messages.found.fill(&[
                        ("attempts", attempts.to_string()),
                        ("time", format_duration(time)),
                    ]);
                    self.console.print_colored_line(&found, TerminalColor::Green)?;
                    return Ok(RoundEnd::Won { attempts, time });
                }
            };

            self.console.print_line(&feedback)?;
            if let Some(hint) = turn.hint() {
                self.console
                    .print_colored_line(self.messages.hints.text(hint), TerminalColor::Yellow)?;
            }
            self.console.print_line(&self.messages.spacer)?;
        }
    }

    /// Save the score, falling back to the stored board if saving fails, and
    /// print the leaderboard either way.
    fn show_scores(&mut self, entry: ScoreEntry) -> Result<()> {
        let scores = match self.store.add(entry) {
            Ok(scores) => scores,
            Err(e) => {
                warn!(error = %e, "failed to save score");
                self.console
                    .print_colored_line(&format!("Could not save your score: {e}"), TerminalColor::Red)?;
                self.store.load()
            }
        };

        self.console.print_line(&self.messages.spacer)?;
        self.console
            .print_colored_line(&self.messages.leaderboard_title, TerminalColor::Cyan)?;
        self.console.print_line(scores.to_string().trim_end())?;
        self.console.print_line(&self.messages.spacer)?;
        Ok(())
    }

    /// Ask until the answer parses. `None` means input is closed.
    fn prompt<T>(
        &mut self,
        prompt: Prompt,
        read: fn(&mut I) -> Result<String, InputError>,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<Option<T>> {
        loop {
            self.console.print_line(prompt.text(&self.messages))?;

            let line = match read(&mut self.input) {
                Ok(line) => line,
                Err(InputError::Closed) => {
                    debug!("input closed");
                    return Ok(None);
                }
                Err(InputError::Empty) => {
                    self.report(&InputError::Empty.to_string())?;
                    continue;
                }
                Err(e) => return Err(e).context("failed to read input"),
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.report(&e.to_string())?,
            }
        }
    }

    fn report(&mut self, error: &str) -> Result<()> {
        self.console.print_colored_line(error, TerminalColor::Red)?;
        self.console.print_line(&self.messages.spacer)?;
        Ok(())
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::input::LineInput;
    use crate::core::timer::SystemClock;
    use crate::store::MemoryScoreStore;

    const SEED: u64 = 7;

    fn first_target() -> u32 {
        random_target(&mut StdRng::seed_from_u64(SEED))
    }

    fn run(script: &str, store: &MemoryScoreStore) -> (RunSummary, String) {
        let mut runner = GameRunner::new(
            LineInput::new(Cursor::new(script.to_string())),
            Console::plain(Vec::new()),
            Messages::bundled().unwrap(),
            store,
            SystemClock,
            StdRng::seed_from_u64(SEED),
        );
        let summary = runner.play().unwrap();
        let out = String::from_utf8(runner.into_console().into_inner()).unwrap();
        (summary, out)
    }

    #[test]
    fn winning_round_records_score() {
        let store = MemoryScoreStore::new();
        let target = first_target();
        let (summary, out) = run(&format!("Ada\n3\n{target}\n2\n"), &store);

        assert_eq!(summary, RunSummary { rounds: 1, wins: 1 });
        assert!(out.contains("Congratulations"), "{out}");
        assert!(out.contains("| Ada"), "{out}");
        assert!(out.trim_end().ends_with("Thanks for playing. Goodbye!"));

        let scores = store.load();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.entries()[0].attempts, 1);
        assert_eq!(scores.entries()[0].level, Difficulty::Hard);
    }

    #[test]
    fn invalid_answers_are_reprompted() {
        let store = MemoryScoreStore::new();
        let target = first_target();
        let script = format!("\n{}\nAda\nseven\n9\n3\n0\n{target}\n5\n2\n", "x".repeat(21));
        let (summary, out) = run(&script, &store);

        assert_eq!(summary.wins, 1);
        assert!(out.contains("You must enter something!"));
        assert!(out.contains("It must be non-empty, and 20 characters at most."));
        assert!(out.contains("It must be an integer."));
        assert!(out.contains("It must be an integer between 1 and 3."));
        assert!(out.contains("It must be an integer between 1 and 100."));
        assert!(out.contains("It must be an integer between 1 and 2."));
    }

    #[test]
    fn closed_input_ends_cleanly() {
        let store = MemoryScoreStore::new();
        let (summary, out) = run("Ada\n", &store);
        assert_eq!(summary, RunSummary::default());
        assert!(out.trim_end().ends_with("Thanks for playing. Goodbye!"));
        assert!(store.load().is_empty());
    }
}
