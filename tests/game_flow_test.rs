//! End-to-end rounds driven through the runner with scripted input.

use std::cell::Cell;
use std::io::Cursor;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use numguess::config::Messages;
use numguess::core::input::LineInput;
use numguess::core::terminal::Console;
use numguess::core::timer::Clock;
use numguess::games::rand_num::{random_target, Difficulty, GameRunner, RunSummary};
use numguess::store::{JsonScoreStore, ScoreEntry, ScoreStore, Scores, StoreError, NO_SCORES};

const SEED: u64 = 2024;

/// Moves forward five seconds every time it is read.
struct TickingClock(Cell<Instant>);

impl TickingClock {
    fn new() -> Self {
        Self(Cell::new(Instant::now()))
    }
}

impl Clock for TickingClock {
    fn now(&self) -> Instant {
        let now = self.0.get();
        self.0.set(now + Duration::from_secs(5));
        now
    }
}

struct BrokenStore;

impl ScoreStore for BrokenStore {
    fn load(&self) -> Scores {
        Scores::new()
    }

    fn add(&self, _entry: ScoreEntry) -> numguess::store::Result<Scores> {
        Err(StoreError::Io {
            path: "scores.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

fn targets() -> (u32, u32) {
    let mut rng = StdRng::seed_from_u64(SEED);
    (random_target(&mut rng), random_target(&mut rng))
}

fn misses(target: u32, count: usize) -> Vec<u32> {
    (1..=100).filter(|g| *g != target).take(count).collect()
}

fn play<S: ScoreStore>(script: String, store: S) -> (RunSummary, String) {
    let mut runner = GameRunner::new(
        LineInput::new(Cursor::new(script)),
        Console::plain(Vec::new()),
        Messages::bundled().expect("bundled messages"),
        store,
        TickingClock::new(),
        StdRng::seed_from_u64(SEED),
    );
    let summary = runner.play().expect("game failed");
    let out = String::from_utf8(runner.into_console().into_inner()).expect("utf8 output");
    (summary, out)
}

fn setup_store() -> (TempDir, JsonScoreStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonScoreStore::new(dir.path().join("scores.json"));
    (dir, store)
}

#[test]
fn lost_round_replays_same_number_then_win_is_saved() {
    let (_dir, store) = setup_store();
    let (target, _) = targets();

    let mut script = String::from("Ada\n3\n");
    for guess in misses(target, 3) {
        script.push_str(&format!("{guess}\n"));
    }
    // Same secret after a loss, so guessing it wins on the first try.
    script.push_str(&format!("1\nAda\n3\n{target}\n2\n"));

    let (summary, out) = play(script, &store);

    assert_eq!(summary, RunSummary { rounds: 2, wins: 1 });
    assert!(out.contains("You have used all your chances."), "{out}");
    assert!(out.contains("in 1 attempts and 5s"), "{out}");

    let scores = store.load();
    assert_eq!(
        scores.entries(),
        &[ScoreEntry::new("Ada", Difficulty::Hard, 1, Duration::from_secs(5))]
    );
}

#[test]
fn win_draws_a_new_number() {
    let (_dir, store) = setup_store();
    let (first, second) = targets();

    let script = format!("Ada\n1\n{first}\n1\nBob\n2\n{second}\n2\n");
    let (summary, out) = play(script, &store);

    assert_eq!(summary, RunSummary { rounds: 2, wins: 2 });
    let scores = store.load();
    assert_eq!(scores.len(), 2);
    // Medium ranks above Easy.
    assert_eq!(scores.entries()[0].player, "Bob");
    assert_eq!(scores.entries()[1].player, "Ada");
    assert!(out.contains("| Bob"));
}

#[test]
fn feedback_points_toward_the_target() {
    let (_dir, store) = setup_store();
    let (target, _) = targets();

    let mut script = String::from("Ada\n1\n");
    if target > 1 {
        script.push_str(&format!("{}\n", target - 1));
    }
    if target < 100 {
        script.push_str(&format!("{}\n", target + 1));
    }
    script.push_str(&format!("{target}\n2\n"));

    let (_, out) = play(script, &store);

    if target > 1 {
        assert!(out.contains(&format!("greater than {}", target - 1)), "{out}");
    }
    if target < 100 {
        assert!(out.contains(&format!("less than {}", target + 1)), "{out}");
    }
    assert!(out.contains("just 1 away"), "{out}");
}

#[test]
fn failed_save_still_shows_board_and_continues() {
    let (target, _) = targets();
    let (summary, out) = play(format!("Ada\n3\n{target}\n2\n"), BrokenStore);

    assert_eq!(summary.wins, 1);
    assert!(out.contains("Could not save your score"), "{out}");
    assert!(out.contains(NO_SCORES), "{out}");
    assert!(out.trim_end().ends_with("Thanks for playing. Goodbye!"));
}

#[test]
fn persisted_file_matches_returned_board() {
    let (dir, store) = setup_store();
    let (target, _) = targets();
    play(format!("Ada\n2\n{target}\n2\n"), &store);

    let text = std::fs::read_to_string(dir.path().join("scores.json")).expect("scores written");
    let on_disk: Scores = serde_json::from_str(&text).expect("valid json");
    assert_eq!(on_disk, store.load());
    assert!(text.contains("\"level\": \"Medium\""), "{text}");
}
