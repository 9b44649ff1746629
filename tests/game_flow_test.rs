use tui_simon::core::{GameConfig, PresenterCall, Recorder, ScriptedSource, SimonGame};
use tui_simon::types::{Cue, InputOutcome, Mode, Symbol, Verdict, SUMMARY_NO_LEVEL};

type TestGame = SimonGame<Recorder, ScriptedSource>;

fn sym(n: u8) -> Symbol {
    Symbol::new(n).unwrap()
}

fn new_game(script: Vec<u8>) -> TestGame {
    SimonGame::new(
        GameConfig::default(),
        Recorder::new(),
        ScriptedSource::new(script),
    )
    .unwrap()
}

fn wait_for_input(game: &mut TestGame) {
    for _ in 0..2_000 {
        if game.mode() == Mode::Inputting {
            return;
        }
        game.tick(16);
    }
    panic!("game never reached Inputting");
}

fn type_all(game: &mut TestGame) -> Vec<InputOutcome> {
    let seq = game.sequence().to_vec();
    seq.into_iter().map(|s| game.press(s)).collect()
}

fn overlay_summary(game: &TestGame) -> Option<String> {
    game.presenter().calls().iter().rev().find_map(|c| match c {
        PresenterCall::ShowEndOverlay(s) => Some(s.clone()),
        _ => None,
    })
}

#[test]
fn sequence_length_grows_by_two_per_level() {
    let mut game = new_game(vec![3, 1, 0, 2]);
    game.start();

    for level in 0..5u32 {
        wait_for_input(&mut game);
        assert_eq!(game.level(), level);
        assert_eq!(game.sequence().len(), 4 + 2 * level as usize);
        let outcomes = type_all(&mut game);
        assert_eq!(outcomes.last(), Some(&InputOutcome::LevelComplete));
    }
}

#[test]
fn level_zero_is_canonical_order() {
    let mut game = new_game(vec![2]);
    game.start();
    wait_for_input(&mut game);
    assert_eq!(game.sequence(), &[sym(1), sym(2), sym(3), sym(4)]);
}

#[test]
fn proper_prefixes_give_no_feedback() {
    let mut game = new_game(vec![0, 1]);
    game.start();
    wait_for_input(&mut game);
    type_all(&mut game);
    wait_for_input(&mut game);

    game.presenter_mut().clear();
    let seq = game.sequence().to_vec();
    for s in &seq[..seq.len() - 1] {
        assert_eq!(game.press(*s), InputOutcome::Progress);
        assert_eq!(game.mode(), Mode::Inputting);
    }
    game.tick(5_000);
    let cues = game.presenter().cues();
    assert!(!cues.contains(&Cue::Correct));
    assert!(!cues.contains(&Cue::Wrong));
}

#[test]
fn full_sequence_yields_exactly_one_success() {
    let mut game = new_game(vec![1]);
    game.start();
    wait_for_input(&mut game);

    let outcomes = type_all(&mut game);
    assert_eq!(
        outcomes,
        vec![
            InputOutcome::Progress,
            InputOutcome::Progress,
            InputOutcome::Progress,
            InputOutcome::LevelComplete
        ]
    );

    // Extra presses while waiting for the next level change nothing.
    assert_eq!(game.press(sym(1)), InputOutcome::Ignored);
    game.tick(1_000);
    assert_eq!(game.presenter().count(&PresenterCall::Play(Cue::Correct)), 1);
    assert_eq!(game.presenter().count(&PresenterCall::Play(Cue::Wrong)), 0);
}

#[test]
fn worked_example_from_tutorial_to_game_over() {
    let mut game = new_game(vec![0, 1]);
    game.start();
    wait_for_input(&mut game);

    // Level 0 cleared.
    type_all(&mut game);
    assert_eq!(game.level(), 1);
    assert_eq!(game.replay_budget(), 1);
    wait_for_input(&mut game);
    assert_eq!(game.sequence().len(), 6);

    // Wrong second symbol: one replay of the same sequence.
    let before = game.sequence().to_vec();
    assert_eq!(game.press(before[0]), InputOutcome::Progress);
    let wrong = if before[1] == sym(3) { sym(4) } else { sym(3) };
    assert_eq!(game.press(wrong), InputOutcome::Replay);
    assert_eq!(game.replay_budget(), 0);
    wait_for_input(&mut game);
    assert_eq!(game.sequence(), &before[..]);
    assert!(game.input().is_empty());

    // Second mismatch in the same level ends the game.
    assert_eq!(game.press(before[0]), InputOutcome::Progress);
    assert_eq!(game.press(wrong), InputOutcome::GameOver);
    game.tick(400);
    assert!(game.overlay_visible());
    assert_eq!(game.level(), 0);
    assert_eq!(overlay_summary(&game).as_deref(), Some(SUMMARY_NO_LEVEL));
}

#[test]
fn tutorial_mismatch_then_game_over() {
    let mut game = new_game(vec![0]);
    game.start();
    wait_for_input(&mut game);

    assert_eq!(game.press(sym(1)), InputOutcome::Progress);
    assert_eq!(game.press(sym(3)), InputOutcome::Replay);
    wait_for_input(&mut game);
    assert_eq!(game.sequence(), &[sym(1), sym(2), sym(3), sym(4)]);

    assert_eq!(game.press(sym(1)), InputOutcome::Progress);
    assert_eq!(game.press(sym(3)), InputOutcome::GameOver);
    game.tick(400);
    assert_eq!(overlay_summary(&game).as_deref(), Some(SUMMARY_NO_LEVEL));
}

#[test]
fn summary_reports_last_completed_level() {
    let mut game = new_game(vec![0, 1, 2, 3]);
    game.start();

    for _ in 0..3 {
        wait_for_input(&mut game);
        type_all(&mut game);
    }
    wait_for_input(&mut game);
    assert_eq!(game.level(), 3);

    let first = game.sequence()[0];
    let wrong = if first == sym(1) { sym(2) } else { sym(1) };
    assert_eq!(game.press(wrong), InputOutcome::Replay);
    wait_for_input(&mut game);
    assert_eq!(game.press(wrong), InputOutcome::GameOver);
    game.tick(400);

    assert_eq!(overlay_summary(&game).as_deref(), Some("Your Memory Level: 2"));
}

#[test]
fn restart_after_long_session_uses_canonical_sequence() {
    let mut game = new_game(vec![3, 3, 2]);
    game.start();
    for _ in 0..4 {
        wait_for_input(&mut game);
        type_all(&mut game);
    }
    wait_for_input(&mut game);
    assert_eq!(game.sequence().len(), 12);

    let first = game.sequence()[0];
    let wrong = if first == sym(1) { sym(2) } else { sym(1) };
    game.press(wrong);
    wait_for_input(&mut game);
    game.press(wrong);
    game.tick(400);
    assert!(game.overlay_visible());

    assert!(game.restart());
    assert!(!game.overlay_visible());
    assert_eq!(game.level(), 0);
    assert_eq!(game.replay_budget(), 1);
    wait_for_input(&mut game);
    assert_eq!(game.sequence(), &[sym(1), sym(2), sym(3), sym(4)]);
    assert_eq!(
        game.presenter().last_status(),
        Some("Click in the flashing order")
    );
}

#[test]
fn input_outside_inputting_never_mutates_state() {
    let mut game = new_game(vec![0]);
    game.start();

    // Waiting before the first level.
    let before = game.snapshot();
    assert_eq!(game.press(sym(1)), InputOutcome::Ignored);
    assert_eq!(game.snapshot(), before);

    // Listening during playback.
    game.tick(1_000);
    assert_eq!(game.mode(), Mode::Listening);
    let before = game.snapshot();
    assert_eq!(game.press(sym(1)), InputOutcome::Ignored);
    assert_eq!(game.snapshot(), before);

    // Waiting during feedback.
    wait_for_input(&mut game);
    game.press(sym(4));
    assert_eq!(game.mode(), Mode::Waiting);
    let before = game.snapshot();
    assert_eq!(game.press(sym(1)), InputOutcome::Ignored);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn progress_indicator_follows_input() {
    let mut game = new_game(vec![0]);
    game.start();
    wait_for_input(&mut game);
    assert_eq!(game.presenter().last_progress(), Some((4, 0, Verdict::Pending)));

    game.press(sym(1));
    assert_eq!(game.presenter().last_progress(), Some((4, 1, Verdict::Pending)));
    game.press(sym(1));
    assert_eq!(game.presenter().last_progress(), Some((4, 2, Verdict::Wrong)));
}

#[test]
fn input_enabled_only_while_inputting() {
    let mut game = new_game(vec![0]);
    game.start();
    game.tick(1_000);
    assert_eq!(
        game.presenter().calls().iter().rev().find_map(|c| match c {
            PresenterCall::InputEnabled(on) => Some(*on),
            _ => None,
        }),
        Some(false)
    );

    wait_for_input(&mut game);
    assert_eq!(
        game.presenter().calls().iter().rev().find_map(|c| match c {
            PresenterCall::InputEnabled(on) => Some(*on),
            _ => None,
        }),
        Some(true)
    );
}
