use std::time::Duration;

use tokio::{sync::mpsc, time::Instant};
use yeri_countdown::{
    tasks::turn_driver_task, GameMode, PlayerCommand, TokioClock, TurnController, TurnOutcome,
};

const GAP: Duration = Duration::from_secs(2);

fn new_game() -> TurnController<TokioClock> {
    TurnController::new(
        TokioClock::new(),
        GameMode::QuickDate,
        2,
        Duration::from_millis(100),
    )
    .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test(start_paused = true)]
async fn test_unattended_game_times_out_every_turn() {
    let started = Instant::now();
    let (_tx, rx) = mpsc::channel(8);

    let report = turn_driver_task(new_game(), rx, GAP).await.unwrap();

    let outcomes: Vec<TurnOutcome> = report.turns.iter().map(|turn| turn.outcome).collect();
    assert_eq!(outcomes, vec![TurnOutcome::TimedOut; 3]);
    // 3 s + 10 s + 30 s of countdown plus two gaps
    let total = started.elapsed().as_secs_f64();
    assert!((47.0..47.1).contains(&total), "game took {total}s");
}

#[tokio::test(start_paused = true)]
async fn test_answers_clear_first_turn_immediately() {
    let (tx, rx) = mpsc::channel(8);
    tx.send(PlayerCommand::Answer { correct: true }).await.unwrap();
    tx.send(PlayerCommand::Answer { correct: true }).await.unwrap();
    drop(tx);

    let report = turn_driver_task(new_game(), rx, GAP).await.unwrap();

    assert_eq!(report.turns[0].outcome, TurnOutcome::Cleared);
    assert_eq!(report.turns[0].found, 2);
    assert_close(report.turns[0].used_seconds, 0.0);
    assert_eq!(report.turns[1].outcome, TurnOutcome::TimedOut);
    assert_eq!(report.turns[2].outcome, TurnOutcome::TimedOut);
}

#[tokio::test(start_paused = true)]
async fn test_hint_pause_extends_second_turn() {
    let started = Instant::now();
    let (tx, rx) = mpsc::channel(8);

    let player = tokio::spawn(async move {
        tx.send(PlayerCommand::Answer { correct: true }).await.unwrap();
        tx.send(PlayerCommand::Answer { correct: true }).await.unwrap();
        // Turn 2 starts after the gap; open the hint half a second in
        tokio::time::sleep_until(started + Duration::from_millis(2_500)).await;
        tx.send(PlayerCommand::Hint).await.unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
        tx.send(PlayerCommand::HintDone).await.unwrap();
        tx
    });

    let report = turn_driver_task(new_game(), rx, GAP).await.unwrap();
    let _tx = player.await.unwrap();

    let second = &report.turns[1];
    assert!(second.hint_used);
    assert_eq!(second.outcome, TurnOutcome::TimedOut);
    assert_close(second.used_seconds, 10.0);

    // Turn 2 ends 60 s later than it would have without the hint
    let total = started.elapsed().as_secs_f64();
    assert!((104.0..104.1).contains(&total), "game took {total}s");
}

#[tokio::test(start_paused = true)]
async fn test_quit_ends_the_game_early() {
    let (tx, rx) = mpsc::channel(8);
    tx.send(PlayerCommand::Quit).await.unwrap();

    let report = turn_driver_task(new_game(), rx, GAP).await.unwrap();

    assert!(report.turns.is_empty());
}
