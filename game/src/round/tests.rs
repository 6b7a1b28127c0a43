use std::sync::{Arc, Mutex};
use std::time::Duration;

use classifier::{ErrorKind, Guess};
use pretty_assertions::assert_eq;

use super::*;

fn round_with(topics: Vec<Topic>) -> Round<Vec<Presentation>> {
    let config = Config { topics, ..Config::default() }.validate().unwrap();
    Round::with_rng(config, Vec::new(), StdRng::seed_from_u64(7))
}

fn started() -> Round<Vec<Presentation>> {
    let mut round = round_with(Topic::ALL.to_vec());
    round.start();
    round
}

fn answer(label: &str, score: f32) -> GatewayResult<Classification> {
    Ok(Classification::ranked(vec![
        Guess::new("runner-up", score / 2.0),
        Guess::new(label, score),
    ]))
}

fn current_label(round: &Round<Vec<Presentation>>) -> &'static str {
    round.topic().unwrap().label()
}

fn other_label(round: &Round<Vec<Presentation>>) -> &'static str {
    let topic = round.topic().unwrap();
    Topic::ALL.iter().find(|t| **t != topic).unwrap().label()
}

fn count(round: &Round<Vec<Presentation>>, wanted: &Presentation) -> usize {
    round.sink().iter().filter(|m| *m == wanted).count()
}

#[test]
fn start_shows_a_topic() {
    let round = started();
    assert_eq!(round.stage(), Stage::AwaitingInput);
    let topic = round.topic().unwrap();
    assert!(round.sink().contains(&Presentation::Topic { topic, text: topic.prompt().to_string() }));
    assert!(round.sink().contains(&Presentation::GameOverPanel { visible: false }));
    assert!(round.sink().contains(&Presentation::Timer { secs: 60 }));
}

#[test]
fn short_answers_change_nothing() {
    let mut round = started();
    let before = round.sink().len();

    assert_eq!(round.submit("too short"), Err(SubmitError::TooShort { len: 9, min: 10 }));
    // characters, not bytes
    assert_eq!(round.submit("ééééééééé"), Err(SubmitError::TooShort { len: 9, min: 10 }));

    assert_eq!(round.stage(), Stage::AwaitingInput);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining(), 60.0);
    assert!(matches!(round.sink()[before], Presentation::Feedback { ref text } if text.contains("too short")));
}

#[test]
fn off_topic_changes_nothing() {
    let mut round = started();
    let topic = round.topic();
    let ticket = round.submit("this is a long enough answer").unwrap();
    assert_eq!(round.stage(), Stage::AwaitingClassification { len: 28 });

    let wrong = other_label(&round);
    assert_eq!(round.resolve(ticket, answer(wrong, 0.99)), Outcome::OffTopic);
    assert_eq!(round.stage(), Stage::AwaitingInput);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining(), 60.0);
    assert_eq!(round.topic(), topic);
    assert_eq!(round.sink().last(), Some(&Presentation::Feedback { text: OFF_TOPIC.to_string() }));
    assert!(matches!(
        round.sink()[round.sink().len() - 2],
        Presentation::Emotion { face: Face { emotion: Emotion::Thinking, .. } }
    ));
}

#[test]
fn threshold_is_exclusive() {
    let mut round = started();
    let ticket = round.submit("this is a long enough answer").unwrap();
    let label = current_label(&round);

    assert_eq!(round.resolve(ticket, answer(label, 0.50)), Outcome::NotEnough);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining(), 60.0);
    assert_eq!(round.sink().last(), Some(&Presentation::Feedback { text: NOT_ENOUGH.to_string() }));
}

#[test]
fn correct_answer_scores_and_starts_a_new_turn() {
    let mut round = started();
    let text = "twenty five characters!!!";
    assert_eq!(text.len(), 25);
    let ticket = round.submit(text).unwrap();
    let label = current_label(&round);

    assert_eq!(round.resolve(ticket, answer(label, 0.51)), Outcome::Correct { score: 3, bonus_time: 5 });
    assert_eq!(round.score(), 3);
    assert_eq!(round.high_score(), 3);
    assert_eq!(round.remaining(), 65.0);
    assert_eq!(round.stage(), Stage::AwaitingInput);
    assert!(round.sink().contains(&Presentation::Score { value: 3 }));
    assert!(round.sink().contains(&Presentation::HighScore { value: 3 }));
    assert!(round.sink().contains(&Presentation::Timer { secs: 65 }));
    assert!(matches!(round.sink().last(), Some(Presentation::Topic { .. })));

    // the old ticket belongs to the finished turn
    assert_eq!(round.resolve(ticket, answer(label, 0.99)), Outcome::Stale);
    assert_eq!(round.score(), 3);
}

#[test]
fn emotion_follows_topic() {
    for (topic, emotion, text) in [
        (Topic::Nice, Emotion::Positive, "Nice! Keep going!"),
        (Topic::Mean, Emotion::Negative, "Oh!"),
        (Topic::Information, Emotion::Neutral, "Okay"),
    ] {
        let mut round = round_with(vec![topic]);
        round.start();
        let ticket = round.submit("exactly 10").unwrap();
        assert_eq!(round.resolve(ticket, answer(topic.label(), 0.9)), Outcome::Correct { score: 1, bonus_time: 3 });

        let sink = round.sink();
        let at = sink.iter().position(|m| *m == Presentation::Feedback { text: text.to_string() }).unwrap();
        match sink[at - 1] {
            Presentation::Emotion { face } => {
                assert_eq!(face.emotion, emotion);
                assert!((1..=emotion.variants()).contains(&face.variant));
            }
            ref other => panic!("expected an emotion, got {:?}", other),
        }
    }
}

#[test]
fn classifier_failure_is_try_again() {
    let mut round = started();
    let ticket = round.submit("this is a long enough answer").unwrap();

    assert_eq!(round.resolve(ticket, Err(ErrorKind::Empty)), Outcome::Failed);
    assert_eq!(round.stage(), Stage::AwaitingInput);
    assert_eq!(round.score(), 0);
    assert_eq!(round.sink().last(), Some(&Presentation::Feedback { text: CLASSIFIER_FAILED.to_string() }));

    // empty ranking is treated the same
    let ticket = round.submit("this is a long enough answer").unwrap();
    assert_eq!(round.resolve(ticket, Ok(Classification::default())), Outcome::Failed);
    assert!(round.submit("and we can keep playing").is_ok());
}

#[test]
fn one_answer_in_flight() {
    let mut round = started();
    round.submit("this is a long enough answer").unwrap();
    assert_eq!(round.submit("another long enough answer"), Err(SubmitError::Busy));
}

#[test]
fn game_over_fires_once() {
    let fired = Arc::new(Mutex::new(0));
    let mut round = round_with(Topic::ALL.to_vec());
    let f = fired.clone();
    round.subscribe_game_over(move || *f.lock().unwrap() += 1);
    round.start();

    let mut ended = 0;
    for _ in 0..200 {
        if round.tick(Duration::from_millis(500)) {
            ended += 1;
        }
    }
    assert_eq!(ended, 1);
    assert_eq!(*fired.lock().unwrap(), 1);
    assert_eq!(round.stage(), Stage::GameOver);
    assert_eq!(round.remaining(), 0.0);
    assert_eq!(count(&round, &Presentation::GameOverPanel { visible: true }), 1);
    assert_eq!(count(&round, &Presentation::FinalScore { value: 0 }), 1);
    assert_eq!(round.submit("too late for this answer"), Err(SubmitError::NotPlaying));
}

#[test]
fn late_result_after_game_over_is_ignored() {
    let mut round = started();
    let ticket = round.submit("this is a long enough answer").unwrap();
    let label = current_label(&round);

    assert!(round.tick(Duration::from_secs(61)));
    let published = round.sink().len();

    assert_eq!(round.resolve(ticket, answer(label, 0.99)), Outcome::Stale);
    assert_eq!(round.resolve(ticket, Err(ErrorKind::Empty)), Outcome::Stale);
    assert_eq!(round.stage(), Stage::GameOver);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining(), 0.0);
    assert_eq!(round.sink().len(), published);
}

#[test]
fn unsubscribed_listener_misses_game_over() {
    let fired = Arc::new(Mutex::new(false));
    let mut round = round_with(Topic::ALL.to_vec());
    let f = fired.clone();
    let id = round.subscribe_game_over(move || *f.lock().unwrap() = true);
    assert!(round.unsubscribe_game_over(id));
    round.start();
    round.tick(Duration::from_secs(120));
    assert!(!*fired.lock().unwrap());
}

#[test]
fn high_score_never_drops() {
    let mut round = round_with(vec![Topic::Mean]);
    let mut best_seen = 0;
    for game in 0..3 {
        round.start();
        assert_eq!(round.score(), 0);
        // fewer correct answers each game
        for _ in 0..(3 - game) {
            let ticket = round.submit("you are really quite awful").unwrap();
            round.resolve(ticket, answer("mean", 0.8));
            best_seen = best_seen.max(round.score());
            assert_eq!(round.high_score(), best_seen);
        }
        round.tick(Duration::from_secs(600));
        assert_eq!(round.stage(), Stage::GameOver);
    }
    assert_eq!(round.high_score(), 9);
    let highs: Vec<u32> = round.sink().iter()
        .filter_map(|m| match m { Presentation::HighScore { value } => Some(*value), _ => None })
        .collect();
    assert!(highs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn topics_stay_in_the_configured_set() {
    let mut round = round_with(vec![Topic::Mean, Topic::Information]);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        round.start();
        let topic = round.topic().unwrap();
        assert_ne!(topic, Topic::Nice);
        seen.insert(topic);
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn idle_round_ignores_ticks_and_answers() {
    let mut round = round_with(Topic::ALL.to_vec());
    assert_eq!(round.stage(), Stage::Idle);
    assert!(!round.tick(Duration::from_secs(100)));
    assert_eq!(round.submit("a perfectly fine answer"), Err(SubmitError::NotPlaying));
    assert!(round.sink().is_empty());
}
