// Scoring scenarios for the matcher, end to end through the public API
use onset_eval::{compare_events, compare_events_detailed, Event, EventType, MatchResult};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn simple_events() {
    init_logging();
    let e1 = Event::new(EventType::NoteOn, 1.5);
    let e2 = Event::new(EventType::NoteOn, 1.5);

    let r = compare_events(&[e1.clone()], &[e2.clone()], 0.001);
    assert_eq!(r, MatchResult::new(1, 0, 0));

    let r = compare_events(&[e1.clone()], &[], 0.001);
    assert_eq!(r, MatchResult::new(0, 0, 1));

    let r = compare_events(&[e2.clone()], &[], 0.001);
    assert_eq!(r, MatchResult::new(0, 0, 1));

    let r = compare_events(&[], &[e1.clone()], 0.001);
    assert_eq!(r, MatchResult::new(0, 1, 0));

    let r = compare_events(&[], &[e1, e2], 0.001);
    assert_eq!(r, MatchResult::new(0, 2, 0));
}

#[test]
fn window_is_inclusive_and_symmetric() {
    init_logging();
    let e1 = Event::note_on(1.0);
    let e2 = Event::note_on(1.5);

    let r = compare_events(&[e1.clone()], &[e2.clone()], 0.001);
    assert_eq!(r, MatchResult::new(0, 1, 1));

    let r = compare_events(&[e1.clone()], &[e2.clone()], 0.9);
    assert_eq!(r, MatchResult::new(0, 1, 1));

    let r = compare_events(&[e1.clone()], &[e2.clone()], 1.0);
    assert_eq!(r, MatchResult::new(1, 0, 0));

    // Guess before the ground truth
    let r = compare_events(&[e2], &[e1], 1.0);
    assert_eq!(r, MatchResult::new(1, 0, 0));

    let e1 = Event::note_on(1.0);
    let e2 = Event::note_on(1.05);

    let r = compare_events(&[e1.clone()], &[e2.clone()], 0.05);
    assert_eq!(r, MatchResult::new(0, 1, 1));

    let r = compare_events(&[e1], &[e2], 0.1);
    assert_eq!(r, MatchResult::new(1, 0, 0));
}

#[test]
fn multiple_events() {
    init_logging();
    let e1 = Event::note_on(1.0);
    let e2 = Event::note_on(1.1);
    let e3 = Event::note_on(1.5);
    let e4 = Event::note_on(2.0);
    let e5 = Event::note_on(2.1);
    let all = vec![e1.clone(), e2.clone(), e3.clone(), e4.clone(), e5.clone()];

    let r = compare_events(&all, &all, 0.001);
    assert_eq!(r, MatchResult::new(5, 0, 0));

    let r = compare_events(&all[..4], &all, 0.001);
    assert_eq!(r, MatchResult::new(4, 1, 0));

    let r = compare_events(&all[..3], &all, 0.001);
    assert_eq!(r, MatchResult::new(3, 2, 0));

    let r = compare_events(&[e2.clone()], &[e2, e5], 0.001);
    assert_eq!(r, MatchResult::new(1, 1, 0));
}

#[test]
fn doubled_and_reused_guesses() {
    init_logging();
    let gt1 = Event::note_on(1.0);
    let gt2 = Event::note_on(2.0);
    let gt3 = Event::note_on(3.0);

    let g1 = Event::note_on(1.1);
    let g2 = Event::note_on(2.1);
    let g3 = Event::note_on(2.01);
    let guess = vec![g1, g2, g3];

    let r = compare_events(&[gt1.clone(), gt2.clone()], &guess, 0.001);
    assert_eq!(r, MatchResult::new(0, 3, 2));

    let r = compare_events(&[gt1.clone(), gt2.clone()], &guess, 0.2);
    assert_eq!(r, MatchResult::new(2, 1, 0));

    let r = compare_events(&[gt1, gt2, gt3], &guess, 0.2);
    assert_eq!(r, MatchResult::new(2, 1, 1));
}

#[test]
fn detailed_report_agrees_with_counts() {
    init_logging();
    let truth = vec![Event::note_on(1.0), Event::note_on(2.0), Event::note_on(3.0)];
    let guess = vec![Event::note_on(1.1), Event::note_on(2.1), Event::note_on(2.01)];

    let report = compare_events_detailed(&truth, &guess, 0.2);
    assert_eq!(report.result, compare_events(&truth, &guess, 0.2));
    assert_eq!(report.matches_for(0), &[0]);
    assert_eq!(report.matches_for(1), &[1, 2]);
    assert!(report.matches_for(2).is_empty());
    assert_eq!(report.doubled_onsets, 1);
    assert_eq!(report.reused_guesses, 0);
}

#[test]
fn every_ground_truth_event_is_counted_once() {
    init_logging();
    let truth: Vec<Event> = (0..20).map(|i| Event::note_on(i as f64 * 0.5)).collect();
    let guess: Vec<Event> = (0..30).map(|i| Event::note_on(i as f64 * 0.33)).collect();

    for precision in [0.001, 0.05, 0.1, 0.3] {
        let r = compare_events(&truth, &guess, precision);
        assert_eq!(r.cd + r.fn_, truth.len());
        assert!(r.cd + r.fp >= guess.len());
    }
}

#[test]
fn event_types_do_not_cross_match() {
    init_logging();
    let truth = vec![Event::note_on(1.0), Event::new("Beat", 1.0)];
    let guess = vec![Event::new("Beat", 1.0)];

    let r = compare_events(&truth, &guess, 0.05);
    assert_eq!(r, MatchResult::new(1, 0, 1));
}

#[test]
fn custom_tag_spelled_like_known_tag_matches() {
    init_logging();
    let truth = vec![Event::note_on(1.0)];
    let guess = vec![Event::new(EventType::Custom("NoteOn".to_string()), 1.0)];

    let r = compare_events(&truth, &guess, 0.05);
    assert_eq!(r, MatchResult::new(1, 0, 0));
}
