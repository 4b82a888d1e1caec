use ocuscreen_core::models::answers::{AnswerSet, Likert};
use ocuscreen_instruments::error::InstrumentError;
use ocuscreen_instruments::instruments::osdi::Osdi;
use ocuscreen_instruments::scoring::{Severity, normalized_score};
use ocuscreen_instruments::{Instrument, all_instruments, get_instrument};

fn answers(pairs: &[(u8, u8)]) -> AnswerSet {
    pairs
        .iter()
        .map(|&(q, v)| (q, Likert::new(v).unwrap()))
        .collect()
}

#[test]
fn all_severe_answers_score_one_hundred() {
    let result = Osdi
        .score(&answers(&[(1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4)]))
        .unwrap();
    assert_eq!(result.score, 100.0);
    assert_eq!(result.answered, 7);
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.severity.label(), "Severe Dry Eye");
}

#[test]
fn single_zero_answer_scores_zero() {
    let result = Osdi.score(&answers(&[(1, 0)])).unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.severity, Severity::Normal);
}

#[test]
fn half_the_time_scores_fifty() {
    let result = Osdi.score(&answers(&[(1, 2), (2, 2)])).unwrap();
    assert_eq!(result.score, 50.0);
    // Tiers are cut at 13, 23 and 33, so fifty lands in the top tier.
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.severity.label(), "Severe Dry Eye");
}

#[test]
fn string_answers_from_clients_score_the_same() {
    let parsed: AnswerSet =
        serde_json::from_str(r#"{"1":"4","2":"4","3":"4","4":"4","5":"4","6":"4","7":"4"}"#)
            .unwrap();
    assert_eq!(Osdi.score(&parsed).unwrap().score, 100.0);
}

#[test]
fn scores_are_rounded_to_two_decimals() {
    // 1 × 25 / 3 = 8.333…
    let result = Osdi.score(&answers(&[(1, 1), (2, 0), (3, 0)])).unwrap();
    assert_eq!(result.score, 8.33);
    // 2 × 25 / 3 = 16.666…
    assert_eq!(normalized_score(2, 3), Some(16.67));
}

#[test]
fn score_equals_mean_over_four_for_every_uniform_answer() {
    for value in 0..=4u8 {
        for count in 1..=12u8 {
            let set: AnswerSet = (1..=count).map(|q| (q, Likert::new(value).unwrap())).collect();
            let result = Osdi.score(&set).unwrap();
            assert_eq!(result.score, f64::from(value) * 25.0);
            assert!((0.0..=100.0).contains(&result.score));
        }
    }
}

#[test]
fn empty_answers_are_rejected() {
    assert!(matches!(
        Osdi.score(&AnswerSet::new()),
        Err(InstrumentError::NoAnswers)
    ));
    assert_eq!(normalized_score(0, 0), None);
}

#[test]
fn unknown_questions_are_rejected() {
    let set = answers(&[(1, 2), (13, 1)]);
    let errors = Osdi.validate_answers(&set);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].question_id, 13);
    assert!(matches!(Osdi.score(&set), Err(InstrumentError::Validation(_))));
}

#[test]
fn severity_partition_boundaries() {
    assert_eq!(Severity::from_score(0.0), Severity::Normal);
    assert_eq!(Severity::from_score(12.99), Severity::Normal);
    assert_eq!(Severity::from_score(13.0), Severity::Mild);
    assert_eq!(Severity::from_score(22.99), Severity::Mild);
    assert_eq!(Severity::from_score(23.0), Severity::Moderate);
    assert_eq!(Severity::from_score(32.99), Severity::Moderate);
    assert_eq!(Severity::from_score(33.0), Severity::Severe);
    assert_eq!(Severity::from_score(100.0), Severity::Severe);
}

#[test]
fn definition_has_twelve_questions_and_five_options() {
    let questions = Osdi.questions();
    assert_eq!(questions.len(), 12);
    let ids: Vec<u8> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<u8>>());
    assert_eq!(Osdi.options().len(), 5);
    assert_eq!(Osdi.options()[4].label, "All of the time");
}

#[test]
fn registry_lookup() {
    assert_eq!(all_instruments().len(), 1);
    assert_eq!(get_instrument("osdi").unwrap().name(), "OSDI");
    assert!(get_instrument("phq9").is_none());
}
