//! End-to-end scenarios: train on a toy corpus, persist, load, and score.

use sentira::error::SentiraError;
use sentira::model::ModelArtifact;
use sentira::predict::{Sentiment, SentimentService};
use sentira::train::{LabeledCorpus, Trainer, TrainingConfig, TrainingRecord};

fn toy_corpus() -> LabeledCorpus {
    LabeledCorpus::from_records(vec![
        TrainingRecord::new(1, "great movie loved it"),
        TrainingRecord::new(0, "terrible awful hated it"),
    ])
}

fn train_toy_service(dir: &tempfile::TempDir) -> SentimentService {
    let path = dir.path().join("model.bin");
    let config = TrainingConfig::default().with_test_ratio(0.0);
    Trainer::new(config).train(toy_corpus(), &path).unwrap();
    SentimentService::load(&path).unwrap()
}

#[test]
fn scenario_positive_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let service = train_toy_service(&dir);

    let result = service.predict("I loved this").unwrap();

    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!(result.confidence >= 0.5);
    assert!(result.confidence <= 1.0);
}

#[test]
fn scenario_empty_string_is_bias_only_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let service = train_toy_service(&dir);

    // Through the pipeline (no boundary check): deterministic, total.
    let first = service.predict_unchecked("");
    let second = service.predict_unchecked("");
    assert_eq!(first, second);

    // At the boundary: rejected before the pipeline runs.
    match service.predict("") {
        Err(SentiraError::Input(message)) => assert_eq!(message, "no text provided"),
        other => panic!("expected input error, got {other:?}"),
    }
}

#[test]
fn scenario_negative_prediction_with_percentage() {
    let dir = tempfile::tempdir().unwrap();
    let service = train_toy_service(&dir);

    let result = service.predict("terrible awful hated it").unwrap();

    assert_eq!(result.sentiment, Sentiment::Negative);
    assert_eq!(result.percentage, (result.confidence * 100.0).floor() as u8);
    assert!(result.percentage <= 100);
}

#[test]
fn holdout_evaluation_is_reported_but_never_gates_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.bin");

    // Labels shuffled against the text: accuracy will be poor, but the
    // artifact must still be written.
    let corpus = LabeledCorpus::from_records(vec![
        TrainingRecord::new(0, "great movie loved it"),
        TrainingRecord::new(0, "wonderful amazing film"),
        TrainingRecord::new(1, "great wonderful loved"),
        TrainingRecord::new(1, "terrible awful hated it"),
        TrainingRecord::new(1, "worst film ever"),
        TrainingRecord::new(0, "terrible worst hated"),
        TrainingRecord::new(0, "loved the amazing story"),
        TrainingRecord::new(1, "awful hated the story"),
        TrainingRecord::new(1, "amazing wonderful movie"),
        TrainingRecord::new(0, "ever hated such awful film"),
    ]);

    let config = TrainingConfig::default().with_test_ratio(0.2).with_seed(7);
    let report = Trainer::new(config).train(corpus, &path).unwrap();

    assert_eq!(report.test_size, 2);
    assert!(report.test_accuracy.is_some());
    assert!(path.exists());
    assert!(ModelArtifact::load(&path).is_ok());
}

#[test]
fn predictions_are_concurrency_safe() {
    let dir = tempfile::tempdir().unwrap();
    let service = train_toy_service(&dir);

    let baseline = service.predict("I loved this").unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let result = service.predict("I loved this").unwrap();
                    assert_eq!(result, baseline);
                }
            });
        }
    });
}

#[test]
fn normalization_is_shared_between_training_and_inference() {
    let dir = tempfile::tempdir().unwrap();
    let service = train_toy_service(&dir);

    // Punctuation, digits, and casing differences normalize away, so these
    // score identically to the training text.
    let plain = service.predict("terrible awful hated it").unwrap();
    let noisy = service.predict("TERRIBLE!!! awful... HATED it 1000%").unwrap();

    assert_eq!(plain, noisy);
}
