//! Classifier and tag insertion through the public API

use sayable_core::config::TagPosition;
use sayable_core::{
    insert_tags, process, train, train_with_alpha, Classifier, ClassifierError, ClassifierModel,
    Config, ModelSnapshot,
};

#[test]
fn test_builtin_model_predictions() {
    let model = ClassifierModel::builtin();

    let cases = [
        ("haha that was funny.", "laugh", 0.626),
        ("Oh no!", "gasp", 0.362),
        ("ugh this is annoying.", "groan", 0.522),
        ("okay thanks.", "none", 0.326),
        ("cough cough.", "cough", 0.286),
        ("I guess.", "sigh", 0.256),
    ];

    for (text, label, confidence) in cases {
        let prediction = model.predict(text);
        assert_eq!(prediction.label, label, "label for {text:?}");
        assert!(
            (prediction.confidence - confidence).abs() < 0.005,
            "confidence for {text:?} was {}",
            prediction.confidence
        );
    }
}

#[test]
fn test_only_confident_sentences_are_tagged() {
    let config = Config::default();
    let model = ClassifierModel::builtin();

    assert_eq!(
        process("ugh this is annoying. haha that was funny.", &model, &config),
        "ugh this is annoying. [laugh] haha that was funny."
    );
}

#[test]
fn test_lower_threshold_tags_more() {
    let config = Config {
        tag_min_confidence: 0.3,
        ..Config::default()
    };
    let model = ClassifierModel::builtin();

    assert_eq!(
        insert_tags("Oh no! okay thanks.", &model, &config),
        "[gasp] Oh no! okay thanks."
    );
}

#[test]
fn test_suffix_position() {
    let config = Config {
        tag_position: TagPosition::Suffix,
        ..Config::default()
    };
    let model = ClassifierModel::builtin();

    assert_eq!(
        process("haha that was funny.", &model, &config),
        "haha that was funny. [laugh]"
    );
}

#[test]
fn test_custom_model_and_mapping() {
    let model = train(&[
        ("hahaha so good", "laugh"),
        ("what a day", "tired"),
        ("so tired today", "tired"),
    ])
    .unwrap();
    assert_eq!(model.labels(), ["laugh".to_string(), "tired".to_string()]);

    let mut config = Config::default();
    config
        .label_to_tag
        .insert("tired".to_string(), "[sigh]".to_string());
    assert!(config.validate().is_ok());

    let out = insert_tags("So tired today.", &model, &config);
    assert_eq!(out, "[sigh] So tired today.");
}

#[test]
fn test_training_rejects_bad_input() {
    let empty: [(&str, &str); 0] = [];
    assert_eq!(train(&empty).unwrap_err(), ClassifierError::EmptyTrainingSet);

    for alpha in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            train_with_alpha(&[("a", "b")], alpha),
            Err(ClassifierError::InvalidSmoothing(_))
        ));
    }
}

#[test]
fn test_model_json_round_trip() {
    let model = ClassifierModel::builtin();
    let json = serde_json::to_string(&model).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in ["labels", "log_priors", "log_likelihoods", "vocab", "alpha"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }

    let restored: ClassifierModel = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.labels(), model.labels());
    assert_eq!(restored.vocab(), model.vocab());

    for text in [
        "haha that was funny.",
        "Oh no!",
        "shh.",
        "wow!",
        "nothing in the vocabulary here",
        "",
    ] {
        let before = model.predict(text);
        let after = restored.predict(text);
        assert_eq!(before.label, after.label, "label for {text:?}");
        assert!((before.confidence - after.confidence).abs() < 1e-9);
    }
}

#[test]
fn test_invalid_snapshot_is_rejected() {
    let error = serde_json::from_str::<ClassifierModel>(r#"{"labels": [], "log_priors": {}}"#)
        .unwrap_err();
    assert!(error.to_string().contains("no labels"));

    let snapshot: ModelSnapshot =
        serde_json::from_str(r#"{"labels": ["laugh"], "log_priors": {}}"#).unwrap();
    assert!(matches!(
        ClassifierModel::try_from(snapshot),
        Err(ClassifierError::InvalidModel(_))
    ));
}

#[test]
fn test_models_are_shareable_across_threads() {
    let model = std::sync::Arc::new(ClassifierModel::builtin());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = model.clone();
            std::thread::spawn(move || model.predict("lol").label)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "laugh");
    }
}

#[test]
fn test_boxed_classifier() {
    let classifier: Box<dyn Classifier> = Box::new(ClassifierModel::builtin());
    let out = process("lol (that was 2 funny)", &*classifier, &Config::default());
    assert_eq!(out, "[laugh] lol, that was two funny");
}
