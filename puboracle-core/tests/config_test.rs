use puboracle_core::config::*;
use puboracle_core::errors::{ConfigError, OracleError};
use puboracle_core::models::{CombineWeights, SimilarityKind};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = OracleConfig::from_toml("").unwrap();

    // Counter defaults
    assert_eq!(config.counter.delimiter, ';');
    assert_eq!(config.counter.exclude, vec!["".to_string(), " ".to_string()]);

    // Merge defaults
    assert_eq!(config.merge.top_n, 10);
    assert_eq!(config.merge.look_ahead, 100);
    assert_eq!(config.merge.threshold, 0.8);
    assert_eq!(config.merge.similarity, SimilarityKind::TokenOverlap);
    assert_eq!(config.merge.ngram_size, 2);

    // Graph defaults
    assert!(!config.graph.directed);
    assert!(config.graph.allow_multiple);
    assert!(!config.graph.allow_loops);
    assert_eq!(config.graph.combine_weights, Some(CombineWeights::Mean));
    assert!(config.graph.exclude.is_empty());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[counter]
delimiter = "|"

[merge]
top_n = 5
threshold = 0.9
similarity = "seq_matcher"

[graph]
allow_loops = true
combine_weights = "sum"
"#;
    let config = OracleConfig::from_toml(toml).unwrap();
    assert_eq!(config.counter.delimiter, '|');
    assert_eq!(config.merge.top_n, 5);
    assert_eq!(config.merge.threshold, 0.9);
    assert_eq!(config.merge.similarity, SimilarityKind::QuickRatio);
    // Non-overridden fields keep defaults
    assert_eq!(config.merge.look_ahead, 100);
    assert!(config.graph.allow_loops);
    assert_eq!(config.graph.combine_weights, Some(CombineWeights::Sum));
}

#[test]
fn config_rejects_unknown_similarity() {
    let err = OracleConfig::from_toml("[merge]\nsimilarity = \"levenshtein\"\n").unwrap_err();
    assert!(matches!(
        err,
        OracleError::ConfigError(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let err = OracleConfig::from_toml("[merge]\nthreshold = 1.5\n").unwrap_err();
    assert!(matches!(
        err,
        OracleError::ConfigError(ConfigError::InvalidThreshold { .. })
    ));
}

#[test]
fn merge_config_validation() {
    let mut config = MergeConfig::default();
    assert!(config.validate().is_ok());

    config.threshold = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThreshold { .. })
    ));

    config.threshold = f64::NAN;
    assert!(config.validate().is_err());

    config.threshold = 1.0;
    config.look_ahead = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidLookAhead { value: 0 })
    ));

    config.look_ahead = 1;
    config.ngram_size = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidNgramSize { value: 0 })
    ));
}

#[test]
fn graph_config_collapse_rule() {
    let mut config = GraphConfig::default();
    assert!(config.collapses_multiple());

    config.combine_weights = None;
    assert!(!config.collapses_multiple());

    config.allow_multiple = false;
    assert!(config.collapses_multiple());
}

#[test]
fn config_roundtrips_through_toml() {
    let config = OracleConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed = OracleConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}
