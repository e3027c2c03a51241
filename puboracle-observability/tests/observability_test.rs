use puboracle_core::config::ObservabilityConfig;
use puboracle_observability::tracing_setup::spans::names;
use puboracle_observability::{count_span, events, graph_span, init_from_config, merge_span};

#[test]
fn second_init_reports_existing_subscriber() {
    let config = ObservabilityConfig {
        log_level: "debug".into(),
        json: true,
    };
    // Whichever test initializes first wins; a later call must not panic.
    let _ = init_from_config(&config);
    assert!(!init_from_config(&config));
}

#[test]
fn events_and_spans_emit_without_subscriber_panics() {
    let span = merge_span!(12usize, "token_overlap");
    let _guard = span.enter();
    events::occurrences_counted(3, 8, 6);
    events::cluster_formed("banana", 2, 3);
    events::merge_completed(6, 2, 2, 2);
    events::top_n_clamped(10, 4);
    events::config_rejected("merge", "threshold out of range");
    drop(_guard);

    let _count = count_span!(3usize).entered();
    let _graph = graph_span!(3usize, 3usize).entered();
    events::graph_built(3, 3, 2, 3.0);
}

#[test]
fn span_names_are_namespaced() {
    for name in [names::COUNT, names::MERGE, names::GRAPH] {
        assert!(name.starts_with("puboracle."));
    }
}
