// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end scenarios across stream kinds.

use brook::prelude::*;
use brook_test_utils::Sink;

#[test]
fn test_settings_panel_scenario() {
    // A value derived from two vars: the visible label for a connection
    // setting, gated on the panel being shown.
    let shown: Var<bool> = Var::new(true);
    let host: Var<String> = Var::new(None);

    let label = ValueStream::of(&host)
        .map(|host| format!("connect to {host}"))
        .or_else("not configured".to_string())
        .condition_on(&ValueStream::of(&shown));

    let sink: Sink<Option<String>> = Sink::new();
    let _subscription = label.subscribe(sink.observer());
    assert_eq!(sink.drain(), [Some("not configured".to_string())]);

    host.set("example.com".to_string());
    assert_eq!(sink.drain(), [Some("connect to example.com".to_string())]);

    // hidden panels track nothing
    shown.set(false);
    host.set("other.org".to_string());
    assert!(sink.is_empty());
    assert_eq!(host.listener_count(), 0);

    // showing again catches up with the latest state
    shown.set(true);
    assert_eq!(sink.drain(), [Some("connect to other.org".to_string())]);
}

#[test]
fn test_kind_transitions_round_trip() {
    // value -> change (filter) -> value (with_default) -> event (filter_null)
    let score: Var<i32> = Var::new(10);

    let events = ValueStream::of(&score)
        .filter(|value| *value >= 0)
        .with_default(0)
        .filter_null();

    let sink: Sink<i32> = Sink::new();
    let _subscription = events.subscribe(sink.observer());

    score.set(25);
    score.set(-1); // rejected by the filter
    score.set(None); // forwarded by the filter, dropped by filter_null
    score.set(3);

    assert_eq!(sink.drain(), [25, 3]);
}

#[test]
fn test_signal_to_data_and_back() {
    let a: Var<i32> = Var::new(1);
    let b: Var<i32> = Var::new(2);

    let sum = {
        let a2 = a.clone();
        let b2 = b.clone();
        SignalStream::of_all(vec![Box::new(a.clone()), Box::new(b.clone())])
            .replace(move || match (a2.get(), b2.get()) {
                (Some(a), Some(b)) => Some(a + b),
                _ => None,
            })
            .with_default_get({
                let a = a.clone();
                let b = b.clone();
                move || match (a.get(), b.get()) {
                    (Some(a), Some(b)) => Some(a + b),
                    _ => None,
                }
            })
    };

    let sink: Sink<Option<i32>> = Sink::new();
    let _subscription = sum.subscribe(sink.observer());
    assert_eq!(sink.drain(), [Some(3)]);

    a.set(10);
    assert_eq!(sink.drain(), [Some(12)]);

    b.set(None);
    assert_eq!(sink.drain(), [None]);
}
