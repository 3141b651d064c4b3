// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use brook_stream::prelude::*;
use brook_test_utils::{ActivationProbe, CallCounter, Sink};

fn string_var(value: &str) -> Var<String> {
    Var::new(value.to_string())
}

#[test]
fn test_value_stream_stays_inert_until_subscribed() {
    // Arrange
    let text = string_var("a");
    let stream = ValueStream::of(&text).map(|value| value.to_uppercase());

    // Assert
    assert_eq!(text.listener_count(), 0);

    // Act
    let subscription = stream.subscribe(|_: &Option<String>| {});
    assert_eq!(text.listener_count(), 1);

    subscription.unsubscribe();
    assert_eq!(text.listener_count(), 0);
}

#[test]
fn test_value_stream_delivers_current_value_to_each_new_subscriber() {
    // Arrange
    let text = string_var("a");
    let stream = ValueStream::of(&text);
    let first: Sink<Option<String>> = Sink::new();
    let second: Sink<Option<String>> = Sink::new();

    // Act
    let _first_subscription = stream.subscribe(first.observer());
    let _second_subscription = stream.subscribe(second.observer());

    // Assert
    assert_eq!(first.drain(), [Some("a".to_string())]);
    assert_eq!(second.drain(), [Some("a".to_string())]);

    text.set("b".to_string());
    assert_eq!(first.drain(), [Some("b".to_string())]);
    assert_eq!(second.drain(), [Some("b".to_string())]);
}

#[test]
fn test_value_stream_answers_current_value_without_observers() {
    // Arrange
    let text = string_var("a");
    let stream = ValueStream::of(&text).map(|value| value.to_uppercase());

    // Assert
    assert_eq!(stream.current_value(), OptionalValue::of(Some("A".to_string())));
    assert_eq!(text.listener_count(), 0);
}

#[test]
fn test_current_value_flows_through_defaults_and_maps() {
    // Arrange
    let text: Var<String> = Var::new(None);
    let stream = ValueStream::of(&text)
        .filter(|value| value.len() > 1)
        .with_default("X".to_string())
        .map(|value| format!("{value}Y"));
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());

    // Assert: the filtered source has no answer, the default does
    assert_eq!(sink.drain(), [Some("XY".to_string())]);

    text.set("AB".to_string());
    assert_eq!(sink.drain(), [Some("ABY".to_string())]);

    // rejected by the filter
    text.set("C".to_string());
    assert!(sink.is_empty());

    // null-like payloads bypass the filter and the map
    text.set(None);
    assert_eq!(sink.drain(), [None]);
}

#[test]
fn test_map_skips_null_payloads() {
    // Arrange
    let text: Var<String> = Var::new("ab".to_string());
    let counter = CallCounter::new();
    let stream = ValueStream::of(&text).map(counter.mapper(|value: &String| value.len()));
    let sink: Sink<Option<usize>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    text.set(None);
    text.set("abcd".to_string());

    // Assert: activation applies the mapper to the replayed value once in
    // the live subscription and once in the snapshot query; the null-like
    // payload never reaches it
    assert_eq!(sink.drain(), [Some(2), None, Some(4)]);
    assert_eq!(counter.count(), 3);
}

#[test]
fn test_or_else_replaces_null_payloads() {
    // Arrange
    let text: Var<String> = Var::new(None);
    let stream = ValueStream::of(&text).or_else("fallback".to_string());
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    text.set("real".to_string());
    text.set(None);

    // Assert
    assert_eq!(
        sink.drain(),
        [
            Some("fallback".to_string()),
            Some("real".to_string()),
            Some("fallback".to_string()),
        ]
    );
}

#[test]
fn test_or_else_get_consults_supplier_only_for_null_payloads() {
    // Arrange
    let text: Var<String> = Var::new("a".to_string());
    let counter = CallCounter::new();
    let supplier_calls = counter.clone();
    let stream = ValueStream::of(&text).or_else_get(move || {
        supplier_calls.side_effect()(&());
        Some("fallback".to_string())
    });
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    text.set("b".to_string());

    // Assert
    assert_eq!(counter.count(), 0);

    text.set(None);
    assert_eq!(counter.count(), 1);
    assert_eq!(
        sink.drain(),
        [
            Some("a".to_string()),
            Some("b".to_string()),
            Some("fallback".to_string()),
        ]
    );
}

#[test]
fn test_filter_forwards_null_payloads_without_consulting_predicate() {
    // Arrange
    let text: Var<String> = Var::new("keep".to_string());
    let counter = CallCounter::new();
    let stream = ValueStream::of(&text).filter(counter.predicate(|value: &String| value.len() > 2));
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    text.set("no".to_string());
    text.set(None);
    text.set("longer".to_string());

    // Assert: change-kind result, so nothing on subscribe; the predicate
    // still judged the value replayed during activation
    assert_eq!(sink.drain(), [None, Some("longer".to_string())]);
    assert_eq!(counter.count(), 3);
}

#[test]
fn test_filter_null_unwraps_meaningful_payloads() {
    // Arrange
    let text: Var<String> = Var::new(None);
    let stream = ValueStream::of(&text).filter_null();
    let sink: Sink<String> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    text.set("a".to_string());
    text.set(None);
    text.set("b".to_string());

    // Assert
    assert_eq!(sink.drain(), ["a".to_string(), "b".to_string()]);
}

#[test]
fn test_peek_observes_payloads_including_null() {
    // Arrange
    let text: Var<String> = Var::new("a".to_string());
    let peeked: Sink<Option<String>> = Sink::new();
    let sink: Sink<Option<String>> = Sink::new();
    let stream = ValueStream::of(&text).peek(peeked.observer());

    // Act
    let _subscription = stream.subscribe(sink.observer());
    text.set(None);
    text.set("b".to_string());

    // Assert: first activation replays the current value through the live
    // subscription, so the side effect sees it too
    assert_eq!(
        peeked.drain(),
        [Some("a".to_string()), None, Some("b".to_string())]
    );
    assert_eq!(
        sink.drain(),
        [Some("a".to_string()), None, Some("b".to_string())]
    );

    // a later subscriber is served from the snapshot, without the side effect
    let second: Sink<Option<String>> = Sink::new();
    let _second_subscription = stream.subscribe(second.observer());
    assert_eq!(second.drain(), [Some("b".to_string())]);
    assert!(peeked.is_empty());
}

#[test]
#[should_panic(expected = "recursively emit")]
fn test_peek_rejects_recursive_emission() {
    // Arrange
    let number: Var<i32> = Var::new(0);
    let stream = ValueStream::of(&number).peek({
        let number = number.clone();
        move |payload: &Option<i32>| {
            if *payload == Some(1) {
                number.set(2);
            }
        }
    });
    let _subscription = stream.subscribe(|_: &Option<i32>| {});

    // Act
    number.set(1);
}

#[test]
fn test_or_prefers_source_over_alternative() {
    // Arrange
    let primary: Var<String> = Var::new(None);
    let fallback: Var<String> = Var::new("alt1".to_string());
    let stream = {
        let fallback = fallback.clone();
        ValueStream::of(&primary).or(move || ValueStream::of(&fallback))
    };
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());

    // Assert: the alternative answers while the source is null-like
    assert_eq!(sink.drain(), [Some("alt1".to_string())]);

    fallback.set("alt2".to_string());
    assert_eq!(sink.drain(), [Some("alt2".to_string())]);

    // a meaningful source value wins, exactly once
    primary.set("real".to_string());
    assert_eq!(sink.drain(), [Some("real".to_string())]);

    // the alternative is detached while the source answers
    fallback.set("alt3".to_string());
    assert!(sink.is_empty());

    primary.set(None);
    assert_eq!(sink.drain(), [Some("alt3".to_string())]);
}

#[test]
fn test_or_reports_current_value_of_active_branch() {
    // Arrange
    let primary: Var<String> = Var::new(None);
    let fallback: Var<String> = Var::new("alt".to_string());
    let stream = {
        let fallback = fallback.clone();
        ValueStream::of(&primary).or(move || ValueStream::of(&fallback))
    };

    // Assert
    assert_eq!(stream.current_value(), OptionalValue::of(Some("alt".to_string())));

    primary.set("real".to_string());
    assert_eq!(stream.current_value(), OptionalValue::of(Some("real".to_string())));
}

#[test]
fn test_flat_map_follows_the_selected_substream() {
    // Arrange
    let selector: Var<bool> = Var::new(true);
    let left: Var<String> = Var::new("l1".to_string());
    let right: Var<String> = Var::new("r1".to_string());
    let stream = {
        let left = ValueStream::of(&left);
        let right = ValueStream::of(&right);
        ValueStream::of(&selector)
            .flat_map(move |which| if *which { left.clone() } else { right.clone() })
    };
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());

    // Assert
    assert_eq!(sink.drain(), [Some("l1".to_string())]);

    left.set("l2".to_string());
    assert_eq!(sink.drain(), [Some("l2".to_string())]);

    // the unselected substream is not tracked
    right.set("r2".to_string());
    assert!(sink.is_empty());

    // switching delivers the new substream's current value
    selector.set(false);
    assert_eq!(sink.drain(), [Some("r2".to_string())]);

    left.set("l3".to_string());
    assert!(sink.is_empty());

    right.set("r3".to_string());
    assert_eq!(sink.drain(), [Some("r3".to_string())]);

    // a null-like selector pins the result to the null-like value
    selector.set(None);
    assert_eq!(sink.drain(), [None]);
    assert_eq!(stream.current_value(), OptionalValue::of(None));
}

#[test]
fn test_flat_map_to_change_tracks_changes_only() {
    // Arrange
    let selector: Var<bool> = Var::new(true);
    let source: Var<String> = Var::new("a".to_string());
    let stream = {
        let changes = ChangeStream::of(&source);
        ValueStream::of(&selector).flat_map_to_change(move |_| changes.clone())
    };
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());

    // Assert: change-kind result, nothing on subscribe
    assert!(sink.is_empty());

    source.set("b".to_string());
    assert_eq!(sink.drain(), [Some("b".to_string())]);
}

#[test]
fn test_condition_on_gates_values() {
    // Arrange
    let gate: Var<bool> = Var::new(true);
    let text: Var<String> = Var::new("a".to_string());
    let stream = ValueStream::of(&text).condition_on(&ValueStream::of(&gate));
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());

    // Assert
    assert_eq!(sink.drain(), [Some("a".to_string())]);

    text.set("b".to_string());
    assert_eq!(sink.drain(), [Some("b".to_string())]);

    gate.set(false);
    text.set("c".to_string());
    assert!(sink.is_empty());

    // reopening re-delivers the source's current value
    gate.set(true);
    assert_eq!(sink.drain(), [Some("c".to_string())]);
}

#[test]
fn test_condition_on_has_no_current_value_while_closed() {
    // Arrange
    let gate: Var<bool> = Var::new(false);
    let text: Var<String> = Var::new("a".to_string());
    let stream = ValueStream::of(&text).condition_on(&ValueStream::of(&gate));

    // Assert: the one place a value stream's query comes up empty
    assert_eq!(stream.current_value(), OptionalValue::empty());

    gate.set(true);
    assert_eq!(stream.current_value(), OptionalValue::of(Some("a".to_string())));
}

#[test]
fn test_condition_on_treats_null_condition_as_closed() {
    // Arrange
    let gate: Var<bool> = Var::new(true);
    let text: Var<String> = Var::new("a".to_string());
    let stream = ValueStream::of(&text).condition_on(&ValueStream::of(&gate));
    let sink: Sink<Option<String>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    sink.drain();
    gate.set(None);
    text.set("b".to_string());

    // Assert
    assert!(sink.is_empty());
    assert_eq!(stream.current_value(), OptionalValue::empty());
}

#[test]
fn test_condition_on_releases_the_source_while_closed() {
    // Arrange
    let gate: Var<bool> = Var::new(true);
    let text: Var<String> = Var::new("a".to_string());
    let stream = ValueStream::of(&text).condition_on(&ValueStream::of(&gate));

    // Act
    let _subscription = stream.subscribe(|_: &Option<String>| {});
    assert_eq!(text.listener_count(), 1);

    gate.set(false);

    // Assert
    assert_eq!(text.listener_count(), 0);
    assert_eq!(gate.listener_count(), 1);
}

#[test]
fn test_constant_never_changes() {
    // Arrange
    let stream: ValueStream<i32> = ValueStream::constant(42);
    let sink: Sink<Option<i32>> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());

    // Assert
    assert_eq!(sink.drain(), [Some(42)]);
    assert_eq!(stream.current_value(), OptionalValue::of(Some(42)));
}

#[test]
fn test_of_subscriber_activates_lazily() {
    // Arrange
    let probe: ActivationProbe<Option<i32>> = ActivationProbe::new();
    let stream = ValueStream::of_subscriber(probe.subscriber(), || Some(5));
    let first: Sink<Option<i32>> = Sink::new();
    let second: Sink<Option<i32>> = Sink::new();

    // Assert
    assert_eq!(probe.activations(), 0);

    // Act
    let first_subscription = stream.subscribe(first.observer());
    let second_subscription = stream.subscribe(second.observer());

    // Assert: one activation serves all observers
    assert_eq!(probe.activations(), 1);
    assert_eq!(first.drain(), [Some(5)]);
    assert_eq!(second.drain(), [Some(5)]);

    probe.emit(&Some(7));
    assert_eq!(first.drain(), [Some(7)]);
    assert_eq!(second.drain(), [Some(7)]);

    first_subscription.unsubscribe();
    assert_eq!(probe.cancellations(), 0);

    second_subscription.unsubscribe();
    assert_eq!(probe.cancellations(), 1);

    // and the stream can come back
    let _third_subscription = stream.subscribe(first.observer());
    assert_eq!(probe.activations(), 2);
}
