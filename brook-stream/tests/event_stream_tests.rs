// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use brook_stream::prelude::*;
use brook_test_utils::{CallCounter, Sink};

#[test]
fn test_event_source_delivers_events() {
    // Arrange
    let source: EventSource<String> = EventSource::new();
    let sink: Sink<String> = Sink::new();

    // Act
    let _subscription = source.stream().subscribe(sink.observer());
    source.push("a".to_string());
    source.push("b".to_string());

    // Assert
    assert_eq!(sink.drain(), ["a".to_string(), "b".to_string()]);
}

#[test]
fn test_try_push_rejects_null_payloads() {
    // Arrange
    let source: EventSource<String> = EventSource::new();
    let sink: Sink<String> = Sink::new();
    let _subscription = source.stream().subscribe(sink.observer());

    // Act
    let accepted = source.try_push(Some("a".to_string()));
    let rejected = source.try_push(None);

    // Assert
    assert_eq!(accepted, Ok(()));
    assert!(matches!(
        rejected,
        Err(StreamError::InvalidArgument { .. })
    ));
    assert_eq!(sink.drain(), ["a".to_string()]);
}

#[test]
fn test_of_skips_null_transitions_of_the_var() {
    // Arrange
    let text: Var<String> = Var::new(None);
    let stream = EventStream::of(&text);
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
fn test_map_transforms_every_event() {
    // Arrange
    let source: EventSource<i32> = EventSource::new();
    let stream = source.stream().map(|value| value * 10);
    let sink: Sink<i32> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    source.push(1);
    source.push(2);

    // Assert
    assert_eq!(sink.drain(), [10, 20]);
}

#[test]
fn test_filter_map_drops_unmapped_events() {
    // Arrange
    let source: EventSource<String> = EventSource::new();
    let stream = source
        .stream()
        .filter_map(|value| value.parse::<i32>().ok());
    let sink: Sink<i32> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    source.push("12".to_string());
    source.push("not a number".to_string());
    source.push("34".to_string());

    // Assert
    assert_eq!(sink.drain(), [12, 34]);
}

#[test]
fn test_filter_keeps_matching_events() {
    // Arrange
    let source: EventSource<i32> = EventSource::new();
    let counter = CallCounter::new();
    let stream = source.stream().filter(counter.predicate(|value: &i32| *value > 0));
    let sink: Sink<i32> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    source.push(-1);
    source.push(1);

    // Assert
    assert_eq!(sink.drain(), [1]);
    assert_eq!(counter.count(), 2);
}

#[test]
fn test_flat_map_follows_the_selected_event_stream() {
    // Arrange
    let selector: EventSource<bool> = EventSource::new();
    let left: EventSource<String> = EventSource::new();
    let right: EventSource<String> = EventSource::new();
    let stream = {
        let left = left.stream();
        let right = right.stream();
        selector
            .stream()
            .flat_map(move |which| if *which { left.clone() } else { right.clone() })
    };
    let sink: Sink<String> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    selector.push(true);
    left.push("l1".to_string());
    right.push("r1".to_string());
    selector.push(false);
    left.push("l2".to_string());
    right.push("r2".to_string());

    // Assert
    assert_eq!(sink.drain(), ["l1".to_string(), "r2".to_string()]);
}

#[test]
fn test_peek_observes_events_in_order() {
    // Arrange
    let source: EventSource<i32> = EventSource::new();
    let order: Sink<String> = Sink::new();
    let stream = source.stream().peek({
        let order_observer = order.observer();
        move |value: &i32| order_observer(&format!("peek:{value}"))
    });

    // Act
    let _subscription = stream.subscribe({
        let order_observer = order.observer();
        move |value: &i32| order_observer(&format!("got:{value}"))
    });
    source.push(1);

    // Assert: the side effect runs before the delivery
    assert_eq!(order.drain(), ["peek:1".to_string(), "got:1".to_string()]);
}

#[test]
fn test_with_default_promotes_to_value_stream() {
    // Arrange
    let source: EventSource<i32> = EventSource::new();
    let stream = source.stream().with_default(0);
    let sink: Sink<Option<i32>> = Sink::new();

    // Assert
    assert_eq!(stream.current_value(), OptionalValue::of(Some(0)));

    // Act
    let _subscription = stream.subscribe(sink.observer());
    source.push(5);

    // Assert
    assert_eq!(sink.drain(), [Some(0), Some(5)]);
}

#[test]
fn test_condition_on_gates_events() {
    // Arrange
    let gate: Var<bool> = Var::new(true);
    let source: EventSource<i32> = EventSource::new();
    let stream = source.stream().condition_on(&ValueStream::of(&gate));
    let sink: Sink<i32> = Sink::new();

    // Act
    let _subscription = stream.subscribe(sink.observer());
    source.push(1);
    gate.set(false);
    source.push(2);
    gate.set(true);
    source.push(3);

    // Assert
    assert_eq!(sink.drain(), [1, 3]);
}
