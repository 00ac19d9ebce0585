use gcfifo::{BufferCursor, Cursor, CursorState, ManagedFifo, RingFifo, Window};

fn managed() -> ManagedFifo<RingFifo<i32>> {
    ManagedFifo::new(RingFifo::new())
}

#[test]
fn test_no_eviction_while_at_start() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.collect_garbage();

    // Nothing was consumed yet
    assert_eq!(fifo.count(), 2);
    assert_eq!(fifo.shifted(), 0);
}

#[test]
fn test_consumed_history_is_evicted() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.push(3);
    fifo.move_to_index(2).unwrap();

    fifo.collect_garbage();

    // Only the current element survives
    assert_eq!(fifo.count(), 1);
    assert_eq!(fifo.shifted(), 2);
    assert_eq!(fifo.state(), CursorState::Item(0));
    assert_eq!(fifo.current_item().unwrap(), &3);
}

#[test]
fn test_current_element_is_never_evicted() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.move_to_next().unwrap();

    fifo.collect_garbage();
    fifo.push(2);

    assert_eq!(fifo.count(), 2);
    assert_eq!(fifo.current_item().unwrap(), &1);
}

#[test]
fn test_eviction_runs_on_push() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.move_to_index(1).unwrap();

    // The push sweeps the consumed head
    fifo.push(3);

    assert_eq!(fifo.shifted(), 1);
    assert_eq!(fifo.count(), 2);
    assert_eq!(fifo.current_item().unwrap(), &2);
}

#[test]
fn test_pin_blocks_eviction() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.push(3);
    fifo.move_to_next().unwrap();
    let pin = fifo.new_strong_reference().unwrap();
    fifo.move_to_index(2).unwrap();

    fifo.collect_garbage();
    assert_eq!(fifo.count(), 3);
    assert_eq!(fifo.shifted(), 0);

    fifo.release_strong_reference(pin);
    assert_eq!(fifo.shifted(), 2);
    assert_eq!(fifo.current_item().unwrap(), &3);
}

#[test]
fn test_release_is_idempotent() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.move_to_next().unwrap();
    let pin = fifo.new_strong_reference().unwrap();
    let pin_again = fifo.new_strong_reference().unwrap();
    assert_ne!(pin, pin_again);
    assert_eq!(fifo.reference_count(0), 2);

    fifo.release_strong_reference(pin);
    fifo.release_strong_reference(pin);
    fifo.release_strong_reference(pin);

    // The double release did not touch the remaining pin
    assert_eq!(fifo.reference_count(0), 1);
    fifo.move_to_index(1).unwrap();
    fifo.collect_garbage();
    assert_eq!(fifo.shifted(), 0);

    fifo.release_strong_reference(pin_again);
    assert_eq!(fifo.shifted(), 1);
}

#[test]
fn test_release_unknown_token_is_ignored() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.move_to_next().unwrap();
    fifo.release_strong_reference(12345);
    assert_eq!(fifo.count(), 1);
}

#[test]
fn test_pin_requires_current_item() {
    let mut fifo = managed();
    assert!(fifo.new_strong_reference().is_err());

    fifo.push(1);
    assert!(fifo.new_strong_reference().is_err());
    fifo.move_to_next().unwrap();
    assert!(fifo.new_strong_reference().is_ok());
}

#[test]
fn test_pin_tracks_position_across_eviction() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.push(3);
    fifo.move_to_index(1).unwrap();
    let pin = fifo.new_strong_reference().unwrap();
    fifo.move_to_index(2).unwrap();

    // Evicts element 1; the pin now guards relative index 0
    fifo.collect_garbage();
    assert_eq!(fifo.shifted(), 1);
    assert_eq!(fifo.reference_count(0), 1);
    fifo.move_to_index(0).unwrap();
    assert_eq!(fifo.current_item().unwrap(), &2);

    fifo.release_strong_reference(pin);
}

#[test]
fn test_eviction_at_end_clears_unpinned_window() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.push(2);
    fifo.move_to_end().unwrap();

    fifo.collect_garbage();

    assert!(fifo.is_empty());
    assert_eq!(fifo.shifted(), 2);
    assert_eq!(fifo.state(), CursorState::End);
}

#[test]
fn test_tokens_do_not_collide() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.move_to_next().unwrap();

    let mut tokens = Vec::new();
    for _ in 0..100 {
        tokens.push(fifo.new_strong_reference().unwrap());
    }
    let mut sorted = tokens.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), tokens.len());

    for token in tokens {
        fifo.release_strong_reference(token);
    }
    assert_eq!(fifo.reference_count(0), 0);
}

#[test]
fn test_token_values_are_recycled() {
    let mut fifo = managed();
    fifo.push(1);
    fifo.move_to_next().unwrap();

    for _ in 0..10 {
        let token = fifo.new_strong_reference().unwrap();
        fifo.release_strong_reference(token);
    }
    assert_eq!(fifo.reference_count(0), 0);
}
