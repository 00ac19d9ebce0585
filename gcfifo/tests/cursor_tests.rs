use gcfifo::{Cursor, CursorState, IterCursor, Pull, PullCursor, Result};

#[test]
fn test_iter_cursor_walks_the_iterator() {
    let mut cursor = IterCursor::new(vec![10, 20].into_iter());
    assert_eq!(cursor.state(), CursorState::Start);
    assert!(cursor.current_item().is_err());

    cursor.move_to_next().unwrap();
    assert_eq!(cursor.state(), CursorState::Item(0));
    assert_eq!(cursor.current_item().unwrap(), &10);

    cursor.move_to_next().unwrap();
    assert_eq!(cursor.state(), CursorState::Item(1));
    assert_eq!(cursor.current_item().unwrap(), &20);

    cursor.move_to_next().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
    assert!(cursor.move_to_next().is_err());
}

#[test]
fn test_iter_cursor_over_empty_iterator() {
    let mut cursor = IterCursor::new(std::iter::empty::<i32>());
    cursor.move_to_next().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
}

#[test]
fn test_iter_cursor_move_to_end_drains() {
    let mut cursor = IterCursor::new(vec![1, 2, 3].into_iter());
    cursor.move_to_next().unwrap();
    cursor.move_to_end().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
    assert!(cursor.current_item().is_err());
}

struct Countdown(u32);

impl Pull for Countdown {
    type Item = u32;

    fn pull(&mut self) -> Result<Option<u32>> {
        if self.0 == 0 {
            return Ok(None);
        }
        self.0 -= 1;
        Ok(Some(self.0))
    }
}

#[test]
fn test_pull_cursor_walks_the_source() {
    let mut cursor = PullCursor::new(Countdown(2));

    cursor.move_to_next().unwrap();
    assert_eq!(cursor.current_item().unwrap(), &1);
    cursor.move_to_next().unwrap();
    assert_eq!(cursor.current_item().unwrap(), &0);
    cursor.move_to_next().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
}

#[test]
fn test_boxed_pull_is_a_pull() {
    let mut boxed: Box<dyn Pull<Item = u32>> = Box::new(Countdown(1));
    assert_eq!(boxed.pull().unwrap(), Some(0));
    assert_eq!(boxed.pull().unwrap(), None);

    let mut cursor = PullCursor::new(boxed);
    cursor.move_to_next().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
}

#[test]
fn test_pull_cursor_move_to_end_is_idempotent() {
    let mut cursor = PullCursor::new(Countdown(3));
    cursor.move_to_end().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
    cursor.move_to_end().unwrap();
    assert_eq!(cursor.state(), CursorState::End);
}
