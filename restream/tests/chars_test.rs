use gcfifo::{Error, IterCursor};
use restream::{CharSource, CharStream, EOF};

fn char_stream(text: &str) -> CharStream<IterCursor<std::vec::IntoIter<char>>> {
    CharStream::new(IterCursor::new(text.chars().collect::<Vec<_>>().into_iter())).unwrap()
}

#[test]
fn test_la_returns_character_codes() {
    let mut chars = char_stream("ab");
    assert_eq!(chars.la(1).unwrap(), i32::from(b'a'));
    assert_eq!(chars.la(2).unwrap(), i32::from(b'b'));
    assert_eq!(chars.la(3).unwrap(), EOF);
    assert_eq!(chars.index(), 0);
}

#[test]
fn test_la_char_decodes() {
    let mut chars = char_stream("дom");
    assert_eq!(chars.la_char(1).unwrap(), Some('д'));
    assert_eq!(chars.la_char(2).unwrap(), Some('o'));
    chars.consume().unwrap();
    assert_eq!(chars.la_char(1).unwrap(), Some('o'));
}

#[test]
fn test_la_on_empty_input_is_eof() {
    let mut chars = char_stream("");
    assert_eq!(chars.la(1).unwrap(), EOF);
    assert_eq!(chars.la_char(1).unwrap(), None);
    assert_eq!(chars.size(), 0);
}

#[test]
fn test_consume_advances_the_index() {
    let mut chars = char_stream("abc");
    chars.consume().unwrap();
    chars.consume().unwrap();
    assert_eq!(chars.index(), 2);
    assert_eq!(chars.la(1).unwrap(), i32::from(b'c'));
}

#[test]
fn test_get_text_covers_the_inclusive_range() {
    let mut chars = char_stream("hello");
    let pin = chars.mark().unwrap();
    while chars.la_char(1).unwrap().is_some() {
        chars.consume().unwrap();
    }

    assert_eq!(chars.get_text(0, 4).unwrap(), "hello");
    assert_eq!(chars.get_text(1, 3).unwrap(), "ell");
    // The position did not move
    assert_eq!(chars.index(), 5);
    chars.release(pin);
}

#[test]
fn test_get_text_of_evicted_history_fails() {
    let mut chars = char_stream("abc");
    chars.consume().unwrap();
    chars.consume().unwrap();
    assert!(matches!(
        chars.get_text(0, 1).unwrap_err(),
        Error::OutOfWindow { .. }
    ));
}

#[test]
fn test_mark_seek_round_trip() {
    let mut chars = char_stream("abcdef");
    chars.consume().unwrap();
    let pin = chars.mark().unwrap();
    let saved = chars.index();

    chars.consume().unwrap();
    chars.consume().unwrap();
    chars.seek(saved).unwrap();

    assert_eq!(chars.index(), saved);
    assert_eq!(chars.la(1).unwrap(), i32::from(b'b'));
    chars.release(pin);
}

#[test]
fn test_multibyte_text_extraction() {
    let mut chars = char_stream("aжc");
    let pin = chars.mark().unwrap();
    chars.consume().unwrap();
    chars.consume().unwrap();
    chars.consume().unwrap();

    // Indices count characters, not bytes
    assert_eq!(chars.size(), 3);
    assert_eq!(chars.get_text(0, 2).unwrap(), "aжc");
    assert_eq!(chars.get_text(1, 1).unwrap(), "ж");
    chars.release(pin);
}
