use gcfifo::IterCursor;
use restream::{StreamToken, TokenSource, TokenStream};

#[derive(Debug, Clone, PartialEq)]
struct Word(String);

impl StreamToken for Word {
    fn text(&self) -> &str {
        &self.0
    }
}

fn token_stream(words: &[&str]) -> TokenStream<IterCursor<std::vec::IntoIter<Word>>> {
    let tokens: Vec<Word> = words.iter().map(|w| Word((*w).to_string())).collect();
    TokenStream::new(IterCursor::new(tokens.into_iter())).unwrap()
}

#[test]
fn test_lt_one_is_the_current_token() {
    let mut tokens = token_stream(&["cc", "-o", "app"]);
    assert_eq!(tokens.lt(1).unwrap(), Some(Word("cc".to_string())));
    assert_eq!(tokens.index(), 0);
}

#[test]
fn test_lt_ahead_and_consume() {
    let mut tokens = token_stream(&["cc", "-o", "app"]);
    assert_eq!(tokens.lt(2).unwrap(), Some(Word("-o".to_string())));
    tokens.consume().unwrap();
    assert_eq!(tokens.lt(1).unwrap(), Some(Word("-o".to_string())));
    assert_eq!(tokens.lt(2).unwrap(), Some(Word("app".to_string())));
    assert_eq!(tokens.lt(3).unwrap(), None);
}

#[test]
fn test_lt_past_the_end_is_none() {
    let mut tokens = token_stream(&[]);
    assert_eq!(tokens.lt(1).unwrap(), None);
}

#[test]
fn test_get_by_absolute_index() {
    let mut tokens = token_stream(&["a", "b", "c"]);
    let pin = tokens.mark().unwrap();
    assert_eq!(tokens.get(2).unwrap(), Some(Word("c".to_string())));
    assert_eq!(tokens.get(0).unwrap(), Some(Word("a".to_string())));
    assert_eq!(tokens.get(7).unwrap(), None);
    assert_eq!(tokens.index(), 0);
    tokens.release(pin);
}

#[test]
fn test_get_text_concatenates_token_texts() {
    let mut tokens = token_stream(&["foo", ".o", ":"]);
    let pin = tokens.mark().unwrap();
    assert_eq!(tokens.get_text(0, 2).unwrap(), "foo.o:");
    assert_eq!(tokens.get_text(1, 1).unwrap(), ".o");
    tokens.release(pin);
}

#[test]
fn test_mark_seek_round_trip() {
    let mut tokens = token_stream(&["a", "b", "c"]);
    let pin = tokens.mark().unwrap();
    tokens.consume().unwrap();
    tokens.consume().unwrap();
    assert_eq!(tokens.index(), 2);

    tokens.seek(0).unwrap();
    assert_eq!(tokens.lt(1).unwrap(), Some(Word("a".to_string())));
    tokens.release(pin);
}
