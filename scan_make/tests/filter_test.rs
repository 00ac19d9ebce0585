use scan_make::filter::{CommentFilter, LineChars, SectionFilter};

fn lines(text: &[&str]) -> std::vec::IntoIter<String> {
    text.iter()
        .map(|s| (*s).to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn test_section_filter_keeps_lines_between_markers() {
    let input = lines(&[
        "preamble",
        "# Files",
        "foo: bar",
        "",
        "# files hash-table stats:",
        "trailing",
    ]);
    let kept: Vec<String> = SectionFilter::new(input).collect();
    assert_eq!(kept, vec!["foo: bar".to_string(), String::new()]);
}

#[test]
fn test_section_filter_without_start_marker() {
    let input = lines(&["foo: bar", "# files hash-table stats:"]);
    let kept: Vec<String> = SectionFilter::new(input).collect();
    assert!(kept.is_empty());
}

#[test]
fn test_section_filter_without_terminator_runs_to_the_end() {
    let input = lines(&["# Files", "foo: bar", "baz: qux"]);
    let kept: Vec<String> = SectionFilter::new(input).collect();
    assert_eq!(kept, vec!["foo: bar".to_string(), "baz: qux".to_string()]);
}

#[test]
fn test_section_markers_match_with_trailing_whitespace() {
    let input = lines(&["# Files   ", "foo: bar", "# files hash-table stats:  "]);
    let kept: Vec<String> = SectionFilter::new(input).collect();
    assert_eq!(kept, vec!["foo: bar".to_string()]);
}

#[test]
fn test_section_filter_stops_at_the_first_terminator() {
    let input = lines(&[
        "# Files",
        "first",
        "# files hash-table stats:",
        "# Files",
        "second",
    ]);
    let kept: Vec<String> = SectionFilter::new(input).collect();
    assert_eq!(kept, vec!["first".to_string()]);
}

#[test]
fn test_comment_filter_drops_hash_lines() {
    let input = lines(&["# Not a target:", "foo: bar", "", "#", "\t# recipe keeps its tab"]);
    let kept: Vec<String> = CommentFilter::new(input).collect();
    assert_eq!(
        kept,
        vec![
            "foo: bar".to_string(),
            String::new(),
            "\t# recipe keeps its tab".to_string(),
        ]
    );
}

#[test]
fn test_line_chars_reinserts_newlines() {
    let text: String = LineChars::new(lines(&["ab", "", "c"])).collect();
    assert_eq!(text, "ab\n\nc\n");
}

#[test]
fn test_line_chars_on_empty_input() {
    let mut chars = LineChars::new(lines(&[]));
    assert_eq!(chars.next(), None);
}
