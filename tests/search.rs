//! Search bar behavior and match highlighting

mod common;

use common::{run, test_model};
use quill::messages::{Msg, SearchMsg};
use quill::model::AppModel;
use quill::search::{find_all, Match, SearchOutcome};

fn search(model: &mut AppModel, term: &str) {
    run(model, Msg::Search(SearchMsg::Open));
    run(model, Msg::Search(SearchMsg::InsertText(term.to_string())));
    run(model, Msg::Search(SearchMsg::Run));
}

fn outcome(model: &AppModel) -> Option<SearchOutcome> {
    model.ui.search.as_ref().and_then(|s| s.last_outcome)
}

// ========================================================================
// find_all
// ========================================================================

#[test]
fn test_matches_do_not_overlap() {
    let result = find_all("aaaa", "aa", true);
    assert_eq!(
        result.matches,
        vec![Match { start: 0, len: 2 }, Match { start: 2, len: 2 }]
    );
}

#[test]
fn test_case_insensitive_by_default_in_bar() {
    let result = find_all("Apple apple APPLE", "apple", false);
    assert_eq!(result.outcome, SearchOutcome::Found(3));

    let result = find_all("Apple apple APPLE", "apple", true);
    assert_eq!(result.matches, vec![Match { start: 6, len: 5 }]);
}

#[test]
fn test_hello_world_hello() {
    let insensitive = find_all("Hello world hello", "hello", false);
    assert_eq!(
        insensitive.matches,
        vec![Match { start: 0, len: 5 }, Match { start: 12, len: 5 }]
    );

    let sensitive = find_all("Hello world hello", "hello", true);
    assert_eq!(sensitive.matches, vec![Match { start: 12, len: 5 }]);
    assert_eq!(find_all("Hello world hello", "hello", true), sensitive);
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    let result = find_all("héllo héllo", "llo", true);
    assert_eq!(result.matches[1].start, 8);
}

#[test]
fn test_matches_span_lines() {
    let result = find_all("end\nstart", "d\ns", true);
    assert_eq!(result.matches, vec![Match { start: 2, len: 3 }]);
}

// ========================================================================
// Search bar
// ========================================================================

#[test]
fn test_search_highlights_and_moves_caret_to_first_match() {
    let mut model = test_model("one\ntwo one");
    search(&mut model, "one");

    assert_eq!(model.search_highlights.len(), 2);
    assert_eq!(outcome(&model), Some(SearchOutcome::Found(2)));
    assert_eq!(model.document.editable.cursor_offset(), 0);
    assert_eq!(
        model.ui.search.as_ref().and_then(|s| s.status_text()),
        Some("Found 2 match(es)".to_string())
    );
}

#[test]
fn test_search_term_is_trimmed() {
    let mut model = test_model("xx needle");
    search(&mut model, "  needle ");
    assert_eq!(model.search_highlights, vec![Match { start: 3, len: 6 }]);
    assert_eq!(model.document.editable.cursor_offset(), 3);
}

#[test]
fn test_empty_term_reports_and_clears() {
    let mut model = test_model("abc");
    search(&mut model, "abc");
    assert_eq!(model.search_highlights.len(), 1);

    run(&mut model, Msg::Search(SearchMsg::MoveCursorEnd));
    for _ in 0..3 {
        run(&mut model, Msg::Search(SearchMsg::DeleteBackward));
    }
    run(&mut model, Msg::Search(SearchMsg::Run));

    assert!(model.search_highlights.is_empty());
    assert_eq!(outcome(&model), Some(SearchOutcome::NoTerm));
}

#[test]
fn test_no_matches_keeps_caret() {
    let mut model = test_model("abc\ndef");
    run(&mut model, Msg::move_cursor(quill::messages::Direction::Down));
    search(&mut model, "zzz");

    assert!(model.search_highlights.is_empty());
    assert_eq!(outcome(&model), Some(SearchOutcome::NoMatches));
    assert_eq!(model.document.editable.cursor().line, 1);
}

#[test]
fn test_case_toggle_changes_results() {
    let mut model = test_model("Word word");
    search(&mut model, "word");
    assert_eq!(model.search_highlights.len(), 2);

    run(&mut model, Msg::Search(SearchMsg::ToggleCaseSensitive));
    run(&mut model, Msg::Search(SearchMsg::Run));
    assert_eq!(model.search_highlights, vec![Match { start: 5, len: 4 }]);
}

#[test]
fn test_pasted_term_keeps_first_line() {
    let mut model = test_model("");
    run(&mut model, Msg::Search(SearchMsg::Open));
    run(
        &mut model,
        Msg::Search(SearchMsg::InsertText("first\nsecond".to_string())),
    );
    assert_eq!(model.ui.search.as_ref().unwrap().term(), "first");
}

#[test]
fn test_closing_search_clears_highlights() {
    let mut model = test_model("abc abc");
    search(&mut model, "abc");
    run(&mut model, Msg::Search(SearchMsg::Close));

    assert!(model.ui.search.is_none());
    assert!(model.search_highlights.is_empty());
}

#[test]
fn test_search_does_not_modify_document() {
    let mut model = test_model("abc");
    search(&mut model, "b");
    assert!(!model.document.is_modified);
    assert_eq!(model.document.text(), "abc");
}
