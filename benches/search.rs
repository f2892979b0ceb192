//! Benchmarks for search operations
//!
//! Run with: cargo bench search

use quill::config::EditorConfig;
use quill::messages::{Msg, SearchMsg};
use quill::model::AppModel;
use quill::search::find_all;
use quill::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_text(line_count: usize) -> String {
    "The quick brown fox jumps over the lazy dog.\n".repeat(line_count)
}

// ============================================================================
// find_all
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_all_case_sensitive(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| find_all(divan::black_box(&text), "the", true));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_all_case_insensitive(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| find_all(divan::black_box(&text), "THE", false));
}

#[divan::bench(args = [1_000, 10_000])]
fn find_all_no_match(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| find_all(divan::black_box(&text), "zebra", false));
}

// ============================================================================
// Full search run through update (rope to string, highlights, caret)
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn search_bar_run(bencher: divan::Bencher, line_count: usize) {
    let mut model = AppModel::new(EditorConfig::default(), 1920, 1080);
    model.document.editable.set_content(&sample_text(line_count));
    update(&mut model, Msg::Search(SearchMsg::Open));
    update(
        &mut model,
        Msg::Search(SearchMsg::InsertText("fox".to_string())),
    );

    bencher.bench_local(|| update(&mut model, Msg::Search(SearchMsg::Run)));
}
