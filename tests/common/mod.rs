//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use quill::commands::Cmd;
use quill::config::EditorConfig;
use quill::messages::{AppMsg, Msg};
use quill::model::AppModel;
use quill::update::update;

/// Create a test model holding `text` with the caret at the start
pub fn test_model(text: &str) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default(), 800, 600);
    model.set_char_metrics(20, 10.0);
    model.document.editable.set_content(text);
    model
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Open `path` the way the command line does
pub fn model_with_file(path: &Path) -> AppModel {
    let mut model = test_model("");
    update(&mut model, Msg::App(AppMsg::OpenPath(path.to_path_buf())));
    model
}

/// Every leaf command produced by `msg`
pub fn run(model: &mut AppModel, msg: Msg) -> Vec<Cmd> {
    update(model, msg).map(Cmd::flatten).unwrap_or_default()
}

pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(
            model,
            Msg::Document(quill::messages::DocumentMsg::InsertChar(ch)),
        );
    }
}
