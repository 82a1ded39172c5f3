/*! Text editor application state. */

use super::AppEffect;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// File name offered for the "save" download.
pub const SAVE_FILE_NAME: &str = "document.txt";

pub(crate) const PLACEHOLDER: &str = "Start typing...";

/// Text editor toolbar actions and edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "snake_case")]
#[ts(export)]
pub enum EditorInput {
  /// Replace the buffer with what the user typed.
  SetText { text: String },
  NewFile,
  SaveFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextEditor {
  text: String,
}

impl TextEditor {
  pub(crate) fn text(&self) -> &str {
    &self.text
  }

  pub(crate) fn apply(&mut self, input: EditorInput) -> Vec<AppEffect> {
    match input {
      EditorInput::SetText { text } => {
        self.text = text;
        Vec::new()
      }
      EditorInput::NewFile => {
        self.text.clear();
        vec![AppEffect::notify("Text Editor", "New file created")]
      }
      EditorInput::SaveFile => vec![
        AppEffect::Download {
          file_name: SAVE_FILE_NAME.to_owned(),
          contents: self.text.clone(),
        },
        AppEffect::notify("Text Editor", "File saved successfully"),
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_text_is_silent() {
    let mut editor = TextEditor::default();
    let effects = editor.apply(EditorInput::SetText {
      text: "hello".into(),
    });
    assert!(effects.is_empty());
    assert_eq!(editor.text(), "hello");
  }

  #[test]
  fn new_file_clears_and_notifies() {
    let mut editor = TextEditor::default();
    editor.apply(EditorInput::SetText {
      text: "draft".into(),
    });
    let effects = editor.apply(EditorInput::NewFile);
    assert_eq!(editor.text(), "");
    assert_eq!(
      effects,
      vec![AppEffect::notify("Text Editor", "New file created")]
    );
  }

  #[test]
  fn save_offers_download_of_buffer() {
    let mut editor = TextEditor::default();
    editor.apply(EditorInput::SetText {
      text: "notes".into(),
    });
    let effects = editor.apply(EditorInput::SaveFile);
    assert_eq!(
      effects.first(),
      Some(&AppEffect::Download {
        file_name: "document.txt".into(),
        contents: "notes".into(),
      })
    );
    assert_eq!(editor.text(), "notes", "saving keeps the buffer");
  }
}
