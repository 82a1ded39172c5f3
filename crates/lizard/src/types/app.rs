/*! Application types known to the desktop. */

use super::DesktopError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Application type. Serialized as its launcher key (`file-manager`, `calculator`, ...).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum AppKind {
  FileManager,
  Settings,
  Calculator,
  TextEditor,
  WebBrowser,
  Games,
  TaskManager,
}

/// Static launcher metadata for an application type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
  pub kind: AppKind,
  pub title: &'static str,
  pub icon: &'static str,
}

impl AppKind {
  /// Every recognized application type, in start menu order.
  pub const ALL: [AppKind; 7] = [
    AppKind::FileManager,
    AppKind::Settings,
    AppKind::Calculator,
    AppKind::TextEditor,
    AppKind::WebBrowser,
    AppKind::Games,
    AppKind::TaskManager,
  ];

  /// Launcher key, as used by desktop icons, the start menu and the taskbar.
  pub const fn key(self) -> &'static str {
    match self {
      AppKind::FileManager => "file-manager",
      AppKind::Settings => "settings",
      AppKind::Calculator => "calculator",
      AppKind::TextEditor => "text-editor",
      AppKind::WebBrowser => "web-browser",
      AppKind::Games => "games",
      AppKind::TaskManager => "task-manager",
    }
  }

  /// Title and icon shown in the window header and taskbar.
  pub const fn descriptor(self) -> AppDescriptor {
    let (title, icon) = match self {
      AppKind::FileManager => ("File Manager", "📁"),
      AppKind::Settings => ("Settings", "⚙️"),
      AppKind::Calculator => ("Calculator", "🔢"),
      AppKind::TextEditor => ("Text Editor", "📝"),
      AppKind::WebBrowser => ("Web Browser", "🌐"),
      AppKind::Games => ("Games", "🎮"),
      AppKind::TaskManager => ("Task Manager", "📊"),
    };
    AppDescriptor {
      kind: self,
      title,
      icon,
    }
  }

  pub const fn title(self) -> &'static str {
    self.descriptor().title
  }

  pub const fn icon(self) -> &'static str {
    self.descriptor().icon
  }
}

impl fmt::Display for AppKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

impl FromStr for AppKind {
  type Err = DesktopError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    AppKind::ALL
      .into_iter()
      .find(|kind| kind.key() == s)
      .ok_or_else(|| DesktopError::UnknownApplication(s.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_key_parses_back() {
    for kind in AppKind::ALL {
      assert_eq!(kind.key().parse::<AppKind>().unwrap(), kind);
    }
  }

  #[test]
  fn unknown_key_is_an_error() {
    let err = "minesweeper".parse::<AppKind>().unwrap_err();
    assert!(matches!(err, DesktopError::UnknownApplication(ref key) if key == "minesweeper"));
  }

  #[test]
  fn keys_are_case_sensitive() {
    assert!("Calculator".parse::<AppKind>().is_err());
    assert!(" calculator".parse::<AppKind>().is_err());
  }

  #[test]
  fn serde_matches_launcher_key() {
    for kind in AppKind::ALL {
      let json = serde_json::to_string(&kind).unwrap();
      assert_eq!(json, format!("\"{}\"", kind.key()));
    }
  }

  #[test]
  fn descriptor_titles() {
    assert_eq!(AppKind::TextEditor.title(), "Text Editor");
    assert_eq!(AppKind::Games.icon(), "🎮");
  }
}
