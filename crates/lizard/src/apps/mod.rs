/*!
Application content providers.

Each open window owns an [`AppState`] created with the window and dropped
when it closes, so input addressed to one window never reaches another.
Rendering goes through [`AppView`], a serializable description of what the
window shows.
*/

mod calculator;
mod expr;
mod games;
mod settings;
mod task_manager;
mod text_editor;

pub use calculator::{CalcKey, ERROR_DISPLAY};
pub use expr::{evaluate, EvalError};
pub use games::{GameInfo, GameInput};
pub use settings::{wallpapers, SettingsInput};
pub use task_manager::ProcessRow;
pub use text_editor::{EditorInput, SAVE_FILE_NAME};

use crate::types::{AppKind, DesktopError, DesktopResult, ShellState, Wallpaper, WindowId, WindowRecord};
use calculator::Calculator;
use serde::{Deserialize, Serialize};
use text_editor::TextEditor;
use ts_rs::TS;

/// What a window's content area shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "app", rename_all = "kebab-case")]
#[ts(export)]
pub enum AppView {
  FileManager {
    quick_access: Vec<String>,
    entries: Vec<String>,
  },
  Settings {
    wallpapers: Vec<Wallpaper>,
    selected_wallpaper: usize,
    high_contrast: bool,
    os_version: String,
    build_number: String,
  },
  Calculator {
    display: String,
  },
  TextEditor {
    text: String,
    placeholder: String,
  },
  WebBrowser {
    url: String,
    heading: String,
    message: String,
  },
  Games {
    games: Vec<GameInfo>,
  },
  TaskManager {
    processes: Vec<ProcessRow>,
  },
}

/// Content of one open window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WindowContent {
  pub window_id: WindowId,
  pub view: AppView,
}

/// Input addressed to a window's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "app", content = "input", rename_all = "kebab-case")]
#[ts(export)]
pub enum AppInput {
  Calculator(CalcKey),
  TextEditor(EditorInput),
  Settings(SettingsInput),
  Games(GameInput),
}

impl AppInput {
  /// The application type this input is meant for.
  pub const fn app(&self) -> AppKind {
    match self {
      AppInput::Calculator(_) => AppKind::Calculator,
      AppInput::TextEditor(_) => AppKind::TextEditor,
      AppInput::Settings(_) => AppKind::Settings,
      AppInput::Games(_) => AppKind::Games,
    }
  }
}

/// Side effects an application asks the desktop to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEffect {
  Notify { title: String, message: String },
  SetWallpaper(usize),
  ToggleContrast,
  Download { file_name: String, contents: String },
}

impl AppEffect {
  pub(crate) fn notify(title: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Notify {
      title: title.into(),
      message: message.into(),
    }
  }
}

/// Desktop state some views read (settings reflect the shell, the task
/// manager lists open windows).
pub(crate) struct ViewContext<'a> {
  pub(crate) shell: &'a ShellState,
  pub(crate) windows: Vec<&'a WindowRecord>,
}

/// Per-window application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppState {
  Calculator(Calculator),
  TextEditor(TextEditor),
  /// Applications with no state of their own.
  Stateless(AppKind),
}

impl AppState {
  pub(crate) fn new(app: AppKind) -> Self {
    match app {
      AppKind::Calculator => AppState::Calculator(Calculator::default()),
      AppKind::TextEditor => AppState::TextEditor(TextEditor::default()),
      AppKind::FileManager
      | AppKind::Settings
      | AppKind::WebBrowser
      | AppKind::Games
      | AppKind::TaskManager => AppState::Stateless(app),
    }
  }

  pub(crate) const fn app(&self) -> AppKind {
    match self {
      AppState::Calculator(_) => AppKind::Calculator,
      AppState::TextEditor(_) => AppKind::TextEditor,
      AppState::Stateless(app) => *app,
    }
  }

  /// Apply input to this window's content.
  pub(crate) fn handle(&mut self, input: AppInput) -> DesktopResult<Vec<AppEffect>> {
    let target = self.app();
    match (self, input) {
      (AppState::Calculator(calc), AppInput::Calculator(key)) => {
        calc.press(key)?;
        Ok(Vec::new())
      }
      (AppState::TextEditor(editor), AppInput::TextEditor(input)) => Ok(editor.apply(input)),
      (AppState::Stateless(AppKind::Settings), AppInput::Settings(input)) => settings::apply(input),
      (AppState::Stateless(AppKind::Games), AppInput::Games(input)) => games::apply(input),
      (_, input) => Err(DesktopError::invalid_input(
        target.key(),
        format!("{} input sent to a {target} window", input.app()),
      )),
    }
  }

  pub(crate) fn view(&self, ctx: &ViewContext<'_>) -> AppView {
    match self {
      AppState::Calculator(calc) => AppView::Calculator {
        display: calc.display().to_owned(),
      },
      AppState::TextEditor(editor) => AppView::TextEditor {
        text: editor.text().to_owned(),
        placeholder: text_editor::PLACEHOLDER.to_owned(),
      },
      AppState::Stateless(app) => static_view(*app, ctx),
    }
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_owned()).collect()
}

fn static_view(app: AppKind, ctx: &ViewContext<'_>) -> AppView {
  match app {
    AppKind::Settings => AppView::Settings {
      wallpapers: wallpapers(),
      selected_wallpaper: ctx.shell.wallpaper,
      high_contrast: ctx.shell.high_contrast,
      os_version: settings::OS_VERSION.to_owned(),
      build_number: settings::BUILD_NUMBER.to_owned(),
    },
    AppKind::Games => AppView::Games {
      games: games::catalog(),
    },
    AppKind::TaskManager => AppView::TaskManager {
      processes: task_manager::rows(ctx.windows.iter().copied()),
    },
    AppKind::WebBrowser => AppView::WebBrowser {
      url: "https://lizardos.local".to_owned(),
      heading: "🌐 LizardOS Browser".to_owned(),
      message: "Welcome to the built-in web browser!".to_owned(),
    },
    AppKind::Calculator | AppKind::TextEditor => AppState::new(app).view(ctx),
    AppKind::FileManager => AppView::FileManager {
      quick_access: strings(&["📁 Desktop", "📁 Documents", "📁 Pictures", "📁 Downloads"]),
      entries: strings(&[
        "📁 New Folder",
        "📄 Document.txt",
        "🖼️ Image.jpg",
        "🎵 Music.mp3",
      ]),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Geometry, Point, Size};

  fn ctx_with<'a>(shell: &'a ShellState, windows: Vec<&'a WindowRecord>) -> ViewContext<'a> {
    ViewContext { shell, windows }
  }

  #[test]
  fn state_matches_app() {
    for app in AppKind::ALL {
      assert_eq!(AppState::new(app).app(), app);
    }
  }

  #[test]
  fn calculator_input_routes_to_calculator() {
    let mut state = AppState::new(AppKind::Calculator);
    state
      .handle(AppInput::Calculator(CalcKey::Input { value: '9' }))
      .unwrap();
    let shell = ShellState::default();
    assert_eq!(
      state.view(&ctx_with(&shell, Vec::new())),
      AppView::Calculator {
        display: "9".into()
      }
    );
  }

  #[test]
  fn mismatched_input_is_rejected() {
    let mut state = AppState::new(AppKind::Settings);
    let err = state
      .handle(AppInput::Calculator(CalcKey::Clear))
      .unwrap_err();
    assert!(matches!(err, DesktopError::InvalidInput { ref target, .. } if target == "settings"));
  }

  #[test]
  fn settings_view_reflects_shell() {
    let state = AppState::new(AppKind::Settings);
    let shell = ShellState {
      wallpaper: 2,
      high_contrast: true,
      ..ShellState::default()
    };
    let AppView::Settings {
      selected_wallpaper,
      high_contrast,
      ..
    } = state.view(&ctx_with(&shell, Vec::new()))
    else {
      panic!("expected settings view");
    };
    assert_eq!(selected_wallpaper, 2);
    assert!(high_contrast);
  }

  #[test]
  fn task_manager_lists_open_windows() {
    let geometry = Geometry::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
    let browser = WindowRecord::new(AppKind::WebBrowser, geometry, 1);
    let shell = ShellState::default();
    let view = AppState::new(AppKind::TaskManager).view(&ctx_with(&shell, vec![&browser]));
    let AppView::TaskManager { processes } = view else {
      panic!("expected task manager view");
    };
    let names: Vec<_> = processes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["LizardOS System", "Web Browser"]);
  }

  #[test]
  fn input_serde_shape() {
    let input: AppInput = serde_json::from_str(
      r#"{"app":"calculator","input":{"key":"input","value":"7"}}"#,
    )
    .unwrap();
    assert_eq!(input, AppInput::Calculator(CalcKey::Input { value: '7' }));

    let input: AppInput = serde_json::from_str(
      r#"{"app":"settings","input":{"action":"select_wallpaper","index":3}}"#,
    )
    .unwrap();
    assert_eq!(
      input,
      AppInput::Settings(SettingsInput::SelectWallpaper { index: 3 })
    );
  }
}
