/*!
Desktop shell: start menu, desktop icons, context menu, keyboard shortcuts,
power actions and the boot sequence.
*/

use super::Desktop;
use crate::shell::{ContextAction, PowerAction, Shortcut};
use crate::types::{AppKind, DesktopResult, KeyChord, Point, PowerState, WindowId};

impl Desktop {
  /// Open or close the start menu. Returns whether it is now open.
  pub fn toggle_start_menu(&self) -> bool {
    self.write(|s| s.toggle_start_menu())
  }

  /// Launch an application from the start menu, closing the menu.
  pub fn launch_from_start_menu(&self, app: &str) -> DesktopResult<WindowId> {
    let launched = self.launch(app);
    self.write(|s| s.set_start_menu(false));
    launched
  }

  /// Highlight a desktop icon (single click). Only one icon is selected at a time.
  pub fn select_icon(&self, app: &str) -> DesktopResult<()> {
    let app = app.parse::<AppKind>()?;
    self.write(|s| s.select_icon(Some(app)));
    Ok(())
  }

  /// Open the application behind a desktop icon (double click).
  pub fn activate_icon(&self, app: &str) -> DesktopResult<WindowId> {
    let app = app.parse::<AppKind>()?;
    self.write(|s| s.select_icon(Some(app)));
    Ok(self.launch_app(app))
  }

  /// Show the desktop context menu at a point, replacing any open one.
  pub fn show_context_menu(&self, at: Point) {
    self.write(|s| s.set_context_menu(Some(at)));
  }

  pub fn hide_context_menu(&self) {
    self.write(|s| s.set_context_menu(None));
  }

  /// Run a context menu entry by name. The menu closes even if the name is
  /// not recognized.
  pub fn context_action(&self, action: &str) -> DesktopResult<()> {
    self.hide_context_menu();
    let action = action.parse::<ContextAction>()?;
    log::debug!("context action {action:?}");

    match action {
      ContextAction::Refresh => {
        self.reset();
        self.boot();
      }
      ContextAction::NewFolder => {
        self.notify("New Folder", "Feature coming soon!");
      }
      ContextAction::Paste => {
        self.notify("Paste", "Nothing to paste");
      }
      ContextAction::Settings => {
        self.launch_app(AppKind::Settings);
      }
    }
    Ok(())
  }

  /// Handle a global keyboard shortcut. Returns false if the chord is not a
  /// shortcut, so the renderer can let it through.
  pub fn handle_shortcut(&self, chord: &KeyChord) -> bool {
    let Some(shortcut) = Shortcut::from_chord(chord) else {
      return false;
    };
    log::debug!("shortcut {shortcut:?}");

    match shortcut {
      Shortcut::WindowSwitcher => {
        self.notify("Window Switcher", "Alt+Tab window switching");
      }
      Shortcut::StartMenu => {
        self.toggle_start_menu();
      }
      Shortcut::TaskManager => {
        self.launch_app(AppKind::TaskManager);
      }
    }
    true
  }

  /// Run a power menu entry by name (`shutdown`, `restart`).
  pub fn power(&self, action: &str) -> DesktopResult<()> {
    self.power_action(action.parse()?);
    Ok(())
  }

  /// Shut down or restart. Takes effect after the power delay; ignored unless
  /// the desktop is running.
  pub fn power_action(&self, action: PowerAction) {
    let (state, message) = match action {
      PowerAction::Shutdown => (PowerState::ShuttingDown, "Shutting down..."),
      PowerAction::Restart => (PowerState::Restarting, "Restarting..."),
    };
    let epoch = self.write(|s| {
      if s.power() != PowerState::Running {
        return None;
      }
      s.set_power(state);
      Some(s.epoch())
    });
    let Some(epoch) = epoch else {
      log::warn!("{action:?} ignored while {:?}", self.power_state());
      return;
    };

    self.notify("System", message);
    self.schedule("power", self.config.power_delay(), move |desktop| {
      let current = desktop.read(|s| s.epoch() == epoch && s.power() == state);
      if !current {
        return;
      }
      match action {
        PowerAction::Shutdown => desktop.write(|s| s.set_power(PowerState::Off)),
        PowerAction::Restart => {
          desktop.reset();
          desktop.boot();
        }
      }
    });
  }

  /// Start the boot sequence. After the boot delay the desktop is running and
  /// greets the user. Does nothing unless the desktop is booting.
  pub fn boot(&self) {
    let epoch = self.read(|s| (s.power() == PowerState::Booting).then_some(s.epoch()));
    let Some(epoch) = epoch else {
      log::debug!("boot ignored, already {:?}", self.power_state());
      return;
    };

    self.schedule("boot", self.config.boot_delay(), move |desktop| {
      let started = desktop.write(|s| {
        if s.epoch() != epoch || s.power() != PowerState::Booting {
          return false;
        }
        s.set_power(PowerState::Running);
        true
      });
      if started {
        desktop.notify("Welcome to LizardOS", "System started successfully!");
      }
    });
  }

  /// Close every window, cancel pending deferred actions and return to the
  /// boot screen. Call [`Desktop::boot`] to come back up.
  pub fn reset(&self) {
    self.timers.cancel_all();
    self.write(super::Session::reset);
    log::info!("desktop reset");
  }
}
