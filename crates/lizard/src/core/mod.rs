/*!
Core desktop instance - owns the session, deferred actions and event broadcasting.

# Module Structure

- `mod.rs` - Desktop struct, builder, construction, events, deferred actions
- `session/` - Session state with private fields + operations + event emission
- `windows.rs` - launch, focus, minimize, maximize, close, drag, taskbar clicks
- `content.rs` - input to application windows
- `shell.rs` - start menu, icons, context menu, shortcuts, power, boot
- `queries.rs` - read-only views of the session

# Example

```ignore
let desktop = Desktop::new();
desktop.boot();

let calc = desktop.launch("calculator")?;
desktop.focus(&calc);

let mut events = desktop.subscribe();
while let Ok(event) = events.recv().await {
    // handle event
}
```
*/

mod content;
mod queries;
mod session;
mod shell;
mod windows;

pub(crate) use session::Session;

use crate::config::DesktopConfig;
use crate::timers::Timers;
use crate::types::{Event, NotificationId, Point, Size};
use async_broadcast::InactiveReceiver;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

const EVENT_CHANNEL_CAPACITY: usize = 5000;

/// Handle to a running desktop session.
///
/// Clone is cheap (Arc bumps) - share freely across threads.
/// Every operation takes the session lock once and runs to completion, so
/// operations apply in the order they arrive.
pub struct Desktop {
  pub(crate) state: Arc<RwLock<Session>>,
  events_keepalive: InactiveReceiver<Event>,
  timers: Arc<Timers>,
  config: DesktopConfig,
}

impl Clone for Desktop {
  fn clone(&self) -> Self {
    Self {
      state: Arc::clone(&self.state),
      events_keepalive: self.events_keepalive.clone(),
      timers: Arc::clone(&self.timers),
      config: self.config,
    }
  }
}

impl std::fmt::Debug for Desktop {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Desktop").finish_non_exhaustive()
  }
}

impl Default for Desktop {
  fn default() -> Self {
    Self::new()
  }
}

/// Builder for configuring a Desktop.
///
/// # Example
///
/// ```ignore
/// let desktop = Desktop::builder()
///     .viewport(1280.0, 720.0)
///     .notification_ms(1500)
///     .build();
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct DesktopBuilder {
  config: DesktopConfig,
}

impl DesktopBuilder {
  /// Area a maximized window fills. Default: 1920x1080.
  pub const fn viewport(mut self, width: f64, height: f64) -> Self {
    self.config.viewport = Size::new(width, height);
    self
  }

  /// Size of newly opened windows. Default: 600x400.
  pub const fn window_size(mut self, width: f64, height: f64) -> Self {
    self.config.window_size = Size::new(width, height);
    self
  }

  /// Position of the first window on an empty desktop. Default: (100, 50).
  pub const fn window_origin(mut self, x: f64, y: f64) -> Self {
    self.config.window_origin = Point::new(x, y);
    self
  }

  /// Offset added per already-open window. Default: 30.
  pub const fn stagger(mut self, stagger: f64) -> Self {
    self.config.stagger = stagger;
    self
  }

  /// How long a notification stays visible. Default: 3000ms.
  pub const fn notification_ms(mut self, ms: u64) -> Self {
    self.config.notification_ms = ms;
    self
  }

  /// Boot screen duration. Default: 3500ms.
  pub const fn boot_delay_ms(mut self, ms: u64) -> Self {
    self.config.boot_delay_ms = ms;
    self
  }

  /// Delay between a power action and its effect. Default: 2000ms.
  pub const fn power_delay_ms(mut self, ms: u64) -> Self {
    self.config.power_delay_ms = ms;
    self
  }

  /// Build the desktop. It starts in the `Booting` state; call
  /// [`Desktop::boot`] to bring it up.
  #[must_use]
  pub fn build(self) -> Desktop {
    Desktop::create_with_config(self.config)
  }
}

impl Desktop {
  /// Create a desktop with default options.
  ///
  /// For custom configuration, use [`Desktop::builder()`].
  #[must_use]
  pub fn new() -> Self {
    Self::builder().build()
  }

  pub fn builder() -> DesktopBuilder {
    DesktopBuilder::default()
  }

  fn create_with_config(config: DesktopConfig) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(EVENT_CHANNEL_CAPACITY);
    tx.set_overflow(true); // Drop oldest messages when full

    Desktop {
      state: Arc::new(RwLock::new(Session::new(tx, config))),
      events_keepalive: rx.deactivate(),
      timers: Arc::new(Timers::default()),
      config,
    }
  }

  /// Subscribe to events from this desktop.
  pub fn subscribe(&self) -> async_broadcast::Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Read state.
  #[inline]
  pub(crate) fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
    f(&self.state.read())
  }

  /// Write state. Never schedule deferred actions inside the closure.
  #[inline]
  pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
    f(&mut self.state.write())
  }

  /// Run `action` after `delay` unless the desktop is reset first.
  fn schedule(
    &self,
    label: &'static str,
    delay: Duration,
    action: impl FnOnce(&Desktop) + Send + 'static,
  ) {
    let desktop = self.clone();
    self.timers.schedule(label, delay, move || action(&desktop));
  }

  /// Number of deferred actions still waiting to fire.
  pub fn pending_actions(&self) -> usize {
    self.timers.len()
  }

  /// Show a notification. It is dismissed automatically after the configured
  /// duration, or earlier through [`Desktop::dismiss_notification`].
  pub fn notify(&self, title: impl Into<String>, message: impl Into<String>) -> NotificationId {
    let (id, epoch) = self.write(|s| {
      let notification = s.push_notification(title.into(), message.into());
      (notification.id, s.epoch())
    });
    log::debug!("notification {id} shown");

    self.schedule(
      "dismiss notification",
      self.config.notification_duration(),
      move |desktop| {
        desktop.write(|s| {
          if s.epoch() == epoch {
            s.dismiss_notification(id);
          }
        });
      },
    );
    id
  }

  /// Dismiss a notification before its timer runs out. Returns false if it
  /// was already gone.
  pub fn dismiss_notification(&self, id: NotificationId) -> bool {
    self.write(|s| s.dismiss_notification(id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::apps::{AppInput, AppView, CalcKey, EditorInput, GameInput};
  use crate::types::{AppKind, DesktopError, KeyChord, PowerState, WindowId};
  use crate::PowerAction;
  use std::thread;

  /// Long enough for any deferred action configured by `fast()` to fire.
  const SETTLE: Duration = Duration::from_millis(400);

  fn fast() -> Desktop {
    Desktop::builder()
      .notification_ms(20)
      .boot_delay_ms(20)
      .power_delay_ms(20)
      .build()
  }

  /// A desktop whose deferred actions never fire during a test.
  fn slow() -> Desktop {
    Desktop::builder()
      .notification_ms(60_000)
      .boot_delay_ms(60_000)
      .power_delay_ms(60_000)
      .build()
  }

  fn running() -> Desktop {
    let desktop = fast();
    desktop.boot();
    thread::sleep(SETTLE);
    assert_eq!(desktop.power_state(), PowerState::Running);
    desktop
  }

  fn drain(rx: &mut async_broadcast::Receiver<Event>) -> Vec<Event> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
  }

  mod launch {
    use super::*;

    #[test]
    fn unknown_application_is_an_error() {
      let desktop = slow();
      let err = desktop.launch("minesweeper").unwrap_err();
      assert!(matches!(err, DesktopError::UnknownApplication(ref key) if key == "minesweeper"));
      assert!(desktop.windows().is_empty());
      assert!(desktop.notifications().is_empty());
    }

    #[test]
    fn announces_new_windows_only() {
      let desktop = slow();
      desktop.launch("calculator").unwrap();
      desktop.launch("calculator").unwrap();

      let notifications = desktop.notifications();
      assert_eq!(notifications.len(), 1);
      assert_eq!(notifications[0].title, "Application Launched");
      assert_eq!(notifications[0].message, "Calculator is now running");
    }

    #[test]
    fn scenario_through_public_api() {
      let desktop = slow();
      let calc = desktop.launch("calculator").unwrap();
      let settings = desktop.launch("settings").unwrap();
      assert_eq!(desktop.window(&settings).unwrap().z_index, 2);

      desktop.focus(&WindowId::from("window-calculator"));
      assert_eq!(desktop.window(&calc).unwrap().z_index, 3);

      desktop.close(&WindowId::from("window-settings"));
      assert!(desktop.window(&settings).is_none());
      assert_eq!(desktop.focused_window(), Some(calc));
    }

    #[test]
    fn clones_share_state() {
      let desktop = slow();
      let other = desktop.clone();
      let id = other.launch("games").unwrap();
      assert!(desktop.window(&id).is_some());
    }
  }

  mod taskbar {
    use super::*;

    #[test]
    fn click_launches_when_closed() {
      let desktop = slow();
      let id = desktop.activate_taskbar(AppKind::WebBrowser);
      assert_eq!(desktop.focused_window(), Some(id));
    }

    #[test]
    fn click_restores_minimized() {
      let desktop = slow();
      let id = desktop.launch_app(AppKind::FileManager);
      desktop.minimize(&id);
      assert_eq!(desktop.activate_taskbar(AppKind::FileManager), id);
      assert!(desktop.window(&id).unwrap().visible);
      assert_eq!(desktop.focused_window(), Some(id));
      assert_eq!(desktop.notifications().len(), 1, "no second launch notice");
    }

    #[test]
    fn entries_follow_lifecycle() {
      let desktop = slow();
      let calc = desktop.launch_app(AppKind::Calculator);
      assert!(desktop.taskbar()[0].active);
      desktop.minimize(&calc);
      assert!(!desktop.taskbar()[0].active);
      desktop.close(&calc);
      assert!(desktop.taskbar().is_empty());
    }
  }

  mod content {
    use super::*;

    #[test]
    fn calculator_input() {
      let desktop = slow();
      let calc = desktop.launch_app(AppKind::Calculator);
      for value in ['7', '+', '3'] {
        desktop
          .app_input(&calc, AppInput::Calculator(CalcKey::Input { value }))
          .unwrap();
      }
      desktop
        .app_input(&calc, AppInput::Calculator(CalcKey::Calculate))
        .unwrap();
      assert_eq!(
        desktop.content(&calc),
        Some(AppView::Calculator {
          display: "10".into()
        })
      );
    }

    #[test]
    fn input_for_other_application_is_rejected() {
      let desktop = slow();
      let calc = desktop.launch_app(AppKind::Calculator);
      let err = desktop
        .app_input(&calc, AppInput::TextEditor(EditorInput::NewFile))
        .unwrap_err();
      assert!(matches!(err, DesktopError::InvalidInput { .. }));
    }

    #[test]
    fn unknown_window_is_ignored() {
      let desktop = slow();
      desktop
        .app_input(
          &WindowId::from("window-calculator"),
          AppInput::Calculator(CalcKey::Clear),
        )
        .unwrap();
      assert!(desktop.windows().is_empty());
    }

    #[test]
    fn save_emits_download() {
      let desktop = slow();
      let editor = desktop.launch_app(AppKind::TextEditor);
      let mut rx = desktop.subscribe();
      desktop
        .app_input(
          &editor,
          AppInput::TextEditor(EditorInput::SetText {
            text: "hello".into(),
          }),
        )
        .unwrap();
      desktop
        .app_input(&editor, AppInput::TextEditor(EditorInput::SaveFile))
        .unwrap();

      let download = drain(&mut rx).into_iter().find_map(|e| match e {
        Event::Download {
          file_name,
          contents,
        } => Some((file_name, contents)),
        _ => None,
      });
      assert_eq!(
        download,
        Some(("document.txt".to_owned(), "hello".to_owned()))
      );
      assert!(desktop
        .notifications()
        .iter()
        .any(|n| n.message == "File saved successfully"));
    }

    #[test]
    fn games_notify() {
      let desktop = slow();
      let games = desktop.launch_app(AppKind::Games);
      desktop
        .app_input(
          &games,
          AppInput::Games(GameInput::Play {
            game: "snake".into(),
          }),
        )
        .unwrap();
      assert!(desktop
        .notifications()
        .iter()
        .any(|n| n.title == "Games" && n.message == "snake coming soon!"));
    }
  }

  mod notifications {
    use super::*;

    #[test]
    fn dismissed_after_duration() {
      let desktop = fast();
      desktop.notify("Title", "Body");
      assert_eq!(desktop.notifications().len(), 1);
      thread::sleep(SETTLE);
      assert!(desktop.notifications().is_empty());
      assert_eq!(desktop.pending_actions(), 0);
    }

    #[test]
    fn notification_flood_is_dismissed() {
      let desktop = fast();
      for i in 0..500 {
        desktop.notify("Flood", format!("#{i}"));
      }
      thread::sleep(SETTLE);
      assert!(desktop.notifications().is_empty());
      assert_eq!(desktop.pending_actions(), 0);
    }

    #[test]
    fn several_visible_at_once() {
      let desktop = slow();
      desktop.notify("A", "a");
      desktop.notify("B", "b");
      assert_eq!(desktop.notifications().len(), 2);
    }

    #[test]
    fn explicit_dismiss() {
      let desktop = slow();
      let id = desktop.notify("A", "a");
      assert!(desktop.dismiss_notification(id));
      assert!(!desktop.dismiss_notification(id));
    }
  }

  mod shell {
    use super::*;

    #[test]
    fn start_menu_launch_closes_menu() {
      let desktop = slow();
      assert!(desktop.toggle_start_menu());
      desktop.launch_from_start_menu("text-editor").unwrap();
      assert!(!desktop.shell().start_menu_open);
    }

    #[test]
    fn start_menu_closes_on_unknown_app() {
      let desktop = slow();
      desktop.toggle_start_menu();
      assert!(desktop.launch_from_start_menu("paint").is_err());
      assert!(!desktop.shell().start_menu_open);
    }

    #[test]
    fn icons_select_and_activate() {
      let desktop = slow();
      desktop.select_icon("games").unwrap();
      assert_eq!(desktop.shell().selected_icon, Some(AppKind::Games));
      let id = desktop.activate_icon("calculator").unwrap();
      assert_eq!(desktop.shell().selected_icon, Some(AppKind::Calculator));
      assert_eq!(desktop.focused_window(), Some(id));
      assert!(desktop.select_icon("nope").is_err());
    }

    #[test]
    fn context_menu_actions() {
      let desktop = slow();
      desktop.show_context_menu(Point::new(40.0, 60.0));
      assert_eq!(desktop.shell().context_menu, Some(Point::new(40.0, 60.0)));

      desktop.context_action("settings").unwrap();
      assert!(desktop.shell().context_menu.is_none());
      assert!(desktop.window(&WindowId::from("window-settings")).is_some());

      desktop.context_action("paste").unwrap();
      assert!(desktop
        .notifications()
        .iter()
        .any(|n| n.message == "Nothing to paste"));

      desktop.show_context_menu(Point::ORIGIN);
      assert!(desktop.context_action("format-disk").is_err());
      assert!(desktop.shell().context_menu.is_none());
    }

    #[test]
    fn refresh_resets_and_boots() {
      let desktop = running();
      desktop.launch_app(AppKind::Calculator);
      desktop.context_action("refresh").unwrap();
      assert!(desktop.windows().is_empty());
      assert_eq!(desktop.power_state(), PowerState::Booting);
      thread::sleep(SETTLE);
      assert_eq!(desktop.power_state(), PowerState::Running);
    }

    #[test]
    fn shortcuts() {
      let desktop = slow();
      assert!(desktop.handle_shortcut(&KeyChord::new("Meta")));
      assert!(desktop.shell().start_menu_open);

      assert!(desktop.handle_shortcut(&KeyChord::new("Delete").with_ctrl().with_alt()));
      assert!(desktop
        .window(&WindowId::from("window-task-manager"))
        .is_some());

      assert!(desktop.handle_shortcut(&KeyChord::new("Tab").with_alt()));
      assert!(desktop
        .notifications()
        .iter()
        .any(|n| n.title == "Window Switcher"));

      assert!(!desktop.handle_shortcut(&KeyChord::new("a")));
    }
  }

  mod power {
    use super::*;

    #[test]
    fn boot_reaches_running_and_greets() {
      let desktop = Desktop::builder()
        .boot_delay_ms(20)
        .notification_ms(60_000)
        .build();
      assert_eq!(desktop.power_state(), PowerState::Booting);
      desktop.boot();
      thread::sleep(SETTLE);
      assert_eq!(desktop.power_state(), PowerState::Running);
      assert!(desktop
        .notifications()
        .iter()
        .any(|n| n.title == "Welcome to LizardOS"));
    }

    #[test]
    fn shutdown_turns_off() {
      let desktop = running();
      desktop.power("shutdown").unwrap();
      assert_eq!(desktop.power_state(), PowerState::ShuttingDown);
      thread::sleep(SETTLE);
      assert_eq!(desktop.power_state(), PowerState::Off);
    }

    #[test]
    fn restart_resets_and_boots_again() {
      let desktop = running();
      desktop.launch_app(AppKind::Games);
      desktop.power_action(PowerAction::Restart);
      assert_eq!(desktop.power_state(), PowerState::Restarting);
      thread::sleep(SETTLE * 2);
      assert!(desktop.windows().is_empty());
      assert_eq!(desktop.power_state(), PowerState::Running);
    }

    #[test]
    fn ignored_while_booting() {
      let desktop = slow();
      desktop.power_action(PowerAction::Shutdown);
      assert_eq!(desktop.power_state(), PowerState::Booting);
    }

    #[test]
    fn unknown_action_is_an_error() {
      let desktop = slow();
      assert!(matches!(
        desktop.power("hibernate"),
        Err(DesktopError::UnknownAction(_))
      ));
    }

    #[test]
    fn reset_cancels_pending_actions() {
      let desktop = slow();
      desktop.boot();
      desktop.notify("A", "a");
      assert_eq!(desktop.pending_actions(), 2);
      desktop.reset();
      assert_eq!(desktop.pending_actions(), 0);
      assert!(desktop.notifications().is_empty());
    }
  }

  #[test]
  fn events_reach_subscribers() {
    let desktop = slow();
    let mut rx = desktop.subscribe();
    let calc = desktop.launch_app(AppKind::Calculator);
    desktop.minimize(&calc);

    let events = drain(&mut rx);
    assert!(events
      .iter()
      .any(|e| matches!(e, Event::WindowOpened { window } if window.id == calc)));
    assert!(events
      .iter()
      .any(|e| matches!(e, Event::NotificationShown { .. })));
    assert!(matches!(
      events.last(),
      Some(Event::TaskbarChanged { app: AppKind::Calculator, .. })
    ));
  }
}
