/*!
Lizard - window session manager for the LizardOS browser desktop.

The crate owns the desktop's state: open windows, stacking order, focus,
the drag gesture, taskbar, notifications and the toy applications' content.
A renderer draws [`Snapshot`]s, applies [`Event`]s and forwards user input
back as method calls.

```ignore
use lizard::{AppKind, Desktop, Point};

let desktop = Desktop::new();
desktop.boot();

let calc = desktop.launch("calculator")?;
let settings = desktop.launch_app(AppKind::Settings);
desktop.focus(&calc);

// Drag by the header
desktop.start_drag(&settings, Point::new(40.0, 12.0));
desktop.update_drag(Point::new(420.0, 300.0));
desktop.end_drag();

let mut events = desktop.subscribe();
while let Ok(event) = events.recv().await {
    // apply event
}
```
*/

mod config;
mod core;
mod notifications;
mod shell;
mod taskbar;
mod timers;

pub mod apps;

mod types;
pub use types::*;

pub use crate::core::{Desktop, DesktopBuilder};
pub use crate::shell::{ContextAction, PowerAction};
