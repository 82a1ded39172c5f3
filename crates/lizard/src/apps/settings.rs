/*! Settings application: wallpaper, accessibility and system info. */

use super::AppEffect;
use crate::types::{DesktopError, DesktopResult, Wallpaper};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub(crate) const OS_VERSION: &str = "LizardOS 1.0";
pub(crate) const BUILD_NUMBER: &str = "2025.09.001";

const WALLPAPERS: [(&str, &str); 4] = [
  (
    "Default",
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
  ),
  ("Ocean", "linear-gradient(135deg, #2196F3 0%, #00BCD4 100%)"),
  ("Forest", "linear-gradient(135deg, #4CAF50 0%, #8BC34A 100%)"),
  ("Sunset", "linear-gradient(135deg, #FF5722 0%, #FF9800 100%)"),
];

/// The selectable wallpapers, in display order.
pub fn wallpapers() -> Vec<Wallpaper> {
  WALLPAPERS
    .iter()
    .map(|(name, gradient)| Wallpaper {
      name: (*name).to_owned(),
      gradient: (*gradient).to_owned(),
    })
    .collect()
}

/// Settings panel actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "snake_case")]
#[ts(export)]
pub enum SettingsInput {
  SelectWallpaper { index: usize },
  ToggleContrast,
}

pub(crate) fn apply(input: SettingsInput) -> DesktopResult<Vec<AppEffect>> {
  match input {
    SettingsInput::SelectWallpaper { index } => {
      let Some((name, _)) = WALLPAPERS.get(index) else {
        return Err(DesktopError::invalid_input(
          "settings",
          format!("no wallpaper at index {index}"),
        ));
      };
      Ok(vec![
        AppEffect::SetWallpaper(index),
        AppEffect::notify("Wallpaper Changed", format!("Applied {name} wallpaper")),
      ])
    }
    SettingsInput::ToggleContrast => Ok(vec![
      AppEffect::ToggleContrast,
      AppEffect::notify("Accessibility", "High contrast mode toggled"),
    ]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn four_wallpapers_default_first() {
    let all = wallpapers();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].name, "Default");
    assert_eq!(all[3].name, "Sunset");
  }

  #[test]
  fn select_wallpaper_names_it() {
    let effects = apply(SettingsInput::SelectWallpaper { index: 1 }).unwrap();
    assert_eq!(
      effects,
      vec![
        AppEffect::SetWallpaper(1),
        AppEffect::notify("Wallpaper Changed", "Applied Ocean wallpaper"),
      ]
    );
  }

  #[test]
  fn out_of_range_wallpaper_is_rejected() {
    let err = apply(SettingsInput::SelectWallpaper { index: 4 }).unwrap_err();
    assert!(matches!(err, DesktopError::InvalidInput { .. }));
  }

  #[test]
  fn contrast_toggle() {
    let effects = apply(SettingsInput::ToggleContrast).unwrap();
    assert_eq!(effects.first(), Some(&AppEffect::ToggleContrast));
  }
}
