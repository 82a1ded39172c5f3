/*! Calculator application state. */

use super::expr;
use crate::types::{DesktopError, DesktopResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

const EMPTY_DISPLAY: &str = "0";

/// A calculator button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "key", rename_all = "snake_case")]
#[ts(export)]
pub enum CalcKey {
  /// `C`: reset the display.
  Clear,
  /// `⌫`: drop the last character.
  Backspace,
  /// `=`: evaluate the display.
  Calculate,
  /// Digit, operator or decimal point.
  Input { value: char },
}

/// Per-window calculator. The display is the whole state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Calculator {
  display: String,
}

impl Default for Calculator {
  fn default() -> Self {
    Self {
      display: EMPTY_DISPLAY.to_owned(),
    }
  }
}

impl Calculator {
  pub(crate) fn display(&self) -> &str {
    &self.display
  }

  /// Whether the display is blank, so the next input replaces it.
  fn is_blank(&self) -> bool {
    self.display == EMPTY_DISPLAY || self.display == ERROR_DISPLAY
  }

  pub(crate) fn press(&mut self, key: CalcKey) -> DesktopResult<()> {
    match key {
      CalcKey::Clear => EMPTY_DISPLAY.clone_into(&mut self.display),
      CalcKey::Backspace => {
        if self.display.chars().count() > 1 && self.display != ERROR_DISPLAY {
          self.display.pop();
        } else {
          EMPTY_DISPLAY.clone_into(&mut self.display);
        }
      }
      CalcKey::Calculate => {
        self.display = match expr::evaluate(&self.display) {
          Ok(value) => expr::format_number(value),
          Err(err) => {
            log::debug!("calculator: cannot evaluate {:?}: {err}", self.display);
            ERROR_DISPLAY.to_owned()
          }
        };
      }
      CalcKey::Input { value } => {
        if !is_calculator_char(value) {
          return Err(DesktopError::invalid_input(
            "calculator",
            format!("unsupported key '{value}'"),
          ));
        }
        if self.is_blank() {
          self.display.clear();
        }
        self.display.push(value);
      }
    }
    Ok(())
  }

  /// Evaluate without touching the display.
  #[cfg(test)]
  fn peek_result(&self) -> Result<f64, expr::EvalError> {
    expr::evaluate(&self.display)
  }
}

const fn is_calculator_char(c: char) -> bool {
  matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')')
}
