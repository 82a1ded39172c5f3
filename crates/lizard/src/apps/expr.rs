/*!
Arithmetic expression evaluator for the calculator.

Recursive descent over a token slice:

```text
expr   := term (('+' | '-') term)*
term   := unary (('*' | '/') unary)*
unary  := ('+' | '-') unary | primary
primary:= NUMBER | '(' expr ')'
```

Binary operators are left-associative; `*` and `/` bind tighter than `+` and `-`.
Unary signs and parentheses nest at most 64 levels deep, so hostile input
cannot exhaust the stack.
*/

/// Deepest nesting of parentheses and unary signs the evaluator accepts.
const MAX_DEPTH: usize = 64;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
  #[error("empty expression")]
  Empty,

  #[error("unexpected character '{ch}' at {pos}")]
  UnexpectedChar { ch: char, pos: usize },

  #[error("malformed number '{0}'")]
  InvalidNumber(String),

  #[error("unexpected token at {0}")]
  UnexpectedToken(usize),

  #[error("unexpected end of expression")]
  UnexpectedEnd,

  #[error("result is not a finite number")]
  NotFinite,

  #[error("expression nested deeper than {MAX_DEPTH} levels")]
  TooDeep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
  Num(f64),
  Plus,
  Minus,
  Star,
  Slash,
  LParen,
  RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
  let mut tokens = Vec::new();
  let mut chars = input.char_indices().peekable();

  while let Some((pos, ch)) = chars.next() {
    let token = match ch {
      c if c.is_whitespace() => continue,
      '+' => Token::Plus,
      '-' => Token::Minus,
      '*' => Token::Star,
      '/' => Token::Slash,
      '(' => Token::LParen,
      ')' => Token::RParen,
      c if c.is_ascii_digit() || c == '.' => {
        let mut literal = String::from(c);
        while let Some(&(_, next)) = chars.peek() {
          if !(next.is_ascii_digit() || next == '.') {
            break;
          }
          literal.push(next);
          chars.next();
        }
        let value = literal
          .parse::<f64>()
          .map_err(|_| EvalError::InvalidNumber(literal.clone()))?;
        Token::Num(value)
      }
      ch => return Err(EvalError::UnexpectedChar { ch, pos }),
    };
    tokens.push(token);
  }

  Ok(tokens)
}

struct Parser<'a> {
  tokens: &'a [Token],
  pos: usize,
  depth: usize,
}

impl Parser<'_> {
  fn peek(&self) -> Option<Token> {
    self.tokens.get(self.pos).copied()
  }

  fn advance(&mut self) -> Option<Token> {
    let token = self.peek();
    if token.is_some() {
      self.pos += 1;
    }
    token
  }

  /// Run `f` one nesting level deeper.
  fn nested(
    &mut self,
    f: impl FnOnce(&mut Self) -> Result<f64, EvalError>,
  ) -> Result<f64, EvalError> {
    if self.depth >= MAX_DEPTH {
      return Err(EvalError::TooDeep);
    }
    self.depth += 1;
    let value = f(self);
    self.depth -= 1;
    value
  }

  fn expr(&mut self) -> Result<f64, EvalError> {
    let mut left = self.term()?;
    while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
      self.pos += 1;
      let right = self.term()?;
      left = if op == Token::Plus {
        left + right
      } else {
        left - right
      };
    }
    Ok(left)
  }

  fn term(&mut self) -> Result<f64, EvalError> {
    let mut left = self.unary()?;
    while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
      self.pos += 1;
      let right = self.unary()?;
      left = if op == Token::Star {
        left * right
      } else {
        left / right
      };
    }
    Ok(left)
  }

  fn unary(&mut self) -> Result<f64, EvalError> {
    match self.peek() {
      Some(Token::Minus) => {
        self.pos += 1;
        Ok(-self.nested(Self::unary)?)
      }
      Some(Token::Plus) => {
        self.pos += 1;
        self.nested(Self::unary)
      }
      _ => self.primary(),
    }
  }

  fn primary(&mut self) -> Result<f64, EvalError> {
    let at = self.pos;
    match self.advance() {
      Some(Token::Num(value)) => Ok(value),
      Some(Token::LParen) => {
        let value = self.nested(Self::expr)?;
        match self.advance() {
          Some(Token::RParen) => Ok(value),
          Some(_) => Err(EvalError::UnexpectedToken(self.pos - 1)),
          None => Err(EvalError::UnexpectedEnd),
        }
      }
      Some(_) => Err(EvalError::UnexpectedToken(at)),
      None => Err(EvalError::UnexpectedEnd),
    }
  }
}

/// Evaluate an arithmetic expression. Division by zero and overflow are errors.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
  let tokens = tokenize(input)?;
  if tokens.is_empty() {
    return Err(EvalError::Empty);
  }

  let mut parser = Parser {
    tokens: &tokens,
    pos: 0,
    depth: 0,
  };
  let value = parser.expr()?;
  if parser.pos < tokens.len() {
    return Err(EvalError::UnexpectedToken(parser.pos));
  }
  if !value.is_finite() {
    return Err(EvalError::NotFinite);
  }
  Ok(value)
}

/// Render a result the way the calculator display shows it (`10`, not `10.0`).
pub fn format_number(value: f64) -> String {
  if value == 0.0 {
    // Avoid showing "-0".
    return "0".to_owned();
  }
  format!("{value}")
}
