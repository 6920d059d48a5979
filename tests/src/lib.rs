//! Shared helpers for the numex integration tests.

/// A textbook recursive-descent calculator over `+ - * /`, parentheses and
/// decimal literals. Used as an independent oracle for numex's results.
///
/// Returns `None` for anything outside that grammar.
pub fn reference_eval(source: &str) -> Option<f64> {
    let chars: Vec<char> = source.chars().filter(|c| *c != ' ').collect();
    let mut calc = Calculator { chars, pos: 0 };
    let value = calc.expr()?;
    (calc.pos == calc.chars.len()).then_some(value)
}

struct Calculator {
    chars: Vec<char>,
    pos: usize,
}

impl Calculator {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut acc = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            acc = if op == '+' { acc + rhs } else { acc - rhs };
        }
        Some(acc)
    }

    fn term(&mut self) -> Option<f64> {
        let mut acc = self.factor()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            acc = if op == '*' { acc * rhs } else { acc / rhs };
        }
        Some(acc)
    }

    fn factor(&mut self) -> Option<f64> {
        if self.peek() == Some('(') {
            self.pos += 1;
            let value = self.expr()?;
            if self.peek() != Some(')') {
                return None;
            }
            self.pos += 1;
            return Some(value);
        }
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .parse()
            .ok()
    }
}

/// Equality that treats every NaN as equal to every other NaN.
pub fn same_float(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_calculator() {
        assert_eq!(reference_eval("2 + 3 * 4"), Some(14.0));
        assert_eq!(reference_eval("8 - 3 - 2"), Some(3.0));
        assert_eq!(reference_eval("(1 + 1) / 4"), Some(0.5));
        assert_eq!(reference_eval("(1"), None);
        assert_eq!(reference_eval("1 +"), None);
    }
}
