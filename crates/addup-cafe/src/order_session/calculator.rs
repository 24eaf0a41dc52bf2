use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide if rhs == 0.0 => f64::NAN,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        })
    }
}

/// Four-function scratch calculator with a single pending operator.
///
/// Choosing a second operator evaluates the pending one first, so `2 + 3 ×` shows
/// `5`. Division by zero produces `NaN`, which is shown as is and which the answer
/// check will refuse as unparseable if pasted.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    pending: Option<(f64, Operator)>,
    waiting: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            waiting: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn digit(&mut self, digit: u8) {
        let digit = char::from(b'0' + digit.min(9));
        if self.waiting {
            self.display = digit.to_string();
            self.waiting = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    pub fn decimal_point(&mut self) {
        if self.waiting {
            self.display = "0.".to_string();
            self.waiting = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn operator(&mut self, op: Operator) {
        let current = self.value();
        self.pending = match self.pending {
            Some((lhs, pending)) if !self.waiting => {
                let result = pending.apply(lhs, current);
                self.show(result);
                Some((result, op))
            }
            Some((lhs, _)) => Some((lhs, op)),
            None => Some((current, op)),
        };
        self.waiting = true;
    }

    pub fn equals(&mut self) {
        if let Some((lhs, op)) = self.pending.take() {
            let result = op.apply(lhs, self.value());
            self.show(result);
            self.waiting = true;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Current display as a number; `NaN` after a division by zero.
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(f64::NAN)
    }

    fn show(&mut self, value: f64) {
        self.display = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(calc: &mut Calculator, keys: &str) {
        for key in keys.chars() {
            match key {
                '0'..='9' => calc.digit(key as u8 - b'0'),
                '.' => calc.decimal_point(),
                '+' => calc.operator(Operator::Add),
                '-' => calc.operator(Operator::Subtract),
                '*' => calc.operator(Operator::Multiply),
                '/' => calc.operator(Operator::Divide),
                '=' => calc.equals(),
                _ => {}
            }
        }
    }

    #[test]
    fn test_adds_prices() {
        let mut calc = Calculator::new();
        enter(&mut calc, "8.5+3.25+.75=");
        assert_eq!(calc.display(), "12.5");
    }

    #[test]
    fn test_chained_operators_evaluate_pending_first() {
        let mut calc = Calculator::new();
        enter(&mut calc, "2+3*");
        assert_eq!(calc.display(), "5");
        enter(&mut calc, "4=");
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_division_by_zero_is_undefined() {
        let mut calc = Calculator::new();
        enter(&mut calc, "7/0=");
        assert_eq!(calc.display(), "NaN");
        assert!(calc.value().is_nan());
    }

    #[test]
    fn test_operator_change_before_operand_replaces_it() {
        let mut calc = Calculator::new();
        enter(&mut calc, "9+-2=");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        enter(&mut calc, "12+");
        calc.clear();
        assert_eq!(calc, Calculator::new());
        enter(&mut calc, "007");
        assert_eq!(calc.display(), "7");
    }
}
