use std::fmt;

use crate::expression::ast::Expression;

impl Expression {
    /// Render the expression as infix text.
    ///
    /// Every nested operation is parenthesized. `bracket` controls only the outermost
    /// level, so `to_infix(false)` gives `(7 << (7 - 2)) - 9` where `to_infix(true)`
    /// gives `((7 << (7 - 2)) - 9)`. Leaves are never parenthesized.
    pub fn to_infix(&self, bracket: bool) -> String {
        let mut out = String::new();
        write_infix(&mut out, self, bracket);
        out
    }
}

fn write_infix(out: &mut String, expr: &Expression, bracket: bool) {
    match expr {
        Expression::Number(n) => out.push_str(&n.to_string()),
        Expression::Apply(operation, lhs, rhs) => {
            if bracket {
                out.push('(');
            }
            write_infix(out, lhs, true);
            out.push(' ');
            out.push_str(operation.symbol());
            out.push(' ');
            write_infix(out, rhs, true);
            if bracket {
                out.push(')');
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_infix(false))
    }
}
