//! Text formatting for stack values
//!
//! Numbers use the shortest decimal that round-trips. Scientific notation
//! is reserved for very small or very large magnitudes.

use crate::eval::Stack;

/// Decimal exponents in `[MIN_PLAIN_EXP, MAX_PLAIN_EXP)` print without an exponent
const MIN_PLAIN_EXP: i32 = -4;
const MAX_PLAIN_EXP: i32 = 21;

/// Format a single value the way a calculator display shows it
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if n == 0.0 {
        return n.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "6.67408e-11"
    let sci = format!("{:e}", n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if (MIN_PLAIN_EXP..MAX_PLAIN_EXP).contains(&exp) {
        n.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

/// Render current stack and undo snapshot as two columns.
///
/// The left column is the live stack, the right column is the snapshot the
/// next `undo` would restore. Rows are bottom-aligned so both tops line up.
pub fn format_panels(current: &Stack, previous: &Stack, width: usize) -> String {
    let left: Vec<String> = current.iter().map(|v| format_number(*v)).collect();
    let right: Vec<String> = previous.iter().map(|v| format_number(*v)).collect();

    let rows = left.len().max(right.len());
    if rows == 0 {
        return String::new();
    }

    // Left column gets two thirds of the width, snapshot the rest
    let left_width = (width.saturating_sub(3) * 2 / 3).max(8);
    let right_width = width.saturating_sub(left_width + 3).max(8);

    let pad = |col: &[String], row: usize| -> String {
        let offset = rows - col.len();
        if row >= offset {
            col[row - offset].clone()
        } else {
            String::new()
        }
    };

    let mut out = String::new();
    for row in 0..rows {
        let l = pad(&left, row);
        let r = pad(&right, row);
        out.push_str(&format!(
            "{:>lw$} | {:>rw$}\n",
            truncate(&l, left_width),
            truncate(&r, right_width),
            lw = left_width,
            rw = right_width
        ));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
