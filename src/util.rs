// Small helpers shared across modules.

use wasm_bindgen::JsValue;

/// Round to the cents digit, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Format a money figure for display: thousands separators, cents shown
/// only when non-zero.
pub fn format_money(x: f64) -> String {
    let negative = x < 0.0;
    let x = round2(x.abs());
    let whole = x.trunc() as i64;
    let cents = ((x - x.trunc()) * 100.0).round() as i64;
    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{},{}", tail, grouped)
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{},{}", digits, grouped)
    };
    let sign = if negative { "-" } else { "" };
    if cents == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, cents)
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        // 0.125 is exact in binary, so the half case is genuine
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.346), 2.35);
        assert_eq!(round2(178909.4), 178909.4);
    }

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(650.0), "$650");
        assert_eq!(format_money(179559.4), "$179,559.40");
        assert_eq!(format_money(1234567.89), "$1,234,567.89");
        assert_eq!(format_money(-42.5), "-$42.50");
    }
}
