// Logging and input helpers shared by the model and the components.

pub fn clog(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    }
}

/// Reads the leading integer of `raw` the way a number field is read by a browser
/// form: leading whitespace and trailing garbage are ignored ("12abc" -> 12).
/// Returns `None` when no digit follows the optional sign. Saturates on overflow.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = digits[..len].bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}
