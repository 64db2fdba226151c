/// Parses a non-negative integer literal.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no empty string.
/// With `allow_zero == false` a literal whose value is zero (`"0"`, `"000"`) is rejected.
/// Values that do not fit in a `u32` are rejected as well.
pub fn parse_number(text: &str, allow_zero: bool) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u32 = text.parse().ok()?;
    if value == 0 && !allow_zero {
        return None;
    }
    Some(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
