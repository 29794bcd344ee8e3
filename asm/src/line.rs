/// Strip the `//` comment and surrounding whitespace from a raw source line.
/// Returns `None` for lines with nothing left to assemble.
pub fn clean(raw: &str) -> Option<&str> {
    let code = match raw.find("//") {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}
