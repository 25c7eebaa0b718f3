//! Quote-aware splitting of a single delimited line.

/// Splits one line into trimmed fields.
///
/// Every `"` toggles a quoted state and is dropped from the output; a
/// delimiter only ends a field outside quotes. The trailing field is always
/// emitted, so a line ending in a delimiter yields a final empty field.
/// Escaped quotes (`""`) inside a quoted field are not supported: they simply
/// toggle the state twice.
///
/// # Examples
///
/// ```
/// use overtime_dashboard::parsing::split_line;
///
/// assert_eq!(split_line(r#"a,"b,c",d"#, ','), vec!["a", "b,c", "d"]);
/// assert_eq!(split_line(" x ; y ;", ';'), vec!["x", "y", ""]);
/// ```
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        if ch == '"' {
            quoted = !quoted;
        } else if ch == delimiter && !quoted {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }

    fields.push(current.trim().to_string());
    fields
}
