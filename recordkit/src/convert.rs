use crate::record::Record;

pub fn bool_to_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `true`, `1`, `yes` and `on` are true; every other text is false.
pub fn str_to_bool(value: &str) -> bool {
    matches!(value, "true" | "1" | "yes" | "on")
}

/// Truthiness: strings follow [`str_to_bool`], numbers are true when not
/// zero and containers when not empty.
pub fn to_bool(record: &Record) -> bool {
    match record {
        Record::Null => false,
        Record::Bool(value) => *value,
        Record::Number(number) => !number.is_zero(),
        Record::String(value) => str_to_bool(value),
        Record::List(list) => !list.is_empty(),
        Record::Map(map) => !map.is_empty(),
        Record::Object(object) => !object.is_empty(),
    }
}

// Longest leading run that still parses as a float ("12.5kg" gives 12.5).
fn leading_number(text: &str) -> Option<f64> {
    let mut best = None;

    for (index, character) in text.char_indices() {
        let end = index + character.len_utf8();
        if let Ok(value) = text[..end].parse::<f64>() {
            best = Some(value);
        } else if !matches!(character, '-' | '+' | '.' | 'e' | 'E') && !character.is_ascii_digit() {
            break;
        }
    }

    best
}

/// Reads a number written with the pt-PT conventions: `,` as the decimal
/// mark and spaces between thousands. Empty input is `None`; text without a
/// numeric prefix reads as `0.0`.
pub fn to_float(value: &str) -> Option<f64> {
    if value.is_empty() {
        return None;
    }

    let normalized: String = value
        .replace(',', ".")
        .chars()
        .filter(|character| *character != ' ')
        .collect();

    match normalized.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => Some(leading_number(&normalized).unwrap_or(0.0)),
    }
}

/// Two decimals, `,` as the decimal mark and a space between thousands
/// (`1234567.891` gives `"1 234 567,89"`).
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && fixed.bytes().any(|byte| byte != b'0' && byte != b'.');
    format!("{}{},{}", if negative { "-" } else { "" }, grouped, fraction)
}
