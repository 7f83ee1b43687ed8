//! Mapping from single-byte characters to X keysym names.

use std::borrow::Cow;

/// Returns the X keysym name `xdotool` understands for `key`.
///
/// ASCII letters and digits are their own keysym. Whitespace, common control
/// bytes and ASCII punctuation use their named keysyms. Anything else is
/// written as a hexadecimal keysym literal, which matches the Latin-1 keysym
/// for characters up to `0xff`.
#[must_use]
pub fn keysym_name(key: char) -> Cow<'static, str> {
    if key.is_ascii_alphanumeric() {
        return Cow::Owned(key.to_string());
    }
    named_keysym(key).map_or_else(
        || Cow::Owned(format!("0x{:04x}", u32::from(key))),
        Cow::Borrowed,
    )
}

fn named_keysym(key: char) -> Option<&'static str> {
    let name = match key {
        '\u{8}' => "BackSpace",
        '\t' => "Tab",
        '\n' | '\r' => "Return",
        '\u{1b}' => "Escape",
        '\u{7f}' => "Delete",
        ' ' => "space",
        '!' => "exclam",
        '"' => "quotedbl",
        '#' => "numbersign",
        '$' => "dollar",
        '%' => "percent",
        '&' => "ampersand",
        '\'' => "apostrophe",
        '(' => "parenleft",
        ')' => "parenright",
        '*' => "asterisk",
        '+' => "plus",
        ',' => "comma",
        '-' => "minus",
        '.' => "period",
        '/' => "slash",
        ':' => "colon",
        ';' => "semicolon",
        '<' => "less",
        '=' => "equal",
        '>' => "greater",
        '?' => "question",
        '@' => "at",
        '[' => "bracketleft",
        '\\' => "backslash",
        ']' => "bracketright",
        '^' => "asciicircum",
        '_' => "underscore",
        '`' => "grave",
        '{' => "braceleft",
        '|' => "bar",
        '}' => "braceright",
        '~' => "asciitilde",
        _ => return None,
    };
    Some(name)
}
