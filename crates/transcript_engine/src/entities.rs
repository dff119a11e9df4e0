use std::borrow::Cow;

/// Longest entity body we will consider between `&` and `;`.
const MAX_ENTITY_LEN: usize = 32;

/// Replace HTML character entities with their literal equivalents.
///
/// Handles the named entities that show up in saved transcript pages plus
/// numeric `&#NNN;` / `&#xHH;` references. Anything unrecognized is left
/// untouched. Decoded control characters other than tab, newline and
/// carriage return are dropped so no control characters leak into the
/// extracted text.
pub fn unescape_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match parse_entity(rest) {
            Some((replacement, consumed)) => {
                out.push_str(replacement.as_ref());
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse one entity at the start of `s` (which begins with `&`).
/// Returns the replacement text and the number of bytes consumed.
fn parse_entity(s: &str) -> Option<(Cow<'static, str>, usize)> {
    let semi = s[1..].find(';')? + 1;
    if semi - 1 > MAX_ENTITY_LEN {
        return None;
    }
    let body = &s[1..semi];
    let consumed = semi + 1;

    if let Some(number) = body.strip_prefix('#') {
        let value = if let Some(hex) = number.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            number.parse::<u32>().ok()?
        };
        let ch = char::from_u32(value)?;
        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            return Some((Cow::Borrowed(""), consumed));
        }
        return Some((Cow::Owned(ch.to_string()), consumed));
    }

    let literal = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "copy" => "\u{A9}",
        "reg" => "\u{AE}",
        "trade" => "\u{2122}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        _ => return None,
    };
    Some((Cow::Borrowed(literal), consumed))
}
