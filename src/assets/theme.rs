//! Background color extraction from theme stylesheets.
//!
//! Every bundled theme styles its code block through an `.hljs` rule; the
//! rule's background declaration is the theme's canvas color. The scanner
//! here understands exactly the declarations the bundled themes use (hex
//! colors, `rgb()`/`rgba()`, and a few CSS named colors); it is not a
//! general CSS parser.

/// Extract the RGB background declared for the `.hljs` rule, if any.
pub(super) fn background_color(css: &str) -> Option<[u8; 3]> {
    let block = hljs_block(css)?;
    let value = declaration_value(block, "background-color")
        .or_else(|| declaration_value(block, "background"))?;
    parse_color(value)
}

/// Find the declaration block of the rule whose selector list contains
/// `.hljs` itself (not `.hljs-*` token classes).
fn hljs_block(css: &str) -> Option<&str> {
    let mut rest = css;
    while let Some(open) = rest.find('{') {
        let selectors = &rest[..open];
        let tail = &rest[open + 1..];
        let close = tail.find('}')?;
        let block = &tail[..close];

        if selectors.split(',').any(|s| s.trim() == ".hljs") {
            return Some(block);
        }
        rest = &tail[close + 1..];
    }
    None
}

/// Value of the first declaration of `property` in a rule block.
fn declaration_value<'a>(block: &'a str, property: &str) -> Option<&'a str> {
    for decl in block.split(';') {
        if let Some((name, value)) = decl.split_once(':') {
            if name.trim().eq_ignore_ascii_case(property) {
                return Some(value.trim());
            }
        }
    }
    None
}

/// Decode a CSS color value, tolerating shorthand `background` declarations
/// where the color is one of several tokens.
fn parse_color(value: &str) -> Option<[u8; 3]> {
    let value = value.trim();

    if let Some(rest) = value
        .strip_prefix("rgb")
        .map(|r| r.strip_prefix('a').unwrap_or(r))
    {
        let (args, _) = rest.trim_start().strip_prefix('(')?.split_once(')')?;
        let mut channels = args.split(',').map(str::trim);
        let r = channels.next()?.parse().ok()?;
        let g = channels.next()?.parse().ok()?;
        let b = channels.next()?.parse().ok()?;
        return Some([r, g, b]);
    }

    value.split_whitespace().find_map(parse_color_token)
}

fn parse_color_token(token: &str) -> Option<[u8; 3]> {
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex);
    }

    match token.to_ascii_lowercase().as_str() {
        "white" => Some([255, 255, 255]),
        "black" => Some([0, 0, 0]),
        "navy" => Some([0, 0, 128]),
        "ivory" => Some([255, 255, 240]),
        _ => None,
    }
}

/// Decode `rgb` or `rrggbb` hex digits.
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                // Expand the shorthand digit: f -> ff
                out[i] = c.to_digit(16)? as u8 * 17;
            }
            Some(out)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        _ => None,
    }
}
