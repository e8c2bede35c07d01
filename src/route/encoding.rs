//! Percent-encoding of substituted values and decoding of captured ones.

use std::borrow::Cow;

use url::form_urlencoded;

/// Encode one value for a path slot.
///
/// Reserved characters are escaped and spaces become `+`. Inside a wildcard
/// slot each `/`-separated piece is encoded on its own so the slashes survive.
#[must_use]
pub fn encode_value(value: &str, wildcard: bool) -> String {
    if wildcard {
        value
            .split('/')
            .map(encode_piece)
            .collect::<Vec<_>>()
            .join("/")
    } else {
        encode_piece(value)
    }
}

fn encode_piece(piece: &str) -> String {
    form_urlencoded::byte_serialize(piece.as_bytes()).collect()
}

/// Unescape a path for matching: `+` is a space and `%XX` escapes are
/// resolved, except `%2F` and `%25`, which stay escaped so segment
/// boundaries survive. Validators and literals are matched against this
/// form; [`restore_reserved`] finishes decoding a capture.
///
/// Text that does not decode to valid UTF-8 is returned unchanged.
#[must_use]
pub fn unescape_path(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['%', '+']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut rest = spaced.as_str();
    while let Some((index, kept)) = find_reserved_escape(rest) {
        match urlencoding::decode(&rest[..index]) {
            Ok(piece) => out.push_str(&piece),
            Err(_) => return Cow::Borrowed(raw),
        }
        out.push_str(kept);
        rest = &rest[index + 3..];
    }
    match urlencoding::decode(rest) {
        Ok(piece) => out.push_str(&piece),
        Err(_) => return Cow::Borrowed(raw),
    }
    Cow::Owned(out)
}

/// Resolve the `%2F` and `%25` escapes [`unescape_path`] leaves behind.
#[must_use]
pub fn restore_reserved(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((index, kept)) = find_reserved_escape(rest) {
        out.push_str(&rest[..index]);
        out.push(if kept == "%2F" { '/' } else { '%' });
        rest = &rest[index + 3..];
    }
    out.push_str(rest);
    out
}

/// Text a slot value shows the recognizer once it is rendered into a path.
#[must_use]
pub fn matched_form(value: &str, wildcard: bool) -> String {
    unescape_path(&encode_value(value, wildcard)).into_owned()
}

fn find_reserved_escape(text: &str) -> Option<(usize, &'static str)> {
    text.match_indices('%').find_map(|(index, _)| {
        let hex = text.get(index + 1..index + 3)?;
        if hex.eq_ignore_ascii_case("2F") {
            Some((index, "%2F"))
        } else if hex == "25" {
            Some((index, "%25"))
        } else {
            None
        }
    })
}

/// Render `?k=v&...` for the given pairs; empty when there are none.
#[must_use]
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}
