//! URL sanitization.
//!
//! Rebuilds a user-supplied URL into a form safe for downstream use: control
//! characters stripped, path/query/fragment percent-encoded with the rules
//! appropriate to each position. Sanitization is a total transformation — it
//! never rejects input and its output is stable under re-sanitization.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::decompose::decompose;

/// Characters escaped in the path segment.
///
/// `/` separates segments and stays; `+` is legal path data and stays; `%` is
/// never re-escaped so sanitization is idempotent. `?` and `#` cannot occur
/// here (the tail split consumes them) but are included for safety when the
/// set is used on a raw fragment of text.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|')
    .add(b'[')
    .add(b']')
    .add(b'?')
    .add(b'#');

/// Characters escaped in the query segment.
///
/// `&` and `=` carry the key/value structure and stay; quotes and the other
/// unsafe characters are escaped.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|')
    .add(b'[')
    .add(b']')
    .add(b'#');

/// Characters escaped in the fragment segment.
const FRAGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Sanitizes a URL string.
///
/// 1. removes every control character and trims surrounding whitespace;
/// 2. decomposes the cleaned string (injecting a default scheme for bare
///    hosts);
/// 3. percent-encodes path, query, and fragment independently;
/// 4. reassembles `scheme://authority` with the encoded tail.
///
/// Total over any input: a string that cannot be decomposed at all is
/// returned control-character-stripped instead of rejected. The output never
/// contains `\n` or `\r`, and sanitizing twice equals sanitizing once.
pub fn sanitize_url(url: &str) -> String {
    let cleaned = remove_control_characters(url);
    let components = match decompose(&cleaned) {
        Ok(components) => components,
        Err(_) => return cleaned,
    };

    let (path, query, fragment) = split_tail(&components.tail);

    let mut out = format!("{}://{}", components.scheme, components.authority);
    out.push_str(&utf8_percent_encode(path, PATH_ENCODE_SET).to_string());
    if let Some(query) = query {
        out.push('?');
        out.push_str(&utf8_percent_encode(query, QUERY_ENCODE_SET).to_string());
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(&utf8_percent_encode(fragment, FRAGMENT_ENCODE_SET).to_string());
    }
    out
}

/// Removes every control character instance, then trims surrounding spaces.
///
/// Controls are stripped before trimming so a trailing `" \r"` does not leave
/// a space behind; only ASCII spaces are trimmed, since anything else at the
/// string's edges is data the encoder handles.
pub(crate) fn remove_control_characters(url: &str) -> String {
    let stripped: String = url.chars().filter(|c| !c.is_control()).collect();
    stripped.trim_matches(' ').to_string()
}

/// Splits a tail into path, query, and fragment.
///
/// The fragment starts at the first `#`; the query at the first `?` before
/// it. Missing segments are `None` so reassembly can omit the separator.
fn split_tail(tail: &str) -> (&str, Option<&str>, Option<&str>) {
    let (before_fragment, fragment) = match tail.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (tail, None),
    };
    let (path, query) = match before_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (before_fragment, None),
    };
    (path, query, fragment)
}
