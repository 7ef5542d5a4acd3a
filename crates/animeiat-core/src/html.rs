//! HTML entity decoding.
//!
//! The site serves entity-escaped text both in markup and inside inline
//! script data. Decoding runs two passes: numeric character references
//! first, then a fixed table of named entities substituted globally in
//! table order. The order is observable: `decode_entities("&amp;lt;")`
//! yields `"<"` because the amp substitution runs before the lt one.

use regex_lite::Regex;

/// Named entities handled by the second pass, substituted in this order.
const NAMED_ENTITIES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Decode decimal character references and the five named entities.
///
/// Plain text without entities passes through unchanged. Idempotence
/// beyond a single call is not guaranteed.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = decode_numeric_refs(text);
    for (entity, replacement) in NAMED_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }
    decoded
}

/// Replace `&#NNN;` decimal references with their code points.
///
/// References outside the valid char range are left untouched.
fn decode_numeric_refs(text: &str) -> String {
    let re = Regex::new(r"&#(\d+);").unwrap();

    let mut decoded = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let reference = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        decoded.push_str(&text[last..reference.start()]);
        match caps[1].parse::<u32>().ok().and_then(char::from_u32) {
            Some(ch) => decoded.push(ch),
            None => decoded.push_str(reference.as_str()),
        }
        last = reference.end();
    }
    decoded.push_str(&text[last..]);
    decoded
}
