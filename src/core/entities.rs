// src/core/entities.rs
// HTML entity decoding for scraped text.
//
// Rules run as sequential whole-string passes, in a fixed order. A pass never
// re-scans its own output, but later passes do see what earlier ones produced:
// `&amp;lt;` becomes `&lt;` in the `&amp;` pass and then `<` in the `&lt;` pass.
// That double step is how the site's own client reads these strings, so the
// order below is load-bearing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#(\d+);").unwrap());
static HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").unwrap());

/// Named entities resolved after the numeric passes, in order.
/// `&amp;` sits after the quote/space rules and before `&lt;`/`&gt;`.
const NAMED: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    // Typographic quotes flatten to ASCII
    ("&rsquo;", "'"),
    ("&lsquo;", "'"),
    ("&rdquo;", "\""),
    ("&ldquo;", "\""),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&hellip;", "\u{2026}"),
    ("&trade;", "\u{2122}"),
    ("&copy;", "\u{a9}"),
    ("&reg;", "\u{ae}"),
    ("&deg;", "\u{b0}"),
    ("&times;", "\u{d7}"),
    ("&divide;", "\u{f7}"),
    ("&plusmn;", "\u{b1}"),
];

/// The first six `NAMED` rules: quotes, space, `&amp;`, angle brackets.
const BASIC: usize = 6;

/// Resolve numeric (`&#8217;`, `&#x2019;`) and named entities.
///
/// Numeric entities that do not name a Unicode scalar value (surrogates,
/// out-of-range or overflowing code points) are left as written.
pub fn decode(text: &str) -> String {
    decode_with(text, NAMED)
}

/// Numeric entities plus the minimal named set only. Typographic entities
/// (`&rsquo;`, `&hellip;`, ...) pass through untouched.
pub fn decode_basic(text: &str) -> String {
    decode_with(text, &NAMED[..BASIC])
}

fn decode_with(text: &str, named: &[(&str, &str)]) -> String {
    if !text.contains('&') {
        return s!(text);
    }

    let out = DECIMAL.replace_all(text, |caps: &Captures| numeric(caps, 10));
    let mut out = HEX.replace_all(&out, |caps: &Captures| numeric(caps, 16)).into_owned();

    for &(entity, literal) in named {
        if out.contains(entity) {
            out = out.replace(entity, literal);
        }
    }
    out
}

fn numeric(caps: &Captures, radix: u32) -> String {
    u32::from_str_radix(&caps[1], radix)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_else(|| s!(&caps[0]))
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_basic};

    #[test]
    fn basic_set_leaves_typographic_entities() {
        assert_eq!(decode_basic("&lt;b&gt; &amp; &rsquo;"), "<b> & &rsquo;");
        assert_eq!(decode_basic("&#8217;"), "\u{2019}");
        assert_eq!(decode("&rsquo;"), "'");
    }

    #[test]
    fn numeric_decimal_and_hex() {
        assert_eq!(decode("it&#8217;s"), "it\u{2019}s");
        assert_eq!(decode("it&#x2019;s"), "it\u{2019}s");
        assert_eq!(decode("&#39;quoted&#039;"), "'quoted'");
        assert_eq!(decode("&#X41;"), "&#X41;"); // upper-case X is not a hex entity
    }

    #[test]
    fn malformed_numeric_left_alone() {
        assert_eq!(decode("&#abc;"), "&#abc;");
        assert_eq!(decode("&#xZZ;"), "&#xZZ;");
        assert_eq!(decode("&#55296;"), "&#55296;"); // lone surrogate
        assert_eq!(decode("&#99999999999;"), "&#99999999999;");
    }

    #[test]
    fn named_basic_set() {
        assert_eq!(
            decode("&quot;a&quot; &apos;b&apos; &lt;c&gt; d&amp;e f&nbsp;g"),
            "\"a\" 'b' <c> d&e f g"
        );
    }

    #[test]
    fn named_rich_set() {
        assert_eq!(decode("&ldquo;Hi&rdquo; &lsquo;x&rsquo;"), "\"Hi\" 'x'");
        assert_eq!(decode("1&ndash;2&mdash;3&hellip;"), "1\u{2013}2\u{2014}3\u{2026}");
        assert_eq!(decode("&trade;&copy;&reg;&deg;"), "\u{2122}\u{a9}\u{ae}\u{b0}");
        assert_eq!(decode("2&times;3&divide;4&plusmn;"), "2\u{d7}3\u{f7}4\u{b1}");
    }

    #[test]
    fn amp_pass_order() {
        // one pass per rule, never recursive within a rule
        assert_eq!(decode("&amp;amp;"), "&amp;");
        // `&lt;` runs after `&amp;`, so it sees the freshly exposed entity
        assert_eq!(decode("&amp;lt;"), "<");
        // `&quot;` runs before `&amp;`, so this one survives
        assert_eq!(decode("&amp;quot;"), "&quot;");
    }

    #[test]
    fn entity_round_trip_over_special_chars() {
        fn encode(s: &str) -> String {
            let mut out = String::new();
            for ch in s.chars() {
                match ch {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '"' => out.push_str("&quot;"),
                    '\'' => out.push_str("&apos;"),
                    c => out.push(c),
                }
            }
            out
        }

        let alphabet = ['<', '>', '&', '"', '\''];
        // every string of length 0..=4 over the alphabet
        let mut cases = vec![String::new()];
        let mut level = vec![String::new()];
        for _ in 0..4 {
            level = level
                .iter()
                .flat_map(|p| alphabet.iter().map(move |c| format!("{p}{c}")))
                .collect();
            cases.extend(level.iter().cloned());
        }
        for case in cases {
            assert_eq!(decode(&encode(&case)), case, "case {case:?}");
        }
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(decode("no entities here"), "no entities here");
        assert_eq!(decode("AT&T"), "AT&T");
    }
}
