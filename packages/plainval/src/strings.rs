//! String case conversion and small formatting helpers.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::error::Result;

lazy_static! {
    static ref LOWER_THEN_CAPS: Regex = Regex::new(r"([a-z0-9])([A-Z]+)").unwrap();
    static ref HYPHENS_OR_SPACES: Regex = Regex::new(r"[-\s]+").unwrap();
    static ref SEPARATOR_THEN_CHAR: Regex = Regex::new(r"[-_\s]+(.)?").unwrap();
}

/// Convert `camelCase`, `kebab-case` or spaced words to `snake_case`.
///
/// ```rust
/// use plainval::snakeify;
///
/// assert_eq!(snakeify("MozTransform"), "moz_transform");
/// assert_eq!(snakeify(" font-size "), "font_size");
/// ```
pub fn snakeify(s: &str) -> String {
    let split_caps = LOWER_THEN_CAPS.replace_all(s.trim(), "${1}_${2}");
    HYPHENS_OR_SPACES
        .replace_all(&split_caps, "_")
        .to_lowercase()
}

/// Convert `snake_case`, `kebab-case` or spaced words to `camelCase`.
///
/// Every run of `-`, `_` or whitespace is dropped and the character after it
/// is uppercased. The first character is left as it is.
pub fn camelize(s: &str) -> String {
    SEPARATOR_THEN_CHAR
        .replace_all(s.trim(), |caps: &regex::Captures<'_>| {
            caps.get(1)
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Values that can be rendered as the text of a number.
///
/// Strings are taken as they are; everything else goes through its usual
/// string form.
pub trait NumberText {
    fn number_text(&self) -> String;
}

impl NumberText for str {
    fn number_text(&self) -> String {
        self.to_string()
    }
}

impl NumberText for String {
    fn number_text(&self) -> String {
        self.clone()
    }
}

impl NumberText for Value {
    fn number_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: NumberText + ?Sized> NumberText for &T {
    fn number_text(&self) -> String {
        (**self).number_text()
    }
}

macro_rules! number_text_via_display {
    ($($t:ty),*) => {
        $(
            impl NumberText for $t {
                fn number_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

number_text_via_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Insert thousands separators into every run of digits.
///
/// A comma goes before each group of three digits counted from the right end
/// of a digit run, but never on a word boundary, so a run that starts the
/// string or follows punctuation gets no leading comma. Decimal points and
/// signs are not special: `"1234.5678"` becomes `"1,234.5,678"`.
///
/// ```rust
/// use plainval::insert_commas_in_number;
///
/// assert_eq!(insert_commas_in_number(2000), "2,000");
/// assert_eq!(insert_commas_in_number("200"), "200");
/// ```
pub fn insert_commas_in_number<T: NumberText>(value: T) -> String {
    let chars: Vec<char> = value.number_text().chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }

        for (p, &digit) in chars.iter().enumerate().take(end).skip(start) {
            let groups_follow = (end - p) % 3 == 0;
            let inside_word = p > start || (p > 0 && is_word_char(chars[p - 1]));
            if groups_follow && inside_word {
                out.push(',');
            }
            out.push(digit);
        }
        i = end;
    }

    out
}

/// Join `(name, value)` pairs as `name=value&name=value`.
///
/// Nothing is URL-encoded.
pub fn build_query_string<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", name.as_ref(), value.as_ref()))
        .collect::<Vec<String>>()
        .join("&")
}

pub fn first_char_is(c: char, s: &str) -> bool {
    s.starts_with(c)
}

/// `s` with `suffix` appended.
pub fn append_str(suffix: &str, s: &str) -> String {
    let mut out = String::with_capacity(s.len() + suffix.len());
    out.push_str(s);
    out.push_str(suffix);
    out
}

/// Compile each pattern into a [`Regex`], keyed by the pattern text.
///
/// # Errors
///
/// Returns [`crate::Error::Regex`] for the first pattern that fails to
/// compile.
pub fn make_matchers<S: AsRef<str>>(patterns: &[S]) -> Result<BTreeMap<String, Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Ok((pattern.to_string(), Regex::new(pattern)?))
        })
        .collect()
}
