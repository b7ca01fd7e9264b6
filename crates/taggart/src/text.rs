//! Text operations that share names with tag methods.
//!
//! `tr` and `sub` are both a tag and a long-standing string operation
//! (character translation and first-match substitution). These are the
//! string operations; [`dispatch`](crate::dispatch) decides which one a
//! call means.

use std::collections::HashMap;
use std::fmt;

use regex::{Captures, Regex};

use crate::error::{Result, TagError};

/// Translates characters of `text` listed in `from` to those in `to`.
///
/// Both lists accept ranges (`a-z`) and backslash escapes. A leading `^`
/// in `from` (with more characters after it) negates the set. A `to` list
/// shorter than `from` is padded with its last character; an empty `to`
/// deletes the matched characters.
///
/// ```rust
/// use taggart::text::translate;
///
/// assert_eq!(translate("hello", "el", "ip").unwrap(), "hippo");
/// assert_eq!(translate("hello", "a-y", "b-z").unwrap(), "ifmmp");
/// assert_eq!(translate("hello", "^aeiou", "*").unwrap(), "*e**o");
/// assert!(translate("hello", "z-a", "*").is_err());
/// ```
///
/// # Errors
///
/// Returns [`TagError::InvalidRange`] if either list holds a range whose
/// start sorts after its end, such as `z-a`.
pub fn translate(text: &str, from: &str, to: &str) -> Result<String> {
    let (negated, from) = match from.strip_prefix('^') {
        Some(rest) if !rest.is_empty() => (true, rest),
        _ => (false, from),
    };
    let from = expand_set(from)?;
    let to = expand_set(to)?;

    if negated {
        let last = to.last().copied();
        return Ok(text
            .chars()
            .filter_map(|c| if from.contains(&c) { Some(c) } else { last })
            .collect());
    }

    let mut table: HashMap<char, Option<char>> = HashMap::with_capacity(from.len());
    for (i, c) in from.iter().enumerate() {
        let target = to.get(i).or_else(|| to.last()).copied();
        table.insert(*c, target);
    }
    Ok(text
        .chars()
        .filter_map(|c| match table.get(&c) {
            Some(target) => *target,
            None => Some(c),
        })
        .collect())
}

/// Expands ranges and escapes in a translation list.
fn expand_set(spec: &str) -> Result<Vec<char>> {
    let mut literal = Vec::new();
    let mut chars = spec.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // Escaped chars never start a range.
            literal.push((chars.next().unwrap_or('\\'), true));
        } else {
            literal.push((c, false));
        }
    }

    let mut out = Vec::with_capacity(literal.len());
    let mut i = 0;
    while i < literal.len() {
        let (c, _) = literal[i];
        let is_range = i + 2 < literal.len() && literal[i + 1] == ('-', false);
        if is_range {
            let end = literal[i + 2].0;
            if c > end {
                return Err(TagError::InvalidRange { start: c, end });
            }
            out.extend(c..=end);
            i += 3;
        } else {
            out.push(c);
            i += 1;
        }
    }
    Ok(out)
}

/// What replaces the first match in [`substitute`].
pub enum Replacement<'a> {
    /// Template text. `\0` or `\&` is the whole match, `\1`..`\9` numbered
    /// groups, `\k<name>` named groups, `` \` `` and `\'` the text before
    /// and after the match, `\\` a backslash.
    Template(String),
    /// Replacement looked up by the matched text; missing keys yield `""`.
    Lookup(HashMap<String, String>),
    /// Called with the matched text.
    Callback(&'a dyn Fn(&str) -> String),
}

impl fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Replacement::Lookup(map) => f.debug_tuple("Lookup").field(map).finish(),
            Replacement::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<&str> for Replacement<'_> {
    fn from(template: &str) -> Self {
        Replacement::Template(template.to_string())
    }
}

impl From<String> for Replacement<'_> {
    fn from(template: String) -> Self {
        Replacement::Template(template)
    }
}

impl From<HashMap<String, String>> for Replacement<'_> {
    fn from(map: HashMap<String, String>) -> Self {
        Replacement::Lookup(map)
    }
}

/// Compiles a plain-text pattern that matches itself literally.
///
/// # Errors
///
/// Only fails if the escaped pattern exceeds the regex size limit.
pub fn literal_pattern(text: &str) -> Result<Regex> {
    Ok(Regex::new(&regex::escape(text))?)
}

/// Replaces the first match of `pattern` in `text`.
///
/// ```rust
/// use regex::Regex;
/// use taggart::text::{substitute, Replacement};
///
/// let vowel = Regex::new("([aeiou])").unwrap();
/// assert_eq!(substitute("hello", &vowel, &"<\\1>".into()), "h<e>llo");
///
/// let shout = |m: &str| m.to_uppercase();
/// assert_eq!(substitute("hello", &vowel, &Replacement::Callback(&shout)), "hEllo");
/// ```
pub fn substitute(text: &str, pattern: &Regex, replacement: &Replacement<'_>) -> String {
    let Some(caps) = pattern.captures(text) else {
        return text.to_string();
    };
    let Some(whole) = caps.get(0) else {
        return text.to_string();
    };

    let replaced = match replacement {
        Replacement::Template(template) => expand_template(template, &caps, text),
        Replacement::Lookup(map) => map.get(whole.as_str()).cloned().unwrap_or_default(),
        Replacement::Callback(callback) => callback(whole.as_str()),
    };

    let mut out = String::with_capacity(text.len() + replaced.len());
    out.push_str(&text[..whole.start()]);
    out.push_str(&replaced);
    out.push_str(&text[whole.end()..]);
    out
}

fn expand_template(template: &str, caps: &Captures<'_>, text: &str) -> String {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));

    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(d @ '0'..='9') => out.push_str(group(d as usize - '0' as usize)),
            Some('&') => out.push_str(group(0)),
            Some('`') => out.push_str(&text[..start]),
            Some('\'') => out.push_str(&text[end..]),
            Some('\\') => out.push('\\'),
            Some('k') if chars.peek() == Some(&'<') => {
                chars.next();
                let name: String = chars.by_ref().take_while(|&c| c != '>').collect();
                out.push_str(caps.name(&name).map_or("", |m| m.as_str()));
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_examples() {
        assert_eq!(translate("hello", "el", "ip").unwrap(), "hippo");
        assert_eq!(translate("hello", "aeiou", "*").unwrap(), "h*ll*");
        assert_eq!(translate("hello", "a-y", "b-z").unwrap(), "ifmmp");
        assert_eq!(translate("hello", "^aeiou", "*").unwrap(), "*e**o");
        assert_eq!(translate("Jolly Roger", "J", "G").unwrap(), "Golly Roger");
    }

    #[test]
    fn test_translate_empty_to_deletes() {
        assert_eq!(translate("hello", "l", "").unwrap(), "heo");
        assert_eq!(translate("hello", "^l", "").unwrap(), "ll");
    }

    #[test]
    fn test_translate_literal_caret_and_dash() {
        assert_eq!(translate("a^b", "^", "x").unwrap(), "axb");
        assert_eq!(translate("a-b", "-", "+").unwrap(), "a+b");
        assert_eq!(translate("a-b", "a\\-", "xy").unwrap(), "xyb");
    }

    #[test]
    fn test_translate_later_mapping_wins() {
        assert_eq!(translate("hello", "ll", "xy").unwrap(), "heyyo");
    }

    #[test]
    fn test_substitute_first_match_only() {
        let re = Regex::new("[aeiou]").unwrap();
        assert_eq!(substitute("hello", &re, &"*".into()), "h*llo");
    }

    #[test]
    fn test_substitute_no_match_is_unchanged() {
        let re = Regex::new("z").unwrap();
        assert_eq!(substitute("hello", &re, &"*".into()), "hello");
    }

    #[test]
    fn test_substitute_named_group() {
        let re = Regex::new("(?<foo>[aeiou])").unwrap();
        assert_eq!(substitute("hello", &re, &"*\\k<foo>*".into()), "h*e*llo");
    }

    #[test]
    fn test_substitute_template_escapes() {
        let re = Regex::new("l+").unwrap();
        assert_eq!(substitute("hello", &re, &"[\\&]".into()), "he[ll]o");
        assert_eq!(substitute("hello", &re, &"[\\`|\\']".into()), "he[he|o]o");
        assert_eq!(substitute("hello", &re, &"\\\\".into()), "he\\o");
        assert_eq!(substitute("hello", &re, &"\\2".into()), "heo");
    }

    #[test]
    fn test_substitute_callback() {
        let re = Regex::new(".").unwrap();
        let ord = |m: &str| format!("{} ", m.chars().next().map_or(0, |c| c as u32));
        assert_eq!(substitute("hello", &re, &Replacement::Callback(&ord)), "104 ello");
    }

    #[test]
    fn test_substitute_lookup() {
        let re = Regex::new("[[:upper:]]{2,}").unwrap();
        let mut env = HashMap::new();
        env.insert("SHELL".to_string(), "/bin/bash".to_string());
        assert_eq!(
            substitute("Is SHELL your preferred shell?", &re, &env.into()),
            "Is /bin/bash your preferred shell?"
        );
    }

    #[test]
    fn test_translate_rejects_reversed_range() {
        assert!(matches!(
            translate("hello", "z-a", "*"),
            Err(TagError::InvalidRange { start: 'z', end: 'a' })
        ));
        assert!(matches!(
            translate("hello", "a-z", "9-0"),
            Err(TagError::InvalidRange { start: '9', end: '0' })
        ));
        assert_eq!(translate("a-z", "z\\-a", "*").unwrap(), "***");
    }

    #[test]
    fn test_literal_pattern_is_escaped() {
        let re = literal_pattern("a.b").unwrap();
        assert_eq!(substitute("axb a.b", &re, &"!".into()), "axb !");
    }
}
