//! URLs, email addresses, filesystem paths, handles and hashtags

use super::numbers::{digits_to_words, integer_literal_to_words};
use super::pattern::{replace_guarded, starts_word};
use super::speech::{
    normalize_whitespace, speak_domain, speak_token, spell_letters, split_camel,
    split_trailing_punct,
};
use super::Normalizer;
use crate::config::{Config, PathPolicy, UrlPolicy};
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::{Captures, Regex};

// Literal patterns stop at placeholder code points (U+E000..U+E01F)
static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<>\x{E000}-\x{E01F}]+").expect("valid url regex")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

static WINDOWS_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z]:\\[^\s)\x{E000}-\x{E01F}]+").expect("valid windows path regex")
});

static POSIX_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"~?/(?:[^\s/\x{E000}-\x{E01F}]+/)*[^\s/\x{E000}-\x{E01F}]+")
        .expect("valid posix path regex")
});

static HANDLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9_]{1,30})").expect("valid handle regex"));

static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("valid hashtag regex"));

/// A URL split into the parts that can be read aloud
#[derive(Debug, Default, PartialEq, Eq)]
struct UrlParts<'a> {
    scheme: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    fn parse(url: &'a str) -> Self {
        let (scheme, rest) = match url.split_once("://") {
            Some((scheme, rest)) => (Some(scheme), rest),
            None => (None, url),
        };

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (rest, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (authority, path) = match rest.find('/') {
            Some(slash) => rest.split_at(slash),
            None => (rest, ""),
        };

        // Credentials are never read aloud
        let authority = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);

        // A port that is not a number is dropped; `]` means an IPv6 literal
        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
                (host, Some(port))
            }
            Some((host, port)) if !port.contains(']') => (host, None),
            _ => (authority, None),
        };

        Self {
            scheme,
            host,
            port,
            path,
            query,
            fragment,
        }
    }
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

/// Speak a URL under the configured URL policy
pub(crate) fn url_to_words(url: &str, config: &Config) -> String {
    let parts = UrlParts::parse(url);
    let mut spoken: Vec<String> = Vec::new();

    if config.url_include_scheme {
        if let Some(scheme) = parts.scheme {
            spoken.push(spell_letters(scheme));
            spoken.push("colon".to_string());
        }
    }

    if parts.host.is_empty() {
        spoken.push(speak_token(url));
    } else {
        spoken.push(speak_domain(parts.host, config));
    }

    if config.url_include_port {
        if let Some(port) = parts.port {
            spoken.push("colon".to_string());
            spoken.push(integer_literal_to_words(port));
        }
    }

    if config.url_policy == UrlPolicy::Full {
        for segment in parts.path.split('/').filter(|s| !s.is_empty()) {
            spoken.push("slash".to_string());
            spoken.push(speak_token(&decode(segment)));
        }

        if config.url_read_query {
            if let Some(query) = parts.query.filter(|q| !q.is_empty()) {
                let pairs: Vec<String> = url::form_urlencoded::parse(query.as_bytes())
                    .map(|(key, value)| {
                        if value.is_empty() {
                            speak_token(&key)
                        } else {
                            format!("{} equals {}", speak_token(&key), speak_token(&value))
                        }
                    })
                    .collect();
                spoken.push("question mark".to_string());
                spoken.push(pairs.join(" and "));
            }
        }

        if config.url_read_fragment {
            if let Some(fragment) = parts.fragment.filter(|f| !f.is_empty()) {
                spoken.push("hash".to_string());
                spoken.push(speak_token(&decode(fragment)));
            }
        }
    }

    normalize_whitespace(&spoken.join(" "))
}

pub(super) fn replace_urls(text: &str, normalizer: &Normalizer<'_>) -> String {
    URL.replace_all(text, |caps: &Captures<'_>| {
        let (core, trailing) = split_trailing_punct(&caps[0]);
        format!("{}{trailing}", url_to_words(core, normalizer.config()))
    })
    .into_owned()
}

/// Speak an email address ("jane.doe42@example.com")
pub(crate) fn email_to_words(email: &str, config: &Config) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };

    let local = split_camel(local)
        .replace('.', " dot ")
        .replace('_', " underscore ")
        .replace('-', " dash ")
        .replace('+', " plus ");
    let local = DIGITS.replace_all(&local, |caps: &Captures<'_>| {
        format!(" {} ", digits_to_words(&caps[0]))
    });

    normalize_whitespace(&format!("{local} at {}", speak_domain(domain, config)))
}

pub(super) fn replace_emails(text: &str, normalizer: &Normalizer<'_>) -> String {
    EMAIL
        .replace_all(text, |caps: &Captures<'_>| {
            email_to_words(&caps[0], normalizer.config())
        })
        .into_owned()
}

/// "C:\Users\me" -> "C drive slash Users slash me"
fn windows_path_to_words(path: &str) -> String {
    let mut chars = path.chars();
    let drive = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or_default();
    let rest = chars.as_str().trim_start_matches(':');

    let mut spoken = vec![format!("{drive} drive")];
    for segment in rest.split('\\').filter(|s| !s.is_empty()) {
        spoken.push("slash".to_string());
        spoken.push(speak_token(segment));
    }
    spoken.join(" ")
}

/// "~/notes/todo.md" -> "home slash notes slash todo dot md"
fn posix_path_to_words(path: &str) -> String {
    let (mut spoken, rest) = if let Some(rest) = path.strip_prefix("~/") {
        (vec!["home".to_string()], rest)
    } else if let Some(rest) = path.strip_prefix('/') {
        (vec!["slash".to_string()], rest)
    } else {
        (Vec::new(), path)
    };

    for segment in rest.split('/').filter(|s| !s.is_empty()) {
        if spoken.last().is_some_and(|last| last != "slash") {
            spoken.push("slash".to_string());
        }
        spoken.push(speak_token(segment));
    }
    spoken.join(" ")
}

pub(super) fn replace_paths(text: &str, normalizer: &Normalizer<'_>) -> String {
    if normalizer.config().path_policy == PathPolicy::Keep {
        return text.to_string();
    }

    let text = WINDOWS_PATH.replace_all(text, |caps: &Captures<'_>| {
        let (core, trailing) = split_trailing_punct(&caps[0]);
        format!("{}{trailing}", windows_path_to_words(core))
    });

    replace_guarded(&text, &POSIX_PATH, starts_word, |caps| {
        let (core, trailing) = split_trailing_punct(&caps[0]);
        format!("{}{trailing}", posix_path_to_words(core))
    })
}

/// Camel case split and underscores dropped ("@JaneDoe_dev" -> "at Jane Doe dev")
fn speak_mention(prefix: &str, name: &str) -> String {
    format!("{prefix} {}", split_camel(name).replace('_', " "))
}

pub(super) fn replace_handles_and_hashtags(text: &str, _normalizer: &Normalizer<'_>) -> String {
    let text = replace_guarded(text, &HANDLE, starts_word, |caps| {
        speak_mention("at", &caps[1])
    });
    replace_guarded(&text, &HASHTAG, starts_word, |caps| {
        speak_mention("hashtag", &caps[1])
    })
}
