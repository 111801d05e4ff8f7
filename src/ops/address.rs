use std::fmt;

use indexmap::IndexMap;

use crate::model::Catalogue;

use super::navigation::Navigator;

/// Query parameter carrying the item uid
pub const NAME_PARAM: &str = "name";
/// Query parameter carrying the 1-based line position
pub const POSITION_PARAM: &str = "id";

/// Ordered query parameters. Parsing keeps the first value of a repeated key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(IndexMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        QueryParams::default()
    }

    /// Parse `a=1&b=2`, with or without a leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = IndexMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params
                .entry(form_decode(key))
                .or_insert_with(|| form_decode(value));
        }
        QueryParams(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", form_encode(key), form_encode(value))?;
        }
        Ok(())
    }
}

/// Address parameters for the current state; empty when nothing is selected
pub fn encode(nav: &Navigator) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(show) = nav.slideshow() {
        params.set(NAME_PARAM, show.item_id());
        params.set(POSITION_PARAM, (show.position() + 1).to_string());
    }
    params
}

/// Where an incoming address points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub item_id: String,
    /// 0-based index, not yet clamped to the item's length
    pub position: i64,
}

/// Resolve an incoming address against the catalogue.
///
/// `None` means "show the catalogue": the name is missing or unknown.
pub fn decode(params: &QueryParams, catalogue: &Catalogue) -> Option<Resolved> {
    let name = params.get(NAME_PARAM).filter(|n| !n.is_empty())?;
    if !catalogue.contains(name) {
        log::info!("address names unknown item {name:?}, showing catalogue");
        return None;
    }
    Some(Resolved {
        item_id: name.to_string(),
        position: parse_position(params.get(POSITION_PARAM)) - 1,
    })
}

/// Read a 1-based position the lenient way links expect: leading digits
/// count (`"3abc"` is 3), and anything missing, non-numeric or below 1 is 1.
pub fn parse_position(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 1 };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 1;
    }
    let value = digits
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    value.max(1)
}

/// The current shareable address (path plus query), e.g.
/// `/read?name=<uid>&id=<1-based line>`.
///
/// Only ever replaced in place, so paging never grows a history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: QueryParams,
}

impl Location {
    /// Split `path?query#fragment`; the fragment is dropped
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        Location {
            path: path.to_string(),
            params: QueryParams::parse(query),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Replace the query in place. Returns `false` if nothing changed.
    pub fn replace(&mut self, params: QueryParams) -> bool {
        if self.params == params {
            return false;
        }
        self.params = params;
        true
    }

    /// Write the navigator's state into the address
    pub fn persist(&mut self, nav: &Navigator) -> bool {
        let changed = self.replace(encode(nav));
        if changed {
            log::debug!("address now {}", self.href());
        }
        changed
    }

    pub fn href(&self) -> String {
        if self.params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.params)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

fn form_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn form_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
