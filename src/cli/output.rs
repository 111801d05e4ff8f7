use serde::Serialize;

use crate::model::{CatalogueEntry, Line};
use crate::ops::navigation::Slideshow;
use crate::ops::slide::{self, BlockKind};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntryJson {
    pub uid: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct LineJson {
    /// 1-based, as used in links
    pub number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
}

#[derive(Serialize)]
pub struct ItemJson {
    pub uid: String,
    pub name: String,
    pub lines: Vec<LineJson>,
}

#[derive(Serialize)]
pub struct LinkJson {
    pub uid: String,
    pub position: usize,
    pub link: String,
}

/// Outcome of resolving a link: an item and line, or the catalogue
#[derive(Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResolveJson {
    Slideshow { uid: String, position: usize },
    Catalogue,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

pub fn entry_to_json(entry: &CatalogueEntry) -> EntryJson {
    EntryJson {
        uid: entry.uid.clone(),
        name: entry.display_name().to_string(),
    }
}

pub fn line_to_json(index: usize, line: &Line) -> LineJson {
    LineJson {
        number: index + 1,
        meta: line.meta_text().map(String::from),
        primary: line.primary_text().map(String::from),
        secondary: line.secondary_text().map(String::from),
        terminal: line.is_terminal(),
    }
}

pub fn slideshow_to_json(show: &Slideshow) -> ItemJson {
    ItemJson {
        uid: show.item_id().to_string(),
        name: show.name().to_string(),
        lines: show
            .lines()
            .iter()
            .enumerate()
            .map(|(i, line)| line_to_json(i, line))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `uid  name` (name omitted when it is just the uid)
pub fn format_entry_line(entry: &CatalogueEntry, uid_width: usize) -> String {
    let name = entry.display_name();
    if name == entry.uid {
        entry.uid.clone()
    } else {
        format!("{:<width$}  {}", entry.uid, name, width = uid_width)
    }
}

/// One numbered block per line, continuation blocks indented under the
/// number. Empty lines print as the bare number.
pub fn format_slideshow(show: &Slideshow) -> Vec<String> {
    let mut out = vec![format!("{} ({})", show.name(), show.item_id()), String::new()];
    let num_width = show.len().to_string().len();
    for (i, line) in show.lines().iter().enumerate() {
        let number = format!("{:>width$}", i + 1, width = num_width);
        let fragment = slide::render(line);
        if fragment.is_empty() {
            out.push(number);
            continue;
        }
        for (j, block) in fragment.blocks.iter().enumerate() {
            let lead = if j == 0 {
                number.clone()
            } else {
                " ".repeat(num_width)
            };
            let marker = match block.kind {
                BlockKind::Meta => "~ ",
                BlockKind::Primary | BlockKind::Secondary => "",
            };
            out.push(format!("{lead}  {marker}{}", block.text));
        }
    }
    out
}

pub fn format_resolved(resolved: &ResolveJson) -> String {
    match resolved {
        ResolveJson::Slideshow { uid, position } => format!("{uid} {position}"),
        ResolveJson::Catalogue => "catalogue".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, TERMINAL_TEXT};
    use pretty_assertions::assert_eq;

    fn show() -> Slideshow {
        let item = Item {
            uid: "a1".into(),
            name_fa: Some("Alef".into()),
            content: vec![
                Line {
                    primary: Some("one".into()),
                    secondary: Some("uno".into()),
                    meta: Some("intro".into()),
                    terminal: false,
                },
                Line::default(),
            ],
        };
        Slideshow::new("a1", item, 0)
    }

    #[test]
    fn slideshow_text() {
        assert_eq!(
            format_slideshow(&show()),
            vec![
                "Alef (a1)".to_string(),
                String::new(),
                "1  ~ intro".into(),
                "   one".into(),
                "   uno".into(),
                "2".into(),
                format!("3  {TERMINAL_TEXT}"),
            ]
        );
    }

    #[test]
    fn slideshow_json_marks_terminal_line() {
        let json = serde_json::to_value(slideshow_to_json(&show())).unwrap();
        assert_eq!(json["lines"][0]["meta"], "intro");
        assert!(json["lines"][1].get("primary").is_none());
        assert!(json["lines"][1].get("terminal").is_none());
        assert_eq!(json["lines"][2]["terminal"], true);
        assert_eq!(json["lines"][2]["number"], 3);
    }

    #[test]
    fn entry_line_skips_redundant_name() {
        let named = CatalogueEntry {
            uid: "a1".into(),
            name_fa: Some("Alef".into()),
        };
        let bare = CatalogueEntry {
            uid: "b2".into(),
            name_fa: None,
        };
        assert_eq!(format_entry_line(&named, 4), "a1    Alef");
        assert_eq!(format_entry_line(&bare, 4), "b2");
    }

    #[test]
    fn resolve_json_shape() {
        let hit = ResolveJson::Slideshow {
            uid: "a1".into(),
            position: 2,
        };
        assert_eq!(
            serde_json::to_string(&hit).unwrap(),
            r#"{"view":"slideshow","uid":"a1","position":2}"#
        );
        assert_eq!(
            serde_json::to_string(&ResolveJson::Catalogue).unwrap(),
            r#"{"view":"catalogue"}"#
        );
        assert_eq!(format_resolved(&hit), "a1 2");
    }
}
