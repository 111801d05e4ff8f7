use serde::{Deserialize, Serialize};

/// Primary-script text of the synthetic closing slide.
pub const TERMINAL_TEXT: &str = "التماس دعا";

/// One displayable unit of an item.
///
/// Every text field is independently optional. A line with no fields
/// renders as an empty slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Primary-script text (`ar` in the content files)
    #[serde(rename = "ar", default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary-script text, usually a translation (`fa`)
    #[serde(rename = "fa", default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Annotation shown above the text (`m`)
    #[serde(rename = "m", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    /// Set only on the synthetic terminal line; never read from or written to content files
    #[serde(skip)]
    pub terminal: bool,
}

impl Line {
    /// The sentinel appended after the last content line of every item.
    pub fn terminal() -> Self {
        Line {
            primary: Some(TERMINAL_TEXT.to_string()),
            secondary: None,
            meta: None,
            terminal: true,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Primary text, treating an empty string as absent
    pub fn primary_text(&self) -> Option<&str> {
        non_empty(&self.primary)
    }

    pub fn secondary_text(&self) -> Option<&str> {
        non_empty(&self.secondary)
    }

    pub fn meta_text(&self) -> Option<&str> {
        non_empty(&self.meta)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
