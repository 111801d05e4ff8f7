use crate::model::Line;

/// Which field of a line a block came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Meta,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// Display-ready projection of one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Non-empty fields in display order: meta, primary, secondary
    pub blocks: Vec<Block>,
    pub terminal: bool,
}

impl Fragment {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Project a line into blocks, omitting each empty field independently
pub fn render(line: &Line) -> Fragment {
    let blocks = [
        (BlockKind::Meta, line.meta_text()),
        (BlockKind::Primary, line.primary_text()),
        (BlockKind::Secondary, line.secondary_text()),
    ]
    .into_iter()
    .filter_map(|(kind, text)| {
        text.map(|t| Block {
            kind,
            text: t.to_string(),
        })
    })
    .collect();

    Fragment {
        blocks,
        terminal: line.is_terminal(),
    }
}
