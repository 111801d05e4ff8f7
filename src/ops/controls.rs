use super::navigation::Slideshow;

/// A request from a button, key or the range control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    StepBackward,
    StepForward,
    /// Absolute jump to a range-control value (inverted: `max` is index 0)
    Jump(usize),
    /// Open an item at its first line
    Select(String),
    /// Back to the catalogue
    Home,
}

impl Trigger {
    /// Raw target index for the positional triggers, before clamping
    pub fn target(&self, show: &Slideshow) -> Option<i64> {
        let position = to_i64(show.position());
        match self {
            Trigger::StepBackward => Some(position - 1),
            Trigger::StepForward => Some(position + 1),
            Trigger::Jump(value) => Some(RangeControl::for_slideshow(show).index_for_value(*value)),
            Trigger::Select(_) | Trigger::Home => None,
        }
    }
}

/// Slider over `min..=max` whose value runs opposite to the line index, so
/// the first line sits at the high end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeControl {
    pub min: usize,
    pub max: usize,
    pub value: usize,
}

impl RangeControl {
    pub fn for_slideshow(show: &Slideshow) -> Self {
        RangeControl {
            min: 1,
            max: show.len(),
            value: show.len() - show.position(),
        }
    }

    pub fn index_for_value(&self, value: usize) -> i64 {
        to_i64(self.max) - to_i64(value)
    }

    /// Value under `column` of a track `width` cells wide, `min` at the left
    pub fn value_at(&self, column: u16, width: u16) -> usize {
        if width <= 1 || self.max <= self.min {
            return self.max;
        }
        let column = usize::from(column.min(width - 1));
        let span = self.max - self.min;
        let steps = usize::from(width - 1);
        self.min + (column * span + steps / 2) / steps
    }

    /// Column of the handle on a track `width` cells wide
    pub fn handle_column(&self, width: u16) -> u16 {
        if width <= 1 || self.max <= self.min {
            return width.saturating_sub(1);
        }
        let span = self.max - self.min;
        let steps = usize::from(width - 1);
        let column = ((self.value - self.min) * steps + span / 2) / span;
        u16::try_from(column).unwrap_or(width - 1)
    }
}

/// Counter, button and slider state for the current line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicators {
    /// `"{position + 1} / {len}"`
    pub counter: String,
    pub can_step_backward: bool,
    pub can_step_forward: bool,
    pub range: RangeControl,
}

pub fn indicators(show: &Slideshow) -> Indicators {
    Indicators {
        counter: format!("{} / {}", show.position() + 1, show.len()),
        can_step_backward: !show.is_first(),
        can_step_forward: !show.is_last(),
        range: RangeControl::for_slideshow(show),
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
