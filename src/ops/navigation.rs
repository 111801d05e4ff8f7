use crate::io::repository::{ContentRepository, FetchError};
use crate::model::{Item, Line};

/// The only failure navigation reports. Fetch errors are logged and folded
/// into this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("item not found: {0}")]
    NotFound(String),
}

/// An observable state change, consumed by rendering and by the address
/// synchronizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new item replaced whatever was showing
    Loaded { item_id: String, position: usize },
    /// The position within the current item changed
    Moved { from: usize, to: usize },
    /// Back to the empty state
    Cleared,
}

/// A selection request waiting for its fetch to complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    item_id: String,
    requested: i64,
}

impl Ticket {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }
}

/// A loaded item: content lines plus the terminal line, and the current index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    item_id: String,
    name: String,
    lines: Vec<Line>,
    position: usize,
}

impl Slideshow {
    /// Build from a fetched item, appending the terminal line and clamping
    /// `requested` into range
    pub fn new(item_id: &str, item: Item, requested: i64) -> Self {
        let name = item.display_name().to_string();
        let mut lines = item.content;
        lines.push(Line::terminal());
        let position = clamp_position(requested, lines.len());
        Slideshow {
            item_id: item_id.to_string(),
            name,
            lines,
            position,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Display name (`name_fa`, or the uid)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines including the terminal line (always >= 1)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_line(&self) -> &Line {
        &self.lines[self.position]
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.lines.len()
    }
}

/// Clamp a raw index into `0..len`. `len` must be at least 1.
pub fn clamp_position(raw: i64, len: usize) -> usize {
    let last = i64::try_from(len.saturating_sub(1)).unwrap_or(i64::MAX);
    // Both bounds are non-negative and no larger than len - 1
    raw.clamp(0, last) as usize
}

/// The single owner of navigation state.
///
/// Either empty (catalogue view) or holding one loaded [`Slideshow`], whose
/// lines end with the terminal line and whose position is always a valid
/// index. Every position change goes through [`clamp_position`].
///
/// Selection is split into [`Navigator::begin_select`], which stamps the
/// request with a generation, and [`Navigator::commit`], which applies the
/// fetched item only if no newer request or reset happened in between.
/// [`Navigator::select_item`] does both in one call.
#[derive(Debug, Default)]
pub struct Navigator {
    active: Option<Slideshow>,
    /// Bumped by every selection request and every reset
    generation: u64,
    /// Generation of the outstanding selection, if any
    pending: Option<u64>,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator::default()
    }

    pub fn slideshow(&self) -> Option<&Slideshow> {
        self.active.as_ref()
    }

    pub fn active_item_id(&self) -> Option<&str> {
        self.active.as_ref().map(Slideshow::item_id)
    }

    /// Lines of the active item; empty when nothing is selected
    pub fn lines(&self) -> &[Line] {
        self.active.as_ref().map(Slideshow::lines).unwrap_or(&[])
    }

    pub fn position(&self) -> Option<usize> {
        self.active.as_ref().map(Slideshow::position)
    }

    pub fn current_line(&self) -> Option<&Line> {
        self.active.as_ref().map(Slideshow::current_line)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }

    /// A selection has been requested and not yet committed or superseded
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Fetch and select an item in one step.
    ///
    /// On failure the state is left as it was; the caller decides whether to
    /// fall back to the empty state.
    pub fn select_item(
        &mut self,
        repo: &dyn ContentRepository,
        item_id: &str,
        requested: i64,
    ) -> Result<Transition, NavError> {
        let ticket = self.begin_select(item_id, requested);
        let fetched = repo.item(item_id);
        self.pending = None;
        self.apply(ticket, fetched)
    }

    /// Register a selection request. Any earlier outstanding request becomes
    /// stale.
    pub fn begin_select(&mut self, item_id: &str, requested: i64) -> Ticket {
        self.generation += 1;
        self.pending = Some(self.generation);
        Ticket {
            generation: self.generation,
            item_id: item_id.to_string(),
            requested,
        }
    }

    /// Apply a completed fetch.
    ///
    /// Returns `Ok(None)` when the ticket was superseded by a newer selection
    /// or a reset; the result is dropped and the state is untouched.
    pub fn commit(
        &mut self,
        ticket: Ticket,
        fetched: Result<Item, FetchError>,
    ) -> Result<Option<Transition>, NavError> {
        if self.pending != Some(ticket.generation) {
            log::debug!(
                "discarding stale load of {} (generation {}, latest {})",
                ticket.item_id,
                ticket.generation,
                self.generation
            );
            return Ok(None);
        }
        self.pending = None;
        self.apply(ticket, fetched).map(Some)
    }

    fn apply(
        &mut self,
        ticket: Ticket,
        fetched: Result<Item, FetchError>,
    ) -> Result<Transition, NavError> {
        let item = fetched.map_err(|e| {
            log::warn!("could not load item {}: {e}", ticket.item_id);
            NavError::NotFound(ticket.item_id.clone())
        })?;
        let slideshow = Slideshow::new(&ticket.item_id, item, ticket.requested);
        let transition = Transition::Loaded {
            item_id: ticket.item_id,
            position: slideshow.position,
        };
        self.active = Some(slideshow);
        Ok(transition)
    }

    /// Move to `raw`, clamped into range. No-op (returns `None`) when nothing
    /// is selected or the clamped index equals the current one.
    pub fn go_to(&mut self, raw: i64) -> Option<Transition> {
        let slideshow = self.active.as_mut()?;
        let to = clamp_position(raw, slideshow.lines.len());
        let from = slideshow.position;
        if to == from {
            return None;
        }
        slideshow.position = to;
        Some(Transition::Moved { from, to })
    }

    /// Drop the current item and cancel any outstanding selection
    pub fn reset(&mut self) -> Transition {
        self.active = None;
        self.generation += 1;
        self.pending = None;
        Transition::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::repository::MemoryRepository;
    use crate::model::TERMINAL_TEXT;
    use pretty_assertions::assert_eq;

    fn item(uid: &str, n: usize) -> Item {
        Item {
            uid: uid.into(),
            name_fa: Some(format!("Name {uid}")),
            content: (0..n)
                .map(|i| Line {
                    primary: Some(format!("line {i}")),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn repo() -> MemoryRepository {
        MemoryRepository::new()
            .with_item(item("a1", 2))
            .with_item(item("b2", 5))
            .with_item(item("empty", 0))
    }

    #[test]
    fn starts_empty() {
        let nav = Navigator::new();
        assert!(nav.is_empty());
        assert!(nav.lines().is_empty());
        assert_eq!(nav.active_item_id(), None);
        assert_eq!(nav.position(), None);
        assert!(!nav.is_loading());
    }

    #[test]
    fn select_appends_terminal_line() {
        let mut nav = Navigator::new();
        let t = nav.select_item(&repo(), "a1", 0).unwrap();
        assert_eq!(
            t,
            Transition::Loaded {
                item_id: "a1".into(),
                position: 0
            }
        );
        assert_eq!(nav.lines().len(), 3);
        assert_eq!(nav.position(), Some(0));
        assert!(nav.lines()[2].is_terminal());
        assert_eq!(nav.lines()[2].primary_text(), Some(TERMINAL_TEXT));
        assert!(nav.lines()[..2].iter().all(|l| !l.is_terminal()));
        assert_eq!(nav.slideshow().unwrap().name(), "Name a1");
    }

    #[test]
    fn item_without_content_has_only_terminal_line() {
        let mut nav = Navigator::new();
        nav.select_item(&repo(), "empty", 3).unwrap();
        assert_eq!(nav.lines().len(), 1);
        assert_eq!(nav.position(), Some(0));
        assert!(nav.current_line().unwrap().is_terminal());
    }

    #[test]
    fn select_clamps_requested_position() {
        let repo = repo();
        for n in [0usize, 1, 2, 5] {
            let repo = MemoryRepository::new().with_item(item("x", n));
            let len = n + 1;
            for p in [-10i64, -1, 0, 1, 2, 3, 6, 100, i64::MAX, i64::MIN] {
                let mut nav = Navigator::new();
                nav.select_item(&repo, "x", p).unwrap();
                let pos = nav.position().unwrap();
                assert!(pos < len);
                let expected = p.min(len as i64 - 1).max(0) as usize;
                assert_eq!(pos, expected, "n={n} p={p}");
            }
        }
        let mut nav = Navigator::new();
        nav.select_item(&repo, "a1", 4).unwrap();
        assert_eq!(nav.position(), Some(2));
    }

    #[test]
    fn failed_select_leaves_state_untouched() {
        let repo = repo();
        let mut nav = Navigator::new();
        nav.select_item(&repo, "b2", 3).unwrap();
        let err = nav.select_item(&repo, "zzz", 0).unwrap_err();
        assert_eq!(err, NavError::NotFound("zzz".into()));
        assert_eq!(nav.active_item_id(), Some("b2"));
        assert_eq!(nav.position(), Some(3));
        assert!(!nav.is_loading());
    }

    #[test]
    fn select_replaces_previous_item() {
        let repo = repo();
        let mut nav = Navigator::new();
        nav.select_item(&repo, "b2", 4).unwrap();
        nav.select_item(&repo, "a1", 0).unwrap();
        assert_eq!(nav.active_item_id(), Some("a1"));
        assert_eq!(nav.lines().len(), 3);
        assert_eq!(nav.position(), Some(0));
    }

    #[test]
    fn go_to_clamps_at_both_ends() {
        let mut nav = Navigator::new();
        nav.select_item(&repo(), "a1", 0).unwrap();

        assert_eq!(nav.go_to(-1), None);
        assert_eq!(nav.position(), Some(0));

        assert_eq!(nav.go_to(-5), None);
        assert_eq!(nav.position(), Some(0));

        assert_eq!(nav.go_to(99), Some(Transition::Moved { from: 0, to: 2 }));
        assert_eq!(nav.position(), Some(2));

        // Stepping forward at the end is idempotent
        assert_eq!(nav.go_to(3), None);
        assert_eq!(nav.position(), Some(2));
    }

    #[test]
    fn go_to_current_position_is_noop() {
        let mut nav = Navigator::new();
        nav.select_item(&repo(), "b2", 2).unwrap();
        assert_eq!(nav.go_to(2), None);
        assert_eq!(nav.position(), Some(2));
        assert_eq!(nav.go_to(3), Some(Transition::Moved { from: 2, to: 3 }));
    }

    #[test]
    fn go_to_without_item_is_ignored() {
        let mut nav = Navigator::new();
        assert_eq!(nav.go_to(1), None);
        assert!(nav.is_empty());
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut nav = Navigator::new();
        nav.select_item(&repo(), "b2", 4).unwrap();
        assert_eq!(nav.reset(), Transition::Cleared);
        assert!(nav.is_empty());
        assert!(nav.lines().is_empty());
        assert_eq!(nav.active_item_id(), None);
    }

    #[test]
    fn commit_applies_latest_request() {
        let repo = repo();
        let mut nav = Navigator::new();
        let ticket = nav.begin_select("b2", 1);
        assert!(nav.is_loading());
        assert!(nav.is_empty());
        let t = nav.commit(ticket, repo.item("b2")).unwrap();
        assert_eq!(
            t,
            Some(Transition::Loaded {
                item_id: "b2".into(),
                position: 1
            })
        );
        assert!(!nav.is_loading());
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let repo = repo();
        let mut nav = Navigator::new();
        let slow = nav.begin_select("b2", 0);
        let fast = nav.begin_select("a1", 1);

        nav.commit(fast, repo.item("a1")).unwrap();
        assert_eq!(nav.active_item_id(), Some("a1"));

        // The older request completes late and must not overwrite
        assert_eq!(nav.commit(slow, repo.item("b2")), Ok(None));
        assert_eq!(nav.active_item_id(), Some("a1"));
        assert_eq!(nav.position(), Some(1));
    }

    #[test]
    fn superseded_failure_is_not_reported() {
        let repo = repo();
        let mut nav = Navigator::new();
        let stale = nav.begin_select("zzz", 0);
        let current = nav.begin_select("a1", 0);
        assert_eq!(nav.commit(stale, repo.item("zzz")), Ok(None));
        assert!(nav.is_loading());
        nav.commit(current, repo.item("a1")).unwrap();
        assert_eq!(nav.active_item_id(), Some("a1"));
    }

    #[test]
    fn reset_cancels_pending_fetch() {
        let repo = repo();
        let mut nav = Navigator::new();
        let ticket = nav.begin_select("a1", 0);
        nav.reset();
        assert!(!nav.is_loading());
        assert_eq!(nav.commit(ticket, repo.item("a1")), Ok(None));
        assert!(nav.is_empty());
    }

    #[test]
    fn failed_commit_reports_not_found() {
        let repo = repo();
        let mut nav = Navigator::new();
        let ticket = nav.begin_select("zzz", 0);
        assert_eq!(
            nav.commit(ticket, repo.item("zzz")),
            Err(NavError::NotFound("zzz".into()))
        );
        assert!(!nav.is_loading());
        assert!(nav.is_empty());
    }

    #[test]
    fn clamp_position_bounds() {
        assert_eq!(clamp_position(-1, 3), 0);
        assert_eq!(clamp_position(0, 3), 0);
        assert_eq!(clamp_position(2, 3), 2);
        assert_eq!(clamp_position(3, 3), 2);
        assert_eq!(clamp_position(i64::MAX, 1), 0);
    }
}
