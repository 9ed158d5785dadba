//! Plot Collection
//!
//! Ordered membership of the chart widgets on the dashboard. Ids come from a
//! monotonic counter and are never handed out twice, so an id doubles as the
//! widget's render-target key.

use std::fmt;

/// Identity of one chart widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotId(u32);

impl PlotId {
    pub fn get(self) -> u32 {
        self.0
    }

    /// DOM id of the element the widget draws into
    pub fn render_target(self) -> String {
        format!("gekko-plot-{}", self.0)
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One live chart widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotEntry {
    pub id: PlotId,
    pub render_target: String,
}

impl PlotEntry {
    fn new(id: PlotId) -> Self {
        Self {
            id,
            render_target: id.render_target(),
        }
    }
}

/// Ordered set of chart widgets; insertion order is display order.
///
/// Never empty: it starts with one entry and refuses to drop the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotCollection {
    entries: Vec<PlotEntry>,
    next_id: u32,
}

impl Default for PlotCollection {
    fn default() -> Self {
        Self::initialize()
    }
}

impl PlotCollection {
    /// One default entry with id 1; the next id handed out is 2
    pub fn initialize() -> Self {
        Self {
            entries: vec![PlotEntry::new(PlotId(1))],
            next_id: 2,
        }
    }

    /// Append a new entry and return its id
    pub fn add(&mut self) -> PlotId {
        let id = PlotId(self.next_id);
        self.next_id += 1;
        self.entries.push(PlotEntry::new(id));
        id
    }

    /// Strike `id` from the membership.
    ///
    /// Returns `false` without changing anything when the id is not a member
    /// or is the only remaining entry.
    pub fn remove(&mut self, id: PlotId) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Whether remove controls should be shown
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in display order
    pub fn entries(&self) -> &[PlotEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_ids(plots: &PlotCollection) -> Vec<PlotId> {
        plots.entries().iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn test_initialize() {
        let plots = PlotCollection::initialize();
        assert_eq!(member_ids(&plots), vec![PlotId(1)]);
        assert_eq!(plots.entries()[0].render_target, "gekko-plot-1");
        assert!(!plots.can_remove());
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut plots = PlotCollection::initialize();
        for _ in 0..5 {
            plots.add();
        }
        let ids: Vec<u32> = member_ids(&plots).into_iter().map(PlotId::get).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut plots = PlotCollection::initialize();
        let two = plots.add();
        let three = plots.add();
        assert!(plots.remove(three));
        assert!(plots.remove(two));

        let four = plots.add();
        assert_eq!(four.get(), 4);
        let five = plots.add();
        assert_eq!(member_ids(&plots), vec![PlotId(1), four, five]);

        let ids = member_ids(&plots);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut plots = PlotCollection::initialize();
        plots.add();
        plots.add();
        let before = plots.clone();

        assert!(!plots.remove(PlotId(42)));
        assert_eq!(plots, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut plots = PlotCollection::initialize();
        let two = plots.add();
        let three = plots.add();
        plots.remove(two);
        assert_eq!(member_ids(&plots), vec![PlotId(1), three]);
    }

    #[test]
    fn test_remove_control_visibility() {
        let mut plots = PlotCollection::initialize();
        let two = plots.add();
        assert!(plots.can_remove());

        plots.remove(PlotId(1));
        assert_eq!(member_ids(&plots), vec![two]);
        assert!(!plots.can_remove());

        plots.add();
        assert!(plots.can_remove());
        assert_eq!(plots.len(), 2);
    }

    #[test]
    fn test_last_entry_cannot_be_removed() {
        let mut plots = PlotCollection::initialize();
        assert!(!plots.remove(PlotId(1)));
        assert_eq!(plots.len(), 1);
        assert!(!plots.is_empty());
        assert_eq!(member_ids(&plots), vec![PlotId(1)]);
    }
}
