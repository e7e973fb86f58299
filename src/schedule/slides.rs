use super::model::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePosition {
    pub item: usize,
    pub slide: usize,
}

/// Flat view over every slide in a schedule.
///
/// An item without slides still occupies one (blank) position so it can be
/// shown and stepped over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideIndex {
    positions: Vec<SlidePosition>,
    item_starts: Vec<usize>,
}

impl SlideIndex {
    pub fn build(schedule: &Schedule) -> Self {
        let mut positions = Vec::new();
        let mut item_starts = Vec::with_capacity(schedule.items.len());
        for (item, entry) in schedule.items.iter().enumerate() {
            item_starts.push(positions.len());
            let slide_count = entry.slides.len().max(1);
            positions.extend((0..slide_count).map(|slide| SlidePosition { item, slide }));
        }
        Self {
            positions,
            item_starts,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, flat: usize) -> Option<SlidePosition> {
        self.positions.get(flat).copied()
    }

    /// Flat index of the first slide of `item`.
    pub fn item_start(&self, item: usize) -> Option<usize> {
        self.item_starts.get(item).copied()
    }

    pub fn item_count(&self) -> usize {
        self.item_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::dirty::ItemId;
    use crate::schedule::{ItemKind, Schedule, ScheduleItem};

    use super::{SlideIndex, SlidePosition};

    fn item(id: u64, slides: usize) -> ScheduleItem {
        ScheduleItem {
            id: ItemId::from(id),
            title: format!("item {id}"),
            kind: ItemKind::Song,
            slides: (0..slides).map(|n| format!("slide {n}")).collect(),
        }
    }

    #[test]
    fn flattens_items_and_keeps_empty_items_navigable() {
        let schedule = Schedule {
            title: "Sunday".to_string(),
            description: None,
            items: vec![item(1, 2), item(2, 0), item(3, 3)],
        };
        let index = SlideIndex::build(&schedule);

        assert_eq!(index.len(), 6);
        assert_eq!(index.item_count(), 3);
        assert_eq!(index.item_start(1), Some(2));
        assert_eq!(index.item_start(2), Some(3));
        assert_eq!(index.item_start(3), None);
        assert_eq!(index.position(2), Some(SlidePosition { item: 1, slide: 0 }));
        assert_eq!(index.position(5), Some(SlidePosition { item: 2, slide: 2 }));
        assert_eq!(index.position(6), None);
    }

    #[test]
    fn empty_schedule_has_no_slides() {
        let index = SlideIndex::build(&Schedule::default());
        assert!(index.is_empty());
        assert_eq!(index.position(0), None);
    }
}
