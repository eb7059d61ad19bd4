//! Drop position calculation for drag-and-drop card moves.

/// Vertical extent of a rendered card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub top: f64,
    pub height: f64,
}

impl Slot {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Returns the index at which a dragged card should be inserted.
///
/// `slots` are the cards currently rendered in the target list, in list order,
/// with the dragged card itself left out. The result is the index of the card
/// whose midpoint is the nearest one below `pointer_y`, or `slots.len()` when
/// the pointer is at or below every midpoint.
///
/// # Examples
/// ```
/// use kanboard_core::domain::placement::{insertion_index, Slot};
///
/// let slots = [Slot::new(0.0, 40.0), Slot::new(50.0, 40.0)];
/// assert_eq!(insertion_index(&slots, 10.0), 0);
/// assert_eq!(insertion_index(&slots, 30.0), 1);
/// assert_eq!(insertion_index(&slots, 200.0), 2);
/// ```
pub fn insertion_index(slots: &[Slot], pointer_y: f64) -> usize {
    let mut closest: Option<(usize, f64)> = None;

    for (index, slot) in slots.iter().enumerate() {
        let offset = pointer_y - slot.midpoint();
        if offset < 0.0 && closest.map_or(true, |(_, best)| offset > best) {
            closest = Some((index, offset));
        }
    }

    closest.map_or(slots.len(), |(index, _)| index)
}
