use crate::models::OptionId;

/// Number of blanks every question has.
pub const BLANK_COUNT: usize = 4;

/// Chosen options per question, in blank order.
///
/// A question's buffer is frozen once it has been submitted; later
/// selections and removals against it are ignored.
#[derive(Debug, Clone, Default)]
pub struct SelectionBuffer {
    slots: Vec<Vec<OptionId>>,
    frozen: Vec<bool>,
}

impl SelectionBuffer {
    pub fn new(question_count: usize) -> Self {
        Self {
            slots: vec![Vec::with_capacity(BLANK_COUNT); question_count],
            frozen: vec![false; question_count],
        }
    }

    /// Place `option` into the next free blank. Returns whether the buffer
    /// changed; a full, frozen, or already-containing buffer is left as is.
    pub fn select(&mut self, question: usize, option: OptionId) -> bool {
        if self.is_frozen(question) {
            return false;
        }
        let Some(slots) = self.slots.get_mut(question) else {
            return false;
        };
        if slots.len() >= BLANK_COUNT || slots.contains(&option) {
            return false;
        }
        slots.push(option);
        true
    }

    /// Clear blank `slot`, shifting later blanks left.
    pub fn unselect(&mut self, question: usize, slot: usize) -> Option<OptionId> {
        if self.is_frozen(question) {
            return None;
        }
        let slots = self.slots.get_mut(question)?;
        if slot >= slots.len() {
            return None;
        }
        Some(slots.remove(slot))
    }

    pub fn current(&self, question: usize) -> &[OptionId] {
        self.slots.get(question).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, question: usize, option: OptionId) -> bool {
        self.current(question).contains(&option)
    }

    pub fn is_full(&self, question: usize) -> bool {
        self.current(question).len() == BLANK_COUNT
    }

    pub fn freeze(&mut self, question: usize) {
        if let Some(frozen) = self.frozen.get_mut(question) {
            *frozen = true;
        }
    }

    pub fn is_frozen(&self, question: usize) -> bool {
        self.frozen.get(question).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<OptionId> {
        raw.iter().copied().map(OptionId).collect()
    }

    #[test]
    fn test_select_appends_in_order() {
        let mut buffer = SelectionBuffer::new(2);
        assert!(buffer.select(0, OptionId(3)));
        assert!(buffer.select(0, OptionId(1)));

        assert_eq!(buffer.current(0), ids(&[3, 1]).as_slice());
        assert!(buffer.current(1).is_empty());
    }

    #[test]
    fn test_fifth_select_is_ignored() {
        let mut buffer = SelectionBuffer::new(1);
        for i in 0..BLANK_COUNT {
            assert!(buffer.select(0, OptionId(i)));
        }

        assert!(!buffer.select(0, OptionId(4)));
        assert_eq!(buffer.current(0), ids(&[0, 1, 2, 3]).as_slice());
        assert!(buffer.is_full(0));
    }

    #[test]
    fn test_same_option_is_placed_once() {
        let mut buffer = SelectionBuffer::new(1);
        assert!(buffer.select(0, OptionId(2)));
        assert!(!buffer.select(0, OptionId(2)));
        assert_eq!(buffer.current(0).len(), 1);
    }

    #[test]
    fn test_unselect_compacts() {
        let mut buffer = SelectionBuffer::new(1);
        for i in [0, 1, 2, 3] {
            buffer.select(0, OptionId(i));
        }

        assert_eq!(buffer.unselect(0, 1), Some(OptionId(1)));
        assert_eq!(buffer.current(0), ids(&[0, 2, 3]).as_slice());
        assert_eq!(buffer.unselect(0, 3), None);
    }

    #[test]
    fn test_unselect_then_select_restores_length() {
        let mut buffer = SelectionBuffer::new(1);
        for i in [4, 2, 0] {
            buffer.select(0, OptionId(i));
        }
        let before = buffer.current(0).len();

        buffer.unselect(0, 0);
        assert!(buffer.select(0, OptionId(4)));

        assert_eq!(buffer.current(0).len(), before);
        assert_eq!(buffer.current(0).last(), Some(&OptionId(4)));
    }

    #[test]
    fn test_frozen_buffer_rejects_changes() {
        let mut buffer = SelectionBuffer::new(1);
        buffer.select(0, OptionId(0));
        buffer.freeze(0);

        assert!(!buffer.select(0, OptionId(1)));
        assert_eq!(buffer.unselect(0, 0), None);
        assert_eq!(buffer.current(0), ids(&[0]).as_slice());
    }

    #[test]
    fn test_out_of_range_question_is_noop() {
        let mut buffer = SelectionBuffer::new(1);
        assert!(!buffer.select(5, OptionId(0)));
        assert_eq!(buffer.unselect(5, 0), None);
        assert!(buffer.current(5).is_empty());
    }
}
