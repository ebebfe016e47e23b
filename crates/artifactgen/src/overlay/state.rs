/// Ordered set of selected block indices.
///
/// Order is pick order, which matters downstream: in test-case mode the
/// first pick carries the ID and the second the title, and precondition
/// text is concatenated in selection order. A block index appears at most
/// once no matter how often it is re-picked or re-intersected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    order: Vec<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block index if absent. Returns `false` for duplicates.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.order.contains(&index) {
            return false;
        }
        self.order.push(index);
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.order.contains(&index)
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    /// Replaces the whole selection at once (drag semantics: each drag
    /// rectangle recomputes the selection from scratch).
    pub fn replace(&mut self, indices: Vec<usize>) {
        self.order.clear();
        for index in indices {
            if !self.order.contains(&index) {
                self.order.push(index);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected indices in pick order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }
}
