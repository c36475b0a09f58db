/// Unbounded LIFO buffer of deleted values.
///
/// Entries are owned. Nothing outside the stack can observe or mutate a
/// value while it is stacked.
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    entries: Vec<T>,
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UndoStack<T> {
    pub fn new() -> Self {
        UndoStack {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.entries.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
