/// The record highlighted in a list, feeding the detail panel.
///
/// Holds a copy of the record, so narrowing the list afterwards leaves the
/// panel untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Clone> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was selected before.
    pub fn select(&mut self, record: &T) {
        self.current = Some(record.clone());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    pub fn is_selected(&self, record: &T) -> bool {
        self.current.as_ref() == Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_replaces_on_select() {
        let mut sel = Selection::new();
        assert!(sel.is_empty());
        sel.select(&1);
        sel.select(&2);
        assert_eq!(sel.get(), Some(&2));
        assert!(!sel.is_selected(&1));
        sel.clear();
        assert!(sel.get().is_none());
    }
}
