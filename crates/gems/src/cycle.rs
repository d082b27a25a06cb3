/// A non-empty list of entries with one selected entry. Moving the selection past either end
/// wraps around.
#[derive(Clone, Debug)]
pub struct Cycle<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Cycle<T> {
    pub fn from_iter(entries: impl IntoIterator<Item = T>) -> Self {
        let items = entries.into_iter().collect::<Vec<_>>();
        assert!(!items.is_empty(), "a cycle needs at least one entry");
        Self { items, index: 0 }
    }

    pub fn cycle(&mut self, direction: CycleDirection) {
        let len = self.items.len();
        self.index = match direction {
            CycleDirection::Forward => (self.index + 1) % len,
            CycleDirection::Backward => (self.index + len - 1) % len,
        };
    }

    pub fn selection(&self) -> &T {
        &self.items[self.index]
    }

    pub fn selection_mut(&mut self) -> &mut T {
        &mut self.items[self.index]
    }

    pub fn selection_index(&self) -> usize {
        self.index
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut c = Cycle::from_iter(["a", "b", "c"]);
        assert_eq!(*c.selection(), "a");

        c.cycle(CycleDirection::Backward);
        assert_eq!(*c.selection(), "c");

        c.cycle(CycleDirection::Forward);
        c.cycle(CycleDirection::Forward);
        assert_eq!(c.selection_index(), 1);
    }

    #[test]
    fn test_cycle_selection_mut() {
        let mut c = Cycle::from_iter([String::from("1"), String::from("2")]);
        c.cycle(CycleDirection::Forward);
        c.selection_mut().push('5');
        assert_eq!(c.iter().cloned().collect::<Vec<_>>(), vec!["1", "25"]);
    }
}
