//! Summary numbers over a whole record store.
//!
//! Stat cards never look at the search box: they are always computed from the
//! full store and recomputed on every read.

/// Records carrying a closed status tag.
pub trait HasStatus {
    type Status: PartialEq + Copy;

    fn status(&self) -> Self::Status;
}

pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

pub fn count_by_status<T: HasStatus>(items: &[T], status: T::Status) -> usize {
    count_where(items, |item| item.status() == status)
}

pub fn sum_by<T>(items: &[T], measure: impl Fn(&T) -> u64) -> u64 {
    items.iter().map(measure).sum()
}

/// Share of `part` in `whole` as a percentage, `0.0` when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum State {
        On,
        Off,
    }

    struct Item(State, u64);

    impl HasStatus for Item {
        type Status = State;
        fn status(&self) -> State {
            self.0
        }
    }

    #[test]
    fn counts_and_sums() {
        let items = vec![Item(State::On, 3), Item(State::Off, 4), Item(State::On, 10)];
        assert_eq!(count_by_status(&items, State::On), 2);
        assert_eq!(count_by_status(&items, State::Off), 1);
        assert_eq!(sum_by(&items, |i| i.1), 17);
        assert_eq!(count_where(&items, |i| i.1 > 3), 2);
    }

    #[test]
    fn empty_store() {
        let items: Vec<Item> = Vec::new();
        assert_eq!(count_by_status(&items, State::On), 0);
        assert_eq!(sum_by(&items, |i| i.1), 0);
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert_eq!(percentage(5, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
