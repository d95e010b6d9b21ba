use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Single sort key plus direction for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<C> {
    pub column: Option<C>,
    pub direction: SortDirection,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Asc,
        }
    }
}

impl<C: Copy + PartialEq> SortState<C> {
    /// Same column flips the direction; a new column starts ascending.
    pub fn toggle(&mut self, column: C) -> SortDirection {
        self.direction = if self.column == Some(column) {
            self.direction.flipped()
        } else {
            SortDirection::Asc
        };
        self.column = Some(column);
        self.direction
    }

    pub fn is_sorted_by(&self, column: C) -> bool {
        self.column == Some(column)
    }

    /// Header indicator: ▲/▼ for the active column, ⇅ otherwise.
    pub fn indicator(&self, column: C) -> &'static str {
        match (self.is_sorted_by(column), self.direction) {
            (true, SortDirection::Asc) => " ▲",
            (true, SortDirection::Desc) => " ▼",
            (false, _) => " ⇅",
        }
    }
}

/// Rows that can be ordered by one of their columns.
pub trait Sortable {
    type Column: Copy;

    fn compare_by_column(&self, other: &Self, column: Self::Column) -> Ordering;
}

/// Stable sort: rows with equal keys keep their relative order in both directions.
pub fn sort_list<T: Sortable>(items: &mut [T], column: T::Column, direction: SortDirection) {
    items.sort_by(|a, b| direction.apply(a.compare_by_column(b, column)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u8);

    impl Sortable for Row {
        type Column = ();

        fn compare_by_column(&self, other: &Self, _: ()) -> Ordering {
            self.0.cmp(other.0)
        }
    }

    #[test]
    fn test_toggle() {
        let mut state: SortState<u8> = SortState::default();
        assert_eq!(state.toggle(1), SortDirection::Asc);
        assert_eq!(state.toggle(1), SortDirection::Desc);
        assert_eq!(state.toggle(2), SortDirection::Asc);
        assert_eq!(state.indicator(2), " ▲");
        assert_eq!(state.indicator(1), " ⇅");
    }

    #[test]
    fn test_stable_in_both_directions() {
        let mut rows = vec![Row("b", 0), Row("a", 1), Row("b", 2), Row("a", 3)];
        sort_list(&mut rows, (), SortDirection::Asc);
        assert_eq!(rows, vec![Row("a", 1), Row("a", 3), Row("b", 0), Row("b", 2)]);
        sort_list(&mut rows, (), SortDirection::Desc);
        assert_eq!(rows, vec![Row("b", 0), Row("b", 2), Row("a", 1), Row("a", 3)]);
    }
}
