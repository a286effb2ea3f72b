use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<F> {
    pub key: F,
    pub direction: SortDirection,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl<F: Copy + PartialEq> SortConfig<F> {
    pub fn ascending(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Header click: the same key flips direction, a new key starts ascending.
    pub fn toggle(current: Option<Self>, key: F) -> Self {
        match current {
            Some(config) if config.key == key => Self {
                key,
                direction: config.direction.toggled(),
            },
            _ => Self::ascending(key),
        }
    }
}
