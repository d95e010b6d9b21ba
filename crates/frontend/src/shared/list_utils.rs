/// List page helpers shared by the tables.
use contracts::shared::sort::SortState;

/// CSS class of a sortable header's indicator.
pub fn get_sort_class<C: Copy + PartialEq>(sort: &SortState<C>, column: C) -> &'static str {
    if sort.is_sorted_by(column) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Browser confirmation dialog; `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `2024-05-01T09:30:00` style timestamps cut to the minute for table cells.
pub fn short_timestamp(value: &str) -> String {
    let trimmed: String = value.chars().take(16).collect();
    trimmed.replace('T', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::sort::SortDirection;

    #[test]
    fn test_sort_class_marks_active_column() {
        let sort = SortState {
            column: Some(1u8),
            direction: SortDirection::Asc,
        };
        assert_eq!(get_sort_class(&sort, 1), "sort-icon active");
        assert_eq!(get_sort_class(&sort, 2), "sort-icon");
    }

    #[test]
    fn test_short_timestamp() {
        assert_eq!(short_timestamp("2024-05-01T09:30:12.123"), "2024-05-01 09:30");
        assert_eq!(short_timestamp(""), "");
    }
}
