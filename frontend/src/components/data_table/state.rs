//! Sorting and paging state for the data table, kept separate from the
//! rendering so the rules are plain functions.
//!
//! The table instance itself only tracks what the caller does not control:
//! the current page and the active sort in client-side mode. In
//! server-side mode both live in the props and the instance state is
//! ignored.

use std::marker::PhantomData;

use super::props::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The single active sort: one column, one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

pub struct DataTable<T: TableRow + Clone + PartialEq + 'static> {
    pub current_page: usize,
    pub sort: Option<SortSpec>,
    pub _marker: PhantomData<T>,
}

impl<T: TableRow + Clone + PartialEq + 'static> DataTable<T> {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            sort: None,
            _marker: PhantomData,
        }
    }
}

/// Sort cycle for repeated clicks on one header: unsorted → ascending →
/// descending → unsorted. A click on a different column abandons the old
/// column and starts the new one ascending.
pub fn next_sort(current: Option<&SortSpec>, key: &str) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Ascending => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortSpec {
            key: key.to_string(),
            direction: SortDirection::Ascending,
        }),
    }
}

/// Stable sort on the column's string projection. Equal values keep their
/// relative order in both directions, so descending is the exact reverse
/// of ascending only where values differ.
pub fn sort_rows<T: TableRow>(rows: &mut [T], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        let ordering = a.field(&spec.key).cmp(&b.field(&spec.key));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The rows visible on a 1-based page in client-side mode.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1) * page_size;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

/// 1-based inclusive range shown in the "x–y of z" label.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    let start = page.saturating_sub(1) * page_size + 1;
    let end = (page * page_size).min(total);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Row {
        id: i64,
        title: String,
    }

    impl TableRow for Row {
        fn row_id(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, key: &str) -> String {
            match key {
                "id" => self.id.to_string(),
                "title" => self.title.clone(),
                _ => String::new(),
            }
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n as i64)
            .map(|id| Row {
                id,
                title: format!("job {id}"),
            })
            .collect()
    }

    #[test]
    fn sort_cycles_unsorted_asc_desc_unsorted() {
        let first = next_sort(None, "title");
        assert_eq!(
            first,
            Some(SortSpec {
                key: "title".into(),
                direction: SortDirection::Ascending
            })
        );
        let second = next_sort(first.as_ref(), "title");
        assert_eq!(
            second,
            Some(SortSpec {
                key: "title".into(),
                direction: SortDirection::Descending
            })
        );
        let third = next_sort(second.as_ref(), "title");
        assert_eq!(third, None);
        // and back around
        assert_eq!(
            next_sort(third.as_ref(), "title").map(|s| s.direction),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn selecting_another_column_starts_it_ascending() {
        let on_title = next_sort(None, "title");
        let on_id = next_sort(on_title.as_ref(), "id");
        assert_eq!(
            on_id,
            Some(SortSpec {
                key: "id".into(),
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn sorting_is_stable_for_equal_values() {
        let mut data = vec![
            Row { id: 1, title: "b".into() },
            Row { id: 2, title: "a".into() },
            Row { id: 3, title: "a".into() },
        ];
        sort_rows(
            &mut data,
            &SortSpec {
                key: "title".into(),
                direction: SortDirection::Ascending,
            },
        );
        let ids: Vec<i64> = data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        sort_rows(
            &mut data,
            &SortSpec {
                key: "title".into(),
                direction: SortDirection::Descending,
            },
        );
        let ids: Vec<i64> = data.iter().map(|r| r.id).collect();
        // equal titles keep their relative order under descending too
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn last_page_is_ceil_of_total_over_size() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn every_page_holds_min_of_size_and_remainder() {
        let data = rows(25);
        for page in 1..=3 {
            let expected = usize::min(10, 25 - (page - 1) * 10);
            assert_eq!(page_slice(&data, page, 10).len(), expected, "page {page}");
        }
        // past the end renders nothing rather than panicking
        assert!(page_slice(&data, 4, 10).is_empty());
    }

    #[test]
    fn page_slice_starts_at_the_right_offset() {
        let data = rows(25);
        let page2 = page_slice(&data, 2, 10);
        assert_eq!(page2.first().map(|r| r.id), Some(11));
        assert_eq!(page2.last().map(|r| r.id), Some(20));
    }

    #[test]
    fn bounds_label_clamps_to_total() {
        assert_eq!(page_bounds(3, 10, 25), (21, 25));
        assert_eq!(page_bounds(1, 10, 25), (1, 10));
    }
}
