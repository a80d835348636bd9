//! Column partitioning for the board view.

use std::collections::HashMap;

/// Anything that sits in a category column.
pub trait Categorized {
    fn category_key(&self) -> &str;
}

/// Items grouped into one column per active category key.
#[derive(Debug)]
pub struct BoardPartition<'a, T> {
    /// `(key, items)` in the order the keys were given.
    pub columns: Vec<(String, Vec<&'a T>)>,
    /// Items whose key is not an active category.
    pub unassigned: Vec<&'a T>,
}

/// Group `items` by category key. Items keep their relative order.
pub fn partition_by_category<'a, T: Categorized>(
    active_keys: &[String],
    items: &'a [T],
) -> BoardPartition<'a, T> {
    let index: HashMap<&str, usize> = active_keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.as_str(), i))
        .collect();

    let mut columns: Vec<(String, Vec<&T>)> =
        active_keys.iter().map(|k| (k.clone(), Vec::new())).collect();
    let mut unassigned = Vec::new();

    for item in items {
        match index.get(item.category_key()) {
            Some(&i) => columns[i].1.push(item),
            None => unassigned.push(item),
        }
    }

    BoardPartition {
        columns,
        unassigned,
    }
}
