use std::collections::HashMap;

use crate::records::TransactionRecord;

/// Which input fields form the series key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// Bills-view presentation: description alone.
    Description,
    /// Batch-file presentation: description plus category.
    DescriptionCategory,
}

impl GroupKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::DescriptionCategory => "description+category",
        }
    }

    pub fn of(self, record: &TransactionRecord) -> String {
        match self {
            Self::Description => record.description.clone(),
            Self::DescriptionCategory => {
                format!("{}|{}", record.description, record.category)
            }
        }
    }
}

/// A non-owning run of rows sharing one key. Rows keep input order.
#[derive(Debug)]
pub struct KeyedGroup<'a, T> {
    pub key: String,
    pub rows: Vec<&'a T>,
}

pub type TransactionGroup<'a> = KeyedGroup<'a, TransactionRecord>;

/// Partitions `rows` by `key_of`, preserving first-seen key order and
/// insertion order within each group. Every row lands in exactly one group.
pub fn group_by<'a, T, F>(rows: &'a [T], key_of: F) -> Vec<KeyedGroup<'a, T>>
where
    F: Fn(&T) -> String,
{
    let mut groups: Vec<KeyedGroup<'a, T>> = Vec::new();
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = key_of(row);
        let slot = match slot_by_key.get(&key) {
            Some(index) => *index,
            None => {
                groups.push(KeyedGroup {
                    key: key.clone(),
                    rows: Vec::new(),
                });
                slot_by_key.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].rows.push(row);
    }

    groups
}

pub fn group_records(records: &[TransactionRecord], key: GroupKey) -> Vec<TransactionGroup<'_>> {
    group_by(records, |record| key.of(record))
}
