//! Feature id columns.
//!
//! Id vectors keep their most compact decoded form: constant and sequential
//! id columns stay O(1) in memory instead of being expanded. Ids are exposed
//! as `u64` regardless of the column's wire width.

#[derive(Debug, Clone, PartialEq)]
enum IdValues {
    U32(Vec<u32>),
    U64(Vec<u64>),
    Const { value: u64, len: usize },
    Sequence { base: i64, delta: i64, len: usize },
    /// Nullable columns expanded against their present stream.
    Dense(Vec<Option<u64>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdColumn {
    values: IdValues,
}

impl IdColumn {
    pub fn from_u32s(values: Vec<u32>) -> Self {
        Self {
            values: IdValues::U32(values),
        }
    }

    pub fn from_u64s(values: Vec<u64>) -> Self {
        Self {
            values: IdValues::U64(values),
        }
    }

    pub fn constant(value: u64, len: usize) -> Self {
        Self {
            values: IdValues::Const { value, len },
        }
    }

    /// Ids forming `base + index * delta`.
    pub fn sequence(base: i64, delta: i64, len: usize) -> Self {
        Self {
            values: IdValues::Sequence { base, delta, len },
        }
    }

    pub fn dense(values: Vec<Option<u64>>) -> Self {
        Self {
            values: IdValues::Dense(values),
        }
    }

    pub fn len(&self) -> usize {
        match &self.values {
            IdValues::U32(v) => v.len(),
            IdValues::U64(v) => v.len(),
            IdValues::Const { len, .. } => *len,
            IdValues::Sequence { len, .. } => *len,
            IdValues::Dense(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id of feature `index`, or `None` when null or out of range.
    pub fn value(&self, index: usize) -> Option<u64> {
        match &self.values {
            IdValues::U32(v) => v.get(index).map(|&id| u64::from(id)),
            IdValues::U64(v) => v.get(index).copied(),
            IdValues::Const { value, len } => (index < *len).then_some(*value),
            IdValues::Sequence { base, delta, len } => (index < *len)
                .then(|| base.wrapping_add(delta.wrapping_mul(index as i64)) as u64),
            IdValues::Dense(v) => *v.get(index)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_forms() {
        let constant = IdColumn::constant(7, 3);
        assert_eq!(constant.value(2), Some(7));
        assert_eq!(constant.value(3), None);

        let sequence = IdColumn::sequence(100, 2, 4);
        assert_eq!(sequence.value(0), Some(100));
        assert_eq!(sequence.value(3), Some(106));
        assert_eq!(sequence.value(4), None);
    }

    #[test]
    fn nullable_ids() {
        let column = IdColumn::dense(vec![Some(1), None, Some(3)]);
        assert_eq!(column.value(0), Some(1));
        assert_eq!(column.value(1), None);
        assert_eq!(column.value(2), Some(3));
    }
}
