//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

/// 作品唯一标识
///
/// 对应青空文库的作品编号，由外部采集器分配，本系统只读
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(i64);

impl WorkId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for WorkId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_id_display() {
        assert_eq!(WorkId::new(42).to_string(), "42");
    }

    #[test]
    fn test_work_id_value() {
        assert_eq!(WorkId::from(7).value(), 7);
    }
}
