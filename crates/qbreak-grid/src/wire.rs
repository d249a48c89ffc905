//! Wire identifiers used by compiled operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a wire (one qubit's timeline) in a compiled operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl WireId {
    /// The wire index as a `usize`, suitable for indexing grids and state bits.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

impl From<usize> for WireId {
    fn from(id: usize) -> Self {
        WireId(u32::try_from(id).expect("WireId overflow: exceeds u32::MAX"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_display() {
        assert_eq!(format!("{}", WireId(3)), "q3");
    }

    #[test]
    fn test_wire_index() {
        assert_eq!(WireId::from(4usize).index(), 4);
        assert_eq!(WireId::from(7u32), WireId(7));
    }
}
