use std::fmt::Display;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModSeq(u64);

impl ModSeq {
    pub fn new(modseq: u64) -> Self {
        Self(modseq)
    }
}

impl From<u64> for ModSeq {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<&u64> for ModSeq {
    fn from(value: &u64) -> Self {
        Self(*value)
    }
}

impl From<ModSeq> for u64 {
    fn from(value: ModSeq) -> Self {
        value.0
    }
}

impl From<&ModSeq> for u64 {
    fn from(value: &ModSeq) -> Self {
        value.0
    }
}

impl Display for ModSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_from_and_into_u64_are_consistent() {
        let expected = 715_194_045_007u64;
        let expected_ref = &715_194_045_007u64;
        let modseq = ModSeq::from(expected);
        let modseq_ref = ModSeq::from(expected_ref);
        assert_eq!(modseq, modseq_ref);
        assert_eq!(expected, u64::from(modseq));
        assert_eq!(expected, u64::from(&modseq));
    }

    #[rstest]
    fn test_modseq_orders_numerically() {
        assert!(ModSeq::new(9) < ModSeq::new(10));
    }
}
