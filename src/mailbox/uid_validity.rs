use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Default)]
#[repr(transparent)]
pub struct UidValidity(u32);

impl UidValidity {
    pub fn new(validity: u32) -> Self {
        Self(validity)
    }
}

impl Display for UidValidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for UidValidity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<&u32> for UidValidity {
    fn from(value: &u32) -> Self {
        Self(*value)
    }
}

impl From<UidValidity> for u32 {
    fn from(value: UidValidity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[fixture]
    fn uid_validity() -> UidValidity {
        UidValidity::new(3)
    }

    #[rstest]
    fn test_uid_validity_displays_correctly(uid_validity: UidValidity) {
        assert_eq!("3", uid_validity.to_string());
    }

    #[rstest]
    fn test_uid_validity_from_and_to_u32_is_consistent(uid_validity: UidValidity) {
        let num = 3;
        let validity = UidValidity::from(num);
        assert_eq!(uid_validity, validity);
        let validity = UidValidity::from(&num);
        assert_eq!(uid_validity, validity);
        assert_eq!(num, u32::from(validity));
    }
}
