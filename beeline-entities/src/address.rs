/// The two free-text addresses of a distance lookup.
///
/// No constraints are enforced: empty strings are valid values
/// and are passed through unchanged.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressPair {
    pub address1 : String,
    pub address2 : String,
}

impl AddressPair {
    pub fn new(address1: impl Into<String>, address2: impl Into<String>) -> Self {
        Self {
            address1: address1.into(),
            address2: address2.into(),
        }
    }

    /// Both addresses contain at least one character.
    pub fn is_complete(&self) -> bool {
        !self.address1.is_empty() && !self.address2.is_empty()
    }
}
