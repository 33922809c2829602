//! Modal address prompt.
//!
//! The command blocks on a two-field address form before touching the
//! analysis database. In the host this is a real dialog; headless callers
//! supply a [`FixedRange`] or [`Cancelled`] provider. Parsing of typed
//! input follows the host's address-field convention via
//! [`Address::parse`].

use crate::core::address::Address;

/// A blocking two-field address-input prompt.
pub trait FormInput {
    /// Present the form. Returns the two addresses, or `None` if the user
    /// cancelled.
    fn address_range(
        &mut self,
        title: &str,
        start_prompt: &str,
        end_prompt: &str,
    ) -> Option<(Address, Address)>;
}

/// A prompt that always answers with a preset range.
#[derive(Debug, Clone, Copy)]
pub struct FixedRange {
    /// Value returned for the start field
    pub start: Address,
    /// Value returned for the end field
    pub end: Address,
}

impl FixedRange {
    /// Create a provider answering with `[start, end]`.
    pub fn new(start: Address, end: Address) -> Self {
        Self { start, end }
    }
}

impl FormInput for FixedRange {
    fn address_range(
        &mut self,
        _title: &str,
        _start_prompt: &str,
        _end_prompt: &str,
    ) -> Option<(Address, Address)> {
        Some((self.start, self.end))
    }
}

/// A prompt the user always cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cancelled;

impl FormInput for Cancelled {
    fn address_range(
        &mut self,
        _title: &str,
        _start_prompt: &str,
        _end_prompt: &str,
    ) -> Option<(Address, Address)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_range_answers() {
        let mut form = FixedRange::new(Address::new(0x10), Address::new(0x18));
        assert_eq!(
            form.address_range("Reveal stack characters", "Start address", "End address"),
            Some((Address::new(0x10), Address::new(0x18)))
        );
    }

    #[test]
    fn test_cancelled_answers_none() {
        let mut form = Cancelled;
        assert_eq!(form.address_range("t", "s", "e"), None);
    }
}
