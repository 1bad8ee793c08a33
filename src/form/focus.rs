use crate::form::field::FieldName;

pub const FORM_TEST_ID: &str = "movie-form";
pub const SUBMIT_TEST_ID: &str = "submit-button";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    Submit,
}

impl FocusTarget {
    pub fn test_id(self) -> &'static str {
        match self {
            Self::Field(field) => field.test_id(),
            Self::Submit => SUBMIT_TEST_ID,
        }
    }

    pub fn from_test_id(id: &str) -> Option<Self> {
        if id == SUBMIT_TEST_ID {
            return Some(Self::Submit);
        }
        FieldName::from_test_id(id).map(Self::Field)
    }

    pub fn field(self) -> Option<FieldName> {
        match self {
            Self::Field(field) => Some(field),
            Self::Submit => None,
        }
    }
}

/// Focus ring over the fields in display order followed by the submit
/// control. Movement wraps at both ends.
#[derive(Debug, Clone)]
pub struct FocusState {
    targets: Vec<FocusTarget>,
    index: usize,
}

impl Default for FocusState {
    fn default() -> Self {
        let mut targets: Vec<FocusTarget> = FieldName::ALL.into_iter().map(FocusTarget::Field).collect();
        targets.push(FocusTarget::Submit);
        Self { targets, index: 0 }
    }
}

impl FocusState {
    pub fn current(&self) -> FocusTarget {
        self.targets[self.index]
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == target
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.targets.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.targets.len() - 1) % self.targets.len();
    }

    pub fn set(&mut self, target: FocusTarget) -> bool {
        match self.targets.iter().position(|t| *t == target) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusState, FocusTarget};
    use crate::form::field::FieldName;

    #[test]
    fn ring_wraps_both_ways() {
        let mut focus = FocusState::default();
        assert_eq!(focus.current(), FocusTarget::Field(FieldName::Title));
        focus.prev();
        assert_eq!(focus.current(), FocusTarget::Submit);
        focus.next();
        focus.next();
        assert_eq!(focus.current(), FocusTarget::Field(FieldName::Description));
    }

    #[test]
    fn selectors_resolve_to_targets() {
        assert_eq!(FocusTarget::from_test_id("submit-button"), Some(FocusTarget::Submit));
        assert_eq!(
            FocusTarget::from_test_id("movie-imdbUrl"),
            Some(FocusTarget::Field(FieldName::ImdbUrl))
        );
        assert_eq!(FocusTarget::from_test_id("movie-form"), None);
    }

    #[test]
    fn set_jumps_directly() {
        let mut focus = FocusState::default();
        assert!(focus.set(FocusTarget::Field(FieldName::ImdbId)));
        assert!(focus.is_focused(FocusTarget::Field(FieldName::ImdbId)));
    }
}
