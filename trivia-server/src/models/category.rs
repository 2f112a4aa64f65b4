//! Category filter shared by listings and quizzes

/// Optional category restriction.
///
/// An absent id and id `0` both mean "every category".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter(Option<i32>);

impl CategoryFilter {
    pub fn new(id: Option<i32>) -> Self {
        Self(id.filter(|&id| id != 0))
    }

    /// No restriction.
    pub fn any() -> Self {
        Self(None)
    }

    /// The category id to filter on, if any.
    pub fn id(&self) -> Option<i32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_any() {
        assert_eq!(CategoryFilter::new(Some(0)), CategoryFilter::any());
        assert_eq!(CategoryFilter::new(None).id(), None);
    }

    #[test]
    fn keeps_real_ids() {
        assert_eq!(CategoryFilter::new(Some(5)).id(), Some(5));
    }
}
