use crate::ccv3;
use std::ops::Deref;

/// Warnings returned to callers of the [`Actor`](super::Actor).
///
/// Built from the client's [`ccv3::Warnings`] without dropping or reordering entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings(pub Vec<String>);

impl Warnings {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<ccv3::Warnings> for Warnings {
    fn from(warnings: ccv3::Warnings) -> Self {
        Self(warnings.into_inner())
    }
}

impl Deref for Warnings {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Warnings {
    fn from(warnings: [S; N]) -> Self {
        warnings.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
