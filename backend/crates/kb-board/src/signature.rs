use kb_core::Positioned;

use std::fmt;

/// Content fingerprint of a working set.
///
/// Built from id, scope, key and last-modified marker of every item, in id
/// order, so two listings with the same content always agree no matter how
/// they were ordered on arrival.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    pub fn of<'a, T, I>(items: I) -> Self
    where
        T: Positioned + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut entries: Vec<&T> = items.into_iter().collect();
        entries.sort_by_key(|item| item.id());

        let parts: Vec<String> = entries
            .iter()
            .map(|item| {
                format!(
                    "{}|{}|{}|{}",
                    item.id(),
                    item.scope_id(),
                    item.position(),
                    item.modified_marker()
                )
            })
            .collect();

        Self(parts.join("~"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
