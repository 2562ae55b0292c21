use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a list, so that a collection can nest its contents
/// inside a `debug_struct` without collecting them first.
pub(crate) struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes each item's debug representation wrapped in parentheses and joined by arrows, e.g.
/// `(1) -> (2) -> (3)`.
pub(crate) fn write_chain<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Debug,
{
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, " -> ")?;
        }
        write!(f, "({item:?})")?;
    }
    Ok(())
}
