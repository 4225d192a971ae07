/// Concatenate per-page text, skipping pages that yielded nothing.
///
/// `None` and empty pages are dropped without error. Surviving pages are joined
/// with `separator`, which is empty by default: words at page boundaries run
/// together unless a separator is configured.
pub fn join_pages<I>(pages: I, separator: &str) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .flatten()
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
