//! Filter predicate over repository records

use gh_client::RepositoryRecord;

/// Case-insensitive substring match against full name, language or owner
///
/// An empty needle matches everything.
pub fn matches(record: &RepositoryRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let needle = needle.to_lowercase();
    [&record.full_name, &record.language, &record.owner]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Indices of `repos` matching `needle`, in their original order
pub fn apply_filter(repos: &[RepositoryRecord], needle: &str) -> Vec<usize> {
    repos
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, needle))
        .map(|(index, _)| index)
        .collect()
}
