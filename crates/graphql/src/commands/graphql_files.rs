use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The GraphQL files found at or under a set of paths.
#[derive(Debug, Default)]
pub(super) struct GraphQLFiles {
    pub(super) file_paths: Vec<PathBuf>,
    pub(super) num_non_graphql_files: usize,
    pub(super) errors: Vec<anyhow::Error>,
}

/// Recursively finds every file at or under `paths` whose extension is in
/// `graphql_file_exts` (with or without a leading `.`).
///
/// If a single file path is given and nothing matched, that file is taken
/// anyway: naming one file explicitly means "check this file".
pub(super) fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> GraphQLFiles {
    let graphql_file_exts: HashSet<&str> = graphql_file_exts
        .iter()
        .map(|ext| ext.trim_start_matches('.'))
        .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = GraphQLFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e.into());
                    continue;
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            let is_graphql = entry_path
                .extension()
                .is_some_and(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()));
            if !is_graphql {
                found.num_non_graphql_files += 1;
                continue;
            }
            log::trace!("Found file at {entry_path:#?}.");
            match canonicalize(entry_path) {
                Ok(file_path) => found.file_paths.push(file_path),
                Err(e) => found.errors.push(e),
            }
        }
    }

    if found.file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file()
    {
        match canonicalize(only_path) {
            Ok(file_path) => {
                log::warn!(
                    "Proceeding with {file_path:#?} even though it doesn't \
                    match any of the --graphql-file-exts ({}).",
                    graphql_file_exts
                        .iter()
                        .map(|ext| format!("`.{ext}`"))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
                found.num_non_graphql_files = found.num_non_graphql_files.saturating_sub(1);
                found.file_paths.push(file_path);
            },
            Err(e) => found.errors.push(e),
        }
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!("failed to resolve {}", path.display()))
}

/// Reads a GraphQL source file.
pub(super) fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
