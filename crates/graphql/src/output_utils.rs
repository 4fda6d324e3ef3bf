pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// Renders a walk error the way parse errors render their one-line form:
/// `path:line:column: error: message`, plus the response path if any.
pub(crate) fn format_external_error(
    file_path: &std::path::Path,
    error: &libgraphql_arena::ExternalError,
) -> String {
    let mut out = match error.locations.first() {
        Some(location) => format!(
            "{}:{}:{}: error: {}",
            file_path.display(),
            location.line,
            location.column,
            error.message,
        ),
        None => format!("{}: error: {}", file_path.display(), error.message),
    };
    if !error.path.is_empty() {
        out.push_str(&format!(
            "\n   = at: {}",
            libgraphql_arena::format_path(&error.path),
        ));
    }
    out
}
