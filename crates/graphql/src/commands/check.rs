use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::graphql_files::find_graphql_files;
use crate::commands::graphql_files::read_source;
use crate::output_utils;
use libgraphql_arena::ExternalError;
use libgraphql_arena::ParseError;
use libgraphql_arena::Parser;
use libgraphql_arena::Report;
use libgraphql_arena::ast::Document;
use libgraphql_arena::walker::Walker;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Schema file to check operations against. May be repeated; \
             all schema files are combined into one schema.",
        long="schema",
        name="SCHEMA_FILE",
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="Print errors as a JSON array instead of diagnostics.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// Collected errors, rendered as text diagnostics or as JSON.
#[derive(Default)]
struct Diagnostics {
    text: Vec<String>,
    json: Vec<serde_json::Value>,
}

impl Diagnostics {
    fn add_message(&mut self, file_path: Option<&Path>, message: String) {
        self.json.push(serde_json::json!({
            "file": file_path.map(|path| path.display().to_string()),
            "message": message,
        }));
        self.text.push(message);
    }

    fn add_parse_error(&mut self, file_path: &Path, source: &str, error: &ParseError) {
        self.json.push(external_error_json(file_path, &ExternalError::from(error)));
        self.text.push(error.format_detailed(Some(source)).replacen(
            "  --> ",
            &format!("  --> {}:", file_path.display()),
            1,
        ));
    }

    fn add_report(&mut self, file_path: &Path, report: &Report) {
        for error in &report.internal_errors {
            self.add_message(
                Some(file_path),
                format!("{}: internal error: {error}", file_path.display()),
            );
        }
        for error in &report.external_errors {
            self.json.push(external_error_json(file_path, error));
            self.text.push(output_utils::format_external_error(file_path, error));
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn external_error_json(file_path: &Path, error: &ExternalError) -> serde_json::Value {
    serde_json::json!({
        "file": file_path.display().to_string(),
        "error": error,
    })
}

/// What the checked files contained.
#[derive(Default)]
struct Stats {
    num_type_definitions: usize,
    num_directive_definitions: usize,
    num_operations: usize,
    num_fragments: usize,
}

impl Stats {
    fn count(&mut self, document: &Document) {
        self.num_type_definitions += document.index.type_names().count();
        self.num_directive_definitions += document.directive_definitions.len();
        self.num_operations += document.operation_definitions.len();
        self.num_fragments += document.fragment_definitions.len();
    }
}

/// Parses every schema file (reporting errors against the file they are
/// in), then parses their concatenation as the one schema to walk against.
fn load_schema(
    parser: &mut Parser,
    schema_paths: &[PathBuf],
    diagnostics: &mut Diagnostics,
) -> Option<Document> {
    let mut combined = String::new();
    let mut document = Document::new();
    for schema_path in schema_paths {
        let source = match read_source(schema_path) {
            Ok(source) => source,
            Err(e) => {
                diagnostics.add_message(Some(schema_path.as_path()), format!("{e:#}"));
                continue;
            },
        };
        document.reset();
        document.input.reset_input_string(&source);
        if let Err(error) = parser.parse(&mut document) {
            diagnostics.add_parse_error(schema_path, &source, &error);
            continue;
        }
        combined.push_str(&source);
        combined.push('\n');
    }
    if !diagnostics.is_empty() {
        return None;
    }

    let mut schema = Document::from_source(&combined);
    match parser.parse(&mut schema) {
        Ok(()) => {
            log::debug!(
                "Loaded schema with {} types from {} files.",
                schema.index.type_names().count(),
                schema_paths.len(),
            );
            Some(schema)
        },
        Err(error) => {
            // Each file parsed alone, so only their concatenation can fail.
            diagnostics.add_message(
                None,
                format!("schema files don't combine into one document: {error}"),
            );
            None
        },
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut diagnostics = Diagnostics::default();
        let mut parser = Parser::new();

        let schema = if self.schema_paths.is_empty() {
            None
        } else {
            match load_schema(&mut parser, &self.schema_paths, &mut diagnostics) {
                Some(schema) => Some(schema),
                None => return self.failure(diagnostics),
            }
        };

        let found = find_graphql_files(&self.file_or_dir_paths, &self.graphql_file_exts);
        for error in &found.errors {
            diagnostics.add_message(None, format!("{error:#}"));
        }

        let mut stats = Stats::default();
        let mut document = Document::new();
        let mut walker = Walker::new();
        let mut report = Report::new();
        for file_path in &found.file_paths {
            let source = match read_source(file_path) {
                Ok(source) => source,
                Err(e) => {
                    diagnostics.add_message(Some(file_path.as_path()), format!("{e:#}"));
                    continue;
                },
            };
            log::trace!("Checking {file_path:#?}.");
            document.reset();
            document.input.reset_input_string(&source);
            if let Err(error) = parser.parse(&mut document) {
                diagnostics.add_parse_error(file_path, &source, &error);
                continue;
            }
            stats.count(&document);

            if let Some(schema) = &schema {
                report.reset();
                walker.walk(&document, Some(schema), &mut report);
                diagnostics.add_report(file_path, &report);
            }
        }

        if !diagnostics.is_empty() {
            return self.failure(diagnostics);
        }
        if self.json {
            return CommandResult::stdout(format_args!("[]"));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} type definitions.\n",
                "  * Found {} directive definitions.\n",
                "  * Found {} operations and {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            found.file_paths.len(),
            found.num_non_graphql_files,
            stats.num_type_definitions,
            stats.num_directive_definitions,
            stats.num_operations,
            stats.num_fragments,
        ))
    }
}

impl CheckCmd {
    fn failure(&self, diagnostics: Diagnostics) -> CommandResult {
        if self.json {
            let json = serde_json::Value::Array(diagnostics.json);
            return CommandResult::stdout_failure(format_args!("{json}"));
        }
        CommandResult::stderr(format_args!(
            "{}\n{} {} GraphQL errors.",
            diagnostics.text.join("\n"),
            output_utils::RED_X,
            diagnostics.text.len(),
        ))
    }
}
