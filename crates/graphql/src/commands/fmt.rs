use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::graphql_files::read_source;
use crate::output_utils;
use libgraphql_arena::Parser;
use libgraphql_arena::Printer;
use libgraphql_arena::ast::Document;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct FmtCmd {
    #[arg(
        help="Indent width for multi-line output. Without it the document \
             is printed on a single line.",
        long,
    )]
    indent: Option<usize>,

    #[arg(
        help="Path to the GraphQL file to print.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for FmtCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match read_source(&self.file_path) {
            Ok(source) => source,
            Err(e) => {
                return CommandResult::stderr(format_args!("{} {e:#}", output_utils::RED_X));
            },
        };

        let mut document = Document::from_source(&source);
        if let Err(error) = Parser::new().parse(&mut document) {
            return CommandResult::stderr(format_args!(
                "{}",
                error.format_detailed(Some(&source)).replacen(
                    "  --> ",
                    &format!("  --> {}:", self.file_path.display()),
                    1,
                ),
            ));
        }

        let mut printer = match self.indent {
            Some(indent) => Printer::with_indent(indent),
            None => Printer::new(),
        };
        let printed = printer.print(&document);
        CommandResult::stdout(format_args!("{}", printed.trim_end()))
    }
}
