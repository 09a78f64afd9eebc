use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use seqdiff::areas::session::Session;
use seqdiff::artifacts::diff::text_diff::TextDiffOptions;
use seqdiff::artifacts::hashing::Normalization;
use seqdiff::artifacts::hashing::hash_type::HashType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Line-based file comparison with Myers' diff",
    long_about = "Compares two text files line by line. Lines are reduced to 32-bit \
    fingerprints, optionally ignoring case, surrounding whitespace or a fixed-width prefix, \
    and the fingerprints are compared with Myers' shortest edit script algorithm.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CompareArgs {
    #[arg(index = 1, help = "The old file")]
    old: PathBuf,
    #[arg(index = 2, help = "The new file")]
    new: PathBuf,
    #[arg(
        long,
        default_value = "content",
        help = "Line fingerprint: content, crc32 or unique"
    )]
    hash: HashType,
    #[arg(short = 'i', long, help = "Ignore case differences")]
    ignore_case: bool,
    #[arg(short = 'w', long, help = "Ignore leading and trailing whitespace")]
    ignore_whitespace: bool,
    #[arg(long, default_value_t = 0, help = "Ignore this many leading characters of every line")]
    skip_prefix: usize,
}

impl CompareArgs {
    fn options(&self) -> TextDiffOptions {
        let mut normalization = Normalization::empty();
        normalization.set(Normalization::IGNORE_CASE, self.ignore_case);
        normalization.set(Normalization::TRIM_WHITESPACE, self.ignore_whitespace);

        TextDiffOptions::default()
            .with_hash_type(self.hash)
            .with_normalization(normalization)
            .with_skip_prefix(self.skip_prefix)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "List the edits turning the old file into the new one",
        long_about = "This command prints one record per edit (Delete, Insert or Change) with \
        zero-based line ranges, followed by the total edit length and the similarity."
    )]
    Diff {
        #[command(flatten)]
        compare: CompareArgs,
        #[arg(long, help = "Report replaced lines as a Delete and an Insert")]
        no_change_edits: bool,
    },
    #[command(
        name = "similarity",
        about = "Print the similarity of two files",
        long_about = "This command prints 2 * common lines / total lines, with three decimals."
    )]
    Similarity {
        #[command(flatten)]
        compare: CompareArgs,
    },
    #[command(
        name = "lcs",
        about = "Print the lines both files have in common",
        long_about = "This command prints one longest common subsequence of lines, \
        as they appear in the old file."
    )]
    Lcs {
        #[command(flatten)]
        compare: CompareArgs,
    },
}

fn main() -> Result<()> {
    // RUST_LOG=debug for per-command details, RUST_LOG=trace for every split
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Diff {
            compare,
            no_change_edits,
        } => session.diff(
            &compare.old,
            &compare.new,
            compare.options().with_change_edits(!no_change_edits),
        )?,
        Commands::Similarity { compare } => {
            session.similarity(&compare.old, &compare.new, compare.options())?
        }
        Commands::Lcs { compare } => session.lcs(&compare.old, &compare.new, compare.options())?,
    }

    Ok(())
}
