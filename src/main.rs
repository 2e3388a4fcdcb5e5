use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use wordset::utils::archive_path_for;
use wordset::{AttributeFlags, Result, WordSet};

/// Word used by the archive self test; scrubbing reduces it to `TestValue`.
const TEST_WORD: &str = "TestValue!@";
const TEST_LOOKUP: &str = "TestValue";
const TEST_ATTRIBUTES: u32 = 33;

/// Convert a text word list to a compressed word set archive.
#[derive(Parser, Debug)]
#[command(
    name = "wordset",
    version,
    about,
    after_help = "File format: can start with an abbreviation list in the format <abbrev>: <full text meaning>, \
                  ended by a blank line, followed by the words, one word per line. Words can carry attributes \
                  matching the abbreviations in the format: <word> (<attrib1>, <attrib2>...) (<attribA>, <attribB>...) \
                  where the second group is typically a language locale identifier."
)]
struct Cli {
    /// Two letter language identifier used for scrubbing words
    #[arg(short = 'l', long = "langcode", default_value = "EN")]
    lang_code: String,

    /// Text file with the word list, or a .words.gz archive in test mode
    file: PathBuf,

    /// Load an archive, report its size and try a sample insertion
    #[arg(short, long)]
    test: bool,

    /// Archive destination (default: the word list path with a .words.gz extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep words exactly as written instead of scrubbing them
    #[arg(long)]
    no_scrub: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = if cli.test { self_test(&cli) } else { build(&cli) };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build(cli: &Cli) -> Result<()> {
    let words = WordSet::new(&cli.lang_code, !cli.no_scrub)?.extend_from_text_file(&cli.file)?;
    println!("Word set loaded with {} words", words.len());

    let archive_path = cli.output.clone().unwrap_or_else(|| archive_path_for(&cli.file));
    words.save(&archive_path)?;
    println!("Dumped to file: {}", archive_path.display());
    Ok(())
}

fn self_test(cli: &Cli) -> Result<()> {
    let mut words = WordSet::load(&cli.file)?;
    println!("Word set loaded with {} words", words.len());

    println!("Test adding entry '{}' with attribute {}", TEST_WORD, TEST_ATTRIBUTES);
    words.insert(TEST_WORD, Some(AttributeFlags::from_bits(TEST_ATTRIBUTES)))?;
    println!("Word set loaded with {} words", words.len());

    println!("Read the scrubbed word entry '{}'", TEST_LOOKUP);
    match words.get(TEST_LOOKUP) {
        Some(flags) => println!("{} ({})", flags.bits(), flags),
        None => println!("'{}' not found", TEST_LOOKUP),
    }
    Ok(())
}
