use clap::Args;

use super::error::GenError;
use super::topic::Topic;

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Source topic, e.g. "db.customers.addresses"
    pub topic: String,

    /// Number of batch file pairs to write
    #[arg(short = 'n', long, default_value_t = 10)]
    pub number_of_files: usize,

    /// Records per batch
    #[arg(short = 'r', long, default_value_t = 100)]
    pub records_per_file: usize,

    /// Destination directory (must already exist)
    #[arg(short = 'o', long, default_value = "ephemera")]
    pub output_directory: String,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — validated config
// ═══════════════════════════════════════════════════════════════

pub struct Effective {
    pub topic: Topic,
    pub number_of_files: usize,
    pub records_per_file: usize,
    pub output_directory: String,
}

impl Effective {
    /// Parses the topic up front so a bad topic fails before any file is
    /// touched.
    pub fn new(args: &GenArgs) -> Result<Self, GenError> {
        let topic = Topic::parse(&args.topic)?;
        Ok(Self {
            topic,
            number_of_files: args.number_of_files,
            records_per_file: args.records_per_file,
            output_directory: args.output_directory.clone(),
        })
    }
}
