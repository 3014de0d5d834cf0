use clap::Parser;

#[derive(Parser)]
#[command(
    name = "textmorph",
    version,
    about = "Reads a text file from './inputs/', optionally randomizes character case and/or reverses text, and saves the result to './outputs/'."
)]
pub struct CliArgs {
    /// Filename of the input text file (e.g. 'my_document.txt' for 'inputs/my_document.txt')
    #[arg(short, long)]
    pub filename: String,

    /// Randomly change the case of alphabetic characters
    #[arg(short, long, default_value_t = false)]
    pub uppercase: bool,

    /// Reverse the text content
    #[arg(short, long, default_value_t = false)]
    pub reverse: bool,

    /// Seed the randomizer for reproducible case flips
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
