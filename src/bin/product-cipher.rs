//! Product cipher CLI
//!
//! Command-line interface for encrypting and decrypting text files with a
//! keyed substitution followed by a columnar transposition.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process;

use product_cipher::file_ops;
use product_cipher::key_reader::{ConstantKeyReader, KeyReader, ReaderKeyReader, TerminalKeyReader};
use product_cipher::{CipherError, Options};

#[derive(Parser)]
#[command(name = "product-cipher")]
#[command(version)]
#[command(about = "Classical substitution + transposition product cipher.", long_about = None)]
struct Cli {
    /// Substitution key (prompted on the terminal when omitted)
    #[arg(long, global = true, conflicts_with = "key_stdin")]
    key: Option<String>,

    /// Read the substitution key from stdin instead of from terminal
    #[arg(long, global = true)]
    key_stdin: bool,

    /// Group output into blocks of five characters (for display only; grouped ciphertext cannot be decrypted)
    #[arg(long, global = true)]
    explode: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text file
    #[command(alias = "e")]
    Encrypt {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the encrypted text to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of transposition columns (at least 2)
        #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
        transpose_key: String,
    },

    /// Decrypt a text file
    #[command(alias = "d")]
    Decrypt {
        /// Path to the file whose contents is to be decrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the decrypted text to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Number of transposition columns (at least 2)
        #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
        transpose_key: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let options = Options {
        explode: cli.explode,
    };
    let mut reader = get_key_reader(cli.key, cli.key_stdin);

    let result = match cli.command {
        Commands::Encrypt {
            input,
            output,
            transpose_key,
        } => file_ops::encrypt_file(&input, &output, &mut *reader, &transpose_key, &options),
        Commands::Decrypt {
            input,
            output,
            transpose_key,
        } => file_ops::decrypt_file(&input, &output, &mut *reader, &transpose_key, &options),
    };

    if let Err(e) = result {
        report(&e);
        process::exit(1);
    }
}

fn report(e: &CipherError) {
    eprintln!("Error: {:#}", e);
    let mut source = e.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
    for field in e.fields() {
        eprintln!("  {}: {}", field.field, field.message);
    }
}

fn get_key_reader(key: Option<String>, use_stdin: bool) -> Box<dyn KeyReader> {
    match key {
        Some(key) => Box::new(ConstantKeyReader::new(key)),
        None if use_stdin => Box::new(ReaderKeyReader::new(Box::new(std::io::stdin()))),
        None => Box::new(TerminalKeyReader),
    }
}
