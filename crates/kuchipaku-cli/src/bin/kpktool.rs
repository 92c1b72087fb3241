use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kuchipaku_cli::commands::{config_ops, encode_ops, text_ops};
use kuchipaku_cli::trace_init::init_tracing;
use kuchipaku_core::backend::BackendKind;

#[derive(Parser)]
#[command(name = "kpktool", about = "Lip-sync phoneme tool for Japanese script text")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write JSON logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct BackendArgs {
    /// Lexicon TOML with `[readings]` (default: kana-only backend)
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// Fail on kanji the lexicon has no reading for
    #[arg(long, requires = "lexicon")]
    strict: bool,
}

impl BackendArgs {
    fn kind(&self) -> BackendKind {
        match &self.lexicon {
            Some(path) => BackendKind::Lexicon {
                path: path.clone(),
                strict: self.strict,
            },
            None => BackendKind::Kana,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encode texts into phoneme counts and streams (stdin lines if no TEXT)
    Encode {
        #[command(flatten)]
        backend: BackendArgs,
        /// One JSON object per line
        #[arg(long)]
        json: bool,
        /// Texts to encode
        texts: Vec<String>,
    },
    /// Show the per-character breakdown of one text
    Explain {
        #[command(flatten)]
        backend: BackendArgs,
        /// Text to explain
        text: String,
    },
    /// Remove recognized rich-text tags
    Strip {
        /// Text to strip
        text: String,
    },
    /// Count morae in a kana string
    Mora {
        /// Kana text
        text: String,
    },
    /// Reduce romaji to phonemes
    Romaji {
        /// Romaji text
        text: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Validate a lexicon TOML file
    LexiconValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log_dir.as_deref());

    if let Some(path) = &cli.settings {
        config_ops::load_settings(path);
    }

    match cli.command {
        Command::Encode {
            backend,
            json,
            texts,
        } => encode_ops::encode_cmd(&backend.kind(), &texts, json),
        Command::Explain { backend, text } => encode_ops::explain_cmd(&backend.kind(), &text),
        Command::Strip { text } => text_ops::strip_cmd(&text),
        Command::Mora { text } => text_ops::mora_cmd(&text),
        Command::Romaji { text } => text_ops::romaji_cmd(&text),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::LexiconValidate { file } => config_ops::lexicon_validate(&file),
    }
}
