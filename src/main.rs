use cipherkit::cli::{list_ciphers, read_input, run_cipher, show_info, show_keygen, CipherOptions};
use cipherkit::keygen::{KeygenOptions, DEFAULT_KEY_LENGTH};
use cipherkit::{Cipher, CipherKind, Operation};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERKIT_VERSION");
const BUILD: &str = env!("CIPHERKIT_BUILD");
const PROFILE: &str = env!("CIPHERKIT_PROFILE");
const GIT_HASH: &str = env!("CIPHERKIT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherkit")]
#[command(author, about = "Classical text ciphers: substitution, running-key, Playfair, transposition", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text (letters are normalized to A-Z first)
    #[command(alias = "e")]
    Encrypt(CipherArgs),

    /// Decrypt text (letters are normalized to A-Z first)
    #[command(alias = "d")]
    Decrypt(CipherArgs),

    /// Show the structures a cipher derives from its key
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        key: KeyArgs,

        /// Text length, for transposition grid geometry
        #[arg(long)]
        length: Option<usize>,
    },

    /// Generate a random key
    #[command(alias = "k")]
    Keygen {
        /// Cipher name or menu number
        #[arg(short, long, value_parser = parse_cipher)]
        cipher: CipherKind,

        /// Letters per word key
        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        length: usize,

        /// Seed for reproducible keys
        #[arg(long)]
        seed: Option<u64>,

        /// Print the key as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available ciphers
    #[command(alias = "l")]
    List,
}

#[derive(Args)]
struct KeyArgs {
    /// Cipher name or menu number (see `list`)
    #[arg(short, long, value_parser = parse_cipher)]
    cipher: CipherKind,

    /// Key (integer shift/factor, affine `a`, letters, or first transposition key)
    #[arg(short, long, allow_hyphen_values = true)]
    key: Option<String>,

    /// Second key (affine `b`, or second transposition key)
    #[arg(long, allow_hyphen_values = true)]
    key2: Option<String>,
}

#[derive(Args)]
struct CipherArgs {
    #[command(flatten)]
    key: KeyArgs,

    /// Read the text from a file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Text to transform (stdin when neither this nor --input is given)
    text: Option<String>,
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn transform(operation: Operation, args: CipherArgs) -> cipherkit::Result<String> {
    let text = read_input(args.text.as_deref(), args.input.as_deref())?;
    let options = CipherOptions {
        cipher: args.key.cipher,
        key: args.key.key,
        key2: args.key.key2,
        json: args.json,
    };
    run_cipher(operation, &text, &options)?.render(options.json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("cipherkit {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(&cli.log_level);

    let result = match command {
        Commands::Encrypt(args) => transform(Operation::Encrypt, args),
        Commands::Decrypt(args) => transform(Operation::Decrypt, args),
        Commands::Info { key, length } => {
            Cipher::from_parts(key.cipher, key.key.as_deref(), key.key2.as_deref())
                .and_then(|cipher| show_info(&cipher, length))
        }
        Commands::Keygen {
            cipher,
            length,
            seed,
            json,
        } => show_keygen(cipher, &KeygenOptions { length, seed }, json),
        Commands::List => Ok(list_ciphers()),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
