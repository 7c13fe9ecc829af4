//! Wordle+ - CLI
//!
//! Word-guessing game with TUI and text modes, local stats and a results outbox.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_plus::{
    commands::{
        Credentials, check_guess, reset_profile, run_audit, run_simple, show_stats, sign_in,
    },
    config::{
        DEFAULT_OUTBOX_PATH, DEFAULT_STORE_PATH, DEFAULT_WORD_LENGTH, GameConfig, StoreLocation,
        WordlistSource,
    },
    game::{DEFAULT_MAX_GUESSES, GameSession},
    output::{print_audit_report, print_check_result, print_profile_stats},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_plus",
    about = "Guess the hidden word: 4 to 8 letters, duplicate-safe scoring, XP and ranks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length, 4 to 8
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per round
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Profile store: JSON file path, or 'memory' to keep nothing
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    store: String,

    /// Results outbox (JSON lines)
    #[arg(long, global = true, default_value = DEFAULT_OUTBOX_PATH)]
    outbox: PathBuf,

    /// Seed for secret word selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without TUI
    Simple,

    /// Score one guess against a given secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,

        /// Accept guesses missing from the wordlist
        #[arg(short, long)]
        any: bool,
    },

    /// Show cached profile stats
    Stats,

    /// Cache a session token and account details
    Login {
        /// Access token issued by the account service
        #[arg(long)]
        token: String,

        #[arg(long)]
        user_id: Option<String>,

        #[arg(long)]
        player_id: Option<String>,

        #[arg(long)]
        username: Option<String>,
    },

    /// Clear the session token and cached stats
    Reset,

    /// Check the scoring invariants over every word pair of one length
    Audit {
        /// Limit number of words to audit
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_length: self.length,
            max_guesses: self.max_guesses,
            wordlist: WordlistSource::parse(&self.wordlist),
            store: StoreLocation::parse(&self.store),
            outbox: self.outbox.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    let dictionary = config
        .dictionary()
        .with_context(|| format!("could not load wordlist '{}'", cli.wordlist))?;
    log::debug!(
        "dictionary loaded: {} words, lengths {:?}",
        dictionary.len(),
        dictionary.lengths()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => run_simple_command(&config, &dictionary),
        Commands::Check { secret, guess, any } => {
            let record = check_guess(&dictionary, &secret, &guess, any)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&secret, &record);
            Ok(())
        }
        Commands::Stats => {
            let profile = config.profile()?;
            print_profile_stats(&show_stats(&profile));
            Ok(())
        }
        Commands::Login {
            token,
            user_id,
            player_id,
            username,
        } => {
            let mut profile = config.profile()?;
            let credentials = Credentials {
                access_token: token,
                user_id,
                player_id,
                username,
            };
            let stats = sign_in(&mut profile, &credentials)?;
            println!(
                "Signed in as {}.",
                stats.username.as_deref().unwrap_or("guest")
            );
            Ok(())
        }
        Commands::Reset => {
            let mut profile = config.profile()?;
            let before = reset_profile(&mut profile)?;
            println!(
                "Profile reset: cleared {} wins and {} XP.",
                before.wins, before.xp
            );
            Ok(())
        }
        Commands::Audit { limit } => {
            println!(
                "Auditing {}-letter words ({} in list)...",
                config.word_length,
                dictionary.words(config.word_length).len()
            );
            let report = run_audit(&dictionary, config.word_length, limit, true);
            print_audit_report(&report);
            if report.passed() {
                Ok(())
            } else {
                anyhow::bail!("{} scoring violations", report.violation_count)
            }
        }
    }
}

fn new_session<'a>(config: &GameConfig, dictionary: &'a Dictionary) -> Result<GameSession<'a>> {
    let profile = config.profile()?;
    let session = GameSession::new(
        dictionary,
        config.word_length,
        config.max_guesses,
        config.rng(),
        config.sink(),
        profile,
    )?;
    Ok(session)
}

fn run_simple_command(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    let mut session = new_session(config, dictionary)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_simple(&mut session, &mut input, &mut out)
}

fn run_play_command(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    use wordle_plus::interactive::{App, run_tui};

    let app = App::new(new_session(config, dictionary)?);
    run_tui(app)
}
