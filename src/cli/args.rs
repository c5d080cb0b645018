use clap::{Parser, Subcommand};

use crate::models::Mode;

#[derive(Parser, Debug)]
#[command(name = "misbaha", version, author, about = "A tasbih and rakat counter for the terminal")]
pub struct Cli {
    /// Keep counts in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count one press (tasbih +1, rakat +2)
    Press {
        /// Counter to press: tasbih or rakat
        #[arg(long, short, default_value = "tasbih")]
        mode: Mode,
        /// Number of presses
        #[arg(long, short = 'n', default_value = "1")]
        times: u32,
    },
    /// Set a counter back to zero
    Reset {
        /// Counter to reset: tasbih or rakat
        #[arg(long, short, default_value = "tasbih")]
        mode: Mode,
    },
    /// Switch between light and dark theme
    Theme,
    /// Print both counters and the theme
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Config file management
    Config {
        /// Write the default config file
        #[arg(long)]
        init: bool,
        /// Print the config file location
        #[arg(long)]
        path: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["misbaha"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.ephemeral);
    }

    #[test]
    fn press_takes_mode_and_times() {
        let cli = Cli::try_parse_from(["misbaha", "press", "--mode", "rakat", "-n", "3"]).unwrap();
        match cli.command {
            Some(Commands::Press { mode, times }) => {
                assert_eq!(mode, Mode::Rakat);
                assert_eq!(times, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ephemeral_is_global() {
        let cli = Cli::try_parse_from(["misbaha", "show", "--ephemeral"]).unwrap();
        assert!(cli.ephemeral);
    }

    #[test]
    fn bad_mode_is_rejected() {
        assert!(Cli::try_parse_from(["misbaha", "reset", "--mode", "witr"]).is_err());
    }
}
