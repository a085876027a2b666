//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "pomodoro-server")]
#[command(about = "A state-managed HTTP server running work/rest pomodoro sessions")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Work phase length in minutes
    #[arg(short, long, default_value = "25", value_parser = parse_minutes)]
    pub work: f64,

    /// Rest phase length in minutes
    #[arg(short, long, default_value = "5", value_parser = parse_minutes)]
    pub rest: f64,

    /// Number of pomodori in a session
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub intervals: u16,

    /// Forward notifications to the desktop through notify-send
    #[arg(long)]
    pub desktop_notify: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Session durations in whole seconds
    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            work_seconds: minutes_to_seconds(self.work),
            rest_seconds: minutes_to_seconds(self.rest),
            intervals: usize::from(self.intervals),
        }
    }
}

/// Durations every session is built from, read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub work_seconds: u64,
    pub rest_seconds: u64,
    pub intervals: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            rest_seconds: 5 * 60,
            intervals: 1,
        }
    }
}

/// Longest work or rest phase accepted on the command line, one day
pub const MAX_MINUTES: f64 = 24.0 * 60.0;

/// Whole seconds in `minutes`, rounded down
pub fn minutes_to_seconds(minutes: f64) -> u64 {
    (minutes * 60.0).floor() as u64
}

fn parse_minutes(value: &str) -> Result<f64, String> {
    let minutes: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number of minutes", value))?;

    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(format!("minutes must be positive, got {}", value));
    }
    if minutes > MAX_MINUTES {
        return Err(format!("minutes must be at most {}, got {}", MAX_MINUTES, value));
    }

    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_classic_pomodoro() {
        let config = Config::try_parse_from(["pomodoro-server"]).unwrap();
        assert_eq!(config.settings(), SessionSettings::default());
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn fractional_minutes_are_floored() {
        let config =
            Config::try_parse_from(["pomodoro-server", "-w", "0.51", "-r", "1.5", "-n", "4"])
                .unwrap();
        let settings = config.settings();
        assert_eq!(settings.work_seconds, 30);
        assert_eq!(settings.rest_seconds, 90);
        assert_eq!(settings.intervals, 4);
    }

    #[test]
    fn non_positive_durations_are_rejected() {
        assert!(Config::try_parse_from(["pomodoro-server", "-w", "0"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-server", "-r", "-5"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-server", "-w", "soon"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-server", "-n", "0"]).is_err());
    }

    #[test]
    fn oversized_durations_are_rejected() {
        assert!(Config::try_parse_from(["pomodoro-server", "-w", "1e300"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-server", "-r", "1441"]).is_err());

        let config = Config::try_parse_from(["pomodoro-server", "-w", "1440"]).unwrap();
        assert_eq!(config.settings().work_seconds, 24 * 60 * 60);
    }
}
