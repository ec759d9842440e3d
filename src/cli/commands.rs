//! Command parsing.

use std::path::PathBuf;

use super::errors::CommandParseError;

/// Evidence research CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Probe the backend health endpoint.
    Health,

    /// Search OpenAlex.
    Search {
        /// Free-text query (positional words joined by spaces).
        query: String,
        /// Maximum number of results.
        limit: Option<u32>,
        /// Exclude preprints.
        exclude_preprints: bool,
        /// Earliest publication year.
        from_year: Option<i32>,
        /// Latest publication year.
        to_year: Option<i32>,
    },

    /// Resolve free-text reference lines.
    Resolve {
        /// Lines to resolve, in order.
        lines: Vec<String>,
    },

    /// Enrich and analyze the input file.
    Analyze {
        /// Path to the JSON input.
        path: PathBuf,
    },

    /// Show help.
    Help,
}

impl Command {
    /// Parse a command from string arguments (program name excluded).
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for a missing or unknown command, an
    /// unknown flag, or a flag value that is missing or does not parse.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        let Some(first) = args.first() else {
            return Err(CommandParseError::MissingCommand);
        };

        let cmd = first.to_lowercase();
        match cmd.as_str() {
            "health" => Ok(Self::Health),

            "search" => parse_search(&args[1..]),

            "resolve" => {
                let lines: Vec<String> = args[1..].to_vec();
                if lines.is_empty() {
                    return Err(CommandParseError::MissingValue("line".into()));
                }
                Ok(Self::Resolve { lines })
            }

            "analyze" => match args.get(1) {
                Some(path) => Ok(Self::Analyze {
                    path: PathBuf::from(path),
                }),
                None => Err(CommandParseError::MissingValue("file".into())),
            },

            "help" | "-h" | "--help" => Ok(Self::Help),

            _ => Err(CommandParseError::UnknownCommand(first.clone())),
        }
    }
}

fn parse_search(args: &[String]) -> Result<Command, CommandParseError> {
    let mut words = Vec::new();
    let mut limit = None;
    let mut exclude_preprints = false;
    let mut from_year = None;
    let mut to_year = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" | "-l" => {
                i += 1;
                limit = Some(parse_value(args, i, "--limit")?);
            }
            "--exclude-preprints" => exclude_preprints = true,
            "--from-year" => {
                i += 1;
                from_year = Some(parse_value(args, i, "--from-year")?);
            }
            "--to-year" => {
                i += 1;
                to_year = Some(parse_value(args, i, "--to-year")?);
            }
            flag if flag.starts_with("--") => {
                return Err(CommandParseError::UnknownFlag(flag.to_string()));
            }
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    let query = words.join(" ");
    if query.trim().is_empty() {
        return Err(CommandParseError::MissingValue("query".into()));
    }

    Ok(Command::Search {
        query,
        limit,
        exclude_preprints,
        from_year,
        to_year,
    })
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    flag: &str,
) -> Result<T, CommandParseError> {
    let value = args
        .get(index)
        .ok_or_else(|| CommandParseError::MissingValue(flag.into()))?;
    value.parse().map_err(|_| CommandParseError::InvalidValue {
        flag: flag.into(),
        value: value.clone(),
    })
}
