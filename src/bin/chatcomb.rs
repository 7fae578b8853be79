use chatcomb::{Command, CommandParser, PrefixConfig, Value, command, optional, string};
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chatcomb")]
#[command(about = "Parse chat messages as commands and print what they resolve to")]
struct Args {
    /// Mention that counts as a command prefix besides `/` and `$`
    #[arg(long, env = "CHATCOMB_MENTION")]
    mention: Option<String>,

    /// Command name to accept; repeat for aliases
    #[arg(long = "alias", required = true)]
    aliases: Vec<String>,

    /// Required string argument, written as `-name value`
    #[arg(long = "arg")]
    required: Vec<String>,

    /// Optional string argument, written as `-name value`
    #[arg(long = "optional")]
    optional: Vec<String>,

    /// Print each command as one JSON object
    #[arg(long)]
    json: bool,

    /// Messages to parse; read from stdin, one per line, when none are given
    messages: Vec<String>,
}

impl Args {
    fn grammar(&self) -> CommandParser {
        let mut config = PrefixConfig::default();
        if let Some(mention) = &self.mention {
            config.mention = mention.clone();
        }

        let mut builder = command(self.aliases.clone()).config(&config);
        for name in &self.required {
            builder = builder.arg(name, string());
        }
        for name in &self.optional {
            builder = builder.arg(name, optional(string()));
        }
        builder.build()
    }
}

fn render(command: &Command) -> String {
    let args: Vec<String> = command
        .args
        .iter()
        .map(|(name, value)| match value {
            Value::Null => format!("{}=<none>", name),
            Value::Str(text) => format!("{}={:?}", name, text),
            other => format!("{}={:?}", name, other),
        })
        .collect();
    format!(
        "{}{} [{}] {:?}",
        command.prefix,
        command.label,
        args.join(", "),
        command.remaining
    )
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let grammar = args.grammar();

    let messages = if args.messages.is_empty() {
        debug!("reading messages from stdin");
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args.messages.clone()
    };

    let mut failures = 0;
    for message in &messages {
        match grammar.parse_message(message) {
            Ok(command) if args.json => println!("{}", serde_json::to_string(&command)?),
            Ok(command) => println!("{}", render(&command)),
            Err(error) => {
                failures += 1;
                warn!(%message, required = ?grammar.required(), "message is not a command");
                eprintln!("{}", error.report(message));
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
