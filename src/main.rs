use ares_chat::{
    cli::{
        chat::{run_chat, ChatOptions},
        output::Output,
        Cli, Commands,
    },
    ChatConfig, ConversationBuffer, Provider, Result,
};
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let config = cli.load_config()?;
    init_tracing(if cli.verbose { "debug" } else { config.log_level.as_str() });

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Config => {
            output.config_summary(&config);
            Ok(())
        }
        Commands::Chat => run_interactive(&cli, &config, &output).await,
    }
}

/// Logs go to stderr so the transcript on stdout stays clean.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_interactive(cli: &Cli, config: &ChatConfig, output: &Output) -> Result<()> {
    // Missing credentials are fatal before any interaction
    let provider = Provider::from_config(config)?;
    let client = provider.create_client();
    let mut conversation = ConversationBuffer::from_config(&config.conversation)?;

    tracing::info!(
        provider = provider.name(),
        model = provider.model(),
        history_cap = conversation.capacity(),
        "starting chat session"
    );

    if cli.verbose {
        output.banner(provider.model());
        output.info(&format!("Provider: {}", provider.name()));
        output.hint("Type 'quit' to exit");
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    run_chat(
        &mut conversation,
        client.as_ref(),
        stdin.lock(),
        &mut stdout,
        output,
        ChatOptions {
            show_context: cli.show_context,
        },
    )
    .await?;

    Ok(())
}
