use anyhow::Context;
use postboard::adapters::inbound::spawn_command_reader;
use postboard::adapters::outbound::console::StderrProgressReporter;
use postboard::adapters::outbound::network::{HttpPostRepository, HttpUserRepository};
use postboard::application::dto::{BrowseRequest, BrowseResponse, OutputFormat};
use postboard::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use postboard::application::use_cases::BrowseListsUseCase;
use postboard::cli::Args;
use postboard::config::{discover_config, load_config_from_path, Settings};
use postboard::shared::error::ExitCode;
use postboard::shared::Result;
use std::io::IsTerminal;
use std::process;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // clap exits with code 2 on invalid arguments and 0 for --help/--version
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let code = match run(args) {
        Ok(response) if response.final_view_failed() => ExitCode::ViewFailed,
        Ok(_) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }
            eprintln!();
            ExitCode::ApplicationError
        }
    };

    tracing::debug!(exit_code = %code, "exiting");
    process::exit(code.as_i32());
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "warn,postboard=debug"
    } else {
        "warn"
    };
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("⚠️  Warning: tracing init failed: {}", e);
    }
}

fn run(args: Args) -> Result<BrowseResponse> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let result = runtime.block_on(browse(args));
    // A pending stdin read must not hold up the exit
    runtime.shutdown_background();
    result
}

async fn browse(args: Args) -> Result<BrowseResponse> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            discover_config(&cwd)?
        }
    };
    let settings = Settings::resolve(&args, config.as_ref())?;
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let user_repository = HttpUserRepository::new(&settings.api_base_url, settings.timeout)?;
    let post_repository = HttpPostRepository::new(&settings.posts_url, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();

    let colored = settings.format == OutputFormat::Text
        && args.output.is_none()
        && std::io::stdout().is_terminal();
    let renderer = RendererFactory::create(settings.format, colored);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let use_case = BrowseListsUseCase::new(
        user_repository,
        post_repository,
        progress_reporter,
        renderer,
        presenter,
    );

    let request = BrowseRequest::builder()
        .paths(args.paths.iter().cloned())
        .settle_each(!args.no_settle)
        .live(settings.live)
        .brand(settings.brand.clone())
        .post_limit(settings.post_limit)
        .build()?;

    let response = if args.interactive {
        let commands = spawn_command_reader(BufReader::new(tokio::io::stdin()));
        use_case.execute_interactive(request, commands).await?
    } else {
        use_case.execute(request).await?
    };

    tracing::debug!(
        location = %response.final_page.location,
        frames = response.stats.frames_rendered,
        requests = response.stats.requests_issued,
        stale = response.stats.stale_responses,
        "session finished"
    );
    Ok(response)
}
