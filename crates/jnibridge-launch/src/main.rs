use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod launcher;
mod settings;

use launcher::Outcome;
use settings::{Settings, VmArgs};

#[derive(Parser)]
#[command(name = "jnibridge", about = "jnibridge: boot an embedded Java VM and drive it over JNI")]
struct Cli {
    #[command(flatten)]
    vm: VmArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the VM, report the JNI version it implements, and shut it down
    Probe,
    /// Run a class's `public static void main(String[])`
    Run {
        /// Fully qualified class name, e.g. com.example.Main
        main_class: String,

        /// Arguments passed to main
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they don't mix with the program's stdout
    fmt()
        .with_env_filter(EnvFilter::from_env(jnibridge::diagnostics::LOG_ENV_VAR))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli.vm)?;
    let init_args = settings.vm.to_init_args()?;

    let library = settings.library.as_ref().map(|p| p.display().to_string());
    tracing::info!(
        library = library.as_deref().unwrap_or(jnibridge_runtime::default_library_name()),
        version = %init_args.version(),
        "Starting Java VM"
    );
    let runtime = jnibridge::lifecycle::start(settings.library.as_deref(), &init_args)?;

    let code = match cli.command {
        Commands::Probe => {
            println!("{}", launcher::probe(runtime)?);
            ExitCode::SUCCESS
        }
        Commands::Run { main_class, args } => match launcher::run_main(&main_class, &args)? {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Threw => ExitCode::FAILURE,
        },
    };

    // Waits for the program's non-daemon threads, like the java launcher.
    runtime.destroy()?;
    tracing::info!("jnibridge shutting down");
    Ok(code)
}
