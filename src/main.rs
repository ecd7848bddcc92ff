use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use thai_asr_client::config::DEFAULT_CONFIG_PATH;
use thai_asr_client::{
    AcceptRule, AudioFile, Config, HttpTranscriptionClient, SessionMode, SubmitOutcome,
    TranscriptView, UploadSession,
};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "thai-asr-client")]
#[command(about = "Submit Thai audio recordings to a Thai-ASR transcription service")]
struct Cli {
    /// Config file (extension optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a file without uploading it
    Check(FileArgs),

    /// Upload a file and print its transcript
    Transcribe {
        #[command(flatten)]
        file: FileArgs,

        /// Workflow mode (long-form or streaming)
        #[arg(long)]
        mode: Option<SessionMode>,

        /// Transcription service base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Args)]
struct FileArgs {
    /// Audio file to stage
    path: String,

    /// Declared media type (default: derived from the extension)
    #[arg(long)]
    mime: Option<String>,

    /// Accept rule (wav-only or any-audio)
    #[arg(long)]
    accept: Option<AcceptRule>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config_path = shellexpand::tilde(&cli.config);
    let mut cfg = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Check(args) => {
            if let Some(accept) = args.accept {
                cfg.upload.accept = accept;
            }

            let mut session = UploadSession::new(cfg.upload);
            stage(&mut session, &args)?;
            println!("OK: {} is accepted ({})", args.path, session.accept_rule());
        }
        Command::Transcribe {
            file,
            mode,
            base_url,
        } => {
            if let Some(accept) = file.accept {
                cfg.upload.accept = accept;
            }
            if let Some(mode) = mode {
                cfg.upload.mode = mode;
            }
            if let Some(base_url) = base_url {
                cfg.backend.base_url = base_url;
            }

            if !cfg.upload.mode.submits() {
                bail!("{} mode does not support file transcription", cfg.upload.mode);
            }

            let client = HttpTranscriptionClient::from_config(&cfg.backend)?;
            info!("Transcription endpoint: {}", client.endpoint());

            let mut session = UploadSession::new(cfg.upload);
            stage(&mut session, &file)?;

            let mut view = TranscriptView::new();
            match session.submit(&client, &mut view).await? {
                Some(SubmitOutcome::Transcribed(_)) => {
                    println!("{}", view.text().unwrap_or_default());
                }
                Some(SubmitOutcome::Failed(e)) => {
                    bail!("{} ({})", session.error_message().unwrap_or(e.user_message()), e);
                }
                None => bail!("Submission was superseded before it completed"),
            }
        }
    }

    Ok(())
}

/// Load the file at `args.path` and run it through the session's selection.
fn stage(session: &mut UploadSession, args: &FileArgs) -> Result<()> {
    let path = PathBuf::from(shellexpand::tilde(&args.path).as_ref());

    let mut audio = AudioFile::open(&path)?;
    if let Some(mime) = &args.mime {
        audio = audio.with_mime_type(mime.clone());
    }

    match audio.wav_info() {
        Some(wav) => info!(
            "WAV: {:.1}s, {}Hz, {} channels",
            wav.duration_seconds, wav.sample_rate, wav.channels
        ),
        None => warn!("{} is not a readable WAV file", audio.name),
    }

    session.select_file(Some(audio));

    if let Some(message) = session.error_message() {
        bail!("{}", message);
    }

    Ok(())
}
