//! `plinth` command line: development server, headless simulation, and
//! options tooling for the award viewer.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use plinth::asset::ModelSource;
use plinth::input::InputProcessor;
use plinth::options::Options;
use plinth::util::FrameTiming;
use plinth::{PlinthError, Viewer};
use web_time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "plinth", version, about = "Rotating award viewer")]
struct Cli {
    /// Options preset (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    options: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the viewer page and model over HTTP.
    Serve {
        /// Address to bind, e.g. 127.0.0.1:3000.
        #[arg(long)]
        bind: Option<String>,
        /// Directory to serve.
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Run a viewer session without a window and log what it shows.
    Simulate {
        /// Simulated duration in seconds.
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,
        /// Simulated frame rate.
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Key press at a time, e.g. `2.5:ArrowRight`. Repeatable.
        #[arg(long = "press", value_parser = parse_press)]
        presses: Vec<KeyPress>,
    },
    /// Print the options JSON schema.
    Schema,
    /// Write the effective options to a TOML preset.
    Preset {
        /// Destination file.
        path: PathBuf,
    },
}

#[derive(Debug, Clone)]
struct KeyPress {
    at: Duration,
    key: String,
}

fn parse_press(raw: &str) -> Result<KeyPress, String> {
    let (secs, key) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <seconds>:<key>, got {raw:?}"))?;
    let secs: f32 = secs
        .parse()
        .map_err(|e| format!("bad time {secs:?}: {e}"))?;
    let at = Duration::try_from_secs_f32(secs)
        .map_err(|e| format!("bad time {secs}: {e}"))?;
    if key.is_empty() {
        return Err("missing key name".into());
    }
    Ok(KeyPress {
        at,
        key: key.to_owned(),
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PlinthError> {
    let mut options = match &cli.options {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };

    match cli.command {
        Command::Serve { bind, root } => {
            if let Some(bind) = bind {
                options.server.bind = bind;
            }
            if let Some(root) = root {
                options.server.root = root;
            }
            serve(&options)
        }
        Command::Simulate {
            seconds,
            fps,
            mut presses,
        } => {
            presses.sort_by_key(|p| p.at);
            simulate(&options, seconds, fps, &presses)
        }
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())
                .map_err(|e| PlinthError::OptionsParse(e.to_string()))?;
            let mut out = std::io::stdout().lock();
            writeln!(out, "{schema}")?;
            Ok(())
        }
        Command::Preset { path } => {
            options.save(&path)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
    }
}

fn serve(options: &Options) -> Result<(), PlinthError> {
    let model = options.server.root.join(&options.model);
    let _ = ModelSource::probe(&model);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(plinth::server::serve(&options.server))
}

fn simulate(
    options: &Options,
    seconds: f32,
    fps: u32,
    presses: &[KeyPress],
) -> Result<(), PlinthError> {
    let start = Instant::now();
    let mut viewer = Viewer::new(options, start)?;
    let _ = viewer.load_model(&options.server.root.join(&options.model));
    let input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut timing = FrameTiming::new(fps.max(1));

    let step = timing.frame_duration();
    let end = start + Duration::try_from_secs_f32(seconds.max(0.0)).unwrap_or_default();
    let mut pending = presses.iter().peekable();
    let mut now = start;
    let mut last_slide = viewer.active_slide();
    let mut out = std::io::stdout().lock();

    while now <= end {
        while let Some(press) = pending.next_if(|p| start + p.at <= now) {
            match input.handle_key_press(&press.key) {
                Some(command) => {
                    log::debug!("{:.2}s {} -> {command:?}", press.at.as_secs_f32(), press.key);
                    viewer.execute(command, now);
                }
                None => log::warn!("key {} is not bound", press.key),
            }
        }

        let dt = timing.begin_frame(now);
        let frame = viewer.update(now, dt);

        if frame.position.index != last_slide {
            last_slide = frame.position.index;
            writeln!(
                out,
                "{:7.2}s  {}  {}",
                (now - start).as_secs_f32(),
                frame.position,
                viewer.current_slide().title
            )?;
        }
        log::trace!(
            "{:.3}s yaw {:.4} auto {} resume {}",
            (now - start).as_secs_f32(),
            frame.yaw,
            frame.auto_active,
            frame.resume_pending
        );
        now += step;
    }

    writeln!(
        out,
        "finished at {}, yaw {:.4} rad, auto {}",
        viewer.position(),
        viewer.rotation().current_angle(),
        if viewer.is_auto_enabled() { "on" } else { "off" }
    )?;
    report_model(&mut out, viewer.model(), &options.model)
}

fn report_model(
    out: &mut impl Write,
    model: &ModelSource,
    configured: &str,
) -> Result<(), PlinthError> {
    match model {
        ModelSource::Model(path) => {
            writeln!(out, "model: {}", path.display())?;
        }
        ModelSource::Placeholder { reason } => {
            writeln!(out, "model: placeholder ({configured}: {reason})")?;
        }
    }
    Ok(())
}
