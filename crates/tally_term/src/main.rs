//! tally-term - the counter widget in a terminal
//!
//! Counts from 0 to a target at a configurable speed. A background task plays
//! the role of the browser's frame callback (60 Hz) and the session throttles
//! it down to the configured fps. Commands are read line by line from stdin.
//!
//! Config lookup: `--config <path>`, else the OS config dir:
//! - Linux: ~/.config/tally/config.json
//! - Windows: %APPDATA%\tally\config.json
//! - MacOS: ~/Library/Application Support/tally/config.json

use std::io::{BufRead as _, Write as _};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use tally::config::{Settings, TallyConfig};
use tally::target::parse_target;
use tally::{Fps, Variant};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};
use tracing::{debug, info, warn};

mod command;
mod paths;
mod session;

use command::{parse_command, Command, HELP};
use paths::AppPaths;
use session::Session;

const DISPLAY_REFRESH: Duration = Duration::from_micros(16_667);

// ═══════════════════════════════════════════════════════════════════════════
// Arguments
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    target: Option<u64>,
    fps: Option<Fps>,
    variant: Option<Variant>,
    autostart: bool,
}

fn usage() -> ! {
    eprintln!("tally-term: count from 0 to a target number\n");
    eprintln!("Usage: tally-term [options]\n");
    eprintln!("Options:");
    eprintln!("  --config <path>       Read settings from a JSON file");
    eprintln!("  --target <N>          Number to count to (default 100)");
    eprintln!("  --fps <1-120>         Counting speed (default 33)");
    eprintln!("  --variant <name>      playful | classic | plain");
    eprintln!("  --go                  Start counting immediately");
    eprintln!();
    eprintln!("{HELP}");
    process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().unwrap_or_else(|| usage());
        match flag.as_str() {
            "--config" => args.config = Some(PathBuf::from(value())),
            "--target" => match parse_target(&value()) {
                Ok(t) => args.target = Some(t),
                Err(e) => {
                    eprintln!("--target: {e}");
                    process::exit(1);
                }
            },
            "--fps" => {
                let v = value();
                match v.parse::<u32>().ok().and_then(Fps::new) {
                    Some(f) => args.fps = Some(f),
                    None => {
                        eprintln!("--fps: '{v}' is not between 1 and 120");
                        process::exit(1);
                    }
                }
            }
            "--variant" => {
                let v = value();
                match Variant::by_name(&v) {
                    Some(variant) => args.variant = Some(variant),
                    None => {
                        eprintln!("--variant: unknown variant '{v}'");
                        process::exit(1);
                    }
                }
            }
            "--go" => args.autostart = true,
            _ => usage(),
        }
    }
    args
}

fn load_settings(args: &Args) -> Result<Settings, Box<dyn std::error::Error>> {
    let cfg = match &args.config {
        Some(path) => TallyConfig::load(path)?,
        None => {
            let paths = AppPaths::new()?;
            let file = paths.config_file();
            if file.exists() {
                info!("Loading config from {}", file.display());
                TallyConfig::load(&file)?
            } else {
                debug!("No config at {}; using defaults", file.display());
                TallyConfig::default()
            }
        }
    };

    let mut settings = cfg.validate()?;
    if let Some(t) = args.target {
        settings.target = t;
    }
    if let Some(f) = args.fps {
        settings.fps = f;
    }
    if let Some(v) = &args.variant {
        settings.variant = v.clone();
    }
    Ok(settings)
}

// ═══════════════════════════════════════════════════════════════════════════
// Frame loop
// ═══════════════════════════════════════════════════════════════════════════

/// Owns the session and the pending frame task.
struct Driver {
    session: Arc<Mutex<Session>>,
    origin: Instant,
    frames: Option<JoinHandle<()>>,
}

impl Driver {
    fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            origin: Instant::now(),
            frames: None,
        }
    }

    fn now_ms(origin: Instant) -> f64 {
        origin.elapsed().as_secs_f64() * 1000.0
    }

    fn spawn_frames(&mut self) {
        self.cancel_frames();
        let session = Arc::clone(&self.session);
        let origin = self.origin;
        self.frames = Some(tokio::spawn(async move {
            let mut ticker = time::interval(DISPLAY_REFRESH);
            ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let mut s = session.lock().await;
                let (frame, text) = s.frame(Self::now_ms(origin));
                if let Some(text) = text {
                    draw(&text);
                }
                if !frame.wants_next_frame() {
                    println!();
                    info!("Counting finished at {}", s.counter.count());
                    break;
                }
            }
        }));
    }

    fn cancel_frames(&mut self) {
        if let Some(handle) = self.frames.take() {
            handle.abort();
        }
    }

    /// Returns false when the session should end.
    async fn handle(&mut self, cmd: Command) -> bool {
        let now = Self::now_ms(self.origin);
        let session = Arc::clone(&self.session);
        let mut s = session.lock().await;
        let result = match cmd {
            Command::Start => s.start(now).map(|()| {
                info!(
                    "Counting to {} at {} fps",
                    s.counter.target(),
                    s.speed.fps().get()
                );
                true
            }),
            Command::Pause => s.pause().map(|()| false),
            Command::Stop => s.stop().map(|()| false),
            Command::Reset => {
                s.reset();
                Ok(false)
            }
            Command::Target(text) => s.set_target(&text).map(|()| false),
            Command::Fps(text) => s.set_fps(&text).map(|()| false),
            Command::Status => {
                println!("{}", s.status_line());
                return true;
            }
            Command::Help => {
                println!("{HELP}");
                return true;
            }
            Command::Quit => return false,
        };

        match result {
            Ok(true) => {
                drop(s);
                self.spawn_frames();
            }
            Ok(false) => {
                println!("{}", s.status_line());
                let running = s.counter.is_running();
                drop(s);
                if !running {
                    self.cancel_frames();
                }
            }
            Err(e) => warn!("{}", e),
        }
        true
    }
}

/// Read stdin on a plain thread and forward lines.
///
/// A read parked in tokio's blocking pool would hold the runtime open after
/// Ctrl-C; a detached thread does not. The channel closes on EOF or error.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("stdin read failed: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

fn draw(text: &str) {
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "\r\x1b[2K{text}");
    let _ = out.flush();
}

// ═══════════════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (stderr, so it does not interleave with the counter line)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let settings = load_settings(&args)?;
    info!(
        "Variant '{}', target {}, {} fps",
        settings.variant.name,
        settings.target,
        settings.fps.get()
    );

    let session = Session::new(settings.target, settings.fps, settings.variant);
    println!("{}", session.variant.labels.title);
    println!("{}", session.status_line());

    let mut driver = Driver::new(session);
    if args.autostart {
        driver.handle(Command::Start).await;
    }

    let mut lines = spawn_stdin_reader();
    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    debug!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(cmd) => {
                        if !driver.handle(cmd).await {
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                info!("Ctrl-C");
                break;
            }
        }
    }

    driver.cancel_frames();
    Ok(())
}
