use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in scenes.
    Presets,
    /// Print a scene as JSON (handy as a starting point for custom scenes).
    Dump(SceneArgs),
    /// Print every layer's style at evenly spaced progress values.
    Sample(SampleArgs),
    /// Jump the scroll position and step the scene frame by frame.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Built-in scene name (see `scrollfx presets`).
    #[arg(long, conflicts_with = "in_path", required_unless_present = "in_path")]
    scene: Option<String>,

    /// Scene JSON file.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of samples from progress 0 to 1 inclusive.
    #[arg(long, default_value_t = 11)]
    steps: u32,

    /// Emit one JSON object per sample instead of CSS.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Scroll position (px) to jump to before stepping.
    #[arg(long)]
    scroll_to: f64,

    /// Frames per second of the simulated render loop.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Maximum number of frames to step.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Emit one JSON frame per line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Dump(args) => cmd_dump(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<scrollfx::Scene> {
    let scene = match (&args.scene, &args.in_path) {
        (Some(name), _) => scrollfx::preset(name).with_context(|| {
            format!(
                "unknown scene '{name}' (available: {})",
                scrollfx::PRESET_NAMES.join(", ")
            )
        })?,
        (None, Some(path)) => scrollfx::Scene::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        (None, None) => anyhow::bail!("pass --scene <name> or --in <file>"),
    };
    scene
        .validate()
        .with_context(|| format!("invalid scene '{}'", scene.name()))?;
    Ok(scene)
}

fn cmd_presets() -> anyhow::Result<()> {
    for scene in scrollfx::presets() {
        let def = scene.def();
        let smoothing = match &def.spring {
            Some(s) => format!("spring {}/{}", s.stiffness, s.damping),
            None => "no smoothing".to_owned(),
        };
        println!("{:<12} {} layers, {smoothing}", def.name, def.layers.len());
    }
    Ok(())
}

fn cmd_dump(args: SceneArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args)?;
    println!("{}", scene.to_json_pretty()?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps >= 2, "--steps must be at least 2");
    let scene = load_scene(&args.scene)?;
    let driver = scene.driver()?;

    for i in 0..args.steps {
        let p = scrollfx::Progress::new(f64::from(i) / f64::from(args.steps - 1));
        if args.json {
            let layers: serde_json::Map<String, serde_json::Value> = driver
                .layers()
                .iter()
                .map(|l| {
                    let style = serde_json::to_value(l.evaluate(p, p))?;
                    Ok((l.name().to_owned(), style))
                })
                .collect::<serde_json::Result<_>>()?;
            let line = serde_json::json!({ "progress": p.get(), "layers": layers });
            println!("{line}");
        } else {
            println!("progress {}", scrollfx::fmt_number(p.get()));
            for l in driver.layers() {
                println!("  {:<16} {}", l.name(), l.evaluate(p, p).to_css());
            }
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    let scene = load_scene(&args.scene)?;
    let mut driver = scene.driver()?;
    let dt = 1.0 / f64::from(args.fps);

    let raw = driver.on_scroll(args.scroll_to);
    tracing::info!(scene = scene.name(), raw = raw.get(), "scrolled");

    for _ in 0..args.frames {
        let out = driver.tick(dt);
        if args.json {
            println!("{}", serde_json::to_string(&out)?);
        } else {
            println!(
                "frame {:>4}  raw {:<6}  smoothed {}",
                out.frame,
                scrollfx::fmt_number(out.raw.get()),
                scrollfx::fmt_number(out.smoothed.get())
            );
        }
        if driver.is_settled() {
            eprintln!("settled after {} frames", out.frame);
            return Ok(());
        }
    }
    eprintln!("not settled after {} frames", args.frames);
    Ok(())
}
