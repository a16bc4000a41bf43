use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use vectormation::{
    Circle, Ease, Line, MorphObject, MorphOpts, Playback, Point, Polygon, Rectangle, Scene,
    SceneConfig, Shape, ShapeExt, StyleMap, Time, Trace,
};

#[derive(Parser, Debug)]
#[command(name = "vectormation", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a single frame of a demo scene as SVG.
    Frame(FrameArgs),
    /// Write every frame of a demo scene as numbered SVG files.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Demo scene to build.
    #[arg(long, value_enum)]
    demo: Demo,

    /// Scene time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Optional scene configuration JSON (canvas, text_dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Demo scene to build.
    #[arg(long, value_enum)]
    demo: Demo,

    /// Output directory for `frame_NNNNN.svg` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// First time to render; negative values count back from the end.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    start: f64,

    /// Optional scene configuration JSON (canvas, text_dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Demo {
    /// Basic shapes drawn, moved and faded.
    Shapes,
    /// A triangle and a circle morphing into a square.
    Morph,
    /// A dot orbiting the center, traced and highlighted.
    Trace,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let config: SceneConfig = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(config)
}

fn build_demo(demo: Demo, config: SceneConfig) -> anyhow::Result<Scene> {
    let mut scene = Scene::new(config);
    scene.set_background(0.0, -1.0, &StyleMap::new().with("fill", "#1c1c24")?);
    match demo {
        Demo::Shapes => demo_shapes(&mut scene)?,
        Demo::Morph => demo_morph(&mut scene)?,
        Demo::Trace => demo_trace(&mut scene)?,
    }
    Ok(scene)
}

fn demo_shapes(scene: &mut Scene) -> anyhow::Result<()> {
    let circle = Circle::new(80.0, Point::new(250.0, 500.0), 0.0, &StyleMap::new());
    circle
        .center
        .move_to(0.5, 2.5, Point::new(750.0, 500.0), true, Ease::Smooth);
    scene.add(circle);

    let rect = Rectangle::new(
        200.0,
        120.0,
        Point::new(400.0, 150.0),
        0.0,
        &StyleMap::new().with("fill", "BLUE")?,
    )
    .with_corners(12.0, 12.0);
    let outline = rect.create(0.0, 1.5, true)?;
    scene.add(rect);
    scene.add(outline);

    let triangle = Polygon::equilateral_triangle(
        180.0,
        0.0,
        Point::new(500.0, 780.0),
        0.0,
        &StyleMap::new().with("fill", "GOLD")?,
    );
    triangle.fade_in(1.0, 2.0, true, Ease::Smooth);
    triangle.shift(0.0, -60.0, 2.0, Some(3.0), Ease::RushFrom)?;
    scene.add(triangle);

    let line = Line::new(
        Point::new(100.0, 950.0),
        Point::new(900.0, 950.0),
        0.0,
        &StyleMap::new(),
    );
    line.write(0.0, 2.0, 3.0, true);
    scene.add(line);
    Ok(())
}

fn demo_morph(scene: &mut Scene) -> anyhow::Result<()> {
    let triangle = Polygon::equilateral_triangle(
        260.0,
        0.0,
        Point::new(300.0, 500.0),
        0.0,
        &StyleMap::new().with("fill", "RED")?,
    );
    let circle = Circle::new(
        90.0,
        Point::new(700.0, 300.0),
        0.0,
        &StyleMap::new().with("fill", "TEAL")?,
    );
    let square = Rectangle::new(
        300.0,
        300.0,
        Point::new(550.0, 500.0),
        0.0,
        &StyleMap::new().with("fill", "GREEN")?,
    );
    let morph = MorphObject::new(
        &[triangle.clone().into_shared(), circle.clone().into_shared()],
        &[square.clone().into_shared()],
        1.0,
        3.0,
        Ease::Smooth,
        true,
        MorphOpts::default(),
    )?;
    scene.add(triangle);
    scene.add(circle);
    scene.add(square);
    scene.add(morph);
    Ok(())
}

fn demo_trace(scene: &mut Scene) -> anyhow::Result<()> {
    let pivot = Point::new(500.0, 500.0);
    let dot = Circle::dot(Point::new(500.0, 250.0), 0.0, &StyleMap::new());
    dot.center.rotate_around(0.0, 4.0, pivot, 360.0, true, true);
    let trace = Trace::new(
        &dot.center,
        0.0,
        Some(4.0),
        1.0 / 30.0,
        &StyleMap::new().with("stroke", "YELLOW")?,
    )?;
    let highlight = dot.bounding_rect_attached(0.0, 8.0, true)?;
    let hub = Circle::dot(pivot, 0.0, &StyleMap::new().with("fill", "WHITE")?);

    scene.add(trace);
    scene.add(hub);
    scene.add(dot.with_z(1.0));
    scene.add(highlight);
    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let scene = build_demo(args.demo, config)?;
    write_svg(&args.out, &scene.frame(args.time))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let scene = build_demo(args.demo, config)?;
    let playback = Playback::for_scene(&scene, args.start, args.fps)?;
    tracing::info!(
        demo = ?args.demo,
        start = playback.start(),
        end = playback.end(),
        "rendering frames"
    );

    let times: Vec<Time> = playback.frames().collect();
    for (index, time) in times.iter().enumerate() {
        let path = args.out_dir.join(format!("frame_{index:05}.svg"));
        write_svg(&path, &scene.frame(*time))?;
    }
    eprintln!("wrote {} frames to {}", times.len(), args.out_dir.display());
    Ok(())
}
