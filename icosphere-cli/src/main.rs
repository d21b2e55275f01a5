use anyhow::Result;
use clap::{Parser, Subcommand};
use icosphere_core::{settings, IcosphereSettings, MeshSummary, VERSION};

#[derive(Parser, Debug)]
#[command(name = "icosphere", version = VERSION, about = "Icosphere mesh generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an icosphere from command-line parameters and print its stats
    Generate {
        #[arg(long, default_value_t = 1.0)]
        radius: f32,
        #[arg(long, default_value_t = 2)]
        subdivision: u32,
        /// Emit seam-corrected UVs (switches to duplicated vertices)
        #[arg(long)]
        uv: bool,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load icosphere settings (YAML or JSON), generate and print stats
    Inspect {
        path: String,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate { radius, subdivision, uv, json } => {
            let settings = IcosphereSettings { radius, subdivision, has_uv: uv, ..Default::default() };
            run(&settings, json)?;
        }
        Command::Inspect { path, json } => {
            let settings = settings::load_from_path(&path)?;
            log::info!("loaded settings from {}", path);
            run(&settings, json)?;
        }
    }
    Ok(())
}

fn run(settings: &IcosphereSettings, json: bool) -> Result<()> {
    let mesh = settings.generate()?;
    let summary = mesh.summary(settings.radius, settings.subdivision);
    log::info!(
        "generated {} vertices / {} triangles ({:?})",
        summary.vertex_count,
        summary.triangle_count,
        summary.mode
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(s: &MeshSummary) {
    println!("Icosphere: radius={} subdivision={}", s.radius, s.subdivision);
    println!("  mode: {:?}", s.mode);
    println!("  vertices: {}", s.vertex_count);
    println!("  triangles: {} (indices={}, {:?})", s.triangle_count, s.index_count, s.index_format);
    println!("  uv: {}", if s.has_uv { "yes" } else { "no" });
    println!("  interleaved buffer: {} bytes", s.vertex_buffer_bytes);
    println!("  max radial error: {:.2e}", s.max_radial_error);
}
