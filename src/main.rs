extern crate sphere_tracer as root;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use root::output::{write_png, write_ppm};
use root::parsing::{load_json, Config};
use root::renderer::render;
use root::shading::Shading;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// json file with render settings and scene. the built in scene is used when omitted
    #[structopt(long)]
    pub config_file: Option<PathBuf>,
    #[structopt(short, long)]
    pub output: Option<PathBuf>,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    #[structopt(short, long)]
    pub samples: Option<usize>,
    /// one of depth, normal, silhouette
    #[structopt(long)]
    pub shading: Option<Shading>,
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(long)]
    pub threads: Option<usize>,
    /// also write a png next to the ppm
    #[structopt(long)]
    pub png: bool,
    /// validate the configuration and exit without rendering
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

impl Opt {
    fn apply(&self, config: &mut Config) {
        let settings = &mut config.render_settings;
        if let Some(output) = &self.output {
            settings.filename = output.clone();
        }
        if let Some(width) = self.width {
            settings.resolution.width = width;
        }
        if let Some(height) = self.height {
            settings.resolution.height = height;
        }
        if let Some(samples) = self.samples {
            settings.samples = samples;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.threads.is_some() {
            settings.threads = self.threads;
        }
        if let Some(shading) = self.shading {
            config.scene.shading = shading;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opts.log_level)),
        )
        .init();

    let mut config: Config = match &opts.config_file {
        Some(path) => load_json(path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("couldn't read config file {}", path.display()))?,
        None => Config::default(),
    };
    opts.apply(&mut config);

    let (scene, settings) = config.build().context("invalid scene configuration")?;

    let threads = config.render_settings.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;

    if opts.dry_run {
        info!("configuration is valid, skipping render");
        return Ok(());
    }

    let film = render(&scene, &settings)?;

    let filename = &config.render_settings.filename;
    write_ppm(&film, filename).with_context(|| format!("failed to write {}", filename.display()))?;
    if opts.png {
        let png_filename = filename.with_extension("png");
        write_png(&film, &png_filename)
            .with_context(|| format!("failed to write {}", png_filename.display()))?;
    }
    Ok(())
}
