use car_scenes::api::{SceneChart, SceneChartConfig, render_load_failure};
use car_scenes::core::{Dataset, Viewport};
use car_scenes::render::SvgRenderer;
use car_scenes::scene::SCENE_COUNT;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "scene_tour_out";

#[derive(Debug)]
enum DataSource {
    File(PathBuf),
    Url(String),
}

#[derive(Debug)]
struct CliArgs {
    source: DataSource,
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
    viewport: Option<Viewport>,
    resize_to: Option<Viewport>,
}

fn main() {
    let _ = car_scenes::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            SceneChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => SceneChartConfig::default(),
    };
    if let Some(viewport) = args.viewport {
        config.viewport = viewport;
    }

    let dataset = match load_dataset(&args.source) {
        Ok(dataset) => dataset,
        Err(err) => {
            let mut renderer = SvgRenderer::new();
            render_load_failure(&mut renderer, config.viewport, &err)
                .map_err(|render_err| format!("failed to render error banner: {render_err}"))?;
            write_file(&args.output_dir.join("load_error.svg"), renderer.document())?;
            return Err(err.to_string());
        }
    };

    let mut chart = SceneChart::new(SvgRenderer::new(), config, dataset)
        .map_err(|err| format!("chart init failed: {err}"))?;

    for step in 0..SCENE_COUNT {
        if step > 0 {
            chart
                .advance_scene()
                .map_err(|err| format!("advance failed: {err}"))?;
        }
        let scene = chart.current_scene();
        let name = format!("scene_{}_{}.svg", scene.index, scene.kind.label());
        println!(
            "{name}: {} markers ({} records)",
            chart.frame().circles.len(),
            chart.dataset().len()
        );
        write_file(&args.output_dir.join(name), chart.renderer().document())?;
    }

    if let Some(viewport) = args.resize_to {
        chart
            .resize(viewport)
            .map_err(|err| format!("resize failed: {err}"))?;
        let scene = chart.current_scene();
        let name = format!(
            "scene_{}_{}_{}x{}.svg",
            scene.index,
            scene.kind.label(),
            viewport.width,
            viewport.height
        );
        println!("{name}: resized");
        write_file(&args.output_dir.join(name), chart.renderer().document())?;
    }

    let snapshot = chart
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| format!("snapshot failed: {err}"))?;
    write_file(&args.output_dir.join("snapshot.json"), &snapshot)?;
    Ok(())
}

fn load_dataset(source: &DataSource) -> car_scenes::ChartResult<Dataset> {
    match source {
        DataSource::File(path) => {
            let file = fs::File::open(path).map_err(|err| {
                car_scenes::ChartError::DatasetLoad(format!(
                    "failed to open `{}`: {err}",
                    path.display()
                ))
            })?;
            Dataset::from_reader(std::io::BufReader::new(file))
        }
        #[cfg(feature = "fetch")]
        DataSource::Url(url) => Dataset::fetch(url),
        #[cfg(not(feature = "fetch"))]
        DataSource::Url(url) => Err(car_scenes::ChartError::DatasetLoad(format!(
            "cannot fetch `{url}`: built without feature `fetch`"
        ))),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_viewport(value: &str) -> Result<Viewport, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let width = width
        .parse::<u32>()
        .map_err(|err| format!("invalid width `{width}`: {err}"))?;
    let height = height
        .parse::<u32>()
        .map_err(|err| format!("invalid height `{height}`: {err}"))?;
    Ok(Viewport::new(width, height))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut source: Option<DataSource> = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut config_path: Option<PathBuf> = None;
    let mut viewport: Option<Viewport> = None;
    let mut resize_to: Option<Viewport> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                source = Some(DataSource::File(PathBuf::from(value)));
            }
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --url".to_owned())?;
                source = Some(DataSource::Url(value));
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --size".to_owned())?;
                viewport = Some(parse_viewport(&value)?);
            }
            "--resize" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --resize".to_owned())?;
                resize_to = Some(parse_viewport(&value)?);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let source = source.unwrap_or_else(|| {
        DataSource::Url(car_scenes::core::DEFAULT_DATASET_URL.to_owned())
    });
    Ok(CliArgs {
        source,
        output_dir,
        config_path,
        viewport,
        resize_to,
    })
}

fn usage_message() -> String {
    format!(
        "usage: scene_tour [--data <cars.json> | --url <url>] [--output-dir <dir>] \
         [--config <config.json>] [--size WxH] [--resize WxH]\n\
         \n\
         Renders every scene to SVG. Defaults: --url {} --output-dir {DEFAULT_OUTPUT_DIR}",
        car_scenes::core::DEFAULT_DATASET_URL
    )
}
