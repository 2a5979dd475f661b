use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prettytable::{cell, row, Table};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};
use yolo_annotate::{
    config::Config,
    dataset::{
        image_size_of, load_image_labels, save_image_labels, ClassRegistry, DatasetScanner,
        DatasetSummary,
    },
    label_text, to_normalized, ColorGenerator, DetectionPostProcessor, PixelBoundingBox,
};

#[derive(Debug, Clone, Parser)]
/// Inspect and edit YOLO annotation datasets
struct Args {
    #[clap(long)]
    /// configuration file
    config_file: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List the images of a dataset folder and whether they are labelled
    Scan {
        /// dataset folder
        dataset_dir: PathBuf,
    },
    /// Print the boxes of an image in pixel units
    Show {
        /// image file
        image_file: PathBuf,
    },
    /// Save detector output as the labels of an image
    ImportDetections {
        /// image file
        image_file: PathBuf,
        /// JSON array of [x1, y1, x2, y2, confidence, class_id] rows
        detections_file: PathBuf,
        #[clap(long)]
        /// override the configured confidence threshold
        confidence_threshold: Option<f64>,
    },
    /// Print pixel boxes in the label file format
    Normalize {
        /// JSON array of {class_id, x, y, width, height} boxes
        boxes_file: PathBuf,
        #[clap(long)]
        /// image width in pixels
        width: f64,
        #[clap(long)]
        /// image height in pixels
        height: f64,
    },
    /// Generate overlay colors
    Color {
        #[clap(long, default_value = "1")]
        /// number of colors
        count: usize,
    },
    /// Show or edit the class list of a dataset folder
    Classes {
        /// dataset folder
        dataset_dir: PathBuf,
        #[clap(subcommand)]
        action: Option<ClassesAction>,
    },
}

#[derive(Debug, Clone, Subcommand)]
enum ClassesAction {
    /// Add a class
    Add {
        name: String,
        #[clap(long)]
        /// class id, defaults to one above the largest id
        id: Option<i32>,
    },
    /// Rename a class
    Rename { id: i32, name: String },
    /// Remove a class
    Remove { id: i32 },
}

fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    // parse arguments
    let Args {
        config_file,
        command,
    } = Args::parse();
    let config = match config_file {
        Some(config_file) => Config::open(&config_file).with_context(|| {
            format!("failed to load config file '{}'", config_file.display())
        })?,
        None => Config::default(),
    };

    match command {
        Command::Scan { dataset_dir } => scan(&config, &dataset_dir)?,
        Command::Show { image_file } => show(&config, &image_file)?,
        Command::ImportDetections {
            image_file,
            detections_file,
            confidence_threshold,
        } => import_detections(&config, &image_file, &detections_file, confidence_threshold)?,
        Command::Normalize {
            boxes_file,
            width,
            height,
        } => normalize(&boxes_file, width, height)?,
        Command::Color { count } => {
            let mut generator = ColorGenerator::from_entropy();
            (0..count).for_each(|_| println!("{}", generator.generate()));
        }
        Command::Classes {
            dataset_dir,
            action,
        } => classes(&config, &dataset_dir, action)?,
    }

    Ok(())
}

fn scan(config: &Config, dataset_dir: &Path) -> Result<()> {
    if !dataset_dir.is_dir() {
        warn!("'{}' is not a directory", dataset_dir.display());
    }

    let statuses = DatasetScanner::from_config(&config.dataset).scan_sorted(dataset_dir);

    let mut table = Table::new();
    table.add_row(row!["image", "labelled"]);
    statuses.iter().for_each(|status| {
        table.add_row(row![status.path.display(), status.is_labelled]);
    });
    table.printstd();

    let summary = DatasetSummary::new(&statuses);
    println!(
        "{} images, {} labelled, {} unlabelled",
        summary.total,
        summary.labelled,
        summary.unlabelled()
    );

    Ok(())
}

fn show(config: &Config, image_file: &Path) -> Result<()> {
    let size = image_size_of(image_file)?;
    let boxes = load_image_labels(image_file, &size)?;
    let registry = match image_file.parent() {
        Some(dir) => ClassRegistry::load(dir.join(&config.dataset.classes_file))?,
        None => ClassRegistry::default(),
    };

    let mut table = Table::new();
    table.add_row(row!["class", "name", "x", "y", "width", "height"]);
    boxes.iter().for_each(|bbox| {
        let name = registry
            .get(bbox.class_id)
            .map(|entry| entry.name.as_str())
            .unwrap_or("");
        table.add_row(row![
            bbox.class_id,
            name,
            format!("{:.2}", bbox.x),
            format!("{:.2}", bbox.y),
            format!("{:.2}", bbox.width),
            format!("{:.2}", bbox.height)
        ]);
    });
    table.printstd();

    println!(
        "{} boxes on a {}x{} image",
        boxes.len(),
        size.w(),
        size.h()
    );

    Ok(())
}

fn import_detections(
    config: &Config,
    image_file: &Path,
    detections_file: &Path,
    confidence_threshold: Option<f64>,
) -> Result<()> {
    let text = fs::read_to_string(detections_file)
        .with_context(|| format!("unable to read '{}'", detections_file.display()))?;
    let rows: Vec<Vec<f64>> = serde_json::from_str(&text).with_context(|| {
        format!(
            "'{}' must be a JSON array of numeric rows",
            detections_file.display()
        )
    })?;

    let processor = match confidence_threshold {
        Some(threshold) => DetectionPostProcessor::new(threshold),
        None => DetectionPostProcessor::from_config(&config.detection),
    };
    let report = processor.process_with_report(&rows);
    info!(
        "kept {} detections, skipped {}",
        report.converted.len(),
        report.skipped
    );

    let size = image_size_of(image_file)?;
    let labelled = save_image_labels(image_file, &report.converted, &size)?;
    info!(
        "'{}' is {}",
        image_file.display(),
        if labelled { "labelled" } else { "unlabelled" }
    );

    Ok(())
}

fn normalize(boxes_file: &Path, width: f64, height: f64) -> Result<()> {
    let text = fs::read_to_string(boxes_file)
        .with_context(|| format!("unable to read '{}'", boxes_file.display()))?;
    let boxes: Vec<PixelBoundingBox> = serde_json::from_str(&text)
        .with_context(|| format!("'{}' must be a JSON array of boxes", boxes_file.display()))?;

    let normalized = to_normalized(&boxes, width, height)?;
    if normalized.len() < boxes.len() {
        warn!(
            "dropped {} boxes without positive extent",
            boxes.len() - normalized.len()
        );
    }
    print!("{}", label_text::format(&normalized));

    Ok(())
}

fn classes(config: &Config, dataset_dir: &Path, action: Option<ClassesAction>) -> Result<()> {
    let path = dataset_dir.join(&config.dataset.classes_file);
    let mut registry = ClassRegistry::load(&path)?;

    if let Some(action) = action {
        match action {
            ClassesAction::Add { name, id } => {
                let id = id.unwrap_or_else(|| registry.next_id());
                registry.add(id, name)?;
            }
            ClassesAction::Rename { id, name } => registry.rename(id, name)?,
            ClassesAction::Remove { id } => {
                if registry.remove(id).is_none() {
                    warn!("class id {} does not exist", id);
                }
            }
        }
        registry.save(&path)?;
        info!("saved class list to '{}'", path.display());
    }

    let mut table = Table::new();
    table.add_row(row!["id", "name"]);
    registry.iter().for_each(|entry| {
        table.add_row(row![entry.id, entry.name]);
    });
    table.printstd();

    Ok(())
}
