use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::{
    env,
    error::Error,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
use trajtrack_rs::{
    Detection, SubjectTracker, TrackScore, TrajectoryConfig, VideoInfo,
};

#[derive(Debug, Serialize)]
struct TrajectoryJson {
    identity: usize,
    score: TrackScore,
    bbx_xyxy: Vec<[f32; 4]>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_usage();
        return Ok(());
    }

    let detections_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/track_history"));
    let width = args
        .get(2)
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(1920);
    let height = args
        .get(3)
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(1080);
    let n_people = args
        .get(4)
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(1);
    let center_priority =
        !args.iter().any(|arg| arg == "--no-center-priority");
    let output_json = args
        .get(5)
        .filter(|value| !value.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/trajectories.json"));

    let json_files = list_json_files(&detections_dir)?;
    if json_files.is_empty() {
        return Err(format!(
            "No json files found in {}",
            detections_dir.display()
        )
        .into());
    }

    let progress = ProgressBar::new(json_files.len() as u64);
    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
    )?
    .progress_chars("=>-");
    progress.set_style(style);
    progress.set_message("loading detections");

    let mut frames = Vec::with_capacity(json_files.len());
    for json_path in json_files.iter() {
        frames.push(load_detections(json_path)?);
        progress.inc(1);
    }
    progress.finish_with_message("reconstructing");

    let video = VideoInfo::new(frames.len(), width, height)?;
    let config = TrajectoryConfig::default()
        .with_n_people(n_people)
        .with_center_priority(center_priority);
    let tracker = SubjectTracker::new(config)?;

    let ranking = tracker.rank(&frames, &video)?;
    for score in ranking.scores.iter() {
        println!(
            "identity {:>4}  frames {:>6}  area_sum {:>8.3}  score {:.4}",
            score.identity, score.length, score.area_sum, score.score
        );
    }

    let trajectories = tracker
        .get_n_tracks(&frames, &video)?
        .into_iter()
        .map(|track| TrajectoryJson {
            identity: track.identity,
            score: track.score,
            bbx_xyxy: track
                .boxes
                .outer_iter()
                .map(|row| [row[0], row[1], row[2], row[3]])
                .collect(),
        })
        .collect::<Vec<_>>();

    if let Some(parent) = output_json.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_json, serde_json::to_string_pretty(&trajectories)?)?;
    println!(
        "Saved {} trajectories to {}",
        trajectories.len(),
        output_json.display()
    );

    Ok(())
}

fn print_usage() {
    println!(
        "Usage: cargo run --example trajectory_from_json \
[detections_dir] [width] [height] [n_people] [output_json] [--no-center-priority]\n\
Defaults:\n\
  detections_dir: data/track_history (one json per frame, sorted by name)\n\
  width: 1920\n\
  height: 1080\n\
  n_people: 1\n\
  output_json: data/trajectories.json\n\
Each frame file holds a list of {{\"id\": <int>, \"bbx_xyxy\": [x1, y1, x2, y2]}}."
    );
}

fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut jsons = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(OsStr::to_str) == Some("json") {
            jsons.push(path);
        }
    }
    jsons.sort();
    Ok(jsons)
}

fn load_detections(path: &Path) -> Result<Vec<Detection>, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let detections: Vec<Detection> = serde_json::from_str(&data)?;
    Ok(detections)
}
