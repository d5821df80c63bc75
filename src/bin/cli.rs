//! CLI application for skin tone classification.
//!
//! Landmarks come from an external landmark model, saved as JSON.
//!
//! Usage:
//!   skin-tone <image> --landmarks face.json            # Human-readable output
//!   skin-tone <image> --landmarks face.json --json     # JSON output
//!   skin-tone <image> --landmarks face.json -o out.json
//!   skin-tone --print-config > config.json             # Default configuration

use clap::{Parser, ValueEnum};
use skin_tone::{
    Analysis, AnalyzerConfig, ImageCrateDecoder, RecommendationEntry, SkinToneAnalyzer,
    StaticLandmarks, UndertoneRule,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skin-tone")]
#[command(author, version, about = "Skin tone classification and color recommendations", long_about = None)]
struct Args {
    /// Input image file
    #[arg(required_unless_present = "print_config")]
    image: Option<PathBuf>,

    /// Landmark JSON file: one face `[{"index":0,"x":..,"y":..}, ...]` or a list of faces
    #[arg(short, long, required_unless_present = "print_config")]
    landmarks: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Analyzer configuration file (sample plan, undertone rule)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Undertone rule, overrides the configuration file
    #[arg(long, value_enum)]
    undertone_rule: Option<RuleArg>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RuleArg {
    RedBlue,
    ChannelDominance,
}

impl From<RuleArg> for UndertoneRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::RedBlue => UndertoneRule::RedBlue,
            RuleArg::ChannelDominance => UndertoneRule::ChannelDominance,
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {:?}", path);
            AnalyzerConfig::from_json_file(path)?
        }
        None => AnalyzerConfig::default(),
    };
    if let Some(rule) = args.undertone_rule {
        config.undertone_rule = rule.into();
    }

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let (Some(image_path), Some(landmarks_path)) = (&args.image, &args.landmarks) else {
        return Err("an image and a landmark file are required".into());
    };

    let analyzer = SkinToneAnalyzer::new(config)?;

    log::info!("Loading landmarks from {:?}", landmarks_path);
    let provider = StaticLandmarks::from_json_file(landmarks_path)?;

    log::info!("Loading image {:?}", image_path);
    let bytes = std::fs::read(image_path)?;

    let analysis = analyzer.analyze(&bytes, &ImageCrateDecoder, &provider)?;

    // Generate output
    let output_str = if args.json {
        serde_json::to_string_pretty(&analysis)?
    } else {
        format_human_readable(&image_path.display().to_string(), &analysis)
    };

    // Write output
    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        log::info!("Output written to {:?}", path);
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(image: &str, a: &Analysis) -> String {
    let mut s = String::new();

    s.push_str(&format!("Image: {}\n", image));
    s.push_str(&format!(
        "Samples: {} ({} light, {} dark)\n",
        a.samples.light + a.samples.dark,
        a.samples.light,
        a.samples.dark
    ));

    s.push_str(&format!("\nSkin subtype: {}\n", a.subtype));
    s.push_str(&format!("  Average (light): {}\n", a.avg_light_hex));
    s.push_str(&format!("  Average (dark):  {}\n", a.avg_dark_hex));
    s.push_str(&format!("  Average (all):   {}\n", a.avg_total_hex));

    s.push_str(&format!("\n{}\n", a.profile.skin));

    s.push_str("\nRecommended colors:\n");
    push_entries(&mut s, a.recommended_colors);
    s.push_str("\nColors to avoid:\n");
    push_entries(&mut s, a.avoid_colors);

    s.push_str(&format!("\nJewelry: {}\n", a.profile.jewelry));
    s.push_str(&format!("Styling: {}\n", a.profile.styling));

    s
}

fn push_entries(s: &mut String, entries: &[RecommendationEntry]) {
    for e in entries {
        s.push_str(&format!("  {:<14} {}  {}\n", e.name, e.hex, e.reason));
    }
}
