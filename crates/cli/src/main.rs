//! Trackman CLI - demonstration driver for tracks, users and progress.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trackman_core::{ContentItem, Level, Track, User};
use trackman_progress::{BasicProgressTracker, CompletionEstimator, ProgressTracker};

#[derive(Parser)]
#[command(name = "trackman")]
#[command(about = "Educational tracks, enrollment and progress", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample enrollment scenario
    Demo {
        /// Print the final progress snapshot as JSON
        #[arg(long)]
        json: bool,
        /// Study minutes per day used for completion estimates
        #[arg(long, default_value = "60")]
        daily_minutes: u32,
    },
    /// List content levels
    Levels,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo { json, daily_minutes } => run_demo(json, daily_minutes)?,
        Commands::Levels => {
            for level in Level::ALL {
                println!("{}", level);
            }
        }
    }

    Ok(())
}

/// The "Learning Kotlin" catalog used by the demo.
fn sample_contents() -> Vec<ContentItem> {
    vec![
        ContentItem::new("Getting to know Kotlin and its official docs", Level::Basic, 60),
        ContentItem::new("Hands-on introduction to Kotlin", Level::Basic, 120),
        ContentItem::new("Control flow and collections in Kotlin", Level::Basic, 120),
        ContentItem::new("Object orientation and class types in Kotlin", Level::Basic, 120),
        ContentItem::new("The power of functions in Kotlin", Level::Basic, 120),
        ContentItem::new("Exception handling in Kotlin", Level::Intermediate, 120),
    ]
}

fn progress_line(track: &Track, user: &User) -> Result<String> {
    let percentage = track.progress_for(user)?;
    Ok(format!(
        "Progress of {} in {}: {:.2}%",
        user.name(),
        track.name(),
        percentage
    ))
}

fn run_demo(json: bool, daily_minutes: u32) -> Result<()> {
    let contents = sample_contents();
    let mut track = Track::new("Learning Kotlin through its official docs");
    track.add_content(contents.iter().cloned());

    let mut hebert = User::new("Hebert");
    let maria = User::new("Maria");
    track.enroll([&hebert, &maria]);

    hebert.mark_studied(contents[0].clone());

    let joao = User::new("Joao");
    track.enroll([&joao]);

    let users = vec![hebert, maria, joao];
    info!("Demo track ready with {} enrollments", track.enrollment_count());

    if json {
        let snapshot = BasicProgressTracker::new(&track).snapshot(&users);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let names: Vec<_> = users.iter().map(|u| u.name()).collect();
    println!("Enrolled: {}", names.join(", "));
    println!("Contents ({})", track.contents().len());
    for item in track.contents() {
        println!("  {}", item);
    }

    let summary = track.summary()?;
    println!("Duration: {} min", summary.total_duration);
    println!("Level: {}", summary.dominant_level);
    println!();

    let hebert = &users[0];
    let studied: Vec<_> = hebert.studied().map(|c| c.name()).collect();
    println!("{} studied [{}]", hebert.name(), studied.join(", "));

    let estimator = CompletionEstimator::new(daily_minutes);
    for user in &users {
        println!("{}", progress_line(&track, user)?);
        if let Some(done) = estimator.estimate(&track, user)? {
            println!("  Estimated completion: {}", done.format("%Y-%m-%d"));
        }
    }
    println!();

    // Failure kinds, on a track with nothing in it
    let mut empty = Track::new("f2");
    let joao = &users[2];
    if let Err(e) = empty.progress_for(joao) {
        println!("Before enrollment: {}", e);
    }
    empty.enroll([joao]);
    if let Err(e) = empty.progress_for(joao) {
        println!("After enrollment: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_demo_flags() {
        let cli = Cli::parse_from(["trackman", "-v", "demo", "--json", "--daily-minutes", "30"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Demo { json: true, daily_minutes: 30 }
        ));
    }

    #[test]
    fn test_sample_track_metrics() {
        let mut track = Track::new("Kotlin");
        track.add_content(sample_contents());

        assert_eq!(track.total_duration().unwrap(), 660);
        assert_eq!(track.dominant_level().unwrap(), Level::Basic);
    }

    #[test]
    fn test_progress_line_two_decimals() {
        let contents = sample_contents();
        let mut track = Track::new("Kotlin");
        track.add_content(contents.iter().cloned());
        let mut user = User::new("Hebert");
        track.enroll([&user]);
        user.mark_studied(contents[0].clone());

        assert_eq!(
            progress_line(&track, &user).unwrap(),
            "Progress of Hebert in Kotlin: 16.67%"
        );
    }

    #[test]
    fn test_progress_line_not_enrolled() {
        let track = Track::new("f2");
        let err = progress_line(&track, &User::new("Joao")).unwrap_err();
        assert_eq!(err.to_string(), "user 'Joao' is not enrolled in track 'f2'");
    }
}
