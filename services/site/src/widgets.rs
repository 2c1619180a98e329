use clap::Args;
use skillkwiz::config::{AppConfig, WidgetConfig};
use skillkwiz::content::{HERO_SLIDES, TESTIMONIALS};
use skillkwiz::error::AppError;
use skillkwiz::telemetry;
use skillkwiz::widgets::{
    CarouselDriver, CarouselWindow, CounterAnimation, StatDisplay, StatsBoard,
};
use std::time::Duration;
use tokio::time;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct WidgetsArgs {
    /// How long to run the home page widgets, in milliseconds
    #[arg(long, default_value_t = 12_000)]
    pub(crate) duration_ms: u64,
    /// Time between printed frames, in milliseconds
    #[arg(long, default_value_t = 1_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) frame_ms: u64,
}

/// What the home page shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WidgetFrame {
    pub(crate) elapsed: Duration,
    pub(crate) stats: Vec<StatDisplay>,
    pub(crate) counters_done: bool,
    pub(crate) hero: usize,
    pub(crate) testimonials: CarouselWindow,
}

pub(crate) async fn run_widgets(args: WidgetsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(
        counter_tick_ms = config.widgets.counter_tick.as_millis() as u64,
        hero_interval_ms = config.widgets.hero_interval.as_millis() as u64,
        testimonial_interval_ms = config.widgets.testimonial_interval.as_millis() as u64,
        "starting home page widgets"
    );

    println!("SkillKwiz home page widgets");
    play_widgets(
        &config.widgets,
        Duration::from_millis(args.duration_ms),
        Duration::from_millis(args.frame_ms),
        print_frame,
    )
    .await
}

/// Runs the counters and both carousels on `config`'s timers, handing a frame
/// to `on_frame` at start and after every `frame` until `duration` has passed.
pub(crate) async fn play_widgets<F>(
    config: &WidgetConfig,
    duration: Duration,
    frame: Duration,
    mut on_frame: F,
) -> Result<(), AppError>
where
    F: FnMut(&WidgetFrame),
{
    let counters = CounterAnimation::start(StatsBoard::default(), config.counter_tick);
    let hero = CarouselDriver::hero(config)?;
    let testimonials = CarouselDriver::testimonials(config)?;

    let capture = |elapsed| WidgetFrame {
        elapsed,
        stats: counters.snapshot(),
        counters_done: counters.is_complete(),
        hero: hero.index(),
        testimonials: testimonials.window(),
    };

    let mut elapsed = Duration::ZERO;
    on_frame(&capture(elapsed));
    while elapsed < duration {
        let step = frame.min(duration - elapsed);
        time::sleep(step).await;
        tokio::task::yield_now().await;
        elapsed += step;
        on_frame(&capture(elapsed));
    }
    Ok(())
}

fn print_frame(frame: &WidgetFrame) {
    let stats: Vec<String> = frame
        .stats
        .iter()
        .map(|stat| format!("{} {}", stat.text, stat.label))
        .collect();
    let window = frame.testimonials;
    println!(
        "[{:>6} ms] {}{}",
        frame.elapsed.as_millis(),
        stats.join(" | "),
        if frame.counters_done { " (done)" } else { "" }
    );
    println!(
        "            hero {}/{}: {}",
        frame.hero + 1,
        HERO_SLIDES.len(),
        HERO_SLIDES[frame.hero].headline
    );
    println!(
        "            testimonials: {} | [{}] | {}",
        TESTIMONIALS[window.previous].name,
        TESTIMONIALS[window.active].name,
        TESTIMONIALS[window.next].name
    );
}
