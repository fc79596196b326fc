use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tokio::time::{interval, Instant, MissedTickBehavior};

use atelia_core::AppConfig;
use atelia_ui::scroll::{CompletionState, ScrollAnimator, ScrollConfigExt};
use atelia_ui::surface::{HeadlessPage, ScrollSurface};

pub struct Scenario {
    pub target: f64,
    pub from: f64,
    pub document: f64,
    pub viewport: f64,
    pub card: bool,
    pub duration_ms: Option<u64>,
}

#[derive(Serialize)]
struct Frame {
    elapsed_ms: u64,
    y: f64,
}

#[derive(Serialize)]
struct Replay {
    from: f64,
    target: f64,
    frames: Vec<Frame>,
    completed: bool,
}

/// Replay one animation in real time at the configured frame rate
pub async fn run(config: &AppConfig, scenario: &Scenario, json: bool) -> Result<()> {
    let mut page = HeadlessPage::new(scenario.document, scenario.viewport);
    page.set_scroll(scenario.from);
    let from = page.scroll_y();

    let mut animator = if scenario.card {
        ScrollAnimator::card(&config.scroll)
    } else {
        ScrollAnimator::anchor(&config.scroll)
    };

    let start = Instant::now();
    let mut completion = animator.animate_scroll_to(
        &mut page,
        scenario.target,
        scenario.duration_ms.map(Duration::from_millis),
        start.into_std(),
    );
    let target = animator.target().unwrap_or_else(|| page.scroll_y());

    let mut frames = Vec::new();
    let mut ticker = interval(config.scroll.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while animator.is_animating() {
        let now = ticker.tick().await;
        animator.tick(&mut page, now.into_std());
        frames.push(Frame {
            elapsed_ms: now.duration_since(start).as_millis() as u64,
            y: page.scroll_y(),
        });
    }

    let replay = Replay {
        from,
        target,
        frames,
        completed: completion.state() == CompletionState::Completed,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&replay)?);
        return Ok(());
    }

    println!("Scrolling {:.1} -> {:.1}", replay.from, replay.target);
    if replay.frames.is_empty() {
        println!("Already within reach, jumped without animating.");
    }
    for frame in &replay.frames {
        println!("  {:>5} ms  y = {:.1}", frame.elapsed_ms, frame.y);
    }
    println!(
        "{}",
        if replay.completed { "Completed" } else { "Did not complete" }
    );

    Ok(())
}
