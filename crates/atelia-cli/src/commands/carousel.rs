use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tokio::time::sleep;
use tracing::warn;

use atelia_core::{AppConfig, FsImageDecoder, Readiness};
use atelia_ui::surface::HeadlessCarousel;
use atelia_ui::{CarouselPhase, CarouselPipeline};

#[derive(Serialize)]
struct Step {
    start: usize,
    sources: Vec<String>,
    slid: bool,
}

/// Advance the carousel `steps` times, decoding images from disk
pub async fn run(
    config: &AppConfig,
    steps: usize,
    card_width: f64,
    gap: f64,
    json: bool,
) -> Result<()> {
    let decoder = Arc::new(FsImageDecoder::new(config.carousel.image_dir.clone()));
    let mut pipeline = CarouselPipeline::new(&config.carousel, decoder)?;
    let mut grid = HeadlessCarousel::new(config.carousel.visible, card_width, gap);

    pipeline.init(&mut grid);

    let mut history = vec![Step {
        start: pipeline.window().start(),
        sources: grid.slots().to_vec(),
        slid: false,
    }];

    for _ in 0..steps {
        if !pipeline.advance(&mut grid) {
            warn!(phase = ?pipeline.phase(), "Carousel busy, skipping step");
            continue;
        }

        let slid = pipeline.phase() == CarouselPhase::Sliding;
        if slid {
            sleep(std::time::Duration::from_millis(config.carousel.transition_ms)).await;
            let event = pipeline.expected_transition_end();
            pipeline.on_transition_end(&mut grid, &event);
        }

        pipeline.complete_swap(&mut grid).await;

        history.push(Step {
            start: pipeline.window().start(),
            sources: grid.slots().to_vec(),
            slid,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    for (i, step) in history.iter().enumerate() {
        let label = if i == 0 {
            "initial".to_string()
        } else {
            format!("step {}", i)
        };
        println!("{} (start {}):", label, step.start);
        for src in &step.sources {
            println!("    {}", src);
        }
    }

    let failed = config
        .carousel
        .sources
        .iter()
        .filter(|src| pipeline.cache().readiness(src) == Some(Readiness::Failed))
        .count();
    if failed > 0 {
        println!("\n{} image(s) failed to decode", failed);
    }

    Ok(())
}
