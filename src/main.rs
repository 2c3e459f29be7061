use anyhow::Result;
use log::info;
use ndarray::Array4;
use ndarray_rand::{
    RandomExt,
    rand::{SeedableRng, rngs::StdRng},
    rand_distr::{Normal, Uniform},
};
use surrogate_metrics::{EvalMetrics, EvalMode};

// [batch, time, grid, channel]
const SHAPE: (usize, usize, usize, usize) = (4, 8, 64, 3);
const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let range = Uniform::new(-1.0f32, 1.0).map_err(anyhow::Error::msg)?;
    let labels: Array4<f32> = Array4::random_using(SHAPE, range, &mut rng);
    info!("generated synthetic labels with shape {:?}", labels.shape());

    let mut metrics = EvalMetrics::new();
    for (mode, noise) in [
        (EvalMode::Direct, 0.01f32),
        (EvalMode::Rollout, 0.05),
        (EvalMode::Final, 0.1),
    ] {
        let dist = Normal::new(0.0f32, noise).map_err(anyhow::Error::msg)?;
        let perturbation: Array4<f32> = Array4::random_using(SHAPE, dist, &mut rng);
        let predictions = &labels + &perturbation;

        metrics.record(mode, predictions.view(), labels.view());
        info!(mode = mode.name(); "recorded perturbed predictions, noise std {noise}");
    }

    info!("evaluation summary\n{metrics}");
    println!("{}", serde_json::to_string_pretty(&metrics)?);

    Ok(())
}
