use approx::assert_relative_eq;
use ndarray::{Array4, Array5, Axis, s};
use ndarray_rand::{
    RandomExt,
    rand::{SeedableRng, rngs::StdRng},
    rand_distr::Uniform,
};
use surrogate_metrics::{
    mse_error, mse_loss, msre_loss, rel_l1_error, rel_l1_loss, rel_l2_error, rel_l2_loss,
};

const SHAPE5: (usize, usize, usize, usize, usize) = (3, 4, 5, 6, 2);
const SHAPE4: (usize, usize, usize, usize) = (5, 4, 30, 3);

fn random5(rng: &mut StdRng) -> (Array5<f32>, Array5<f32>) {
    let dist = Uniform::new(0.5f32, 2.0).unwrap();
    let labels = Array5::random_using(SHAPE5, dist, rng);
    let predictions = Array5::random_using(SHAPE5, dist, rng);
    (predictions, labels)
}

fn random4(rng: &mut StdRng) -> (Array4<f32>, Array4<f32>) {
    let dist = Uniform::new(-2.0f32, 2.0).unwrap();
    let labels = Array4::random_using(SHAPE4, dist, rng);
    let predictions = Array4::random_using(SHAPE4, dist, rng);
    (predictions, labels)
}

#[test]
fn identical_random_inputs_are_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    let (_, labels) = random5(&mut rng);

    for err in [
        mse_error(labels.view(), labels.view()),
        rel_l1_error(labels.view(), labels.view()),
        rel_l2_error(labels.view(), labels.view()),
    ] {
        assert_eq!(err.shape(), &[SHAPE5.0, SHAPE5.4]);
        assert!(err.iter().all(|&x| x == 0.0));
    }

    let (_, labels) = random4(&mut rng);
    assert_eq!(mse_loss(labels.view(), labels.view()), 0.0);
    assert_eq!(rel_l1_loss(labels.view(), labels.view()), 0.0);
    assert_eq!(rel_l2_loss(labels.view(), labels.view()), 0.0);
}

#[test]
fn errors_are_non_negative() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10 {
        let (predictions, labels) = random5(&mut rng);
        let labels = labels.mapv(|x| x - 1.25);

        assert!(mse_error(predictions.view(), labels.view()).iter().all(|&x| x >= 0.0));
        assert!(rel_l2_error(predictions.view(), labels.view()).iter().all(|&x| x >= 0.0));
        assert!(msre_loss(predictions.view(), labels.view()) >= 0.0);
    }
}

#[test]
fn relative_errors_are_scale_invariant() {
    let mut rng = StdRng::seed_from_u64(13);
    let (predictions, labels) = random5(&mut rng);

    for c in [-3.0f32, 0.25, 10.0] {
        let scaled_predictions = predictions.mapv(|x| x * c);
        let scaled_labels = labels.mapv(|x| x * c);

        assert_relative_eq!(
            rel_l1_error(scaled_predictions.view(), scaled_labels.view()),
            rel_l1_error(predictions.view(), labels.view()),
            max_relative = 1e-4
        );
        assert_relative_eq!(
            rel_l2_error(scaled_predictions.view(), scaled_labels.view()),
            rel_l2_error(predictions.view(), labels.view()),
            max_relative = 1e-4
        );
        assert_relative_eq!(
            mse_error(scaled_predictions.view(), scaled_labels.view()),
            mse_error(predictions.view(), labels.view()) * (c * c),
            max_relative = 1e-4
        );
    }
}

#[test]
fn relative_losses_ignore_batch_order() {
    let mut rng = StdRng::seed_from_u64(17);
    let (predictions, labels) = random4(&mut rng);

    let reversed_predictions = predictions.slice(s![..;-1, .., .., ..]);
    let reversed_labels = labels.slice(s![..;-1, .., .., ..]);

    assert_relative_eq!(
        rel_l1_loss(reversed_predictions, reversed_labels),
        rel_l1_loss(predictions.view(), labels.view()),
        max_relative = 1e-5
    );
    assert_relative_eq!(
        rel_l2_loss(reversed_predictions, reversed_labels),
        rel_l2_loss(predictions.view(), labels.view()),
        max_relative = 1e-5
    );
}

#[test]
fn relative_losses_depend_on_channel_scale() {
    let mut rng = StdRng::seed_from_u64(19);
    let (predictions, labels) = random4(&mut rng);

    // Shifting a single channel's labels changes that channel's relative error only.
    let mut shifted_predictions = predictions.clone();
    let mut shifted_labels = labels.clone();
    shifted_predictions
        .index_axis_mut(Axis(3), 0)
        .mapv_inplace(|x| x + 100.0);
    shifted_labels
        .index_axis_mut(Axis(3), 0)
        .mapv_inplace(|x| x + 100.0);

    let before = rel_l1_loss(predictions.view(), labels.view());
    let after = rel_l1_loss(shifted_predictions.view(), shifted_labels.view());

    assert!(after < before);
    assert_relative_eq!(
        mse_loss(shifted_predictions.view(), shifted_labels.view()),
        mse_loss(predictions.view(), labels.view()),
        max_relative = 1e-3
    );
}

#[test]
fn relative_losses_match_per_variable_errors() {
    let mut rng = StdRng::seed_from_u64(23);
    let (predictions, labels) = random5(&mut rng);

    let per_var = rel_l2_error(predictions.view(), labels.view());
    let expected = per_var
        .outer_iter()
        .map(|row| row.iter().map(|x| x * x).sum::<f32>().sqrt())
        .sum::<f32>()
        / SHAPE5.0 as f32;

    assert_relative_eq!(
        rel_l2_loss(predictions.view(), labels.view()),
        expected,
        max_relative = 1e-5
    );
}

#[test]
fn per_variable_errors_accept_non_contiguous_views() {
    let mut rng = StdRng::seed_from_u64(29);
    let (predictions, labels) = random5(&mut rng);

    let reversed = rel_l1_error(
        predictions.slice(s![..;-1, .., .., .., ..]),
        labels.slice(s![..;-1, .., .., .., ..]),
    );
    let forward = rel_l1_error(predictions.view(), labels.view());

    assert_relative_eq!(
        reversed,
        forward.slice(s![..;-1, ..]).to_owned(),
        max_relative = 1e-5
    );
}
