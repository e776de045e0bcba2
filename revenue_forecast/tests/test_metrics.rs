use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use revenue_forecast::metrics::evaluate;
use revenue_forecast::R2Score;

#[test]
fn test_metric_bounds_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in 2..40 {
        let actual: Vec<f64> = (0..len).map(|_| rng.gen_range(0.0..1000.0)).collect();
        let predicted: Vec<f64> = (0..len).map(|_| rng.gen_range(-200.0..1200.0)).collect();

        let metrics = evaluate(&predicted, &actual).unwrap();

        assert!(metrics.rmse >= 0.0);
        assert!(metrics.mae >= 0.0);
        // RMSE dominates MAE
        assert!(metrics.rmse + 1e-9 >= metrics.mae);
        match metrics.r2 {
            R2Score::Defined(r2) => assert!(r2 <= 1.0),
            R2Score::Undefined => panic!("random actuals should not be constant"),
        }
    }
}

#[test]
fn test_constant_actuals_give_undefined_r2() {
    for value in [0.0, 1.0, 0.1, 12345.678] {
        let actual = vec![value; 6];
        let predicted = vec![value + 1.0; 6];

        let metrics = evaluate(&predicted, &actual).unwrap();

        assert_eq!(metrics.r2, R2Score::Undefined);
        assert_eq!(metrics.r2.value(), None);
        assert!((metrics.rmse - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_single_test_point() {
    // A single actual value is trivially constant
    let metrics = evaluate(&[3.0], &[5.0]).unwrap();
    assert_eq!(metrics.mae, 2.0);
    assert_eq!(metrics.rmse, 2.0);
    assert_eq!(metrics.r2, R2Score::Undefined);
}
