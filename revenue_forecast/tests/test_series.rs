use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use revenue_forecast::{DailySeries, TransactionRecord};

fn random_transactions(rng: &mut StdRng, count: usize) -> Vec<TransactionRecord> {
    let base = NaiveDate::from_ymd_opt(2022, 11, 15).unwrap();
    (0..count)
        .map(|_| TransactionRecord {
            order_date: base + Days::new(rng.gen_range(0..90)),
            revenue: rng.gen_range(0.0..500.0),
        })
        .collect()
}

#[test]
fn test_revenue_is_conserved() {
    let mut rng = StdRng::seed_from_u64(7);

    for count in [1, 2, 10, 250, 2000] {
        let transactions = random_transactions(&mut rng, count);
        let series = DailySeries::from_transactions(&transactions).unwrap();

        let input_total: f64 = transactions.iter().map(|t| t.revenue).sum();
        assert_relative_eq!(series.total_revenue(), input_total, max_relative = 1e-9);
    }
}

#[test]
fn test_series_is_contiguous() {
    let mut rng = StdRng::seed_from_u64(11);
    let transactions = random_transactions(&mut rng, 40);

    let series = DailySeries::from_transactions(&transactions).unwrap();

    for pair in series.points().windows(2) {
        assert_eq!(pair[1].date, pair[0].date + Days::new(1));
    }

    let min = transactions.iter().map(|t| t.order_date).min().unwrap();
    let max = transactions.iter().map(|t| t.order_date).max().unwrap();
    assert_eq!(series.first_date(), min);
    assert_eq!(series.last_date(), max);
    assert_eq!(series.len() as i64, (max - min).num_days() + 1);
}

#[test]
fn test_split_preserves_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let series = DailySeries::from_transactions(&random_transactions(&mut rng, 100)).unwrap();

    for ratio in [0.1, 0.5, 0.8, 0.95] {
        let split = series.split(ratio).unwrap();

        assert_eq!(split.train.len() + split.test.len(), series.len());
        assert!(!split.train.is_empty());
        assert!(!split.test.is_empty());

        let last_train = split.train.last().unwrap().date;
        let first_test = split.test.first().unwrap().date;
        assert!(last_train < first_test);
    }
}
