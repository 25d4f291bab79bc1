use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use visionspec_lib::{EngineError, RecommendationEngine, Regime, StudyInput, TvCatalog};

const MIN_PROPTEST_CASES: u32 = 256;

fn proptest_cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .map(|parsed| parsed.max(MIN_PROPTEST_CASES))
        .unwrap_or(MIN_PROPTEST_CASES)
}

fn engine() -> RecommendationEngine {
    RecommendationEngine::new(TvCatalog::embedded().expect("embedded table must load"))
}

fn regime_strategy() -> impl Strategy<Value = Regime> {
    prop_oneof![
        Just(Regime::FourH),
        Just(Regime::SixH),
        Just(Regime::EightH)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: proptest_cases(),
        .. ProptestConfig::default()
    })]

    #[test]
    fn interpolation_is_linear_between_neighbours(
        index in 0usize..1000,
        fraction in 0.001f64..0.999,
    ) {
        let engine = engine();
        let rows = engine.base_tvs();
        let i = index % (rows.len() - 1);
        let (lo, hi) = (rows[i], rows[i + 1]);
        let size = lo.size_inches + fraction * (hi.size_inches - lo.size_inches);
        prop_assume!(size > lo.size_inches && size < hi.size_inches);

        let row = engine.calculate_by_size(size).unwrap();
        prop_assert_eq!(row.size_inches, size);
        prop_assert!(row.distance_6h_m >= lo.distance_6h_m && row.distance_6h_m <= hi.distance_6h_m);

        let ratio = (size - lo.size_inches) / (hi.size_inches - lo.size_inches);
        let expected = lo.distance_6h_m + ratio * (hi.distance_6h_m - lo.distance_6h_m);
        prop_assert!((row.distance_6h_m - expected).abs() < 1e-9);
    }

    #[test]
    fn sizes_outside_table_are_out_of_range(offset in 0.001f64..500.0, below in any::<bool>()) {
        let engine = engine();
        let catalog = engine.catalog();
        let size = if below {
            catalog.smallest().size_inches - offset
        } else {
            catalog.largest().size_inches + offset
        };

        let is_out_of_range = matches!(
            engine.calculate_by_size(size),
            Err(EngineError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn recommendation_grows_with_distance(
        a in 0.0f64..15.0,
        b in 0.0f64..15.0,
        regime in regime_strategy(),
    ) {
        let engine = engine();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_rec = engine.recommend_by_distance(near, regime).unwrap();
        let far_rec = engine.recommend_by_distance(far, regime).unwrap();
        prop_assert!(near_rec.recommended_size_inches <= far_rec.recommended_size_inches);
    }

    #[test]
    fn within_spec_matches_max_distance(distance in 0.0f64..15.0, regime in regime_strategy()) {
        let rec = engine().recommend_by_distance(distance, regime).unwrap();
        prop_assert_eq!(rec.regime, regime);
        prop_assert_eq!(rec.within_spec, distance <= rec.max_distance_m);
    }

    #[test]
    fn study_always_has_three_ordered_recommendations(distance in -5.0f64..50.0) {
        let study = engine()
            .create_study(StudyInput::new("Project", "Client", "Room", distance))
            .unwrap();
        let regimes: Vec<Regime> = study.recommendations.iter().map(|r| r.regime).collect();
        prop_assert_eq!(regimes, Regime::ALL.to_vec());
    }
}
