//! Integration Tests for the Feature Layout
//!
//! Checks that the layout tables and the vector type agree with each other.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{
        feature_index, FeatureVector, LayoutInfo, FEATURE_BOUNDS, FEATURE_COUNT, FEATURE_LAYOUT,
    };

    /// Every bound corner builds a valid vector
    #[test]
    fn test_bound_corners_are_accepted() {
        let mut low = [0.0; FEATURE_COUNT];
        let mut high = [0.0; FEATURE_COUNT];
        for (i, bounds) in FEATURE_BOUNDS.iter().enumerate() {
            low[i] = bounds.min;
            high[i] = bounds.max;
        }

        assert!(FeatureVector::from_values(low).unwrap().check_bounds().is_ok());
        assert!(FeatureVector::from_values(high).unwrap().check_bounds().is_ok());
    }

    /// Stepping one unit past any bound is rejected
    #[test]
    fn test_each_feature_bound_enforced() {
        for i in 0..FEATURE_COUNT {
            let mut values = *FeatureVector::defaults().as_array();
            values[i] = FEATURE_BOUNDS[i].max + 1.0;
            let vector = FeatureVector::from_values(values).unwrap();
            assert!(vector.check_bounds().is_err(), "{} above max accepted", FEATURE_LAYOUT[i]);

            values[i] = FEATURE_BOUNDS[i].min - 1.0;
            let vector = FeatureVector::from_values(values).unwrap();
            assert!(vector.check_bounds().is_err(), "{} below min accepted", FEATURE_LAYOUT[i]);
        }
    }

    /// LayoutInfo lists features in vector order
    #[test]
    fn test_layout_info_matches_indices() {
        let info = LayoutInfo::current();
        for spec in &info.features {
            let index = feature_index(&spec.name).unwrap();
            assert_eq!(FEATURE_LAYOUT[index], spec.name);
            assert_eq!(FEATURE_BOUNDS[index], spec.bounds);
        }
    }
}
