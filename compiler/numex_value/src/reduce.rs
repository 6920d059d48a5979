use crate::value::Value;

/// NaN-skipping reductions. Each folds the non-NaN elements of a value
/// (scalars count as a single element) into one `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    NanMin,
    NanMax,
    NanMean,
    /// Population standard deviation
    NanStd,
    NanSum,
    NanProd,
}

impl Aggregate {
    pub fn name(self) -> &'static str {
        match self {
            Aggregate::NanMin => "nanmin",
            Aggregate::NanMax => "nanmax",
            Aggregate::NanMean => "nanmean",
            Aggregate::NanStd => "nanstd",
            Aggregate::NanSum => "nansum",
            Aggregate::NanProd => "nanprod",
        }
    }

    /// Reduces `value` to a 64-bit scalar.
    ///
    /// With no non-NaN elements the sum is 0, the product is 1, and the
    /// other aggregates are NaN.
    pub fn reduce(self, value: &Value) -> Value {
        let elements: Vec<f64> = value
            .to_f64_vec()
            .into_iter()
            .filter(|x| !x.is_nan())
            .collect();
        Value::Scalar64(self.fold(&elements))
    }

    fn fold(self, xs: &[f64]) -> f64 {
        match self {
            Aggregate::NanSum => xs.iter().sum(),
            Aggregate::NanProd => xs.iter().product(),
            Aggregate::NanMin => xs.iter().copied().reduce(f64::min).unwrap_or(f64::NAN),
            Aggregate::NanMax => xs.iter().copied().reduce(f64::max).unwrap_or(f64::NAN),
            Aggregate::NanMean => mean(xs).unwrap_or(f64::NAN),
            Aggregate::NanStd => match mean(xs) {
                Some(m) => {
                    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
                    var.sqrt()
                }
                None => f64::NAN,
            },
        }
    }
}

fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reduce(aggregate: Aggregate, value: Value) -> f64 {
        match aggregate.reduce(&value) {
            Value::Scalar64(x) => x,
            other => panic!("expected a 64-bit scalar, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_entries_are_skipped() {
        let v = || Value::from(vec![1.0, f64::NAN, 3.0, -2.0]);
        assert_abs_diff_eq!(reduce(Aggregate::NanSum, v()), 2.0);
        assert_abs_diff_eq!(reduce(Aggregate::NanProd, v()), -6.0);
        assert_abs_diff_eq!(reduce(Aggregate::NanMin, v()), -2.0);
        assert_abs_diff_eq!(reduce(Aggregate::NanMax, v()), 3.0);
        assert_abs_diff_eq!(reduce(Aggregate::NanMean, v()), 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_population_std() {
        let v = Value::from(vec![2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_abs_diff_eq!(reduce(Aggregate::NanStd, v), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_nan_input() {
        let v = || Value::from(vec![f64::NAN, f64::NAN]);
        assert_eq!(reduce(Aggregate::NanSum, v()), 0.0);
        assert_eq!(reduce(Aggregate::NanProd, v()), 1.0);
        assert!(reduce(Aggregate::NanMin, v()).is_nan());
        assert!(reduce(Aggregate::NanMax, v()).is_nan());
        assert!(reduce(Aggregate::NanMean, v()).is_nan());
        assert!(reduce(Aggregate::NanStd, Value::Vector32(vec![])).is_nan());
    }

    #[test]
    fn test_scalar_is_one_element() {
        assert_eq!(reduce(Aggregate::NanMean, Value::from(4.5f32)), 4.5);
        assert_eq!(reduce(Aggregate::NanStd, Value::from(4.5)), 0.0);
    }
}
