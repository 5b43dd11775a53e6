/// Returns the `(index, value)` pair with the largest value.
///
/// Comparison is strict, so on ties the first pair yielded wins. NaN values
/// are skipped; `None` means no pair held a number.
pub fn argmax_first<I>(data: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    data.into_iter().filter(|(_, value)| !value.is_nan()).fold(None, |acc, (index, value)| {
        match acc {
            None => Some((index, value)),
            Some((_, max_val)) if value > max_val => Some((index, value)),
            _ => acc
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(data: &[f64]) -> Vec<(usize, f64)> {
        data.iter().copied().enumerate().collect()
    }

    #[test]
    fn test_argmax_basic() {
        let data = vec![1.0, 2.0, 5.0, 3.0, 4.0];
        assert_eq!(argmax_first(indexed(&data)), Some((2, 5.0)));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax_first(Vec::<(usize, f64)>::new()), None);
    }

    #[test]
    fn test_argmax_negatives() {
        let data = vec![-5.0, -4.0, -3.0, -2.0, -1.0];
        assert_eq!(argmax_first(indexed(&data)), Some((4, -1.0)));
    }

    #[test]
    fn test_argmax_all_same() {
        let data = vec![2.0, 2.0, 2.0, 2.0];
        assert_eq!(argmax_first(indexed(&data)), Some((0, 2.0))); // first occurrence
    }

    #[test]
    fn test_argmax_skips_nan() {
        let data = vec![f64::NAN, 1.0, 3.0, f64::NAN, 2.0];
        assert_eq!(argmax_first(indexed(&data)), Some((2, 3.0)));

        let data = vec![f64::NAN, f64::NAN];
        assert_eq!(argmax_first(indexed(&data)), None);
    }

    #[test]
    fn test_argmax_sparse_indices() {
        let data = vec![(3, 0.5), (7, 1.5), (9, 1.5)];
        assert_eq!(argmax_first(data), Some((7, 1.5)));
    }
}
