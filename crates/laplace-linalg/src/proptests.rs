//! Property-based tests for matrix laws.

use laplace_algebra::Numeric;
use proptest::prelude::*;

use crate::square_matrix::SquareMatrix;

fn matrix(dimension: usize) -> impl Strategy<Value = SquareMatrix<Numeric>> {
    prop::collection::vec(-100.0_f64..100.0, dimension * dimension).prop_map(move |values| {
        SquareMatrix::from_entries(dimension, values.into_iter().map(Numeric::new).collect())
            .unwrap()
    })
}

fn any_matrix() -> impl Strategy<Value = SquareMatrix<Numeric>> {
    (2_usize..=5).prop_flat_map(matrix)
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in any_matrix()) {
        let mut twice = m.clone();
        twice.transpose_in_place();
        twice.transpose_in_place();
        prop_assert_eq!(twice, m);
    }

    #[test]
    fn transpose_swaps_coordinates(m in any_matrix()) {
        let mut t = m.clone();
        t.transpose_in_place();
        let n = m.dimension();
        for row in 0..n {
            for col in 0..n {
                prop_assert_eq!(t[(row, col)], m[(col, row)]);
            }
        }
    }

    #[test]
    fn two_by_two_determinant_formula(m in matrix(2)) {
        let expected = m[(0, 0)].value() * m[(1, 1)].value()
            - m[(0, 1)].value() * m[(1, 0)].value();
        prop_assert_eq!(m.determinant().unwrap().value(), expected);
    }

    #[test]
    fn inverse_times_original_is_identity(m in matrix(3)) {
        let det = m.determinant().unwrap().value();
        // Keep well away from singularity so the identity check is not
        // drowned by conditioning error.
        prop_assume!(det.abs() > 1.0);

        let inverse = m.inverse().unwrap();
        for row in 0..3 {
            for col in 0..3 {
                let mut product = 0.0;
                for k in 0..3 {
                    product += m[(row, k)].value() * inverse[(k, col)].value();
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                prop_assert!((product - expected).abs() < 1e-6);
            }
        }
    }
}
