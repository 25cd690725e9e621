use calcore::{
    ast::{Expr, MatrixLiteral, UnaryOperator},
    interpreter::{
        evaluator::core::Context,
        preferences::AngleUnit,
        value::{complex::ComplexNumber, core::NumericValue, matrix::Matrix},
    },
};

fn evaluate(expr: &Expr) -> NumericValue {
    Context::new().evaluate(expr, AngleUnit::Radian)
}

fn matrix(rows: &[[f64; 2]]) -> NumericValue {
    NumericValue::Matrix(Matrix::from_real_rows(rows))
}

#[test]
fn scalar_arithmetic() {
    assert_eq!(evaluate(&Expr::addition(Expr::real(2.0), Expr::real(3.0))), NumericValue::Real(5.0));
    assert_eq!(evaluate(&Expr::subtraction(Expr::real(2.0), Expr::real(3.0))),
               NumericValue::Real(-1.0));
    assert_eq!(evaluate(&Expr::multiplication(Expr::real(2.0), Expr::real(3.0))),
               NumericValue::Real(6.0));
    assert_eq!(evaluate(&Expr::division(Expr::real(3.0), Expr::real(2.0))), NumericValue::Real(1.5));
}

#[test]
fn complex_results_collapse_to_real() {
    // (1 + i)(1 - i) = 2
    let e = Expr::multiplication(Expr::complex(1.0, 1.0), Expr::complex(1.0, -1.0));
    assert_eq!(evaluate(&e), NumericValue::Real(2.0));

    let e = Expr::addition(Expr::complex(1.0, 2.0), Expr::complex(0.0, -2.0));
    assert_eq!(evaluate(&e), NumericValue::Real(1.0));

    let e = Expr::addition(Expr::real(1.0), Expr::complex(0.0, 1.0));
    assert_eq!(evaluate(&e), NumericValue::Complex(ComplexNumber::new(1.0, 1.0)));
}

#[test]
fn scalar_division_by_zero_is_not_finite() {
    let v = evaluate(&Expr::division(Expr::real(1.0), Expr::real(0.0)));
    assert!(v.approximate().is_nan() || v.approximate().is_infinite());
}

#[test]
fn addition_of_scalar_and_matrix_is_entrywise() {
    let m = Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let expected = matrix(&[[11.0, 12.0], [13.0, 14.0]]);
    assert_eq!(evaluate(&Expr::addition(m.clone(), Expr::real(10.0))), expected);
    assert_eq!(evaluate(&Expr::addition(Expr::real(10.0), m)), expected);
}

#[test]
fn subtraction_keeps_operand_order() {
    let m = Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(evaluate(&Expr::subtraction(m.clone(), Expr::real(1.0))),
               matrix(&[[0.0, 1.0], [2.0, 3.0]]));
    assert_eq!(evaluate(&Expr::subtraction(Expr::real(1.0), m)),
               matrix(&[[0.0, -1.0], [-2.0, -3.0]]));
}

#[test]
fn matrix_sum_needs_equal_dimensions() {
    let a = Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Expr::real_matrix(&[[4.0, 3.0], [2.0, 1.0]]);
    assert_eq!(evaluate(&Expr::addition(a.clone(), b)), matrix(&[[5.0, 5.0], [5.0, 5.0]]));

    let row = Expr::real_matrix(&[[1.0, 2.0]]);
    assert!(evaluate(&Expr::addition(a.clone(), row.clone())).is_nan());
    assert!(evaluate(&Expr::subtraction(a, row)).is_nan());
}

#[test]
fn matrix_product() {
    let a = Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let column = Expr::real_matrix(&[[1.0], [1.0]]);
    assert_eq!(evaluate(&Expr::multiplication(a.clone(), column.clone())),
               NumericValue::Matrix(Matrix::from_real_rows(&[[3.0], [7.0]])));

    // 2x1 by 2x2: inner dimensions differ.
    assert!(evaluate(&Expr::multiplication(column, a)).is_nan());
}

#[test]
fn scalar_scales_matrix() {
    let m = Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let v = evaluate(&Expr::multiplication(Expr::complex(0.0, 1.0), m));
    let NumericValue::Matrix(result) = v else {
        panic!("expected a matrix, got {v}");
    };
    assert_eq!(result.get(1, 1), ComplexNumber::new(0.0, 4.0));
}

#[test]
fn matrix_divided_by_scalar() {
    let m = Expr::real_matrix(&[[2.0, 4.0], [6.0, 8.0]]);
    assert_eq!(evaluate(&Expr::division(m, Expr::real(2.0))), matrix(&[[1.0, 2.0], [3.0, 4.0]]));
}

#[test]
fn scalar_divided_by_matrix_uses_inverse() {
    let m = Expr::real_matrix(&[[2.0, 0.0], [0.0, 4.0]]);
    assert_eq!(evaluate(&Expr::division(Expr::real(2.0), m)), matrix(&[[1.0, 0.0], [0.0, 0.5]]));
}

#[test]
fn matrix_divided_by_matrix_uses_inverse() {
    let a = Expr::real_matrix(&[[2.0, 4.0], [6.0, 8.0]]);
    let b = Expr::real_matrix(&[[2.0, 0.0], [0.0, 2.0]]);
    assert_eq!(evaluate(&Expr::division(a, b)), matrix(&[[1.0, 2.0], [3.0, 4.0]]));
}

#[test]
fn division_by_non_invertible_matrix_is_nan() {
    let singular = Expr::real_matrix(&[[1.0, 2.0], [2.0, 4.0]]);
    let rectangular = Expr::real_matrix(&[[1.0, 2.0, 3.0]]);
    assert!(evaluate(&Expr::division(Expr::real(1.0), singular.clone())).is_nan());
    assert!(evaluate(&Expr::division(Expr::real(1.0), rectangular)).is_nan());
    assert!(evaluate(&Expr::division(Expr::real_matrix(&[[1.0, 0.0], [0.0, 1.0]]), singular)).is_nan());
}

#[test]
fn negation() {
    assert_eq!(evaluate(&Expr::opposite(Expr::real(3.0))), NumericValue::Real(-3.0));
    assert_eq!(evaluate(&Expr::opposite(Expr::complex(1.0, 2.0))),
               NumericValue::Complex(ComplexNumber::new(-1.0, -2.0)));
    assert_eq!(evaluate(&Expr::opposite(Expr::real_matrix(&[[1.0, -2.0], [0.5, 0.0]]))),
               matrix(&[[-1.0, 2.0], [-0.5, 0.0]]));
}

#[test]
fn parenthesis_is_transparent() {
    let m = Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(evaluate(&Expr::parenthesis(m.clone())), evaluate(&m));
    assert_eq!(evaluate(&Expr::parenthesis(Expr::real(7.0))), NumericValue::Real(7.0));
}

#[test]
fn sine_and_cosine_follow_angle_unit() {
    let context = Context::new();
    let sine = Expr::operation(UnaryOperator::Sin, vec![Expr::real(30.0)]);
    let cosine = Expr::operation(UnaryOperator::Cos, vec![Expr::real(60.0)]);

    let degrees = context.evaluate(&sine, AngleUnit::Degree).approximate();
    assert!((degrees - 0.5).abs() < 1e-12);
    let degrees = context.evaluate(&cosine, AngleUnit::Degree).approximate();
    assert!((degrees - 0.5).abs() < 1e-12);

    let radians = context.evaluate(&sine, AngleUnit::Radian).approximate();
    assert!((radians - 30.0_f64.sin()).abs() < 1e-12);

    let approximation = context.approximate(&sine, AngleUnit::Degree);
    assert!((approximation - 0.5).abs() < 1e-12);
}

#[test]
fn sine_of_imaginary_argument() {
    // sin(i) = i·sinh(1)
    let v = evaluate(&Expr::operation(UnaryOperator::Sin, vec![Expr::complex(0.0, 1.0)]));
    let c = v.as_complex().unwrap();
    assert!(c.real.abs() < 1e-12);
    assert!((c.imaginary - 1.0_f64.sinh()).abs() < 1e-12);
}

#[test]
fn cosine_applies_entrywise() {
    let v = evaluate(&Expr::operation(UnaryOperator::Cos, vec![Expr::real_matrix(&[[0.0, 0.0]])]));
    assert_eq!(v, NumericValue::Matrix(Matrix::from_real_rows(&[[1.0, 1.0]])));
}

#[test]
fn symbols_resolve_through_context() {
    let mut context = Context::new();
    context.define("x", NumericValue::Real(4.0));
    context.define("A", matrix(&[[1.0, 0.0], [0.0, 1.0]]));

    let e = Expr::multiplication(Expr::symbol("x"), Expr::symbol("A"));
    assert_eq!(context.evaluate(&e, AngleUnit::Radian), matrix(&[[4.0, 0.0], [0.0, 4.0]]));
    assert_eq!(context.approximate(&Expr::symbol("x"), AngleUnit::Radian), 4.0);
    assert!(context.approximate(&Expr::symbol("A"), AngleUnit::Radian).is_nan());
}

#[test]
fn unknown_symbol_is_nan() {
    let context = Context::new();
    assert!(context.evaluate(&Expr::symbol("y"), AngleUnit::Radian).is_nan());
    assert!(context.approximate(&Expr::symbol("y"), AngleUnit::Radian).is_nan());
    assert!(context.evaluate(&Expr::addition(Expr::symbol("y"), Expr::real(1.0)), AngleUnit::Radian)
                   .is_nan());
}

#[test]
fn matrix_entry_holding_a_matrix_becomes_nan() {
    let mut context = Context::new();
    context.define("B", matrix(&[[1.0, 2.0], [3.0, 4.0]]));
    let literal = Expr::Matrix(MatrixLiteral::new(1, 2, vec![Expr::real(1.0), Expr::symbol("B")]));

    let v = context.evaluate(&literal, AngleUnit::Radian);
    let NumericValue::Matrix(m) = v else {
        panic!("expected a matrix, got {v}");
    };
    assert_eq!(m.get(0, 0), ComplexNumber::float(1.0));
    assert!(m.get(0, 1).is_nan());
}

#[test]
fn matrix_literal_entries_are_evaluated() {
    let literal = MatrixLiteral::new(1,
                                     2,
                                     vec![Expr::addition(Expr::real(1.0), Expr::real(1.0)),
                                          Expr::complex(0.0, 3.0)]);
    let v = evaluate(&Expr::Matrix(literal));
    let NumericValue::Matrix(m) = v else {
        panic!("expected a matrix, got {v}");
    };
    assert_eq!(m.entries(), &[ComplexNumber::float(2.0), ComplexNumber::new(0.0, 3.0)]);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_negation() {
    let _ = Context::eval_unary(UnaryOperator::Negate, NumericValue::Real(1.0), AngleUnit::Default);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_parenthesis() {
    let _ = Context::eval_unary(UnaryOperator::Parenthesis, NumericValue::Real(1.0), AngleUnit::Default);
}
