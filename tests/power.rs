use calcore::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::Context,
        preferences::AngleUnit,
        value::{
            complex::ComplexNumber,
            core::{NumericValue, Operand},
            matrix::Matrix,
        },
    },
};

fn evaluate(expr: &Expr) -> NumericValue {
    Context::new().evaluate(expr, AngleUnit::Radian)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn real_power_agrees_with_complex_power_on_positive_bases() {
    let context = Context::new();
    for base in [0.25, 0.5, 1.0, 2.0, 3.7, 10.0] {
        for exponent in [-2.5, -1.0, 0.0, 0.3, 1.0, 2.0, 7.25] {
            let e = Expr::power(Expr::real(base), Expr::real(exponent));
            let approximation = context.approximate(&e, AngleUnit::Radian);
            let exact = context.evaluate(&e, AngleUnit::Radian);

            let Some(c) = exact.as_complex() else {
                panic!("{base}^{exponent} should be a scalar, got {exact}");
            };
            assert!(close(c.real, approximation),
                    "{base}^{exponent}: {} vs {approximation}",
                    c.real);
            assert!(c.imaginary.abs() < 1e-12, "{base}^{exponent} has imaginary part {}", c.imaginary);
        }
    }
}

#[test]
fn integer_power_of_real_is_exact() {
    let v = evaluate(&Expr::power(Expr::real(2.0), Expr::real(3.0)));
    assert_eq!(v, NumericValue::Real(8.0));
}

#[test]
fn square_root_of_negative_real_is_purely_imaginary() {
    let v = evaluate(&Expr::power(Expr::real(-4.0), Expr::real(0.5)));
    assert_eq!(v, NumericValue::Complex(ComplexNumber::new(0.0, 2.0)));
}

#[test]
fn integer_power_of_negative_real_uses_its_modulus() {
    let v = evaluate(&Expr::power(Expr::real(-2.0), Expr::real(3.0)));
    assert_eq!(v, NumericValue::Real(8.0));
}

#[test]
fn non_real_exponent_on_non_real_base_is_nan() {
    let v = evaluate(&Expr::power(Expr::complex(1.0, 1.0), Expr::complex(0.0, 1.0)));
    assert!(v.is_nan());
}

#[test]
fn non_real_exponent_on_negative_base_is_nan() {
    let v = evaluate(&Expr::power(Expr::real(-1.0), Expr::complex(0.0, 1.0)));
    assert!(v.is_nan());
}

#[test]
fn non_real_exponent_on_positive_real_base() {
    // e^(iπ) = -1
    let v = evaluate(&Expr::power(Expr::real(std::f64::consts::E),
                                  Expr::complex(0.0, std::f64::consts::PI)));
    let c = v.as_complex().unwrap();
    assert!(close(c.real, -1.0));
    assert!(c.imaginary.abs() < 1e-12);
}

#[test]
fn complex_base_with_real_exponent_uses_polar_form() {
    // i^2 = -1
    let v = evaluate(&Expr::power(Expr::complex(0.0, 1.0), Expr::real(2.0)));
    let c = v.as_complex().unwrap();
    assert!(close(c.real, -1.0));
    assert!(c.imaginary.abs() < 1e-12);
}

#[test]
fn matrix_to_the_zero_is_identity() {
    let v = evaluate(&Expr::power(Expr::real_matrix(&[[5.0, -1.0], [2.0, 7.0]]), Expr::real(0.0)));
    assert_eq!(v, NumericValue::Matrix(Matrix::identity(2)));
}

#[test]
fn matrix_squared_is_product_with_itself() {
    let m = Matrix::from_real_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let v = evaluate(&Expr::power(Expr::real_matrix(&[[1.0, 2.0], [3.0, 4.0]]), Expr::real(2.0)));
    assert_eq!(v, Context::multiply(Operand::Matrix(&m), Operand::Matrix(&m)));
    assert_eq!(v, NumericValue::Matrix(Matrix::from_real_rows(&[[7.0, 10.0], [15.0, 22.0]])));
}

#[test]
fn matrix_to_the_minus_one_is_inverse() {
    let m = Matrix::from_real_rows(&[[4.0, 7.0], [2.0, 6.0]]);
    let expected = m.inverse().unwrap();

    let literal = Expr::real_matrix(&[[4.0, 7.0], [2.0, 6.0]]);
    let v = evaluate(&Expr::power(literal.clone(), Expr::real(-1.0)));
    assert_eq!(v, NumericValue::Matrix(expected.clone()));

    let v = evaluate(&Expr::power(literal, Expr::opposite(Expr::real(1.0))));
    assert_eq!(v, NumericValue::Matrix(expected));
}

#[test]
fn negative_power_of_singular_matrix_is_nan() {
    let v = evaluate(&Expr::power(Expr::real_matrix(&[[1.0, 2.0], [2.0, 4.0]]), Expr::real(-2.0)));
    assert!(v.is_nan());
}

#[test]
fn repeated_multiplication_accumulates() {
    let v = evaluate(&Expr::power(Expr::real_matrix(&[[1.0, 1.0], [0.0, 1.0]]), Expr::real(5.0)));
    assert_eq!(v, NumericValue::Matrix(Matrix::from_real_rows(&[[1.0, 5.0], [0.0, 1.0]])));
}

#[test]
fn non_square_matrix_power_is_nan() {
    for exponent in [-1.0, 0.0, 1.0, 2.0] {
        let e = Expr::power(Expr::real_matrix(&[[1.0, 2.0, 3.0]]), Expr::real(exponent));
        assert!(evaluate(&e).is_nan(), "exponent {exponent}");
    }
}

#[test]
fn non_integer_matrix_exponent_is_nan() {
    let m = Expr::real_matrix(&[[1.0, 0.0], [0.0, 1.0]]);
    assert!(evaluate(&Expr::power(m.clone(), Expr::real(0.5))).is_nan());
    assert!(evaluate(&Expr::power(m, Expr::complex(0.0, 1.0))).is_nan());
}

#[test]
fn matrix_exponent_from_symbol_is_validated() {
    let mut context = Context::new();
    context.define("n", NumericValue::Real(3.0));
    context.define("h", NumericValue::Real(1.5));
    let m = Expr::real_matrix(&[[2.0, 0.0], [0.0, 1.0]]);

    let v = context.evaluate(&Expr::power(m.clone(), Expr::symbol("n")), AngleUnit::Radian);
    assert_eq!(v, NumericValue::Matrix(Matrix::from_real_rows(&[[8.0, 0.0], [0.0, 1.0]])));

    let v = context.evaluate(&Expr::power(m, Expr::symbol("h")), AngleUnit::Radian);
    assert!(v.is_nan());
}

#[test]
fn matrix_exponent_node_must_approximate_to_an_integer() {
    // (1 + i)(1 - i) evaluates to 2, but its complex leaves have no real
    // approximation.
    let identity = Expr::real_matrix(&[[1.0, 0.0], [0.0, 1.0]]);
    let exponent = Expr::multiplication(Expr::complex(1.0, 1.0), Expr::complex(1.0, -1.0));
    assert_eq!(evaluate(&exponent), NumericValue::Real(2.0));
    assert!(evaluate(&Expr::power(identity.clone(), exponent)).is_nan());

    assert_eq!(evaluate(&Expr::power(identity, Expr::real(2.0))),
               NumericValue::Matrix(Matrix::identity(2)));
}

#[test]
fn huge_matrix_exponent_is_nan() {
    let v = evaluate(&Expr::power(Expr::real_matrix(&[[1.0]]), Expr::real(1e20)));
    assert!(v.is_nan());
}

#[test]
fn scalar_to_matrix_power_is_nan() {
    let v = evaluate(&Expr::power(Expr::real(2.0), Expr::real_matrix(&[[1.0, 0.0], [0.0, 1.0]])));
    assert!(v.is_nan());
}

#[test]
fn matrix_to_matrix_power_is_nan() {
    let m = Expr::real_matrix(&[[1.0, 0.0], [0.0, 1.0]]);
    assert!(evaluate(&Expr::power(m.clone(), m)).is_nan());
}

#[test]
fn power_clone_with_operands_keeps_operator() {
    let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    let replaced = e.clone_with_operands(vec![Expr::real(5.0), Expr::real(2.0)]);
    assert_eq!(replaced, Expr::power(Expr::real(5.0), Expr::real(2.0)));
    assert_eq!(evaluate(&replaced), NumericValue::Real(25.0));
}

#[test]
#[should_panic(expected = "clone_with_operands: wrong number of operands")]
fn power_clone_with_too_few_operands_panics() {
    let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    let _ = e.clone_with_operands(vec![Expr::real(5.0)]);
}

#[test]
#[should_panic(expected = "clone_with_operands: wrong number of operands")]
fn power_clone_with_too_many_operands_panics() {
    let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    let _ = e.clone_with_operands(vec![Expr::real(1.0), Expr::real(2.0), Expr::real(3.0)]);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_evaluation() {
    let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    let _ = Context::new().evaluate(&e, AngleUnit::Default);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_approximation() {
    let e = Expr::power(Expr::real(2.0), Expr::real(3.0));
    let _ = Context::new().approximate(&e, AngleUnit::Default);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_matrix_power() {
    let m = NumericValue::Matrix(Matrix::identity(2));
    let _ = Context::new().eval_pow(&m, &NumericValue::Real(2.0), &Expr::real(2.0), AngleUnit::Default);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_scalar_power() {
    let two = NumericValue::Real(2.0);
    let _ = Context::new().eval_pow(&two, &two, &Expr::real(2.0), AngleUnit::Default);
}

#[test]
#[should_panic(expected = "angle unit must be resolved")]
fn default_angle_unit_panics_in_binary_dispatch() {
    let operands = [Expr::real(2.0), Expr::real(3.0)];
    let _ = Context::new().eval_binary(BinaryOperator::Pow, &operands, AngleUnit::Default);
}
