use densemat::{binomial_coefficient, is_triangular, DenseMatrix};

fn main() {
    let a = DenseMatrix::from_rows([
        [1.0, 3.0, 2.0],
        [1.0, 0.0, 0.0],
        [1.0, 2.0, 2.0],
    ]);
    let b = DenseMatrix::from_rows([
        [0.0, 0.0, 5.0],
        [7.0, 5.0, 0.0],
        [2.0, 1.0, 1.0],
    ]);

    let sum = &a + &b;
    println!("a + b = {sum:?}");

    let product = &a * &b;
    println!("a * b = {product:?}");

    let scaled = 4.0 * &a;
    println!("4a = {scaled:?}");

    println!("direct sum shape = {}x{}",
        a.direct_sum(&b).rows(),
        a.direct_sum(&b).cols());

    let mut t = a.clone();
    t.transpose();
    println!("a^T = {t:?}");
    println!("a is diagonal: {}", a.is_diagonal());
    println!("identity(3) is diagonal: {}", DenseMatrix::identity(3).is_diagonal());

    println!("C(4, 2) = {}", binomial_coefficient(4, 2).unwrap());
    println!("10 triangular: {}", is_triangular(10.0));
}
