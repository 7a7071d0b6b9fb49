use numkit::{FlatArray, Matrix};

fn main() -> numkit::Result<()> {
    numkit::initialize();

    let a = Matrix::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
    let id = Matrix::<f64>::identity(2)?;

    println!("a = {}", a);
    println!("a * I = {}", a.mul(&id)?);
    println!("a + a = {}", a.add(&a)?);
    println!("a^T = {}", a.transpose()?);
    println!("a * 2.5 = {}", a.mul_scalar(2.5)?);
    println!("a(1,0) = {}", a.get(1, 0)?);

    let mut arr = FlatArray::<f64>::zeros(4)?;
    arr.add_scalar_inplace(5.0);
    arr.mul_scalar_inplace(2.0);
    println!("arr = {}", arr);

    Ok(())
}
