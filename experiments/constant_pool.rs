use std::io::{self, Write};
use value_pool::{print_value, ValueArray};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pool = ValueArray::new();

    // A compiler would intern literals like this and embed the indices
    // into its instruction stream.
    let pi = pool.write(3.14159)?;
    let answer = pool.write(42.0)?;
    assert_eq!((pi, answer), (0, 1));

    // Filling past the starting capacity doubles the storage once.
    for i in 0..16 {
        pool.write(i as f64)?;
    }
    println!("{} constants in {} slots", pool.len(), pool.capacity());

    // Dump the pool the way a disassembler would.
    let mut out = io::stdout().lock();
    for (slot, &constant) in pool.as_slice().iter().enumerate() {
        write!(out, "{slot:04} '")?;
        print_value(&mut out, constant)?;
        writeln!(out, "'")?;
    }

    pool.release();
    assert_eq!(pool.capacity(), 0);
    Ok(())
}
