//! A printed tour of every rational operation, including the failing ones.

use std::io::{self, Write};

use fracsort::{Rational, RationalError, harmonic_sum};

fn show<W: Write>(
    out: &mut W,
    label: &str,
    result: Result<Rational, RationalError>,
) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "{label}: {value}"),
        Err(e) => {
            tracing::debug!(kind = ?e.kind, fallback = %e.fallback(), "operation failed");
            writeln!(out, "{label}: error: {e}")
        }
    }
}

/// Write the walkthrough to `out`.
pub fn walkthrough<W: Write>(out: &mut W) -> io::Result<()> {
    let r = match Rational::new(-1, 5) {
        Ok(r) => r,
        Err(e) => return writeln!(out, "error: {e}"),
    };

    writeln!(out, "Rational Number: {r}")?;
    writeln!(out, "Numerator: {} Denominator: {}", r.numerator(), r.denominator())?;
    let (num, denom) = r.split();
    writeln!(out, "Pair: {num} {denom}")?;
    writeln!(out, "As float: {}", r.to_f64())?;

    let sum = harmonic_sum(6);
    writeln!(out, "Harmonic sum of 6 terms: {sum}")?;
    writeln!(out, "{sum} is an integer: {}", sum.is_int())?;

    let inverted = match sum.invert() {
        Ok(inverted) => inverted,
        Err(e) => return writeln!(out, "Inverse of {sum}: error: {e}"),
    };
    writeln!(out, "Inverse of {sum}: {inverted}")?;
    writeln!(out, "{inverted} equals {sum}: {}", inverted.equal(&sum))?;
    writeln!(out, "{inverted} is less than {sum}: {}", inverted.less_than(&sum))?;
    writeln!(out, "{inverted} as float: {}", inverted.to_f64())?;

    let sentinel = Rational::new_unchecked(6, 0);
    writeln!(out, "{inverted} equals {sentinel}: {}", inverted.equal(&sentinel))?;
    writeln!(out, "{sentinel} is less than {r}: {}", sentinel.less_than(&r))?;
    writeln!(out, "{sentinel} is an integer: {}", sentinel.is_int())?;
    writeln!(out, "{r} * {sentinel} = {}", r.multiply(&sentinel))?;
    show(out, &format!("{r} / {sentinel}"), r.divide(&sentinel))?;

    let zero = Rational::new_unchecked(0, 4);
    show(out, "Make 3/0", Rational::new(3, 0))?;
    show(out, &format!("{r} / {zero}"), r.divide(&zero))?;
    show(out, &format!("Inverse of {zero}"), zero.invert())?;

    Ok(())
}
