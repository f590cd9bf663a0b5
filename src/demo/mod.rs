//! Demonstration driver
//!
//! Produces the fixed, deterministic transcript that exercises every math
//! operation. The transcript is rendered into any `io::Write` sink so tests
//! can capture it without touching the process stdout.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::math;

/// Render the full demonstration transcript into `out`.
///
/// The line order is fixed: the four arithmetic operations, the primality
/// check for 2..=10, then the factorials for 0..=5.
pub fn write_transcript(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Math Operations Demo:")?;
    writeln!(out, "5 + 3 = {}", math::add(5, 3))?;
    writeln!(out, "10 - 4 = {}", math::subtract(10, 4))?;
    writeln!(out, "6 * 7 = {}", math::multiply(6, 7))?;
    writeln!(out, "15 / 3 = {}", math::divide(15, 3)?)?;

    writeln!(out)?;
    writeln!(out, "Prime Number Check:")?;
    for n in 2..=10 {
        let verdict = if math::is_prime(n) { "prime" } else { "not prime" };
        writeln!(out, "{n} is {verdict}")?;
    }

    writeln!(out)?;
    writeln!(out, "Factorial Demo:")?;
    for n in 0..=5 {
        writeln!(out, "{n}! = {}", math::factorial(n)?)?;
    }

    Ok(())
}

/// Write the demonstration transcript to standard output.
pub fn run() -> Result<()> {
    debug!("writing demonstration transcript to stdout");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_transcript(&mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> String {
        let mut buf = Vec::new();
        write_transcript(&mut buf).expect("transcript rendering failed");
        String::from_utf8(buf).expect("transcript is not valid UTF-8")
    }

    #[test]
    fn test_transcript_is_deterministic() {
        assert_eq!(transcript(), transcript());
    }

    #[test]
    fn test_transcript_arithmetic_lines() {
        let text = transcript();
        assert!(text.contains("5 + 3 = 8"));
        assert!(text.contains("10 - 4 = 6"));
        assert!(text.contains("6 * 7 = 42"));
        assert!(text.contains("15 / 3 = 5"));
    }

    #[test]
    fn test_transcript_full_text() {
        let expected = "\
Math Operations Demo:
5 + 3 = 8
10 - 4 = 6
6 * 7 = 42
15 / 3 = 5

Prime Number Check:
2 is prime
3 is prime
4 is not prime
5 is prime
6 is not prime
7 is prime
8 is not prime
9 is not prime
10 is not prime

Factorial Demo:
0! = 1
1! = 1
2! = 2
3! = 6
4! = 24
5! = 120
";
        assert_eq!(transcript(), expected);
    }
}
