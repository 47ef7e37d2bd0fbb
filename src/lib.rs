//! Reads two big numbers and reports their sum, difference, product, quotient
//! and remainder, one per line.

use std::error::Error;
use std::io::{self, Read, Write};

use big_number::{BigNumError, BigNumber};
use clap::Parser;
use log::{debug, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Config {
    /// Log at debug level unless RUST_LOG says otherwise
    #[clap(short, long)]
    pub verbose: bool,
    /// Left operand; read from stdin together with RHS when omitted
    pub lhs: Option<String>,
    /// Right operand
    pub rhs: Option<String>,
}

pub struct Report {
    pub sum: BigNumber,
    pub difference: Result<BigNumber, BigNumError>,
    pub product: BigNumber,
    pub quotient: Result<BigNumber, BigNumError>,
    pub remainder: Result<BigNumber, BigNumError>,
}

impl Report {
    pub fn compute(lhs: &BigNumber, rhs: &BigNumber) -> Report {
        let (quotient, remainder) = match lhs.div_rem(rhs) {
            Ok((q, r)) => (Ok(q), Ok(r)),
            Err(err) => (Err(err), Err(err)),
        };
        Report {
            sum: lhs + rhs,
            difference: lhs.checked_sub(rhs),
            product: lhs * rhs,
            quotient,
            remainder,
        }
    }
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Sum: {}", self.sum)?;
        write_line(out, "Difference", &self.difference)?;
        writeln!(out, "Product: {}", self.product)?;
        write_line(out, "Quotient", &self.quotient)?;
        write_line(out, "Remainder", &self.remainder)
    }
}

fn write_line<W: Write>(out: &mut W, label: &str, val: &Result<BigNumber, BigNumError>) -> io::Result<()> {
    match val {
        Ok(n) => writeln!(out, "{}: {}", label, n),
        Err(err) => {
            warn!("{} failed: {}", label.to_lowercase(), err);
            writeln!(out, "{}: error: {}", label, err)
        }
    }
}

/// Takes the first two whitespace separated words of `input`.
pub fn read_operands<R: Read>(mut input: R) -> Result<(BigNumber, BigNumber), Box<dyn Error>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let words: Vec<&str> = text.split_whitespace().take(2).collect();
    match words.as_slice() {
        [lhs, rhs] => Ok((parse_operand(lhs)?, parse_operand(rhs)?)),
        _ => Err(format!("expected two numbers, found {}", words.len()).into()),
    }
}

fn parse_operand(word: &str) -> Result<BigNumber, Box<dyn Error>> {
    BigNumber::parse(word).map_err(|err| format!("cannot parse {:?}: {}", word, err).into())
}

pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let (lhs, rhs) = match (&config.lhs, &config.rhs) {
        (Some(lhs), Some(rhs)) => (parse_operand(lhs)?, parse_operand(rhs)?),
        (None, None) => read_operands(io::stdin().lock())?,
        _ => return Err("expected both operands or none".into()),
    };
    debug!("operands have {} and {} digit(s)", lhs.len(), rhs.len());

    let report = Report::compute(&lhs, &rhs);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lhs: &str, rhs: &str) -> String {
        let (lhs, rhs) = read_operands(format!("{} {}\n", lhs, rhs).as_bytes()).unwrap();
        let mut out = Vec::new();
        Report::compute(&lhs, &rhs).write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn it_works() {
        assert_eq!(
            render("100", "7"),
            "Sum: 107\nDifference: 93\nProduct: 700\nQuotient: 14\nRemainder: 2\n"
        );
    }

    #[test]
    fn failures_keep_going() {
        assert_eq!(
            render("5", "0"),
            "Sum: 5\nDifference: 5\nProduct: 0\nQuotient: error: division by zero\nRemainder: error: division by zero\n"
        );
        assert_eq!(
            render("3", "10"),
            "Sum: 13\nDifference: error: arithmetic underflow\nProduct: 30\nQuotient: 0\nRemainder: 3\n"
        );
    }

    #[test]
    fn bad_input() {
        assert!(read_operands("12".as_bytes()).is_err());
        assert!(read_operands("12 -3".as_bytes()).is_err());
        assert!(read_operands("".as_bytes()).is_err());
        let (a, b) = read_operands("  0012\n\n 34  extra".as_bytes()).unwrap();
        assert_eq!(a.to_string(), "12");
        assert_eq!(b.to_string(), "34");
    }
}
