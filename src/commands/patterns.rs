use std::io;

use crate::leakcheck::sensitive::PatternSet;

pub fn run() -> io::Result<()> {
    let patterns = PatternSet::build(&[])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    for pattern in patterns.iter() {
        println!("{}", pattern);
    }
    Ok(())
}
