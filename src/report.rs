//! Console rendering of sort results and timings.

use std::fmt;

use crate::measure::Elapsed;

/// `Elements in array: [ 1 ,3 ,3 ,5 ]`
pub struct Elements<'a>(pub &'a [i32]);

/// `<label> sorted in: <n>ns.`
pub struct Timing<'a> {
    pub label: &'a str,
    pub elapsed: Elapsed,
}

/// `File read time in: <n>ns.`
pub struct ReadTiming(pub Elapsed);

impl fmt::Display for Elements<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Elements in array: [ ")?;
        for (i, val) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ,")?;
            }
            write!(f, "{val}")?;
        }
        f.write_str(" ]")
    }
}

impl fmt::Display for Timing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sorted in: {}.", self.label, self.elapsed)
    }
}

impl fmt::Display for ReadTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File read time in: {}.", self.0)
    }
}
