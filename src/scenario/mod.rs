//! Scenario catalog and fixture stream.
//!
//! A [`Scenario`] is a self-contained value: its inputs are derived from
//! indices only, the kernels are applied while it is built, and rendering
//! reads nothing else. Scenarios can therefore be built and rendered in any
//! order or in parallel; [`catalog`] fixes the order they appear in the
//! stream.
//!
//! ```
//! use simdref::scenario::{catalog, render_stream};
//!
//! let scenarios = catalog();
//! assert_eq!(scenarios.len(), 9);
//!
//! let mut text = String::new();
//! render_stream(&mut text, &scenarios).unwrap();
//! assert!(text.starts_with("// Generated test expectations"));
//! assert!(text.contains("dotProduct := 10\n"));
//! ```

mod catalog;


pub use catalog::{
    add_scalar_sweep, boundary_sizes, catalog, clamp_ranges, division_edges, large_arrays,
    mixed_signs, precision_stress, special_values, statistics, BOUNDARY_SIZES, DSP_SIZES,
};

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::fixture::{Fixture, Line};
use crate::traits::KernelFloat;

/// The two comment lines that open every stream.
pub const HEADER: [&str; 2] = [
    "Generated test expectations from scalar reference kernels",
    "Regenerate with: cargo run --example generate_expectations > expectations.txt",
];

/// Closing comment of every stream.
pub const FOOTER: &str = "End of generated test expectations";

const DELIMITER: &str =
    "=============================================================================";

/// One titled block of fixtures.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Scenario {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a `// text` line.
    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line::Comment(text.into()));
        self
    }

    /// Append a sequence literal.
    pub fn vector<T: KernelFloat>(&mut self, name: impl Into<String>, data: &[T]) -> &mut Self {
        self.lines.push(Fixture::vector(name, data).into());
        self
    }

    /// Append a scalar literal.
    pub fn scalar<T: KernelFloat>(&mut self, name: impl Into<String>, value: T) -> &mut Self {
        self.lines.push(Fixture::scalar(name, value).into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    /// All fixtures in emission order.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.lines.iter().filter_map(|line| match line {
            Line::Fixture(f) => Some(f),
            _ => None,
        })
    }

    /// First fixture called `name`.
    pub fn fixture(&self, name: &str) -> Option<&Fixture> {
        self.fixtures().find(|f| f.name == name)
    }

    /// Delimiter, title, delimiter, a blank line, then every line.
    pub fn render<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        writeln!(w, "// {DELIMITER}")?;
        writeln!(w, "// {}", self.title)?;
        writeln!(w, "// {DELIMITER}")?;
        writeln!(w)?;
        for line in &self.lines {
            writeln!(w, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

fn render_header<W: fmt::Write>(w: &mut W) -> fmt::Result {
    for line in HEADER {
        writeln!(w, "// {line}")?;
    }
    writeln!(w)
}

/// Header, every scenario in order, footer.
pub fn render_stream<W: fmt::Write>(w: &mut W, scenarios: &[Scenario]) -> fmt::Result {
    render_header(w)?;
    for scenario in scenarios {
        scenario.render(w)?;
        tracing::debug!(
            title = %scenario.title,
            lines = scenario.lines.len(),
            "rendered scenario"
        );
    }
    writeln!(w, "// {FOOTER}")?;
    tracing::info!(scenarios = scenarios.len(), "fixture stream complete");
    Ok(())
}

/// The full catalog rendered to a string.
pub fn generate() -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_stream(&mut out, &catalog());
    out
}

/// Render the full catalog to an I/O sink, one scenario at a time.
#[cfg(feature = "std")]
pub fn write_stream<W: std::io::Write>(mut w: W) -> std::io::Result<()> {
    let scenarios = catalog();
    let mut buf = String::new();

    // Writing into a String cannot fail.
    let _ = render_header(&mut buf);
    w.write_all(buf.as_bytes())?;

    for scenario in &scenarios {
        buf.clear();
        // Writing into a String cannot fail.
        let _ = scenario.render(&mut buf);
        w.write_all(buf.as_bytes())?;
        tracing::debug!(
            title = %scenario.title,
            lines = scenario.lines.len(),
            "wrote scenario"
        );
    }

    writeln!(w, "// {FOOTER}")?;
    w.flush()?;
    tracing::info!(scenarios = scenarios.len(), "fixture stream complete");
    Ok(())
}
