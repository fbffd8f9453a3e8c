use proc_macro2::Span;
use std::fmt;

///
/// TreeError
///
/// One accumulated validation failure, optionally anchored to a route
/// within the model and to the source span of the offending element.
///

#[derive(Debug)]
pub struct TreeError {
    pub route: Option<String>,
    pub span: Option<Span>,
    pub message: String,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.route {
            Some(route) => write!(f, "{route}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

///
/// ErrorTree
///
/// Accumulates validation failures instead of stopping at the first one,
/// so a single declaration surfaces every violation in one report.
///

#[derive(Debug, Default)]
pub struct ErrorTree {
    errors: Vec<TreeError>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, message: impl ToString) {
        self.errors.push(TreeError {
            route: None,
            span: None,
            message: message.to_string(),
        });
    }

    pub fn add_spanned(&mut self, span: Span, message: impl ToString) {
        self.errors.push(TreeError {
            route: None,
            span: Some(span),
            message: message.to_string(),
        });
    }

    /// Fold another tree into this one, unchanged.
    pub fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Fold another tree into this one, nesting its entries under a route
    /// segment.
    pub fn merge(&mut self, route: &str, other: Self) {
        for mut e in other.errors {
            e.route = Some(match e.route.take() {
                Some(inner) => format!("{route}.{inner}"),
                None => route.to_string(),
            });
            self.errors.push(e);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeError> {
        self.errors.iter()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
            first = false;
        }

        Ok(())
    }
}

/// Push a formatted message onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
