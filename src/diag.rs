// src/diag.rs

/// Collector for recoverable conditions hit while parsing or rendering.
///
/// Parsing and rendering code pushes warnings here instead of logging inline;
/// the orchestrator decides how to surface them once the run is over.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());
        diags.warn("first");
        diags.warn(String::from("second"));
        assert_eq!(diags.warnings(), &["first", "second"]);
    }
}
