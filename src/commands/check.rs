use crate::patch::{self, Report, Targets};

/// Report what `apply` would change, without writing anything.
pub fn run(targets: &Targets) -> Report {
    patch::preview(targets)
}
