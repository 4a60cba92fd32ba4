//! Run recorded shell commands and render request/response pairs as a document.

pub mod error;
pub mod input;
pub mod render;
pub mod runner;

pub use error::ReportError;
pub use input::{load, parse, InputFormat, TestCase, TestPlan};
pub use render::{render_document, render_section, Flavor, Section};
pub use runner::{run_command, CommandOutput};

/// Run every case in order and render the full document.
pub fn generate(plan: &TestPlan, flavor: Flavor) -> String {
    let sections: Vec<Section> = plan
        .tests
        .iter()
        .map(|case| {
            tracing::debug!(?case, "running test case");
            let output = run_command(&case.command);
            if !output.succeeded() {
                tracing::warn!(
                    title = %case.title,
                    status = ?output.status,
                    stderr = %output.stderr.trim_end(),
                    "command did not exit cleanly"
                );
            }
            tracing::debug!(?output, "captured output");
            Section::new(case, output.stdout)
        })
        .collect();
    render_document(flavor, &sections)
}
