pub mod printer;
pub mod renderer;

pub use printer::{LogPrinter, PrintSink};
pub use renderer::render_report;
