use nullfill::{batch, config::Config, logging};
use tracing::{error, info};

fn main() {
    let cfg = Config::default();

    // ─── 1) init logging ─────────────────────────────────────────────
    if let Err(e) = logging::init(&cfg.log) {
        eprintln!("failed to initialise logging: {:#}", e);
        return;
    }
    info!("starting blank cell filling process");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) run the batch ────────────────────────────────────────────
    // Every expected condition is logged inside the batch; an error here is
    // the unexpected kind, and it still only gets logged.
    if let Err(e) = batch::fill_blank_cells(&cfg) {
        error!("failed to process CSV files: {:#}", e);
    }
}
