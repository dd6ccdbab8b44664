use syslog_source::runtime::{boot, listener::DryRunRuntime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();
    boot::boot(&DryRunRuntime)?;
    Ok(())
}
