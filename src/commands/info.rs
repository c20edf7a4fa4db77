//! Info Command Handler
//!
//! Handles the `info` subcommand: identify the drive with INQUIRY.

use super::blocking;
use rust_dvd::{Drive, Result, RustDvdError};
use tracing::info;

pub async fn execute(device: String, json: bool, trace: bool) -> Result<()> {
    info!("Identifying drive: {}", device);

    let drive_info = blocking(move || {
        let drive = Drive::open(&device, rust_dvd::drive::DEFAULT_TIMEOUT_SECS)?;
        let result = drive.model_info(trace);
        drive.finish(result)
    })
    .await?;

    if json {
        let text = serde_json::to_string_pretty(&drive_info)
            .map_err(|e| RustDvdError::Generic(e.into()))?;
        println!("{}", text);
    } else {
        println!("💿 Drive model: {}", drive_info);
        println!("  • Vendor:   {}", drive_info.vendor.trim_end());
        println!("  • Product:  {}", drive_info.product_id.trim_end());
        println!("  • Revision: {}", drive_info.revision.trim_end());
    }

    Ok(())
}
