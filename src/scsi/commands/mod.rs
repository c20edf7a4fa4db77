//! SCSI Commands Module
//!
//! Drive-level operations composed from the packet builder and the executor.

pub mod inquiry;
pub mod start_stop;
