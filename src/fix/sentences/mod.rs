mod gga;
mod gll;
mod rmc;
mod vtg;

pub use gga::GGA;
pub use gll::GLL;
pub use rmc::RMC;
pub use vtg::VTG;
