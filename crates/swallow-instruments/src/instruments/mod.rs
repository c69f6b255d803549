pub mod bazaz;
pub mod digest;
pub mod eat10;
pub mod hss_ddi;
